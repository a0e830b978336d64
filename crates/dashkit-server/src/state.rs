//! Shared gateway state.

use std::sync::Arc;

use dashkit_core::DEFAULT_SITE_TITLE;
use dashkit_manifest::{FlushOptions, ManifestReader};
use dashkit_render::{LayoutTemplate, ViewRenderer};

/// Immutable state shared by every request.
///
/// Nothing here is mutated while serving; per-request state lives in
/// `RenderContext`.
#[derive(Clone)]
pub struct GatewayState {
    pub renderer: Arc<dyn ViewRenderer>,
    pub manifest: Arc<dyn ManifestReader>,
    pub layout: LayoutTemplate,
    pub site_title: String,
    /// Entry point whose files are included; all when `None`.
    pub entry: Option<String>,
    pub flush_options: FlushOptions,
}

impl GatewayState {
    pub fn new(renderer: Arc<dyn ViewRenderer>, manifest: Arc<dyn ManifestReader>) -> Self {
        Self {
            renderer,
            manifest,
            layout: LayoutTemplate::default(),
            site_title: DEFAULT_SITE_TITLE.to_string(),
            entry: None,
            flush_options: FlushOptions::default(),
        }
    }

    pub fn with_layout(mut self, layout: LayoutTemplate) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_site_title(mut self, title: impl Into<String>) -> Self {
        self.site_title = title.into();
        self
    }

    pub fn with_entry(mut self, entry: Option<String>) -> Self {
        self.entry = entry;
        self
    }

    pub fn with_flush_options(mut self, options: FlushOptions) -> Self {
        self.flush_options = options;
        self
    }
}

impl std::fmt::Debug for GatewayState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GatewayState")
            .field("site_title", &self.site_title)
            .field("entry", &self.entry)
            .field("flush_options", &self.flush_options)
            .finish_non_exhaustive()
    }
}
