//! Render errors.

use thiserror::Error;

/// Errors produced by a `ViewRenderer`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// No route matches the location. Not a server error.
    #[error("No route matches {0}")]
    NoRoute(String),

    /// Redirects did not settle on a page.
    #[error("Redirect loop starting at {0}")]
    RedirectLoop(String),

    /// A view failed to render.
    #[error("Render failed: {0}")]
    Failed(String),
}

impl RenderError {
    /// Whether the error should surface as a 404 rather than a 500.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NoRoute(_))
    }
}
