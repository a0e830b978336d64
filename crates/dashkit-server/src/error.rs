//! Gateway errors.

use axum::{http::StatusCode, response::Response};
use dashkit_core::AcceptHeader;
use dashkit_manifest::ManifestError;
use dashkit_render::RenderError;
use thiserror::Error;

use crate::fallback::{self, INTERNAL_ERROR_MESSAGE};

/// Failures that end a server-rendered request with a 5xx.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// The bundle manifest could not be loaded.
    #[error("Manifest error: {0}")]
    Manifest(#[from] ManifestError),

    /// The view tree failed to render.
    #[error("Render error: {0}")]
    Render(RenderError),

    /// A view panicked while rendering.
    #[error("Render panicked: {0}")]
    Panicked(String),

    /// The render redirected to a location that is not a valid header value.
    #[error("Invalid redirect location: {0:?}")]
    InvalidRedirect(String),
}

impl GatewayError {
    pub fn status(&self) -> StatusCode {
        StatusCode::INTERNAL_SERVER_ERROR
    }

    /// Log the failure and build a negotiated error response.
    pub fn into_response_for(self, accept: &AcceptHeader, url: &str) -> Response {
        tracing::error!(error = %self, url = %url, "server render failed");
        fallback::negotiated(self.status(), INTERNAL_ERROR_MESSAGE, accept, url)
    }
}
