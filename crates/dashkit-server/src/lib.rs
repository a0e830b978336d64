//! Dashkit SSR gateway.
//!
//! Request flow:
//! 1. Static files under the static root are served as-is.
//! 2. Requests that accept HTML and name no file are server-rendered by the
//!    gateway, answering with the page or a redirect.
//! 3. Everything else gets a content-negotiated 404.

pub mod app;
pub mod error;
pub mod fallback;
pub mod gateway;
pub mod state;

pub use app::{build_router, serve};
pub use error::GatewayError;
pub use gateway::{render, render_page, PageOutcome};
pub use state::GatewayState;
