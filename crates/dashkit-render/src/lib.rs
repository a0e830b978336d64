//! Server-side rendering for the dashkit dashboard.
//!
//! Everything a render touches is request scoped:
//! - `MemoryHistory` - Routing snapshot seeded with the request URL
//! - `ChunkCollector` - Chunk names recorded while rendering
//! - `RequestStore` - Application state for one request
//!
//! A `ViewRenderer` turns those into body markup; `RouteTable` is the
//! renderer for the bundled dashboard views. `LayoutTemplate` composes the
//! final document.

mod chunks;
mod error;
mod history;
mod renderer;
mod routes;
mod shell;
mod store;

pub mod views;

pub use chunks::*;
pub use error::*;
pub use history::*;
pub use renderer::*;
pub use routes::*;
pub use shell::*;
pub use store::*;

/// Escape text for inclusion in HTML content or attribute values.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
