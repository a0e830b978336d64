//! Core abstractions for the dashkit SSR gateway.
//!
//! This crate provides the fundamental types shared by the other crates:
//! - `RequestContext` - Per-request URL, headers and negotiation outcome
//! - `AcceptHeader` - HTTP Accept parsing and matching
//! - `TimingContext` - Request lifecycle timing marks
//! - `GatewayConfig` - Server and render configuration

mod accept;
mod config;
mod context;
mod lifecycle;

pub use accept::*;
pub use config::*;
pub use context::*;
pub use lifecycle::*;
