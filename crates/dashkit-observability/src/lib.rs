//! Observability for the dashkit SSR gateway.
//!
//! This crate provides:
//! - `init_logging` - `tracing` subscriber setup in human or JSON format
//! - `RenderMetrics` - Per-request timing and outcome, emitted as one event

mod logging;
mod metrics;

pub use logging::*;
pub use metrics::*;

// Re-export RequestId and TimingContext from dashkit-core for convenience
pub use dashkit_core::{LifecyclePhase, RequestId, TimingContext};
