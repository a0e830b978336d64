//! Bundle manifest access for server-side rendering.
//!
//! - `BundleManifest` - Deserialized webpack client stats
//! - `ManifestReader` - Async source of the manifest
//! - `flush_chunks` - Map rendered chunk names to script and stylesheet files

mod error;
mod flush;
mod reader;
mod stats;

pub use error::*;
pub use flush::*;
pub use reader::*;
pub use stats::*;
