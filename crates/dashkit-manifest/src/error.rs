//! Manifest errors.

use std::path::PathBuf;

use thiserror::Error;

/// Errors loading the bundle manifest.
#[derive(Error, Debug)]
pub enum ManifestError {
    #[error("Failed to read stats file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse stats file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
