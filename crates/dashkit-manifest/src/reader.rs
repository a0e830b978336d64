//! Asynchronous manifest sources.

use std::path::PathBuf;

use async_trait::async_trait;

use crate::error::ManifestError;
use crate::stats::BundleManifest;

/// Source of the bundle manifest.
///
/// The gateway loads the manifest once per request; this is the only
/// point where a request suspends.
#[async_trait]
pub trait ManifestReader: Send + Sync {
    async fn load(&self) -> Result<BundleManifest, ManifestError>;
}

/// Reads webpack stats from a JSON file on every load.
#[derive(Debug, Clone)]
pub struct FileManifestReader {
    path: PathBuf,
}

impl FileManifestReader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ManifestReader for FileManifestReader {
    async fn load(&self) -> Result<BundleManifest, ManifestError> {
        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| ManifestError::Io {
                path: self.path.clone(),
                source,
            })?;

        let manifest: BundleManifest =
            serde_json::from_slice(&bytes).map_err(|source| ManifestError::Parse {
                path: self.path.clone(),
                source,
            })?;

        tracing::debug!(
            path = %self.path.display(),
            chunks = manifest.assets_by_chunk_name.len(),
            "loaded bundle manifest"
        );
        Ok(manifest)
    }
}

/// Serves a manifest held in memory.
#[derive(Debug, Clone, Default)]
pub struct StaticManifestReader {
    manifest: BundleManifest,
}

impl StaticManifestReader {
    pub fn new(manifest: BundleManifest) -> Self {
        Self { manifest }
    }
}

#[async_trait]
impl ManifestReader for StaticManifestReader {
    async fn load(&self) -> Result<BundleManifest, ManifestError> {
        Ok(self.manifest.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_file_reader_loads_stats() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.json");
        std::fs::write(
            &path,
            r#"{"publicPath": "/", "assetsByChunkName": {"main": "main.js"}}"#,
        )
        .unwrap();

        let manifest = FileManifestReader::new(&path).load().await.unwrap();
        assert_eq!(manifest.chunk_files("main"), ["main.js"]);
    }

    #[tokio::test]
    async fn test_file_reader_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let reader = FileManifestReader::new(dir.path().join("missing.json"));

        let err = reader.load().await.unwrap_err();
        assert!(matches!(err, ManifestError::Io { .. }));
        assert!(err.to_string().contains("missing.json"));
    }

    #[tokio::test]
    async fn test_file_reader_invalid_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.json");
        std::fs::write(&path, "{ truncated").unwrap();

        let err = FileManifestReader::new(&path).load().await.unwrap_err();
        assert!(matches!(err, ManifestError::Parse { .. }));
    }

    #[tokio::test]
    async fn test_file_reader_sees_rebuilt_stats() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stats.json");
        let reader = FileManifestReader::new(&path);

        std::fs::write(&path, r#"{"assetsByChunkName": {"main": "main.1.js"}}"#).unwrap();
        assert_eq!(reader.load().await.unwrap().chunk_files("main"), ["main.1.js"]);

        std::fs::write(&path, r#"{"assetsByChunkName": {"main": "main.2.js"}}"#).unwrap();
        assert_eq!(reader.load().await.unwrap().chunk_files("main"), ["main.2.js"]);
    }

    #[tokio::test]
    async fn test_static_reader() {
        let reader = StaticManifestReader::default();
        assert_eq!(reader.load().await.unwrap(), BundleManifest::default());
    }
}
