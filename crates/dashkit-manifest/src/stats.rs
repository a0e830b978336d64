//! Webpack client stats.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One file name or a list of them, as webpack writes `assetsByChunkName`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Files {
    One(String),
    Many(Vec<String>),
}

impl Files {
    pub fn as_slice(&self) -> &[String] {
        match self {
            Self::One(file) => std::slice::from_ref(file),
            Self::Many(files) => files,
        }
    }
}

/// An entry point asset: a bare file name (webpack 4) or an object with a
/// `name` (webpack 5).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntryAsset {
    Name(String),
    Object { name: String },
}

impl EntryAsset {
    pub fn name(&self) -> &str {
        match self {
            Self::Name(name) | Self::Object { name } => name,
        }
    }
}

/// A named entry point.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entrypoint {
    #[serde(default)]
    pub chunks: Vec<serde_json::Value>,
    #[serde(default)]
    pub assets: Vec<EntryAsset>,
}

/// Build statistics describing the emitted bundles.
///
/// Only the fields the gateway reads are kept; everything else in the stats
/// file is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BundleManifest {
    #[serde(default)]
    pub public_path: String,
    #[serde(default)]
    pub assets_by_chunk_name: BTreeMap<String, Files>,
    #[serde(default)]
    pub entrypoints: BTreeMap<String, Entrypoint>,
}

impl BundleManifest {
    /// Parse stats JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Prefix for asset URLs. Webpack 5's `"auto"` resolves at runtime in
    /// the browser, so it maps to the site root here.
    pub fn asset_prefix(&self) -> &str {
        match self.public_path.as_str() {
            "auto" => "",
            path => path,
        }
    }

    /// Files emitted for a chunk. Empty for unknown chunks.
    pub fn chunk_files(&self, chunk_name: &str) -> &[String] {
        self.assets_by_chunk_name
            .get(chunk_name)
            .map(Files::as_slice)
            .unwrap_or(&[])
    }

    /// Files of one entry point, or of every entry point when `entry` is
    /// `None`. Order is preserved and duplicates dropped.
    pub fn entrypoint_files(&self, entry: Option<&str>) -> Vec<String> {
        let entrypoints: Vec<&Entrypoint> = match entry {
            Some(name) => self.entrypoints.get(name).into_iter().collect(),
            None => self.entrypoints.values().collect(),
        };

        let mut files: Vec<String> = Vec::new();
        for asset in entrypoints.iter().flat_map(|e| e.assets.iter()) {
            let name = asset.name();
            if !files.iter().any(|f| f == name) {
                files.push(name.to_string());
            }
        }
        files
    }
}
