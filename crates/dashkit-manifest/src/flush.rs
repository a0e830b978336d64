//! Chunk flushing: from rendered chunk names to the files they need.

use crate::stats::BundleManifest;

/// Convert a renderer chunk name to the manifest's key format.
///
/// The renderer reports nested chunks as `Parent/Child` while the bundler
/// keys them as `Parent-Child`. Only the first `/` is replaced, so
/// `A/B/C` becomes `A-B/C`.
pub fn normalize_chunk_name(name: &str) -> String {
    name.replacen('/', "-", 1)
}

/// Chunks always included around the rendered ones.
#[derive(Debug, Clone)]
pub struct FlushOptions {
    /// Chunks placed before the rendered chunks.
    pub before: Vec<String>,
    /// Chunks placed after the rendered chunks.
    pub after: Vec<String>,
}

impl Default for FlushOptions {
    fn default() -> Self {
        Self {
            before: vec!["bootstrap".to_string(), "vendor".to_string()],
            after: vec!["main".to_string()],
        }
    }
}

impl FlushOptions {
    /// Only the rendered chunks, nothing around them.
    pub fn rendered_only() -> Self {
        Self {
            before: Vec::new(),
            after: Vec::new(),
        }
    }
}

/// Files resolved for one render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlushedChunks {
    /// Prefix for the file URLs.
    pub public_path: String,
    /// JavaScript files, in load order.
    pub scripts: Vec<String>,
    /// CSS files, in load order.
    pub stylesheets: Vec<String>,
    /// Requested chunk names the manifest does not know.
    pub missing: Vec<String>,
}

/// Resolve the script and stylesheet files for `chunk_names`.
///
/// Names must already be normalized. Unknown names are reported in
/// `missing`; source maps, hot-update files and other assets are skipped.
pub fn flush_chunks(
    manifest: &BundleManifest,
    chunk_names: &[String],
    options: &FlushOptions,
) -> FlushedChunks {
    let mut flushed = FlushedChunks {
        public_path: manifest.asset_prefix().to_string(),
        ..Default::default()
    };

    let ordered = options
        .before
        .iter()
        .chain(chunk_names.iter().filter(|n| !is_surrounding(options, n)))
        .chain(options.after.iter());

    for name in ordered {
        let files = manifest.chunk_files(name);
        if files.is_empty() {
            if chunk_names.contains(name) {
                flushed.missing.push(name.clone());
            }
            continue;
        }

        for file in files.iter().filter(|f| !f.contains(".hot-update.")) {
            let target = if file.ends_with(".js") {
                &mut flushed.scripts
            } else if file.ends_with(".css") {
                &mut flushed.stylesheets
            } else {
                continue;
            };
            if !target.contains(file) {
                target.push(file.clone());
            }
        }
    }

    if !flushed.missing.is_empty() {
        tracing::warn!(missing = ?flushed.missing, "rendered chunks not found in manifest");
    }

    flushed
}

fn is_surrounding(options: &FlushOptions, name: &str) -> bool {
    options.before.iter().chain(options.after.iter()).any(|n| n == name)
}
