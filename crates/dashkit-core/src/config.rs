//! Gateway configuration.
//!
//! Configuration comes from an optional TOML file, then the environment.
//! Command-line flags are applied on top by the binary.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Default listening port.
pub const DEFAULT_PORT: u16 = 4000;

/// Default site title.
pub const DEFAULT_SITE_TITLE: &str = "Dashkit";

/// File name of the build stats inside the static root.
pub const DEFAULT_STATS_FILE_NAME: &str = "stats.json";

/// Environment variable names.
pub mod env_vars {
    pub const PORT: &str = "PORT";
    pub const STATS_FILE: &str = "DASHKIT_STATS_FILE";
    pub const SITE_TITLE: &str = "DASHKIT_SITE_TITLE";
    pub const STATIC_ROOT: &str = "DASHKIT_STATIC_ROOT";
}

/// Errors loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value for {name}: {value}")]
    InvalidEnv { name: &'static str, value: String },
}

/// Full gateway configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GatewayConfig {
    /// Listener and static file settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Server-side rendering settings.
    #[serde(default)]
    pub render: RenderConfig,
}

/// Listener and static file settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Directory static files are served from. Defaults to the directory
    /// of the running executable.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub static_root: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            static_root: None,
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

/// Server-side rendering settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Page title passed to the template.
    #[serde(default = "default_site_title")]
    pub site_title: String,

    /// Webpack client stats file. Defaults to `stats.json` in the static root.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_stats_file: Option<PathBuf>,

    /// Layout template. The built-in layout is used when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub layout_file: Option<PathBuf>,

    /// Entry point whose files are included. All entry points when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry: Option<String>,

    /// Include the bootstrap, vendor and main chunks around the rendered
    /// ones. When false only rendered chunks and entry files are linked.
    #[serde(default = "default_surrounding_chunks")]
    pub surrounding_chunks: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            site_title: default_site_title(),
            client_stats_file: None,
            layout_file: None,
            entry: None,
            surrounding_chunks: default_surrounding_chunks(),
        }
    }
}

fn default_site_title() -> String {
    DEFAULT_SITE_TITLE.to_string()
}

fn default_surrounding_chunks() -> bool {
    true
}

impl GatewayConfig {
    /// Load config from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Parse config from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Apply overrides from the process environment.
    pub fn apply_env(self) -> Result<Self, ConfigError> {
        self.apply_env_with(|name| std::env::var(name).ok())
    }

    /// Apply overrides from an arbitrary variable lookup.
    pub fn apply_env_with<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup(env_vars::PORT) {
            self.server.port = port.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                name: env_vars::PORT,
                value: port,
            })?;
        }
        if let Some(root) = lookup(env_vars::STATIC_ROOT) {
            self.server.static_root = Some(PathBuf::from(root));
        }
        if let Some(stats) = lookup(env_vars::STATS_FILE) {
            self.render.client_stats_file = Some(PathBuf::from(stats));
        }
        if let Some(title) = lookup(env_vars::SITE_TITLE) {
            self.render.site_title = title;
        }
        Ok(self)
    }

    /// Static root, falling back to `default_root`.
    pub fn static_root_or(&self, default_root: &Path) -> PathBuf {
        self.server
            .static_root
            .clone()
            .unwrap_or_else(|| default_root.to_path_buf())
    }

    /// Stats file, falling back to `stats.json` inside `static_root`.
    pub fn stats_file(&self, static_root: &Path) -> PathBuf {
        self.render
            .client_stats_file
            .clone()
            .unwrap_or_else(|| static_root.join(DEFAULT_STATS_FILE_NAME))
    }

    /// `host:port` listen address.
    pub fn addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
