//! Dashkit SSR server.
//!
//! # Configuration
//!
//! - `--config <path>` / `DASHKIT_CONFIG`: TOML config file (optional)
//! - `PORT`: listening port (default: 4000)
//! - `DASHKIT_STATIC_ROOT`: static root (default: directory of this binary)
//! - `DASHKIT_STATS_FILE`: webpack client stats (default: `<static_root>/stats.json`)
//! - `DASHKIT_SITE_TITLE`: page title
//! - `RUST_LOG`: log filter

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::Parser;
use dashkit_core::GatewayConfig;
use dashkit_manifest::{FileManifestReader, FlushOptions};
use dashkit_observability::{init_logging, LogFormat};
use dashkit_render::{views, LayoutTemplate};
use dashkit_server::{build_router, serve, GatewayState};

/// Server-side rendering gateway for the dashkit admin dashboard
#[derive(Parser)]
#[command(name = "dashkit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file path
    #[arg(short, long, env = "DASHKIT_CONFIG")]
    config: Option<PathBuf>,

    /// Listening port (overrides config and PORT)
    #[arg(short, long)]
    port: Option<u16>,

    /// Directory static files are served from
    #[arg(long)]
    static_root: Option<PathBuf>,

    /// Log output format (human or json)
    #[arg(long, default_value_t = LogFormat::Human)]
    log_format: LogFormat,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.log_format)?;

    let config = load_config(&cli)?;
    let static_root = config.static_root_or(&executable_dir()?);
    let stats_file = config.stats_file(&static_root);

    tracing::info!(
        static_root = %static_root.display(),
        stats_file = %stats_file.display(),
        "starting dashkit v{}",
        env!("CARGO_PKG_VERSION")
    );

    let state = build_state(&config, stats_file)?;
    let router = build_router(Arc::new(state), &static_root);

    serve(router, &config.addr())
        .await
        .with_context(|| format!("Failed to serve on {}", config.addr()))
}

fn load_config(cli: &Cli) -> Result<GatewayConfig> {
    let config = match &cli.config {
        Some(path) => GatewayConfig::load(path)?,
        None => GatewayConfig::default(),
    };
    let mut config = config.apply_env()?;

    if let Some(port) = cli.port {
        config.server.port = port;
    }
    if let Some(root) = &cli.static_root {
        config.server.static_root = Some(root.clone());
    }
    Ok(config)
}

fn build_state(config: &GatewayConfig, stats_file: PathBuf) -> Result<GatewayState> {
    let layout = match &config.render.layout_file {
        Some(path) => LayoutTemplate::from_file(path)
            .with_context(|| format!("Failed to read layout file: {}", path.display()))?,
        None => LayoutTemplate::default(),
    };

    let flush_options = if config.render.surrounding_chunks {
        FlushOptions::default()
    } else {
        FlushOptions::rendered_only()
    };

    Ok(GatewayState::new(
        Arc::new(views::dashboard_routes()),
        Arc::new(FileManifestReader::new(stats_file)),
    )
    .with_layout(layout)
    .with_site_title(config.render.site_title.clone())
    .with_entry(config.render.entry.clone())
    .with_flush_options(flush_options))
}

fn executable_dir() -> Result<PathBuf> {
    let exe = std::env::current_exe().context("Failed to locate the running executable")?;
    Ok(exe
        .parent()
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(".")))
}
