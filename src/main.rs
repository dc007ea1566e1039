use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use sweetstand::catalog::{self, CatalogStore};
use sweetstand::config::{Config, ConfigStore, Logging};
use sweetstand::session::SessionState;
use sweetstand::ui;

#[derive(Debug, Parser)]
#[command(name = "sweetstand", version, about = "Terminal storefront for a dessert catalog")]
struct Cli {
    /// Config file path (default: the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Catalog JSON file (default: the embedded catalog)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Log file path; logging is disabled when unset
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log level filter (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let mut config = Config::load_from(&config_path).context("loading configuration")?;

    // CLI flags override file values.
    if let Some(path) = cli.catalog {
        config.catalog.path = Some(path);
    }
    if let Some(path) = cli.log_file {
        config.logging.file = Some(path);
    }
    if let Some(level) = cli.log_level {
        config.logging.level = level;
    }
    config.validate().context("validating configuration")?;

    init_logging(&config.logging)?;

    let entries = match &config.catalog.path {
        Some(path) => catalog::load_from(path)
            .with_context(|| format!("loading catalog from {}", path.display()))?,
        None => catalog::load_default().context("loading embedded catalog")?,
    };
    tracing::info!(items = entries.len(), "catalog loaded");

    let session = SessionState::new(CatalogStore::new(entries));
    let config = ConfigStore::new(config, config_path);

    ui::run(config, session)?;
    Ok(())
}

/// Set up tracing to a file. The TUI owns stdout and stderr, so without
/// a configured file nothing is logged at all.
fn init_logging(logging: &Logging) -> anyhow::Result<()> {
    let Some(path) = &logging.file else {
        return Ok(());
    };

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "sweetstand starting");
    Ok(())
}
