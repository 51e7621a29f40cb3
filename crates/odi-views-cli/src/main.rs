//! odi-views - Render ODI content API records through the site view helpers

mod cli;
mod commands;

use anyhow::{Context, Result};
use clap::Parser;
use odi_views_core::SiteConfig;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing()?;

    let config = load_config(&cli)?;

    match &cli.command {
        Command::Caption { asset } => commands::caption::caption(&cli, asset),
        Command::Attachment { asset, no_caption } => {
            commands::caption::attachment(&cli, asset, !*no_caption)
        }
        Command::Sessions { sessions } => commands::sessions::run(&cli, sessions),
        Command::Title { publication } => commands::title::run(&cli, &config, publication),
        Command::Meta { page, url } => commands::meta::run(&cli, &config, page, url),
        Command::Event { event } => commands::event::run(&cli, &config, event),
        Command::DataUri { url, timeout } => commands::data_uri::run(&cli, url, *timeout),
    }
}

/// Log to stderr so rendered output on stdout stays clean
fn init_tracing() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|error| anyhow::anyhow!("failed to initialize tracing subscriber: {error}"))
}

fn load_config(cli: &Cli) -> Result<SiteConfig> {
    match &cli.config {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .context(format!("Failed to read config from {}", path.display()))?;
            let config: SiteConfig =
                serde_json::from_str(&content).context("Failed to parse config")?;
            tracing::debug!(path = %path.display(), "loaded site config");
            Ok(config)
        }
        None => Ok(SiteConfig::default()),
    }
}
