//! Data URI command

use std::time::Duration;

use anyhow::{Context, Result};
use odi_views_core::data_uri;

use crate::cli::{Cli, OutputFormat};

pub fn run(cli: &Cli, url: &str, timeout_secs: u64) -> Result<()> {
    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(timeout_secs))
        .build()
        .context("Failed to build HTTP client")?;

    let runtime = tokio::runtime::Runtime::new().context("Failed to start runtime")?;
    let uri = runtime
        .block_on(data_uri(&client, url))
        .context(format!("Failed to fetch {}", url))?;

    match cli.format {
        OutputFormat::Human => println!("{}", uri),
        OutputFormat::Json => println!("{}", serde_json::json!({ "url": url, "data_uri": uri })),
    }
    Ok(())
}
