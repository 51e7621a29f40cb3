//! CLI command implementations

pub mod caption;
pub mod data_uri;
pub mod event;
pub mod meta;
pub mod sessions;
pub mod title;

use std::path::Path;

use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

/// Read a content API record from a JSON file
pub fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)
        .context(format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).context(format!("Failed to parse {}", path.display()))
}
