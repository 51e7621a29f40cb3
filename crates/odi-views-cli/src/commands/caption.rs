//! Caption and attachment commands

use std::path::Path;

use anyhow::Result;
use odi_views_core::{asset_caption, attachment as render_attachment, Asset, OpenDefinitionLicenses};

use super::read_json;
use crate::cli::{Cli, OutputFormat};

pub fn caption(cli: &Cli, path: &Path) -> Result<()> {
    let asset: Asset = read_json(path)?;
    let html = asset_caption(&asset, &OpenDefinitionLicenses);

    match cli.format {
        OutputFormat::Human => println!("{}", html),
        OutputFormat::Json => println!("{}", serde_json::json!({ "caption": html })),
    }
    Ok(())
}

pub fn attachment(cli: &Cli, path: &Path, with_caption: bool) -> Result<()> {
    let asset: Asset = read_json(path)?;
    let html = render_attachment(Some(&asset), with_caption, &[], &OpenDefinitionLicenses);

    if html.is_empty() {
        eprintln!("No media tag for content type {:?}", asset.content_type);
    }

    match cli.format {
        OutputFormat::Human => println!("{}", html),
        OutputFormat::Json => println!("{}", serde_json::json!({ "attachment": html })),
    }
    Ok(())
}
