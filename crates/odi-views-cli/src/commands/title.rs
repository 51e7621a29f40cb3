//! Title command - node title, subtitle and author byline

use std::path::Path;

use anyhow::Result;
use odi_views_core::{
    author, node_names, node_subtitle, node_title, IsoCountries, Publication, SiteConfig,
    SiteRoutes,
};

use super::read_json;
use crate::cli::{Cli, OutputFormat};

pub fn run(cli: &Cli, config: &SiteConfig, path: &Path) -> Result<()> {
    let publication: Publication = read_json(path)?;
    let routes = SiteRoutes::new(config);

    let title = node_title(&publication);
    let subtitle = node_subtitle(&publication, &IsoCountries);
    let byline = author(&publication, &routes, config);
    let nodes = node_names(&publication);

    match cli.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "title": title,
                    "subtitle": subtitle,
                    "author": byline,
                    "nodes": nodes,
                })
            );
        }
        OutputFormat::Human => {
            println!("Title:    {}", title);
            if let Some(subtitle) = subtitle {
                println!("Subtitle: {}", subtitle);
            }
            if let Some(byline) = byline {
                println!("Author:   {}", byline);
            }
            for node in nodes {
                println!("  - {}", node);
            }
        }
    }
    Ok(())
}
