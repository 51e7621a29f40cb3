//! Meta command - page title and social sharing fields

use std::path::Path;

use anyhow::Result;
use odi_views_core::{article_meta, canonical_url, page_title, Publication, SiteConfig};

use super::read_json;
use crate::cli::{Cli, OutputFormat};

pub fn run(cli: &Cli, config: &SiteConfig, path: &Path, url: &str) -> Result<()> {
    let page: Publication = read_json(path)?;

    let title = page_title(
        page.page_title.as_deref(),
        page.title.as_deref(),
        &config.site_name,
    );
    let meta = article_meta(&page);
    let canonical = canonical_url(url)?;

    match cli.format {
        OutputFormat::Json => {
            println!(
                "{}",
                serde_json::json!({
                    "title": title,
                    "canonical_url": canonical,
                    "og": meta,
                })
            );
        }
        OutputFormat::Human => {
            println!("Title:          {}", title);
            println!("Canonical URL:  {}", canonical);
            println!("og:type         {}", meta.og_type);
            if let Some(description) = &meta.og_description {
                println!("og:description  {}", description);
            }
            if let Some(image) = &meta.og_image {
                println!("og:image        {}", image);
            }
        }
    }
    Ok(())
}
