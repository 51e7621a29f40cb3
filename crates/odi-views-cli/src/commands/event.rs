//! Event command - dates and speakers for an event page

use std::path::Path;

use anyhow::Result;
use chrono::Utc;
use odi_views_core::{
    date_range, parse_instant, parse_to_local_time, person_image, speakers, upcoming_event,
    Publication, SiteConfig,
};

use super::read_json;
use crate::cli::{Cli, OutputFormat};

pub fn run(cli: &Cli, config: &SiteConfig, path: &Path) -> Result<()> {
    let event: Publication = read_json(path)?;
    let tz = config.tz()?;

    let starts = parse_to_local_time(&event, tz)?;
    let range = match event.end_date.as_deref() {
        Some(end) => date_range(&starts, &parse_instant(end)?.with_timezone(&tz)),
        None => starts.format("%A %d %B %Y %l:%M%P").to_string(),
    };
    let upcoming = event.end_date.is_some() && upcoming_event(&event, Utc::now())?;
    let people = speakers(&event).unwrap_or_default();

    match cli.format {
        OutputFormat::Json => {
            let people: Vec<_> = people
                .iter()
                .map(|p| serde_json::json!({ "name": p.name, "image": person_image(p) }))
                .collect();
            println!(
                "{}",
                serde_json::json!({
                    "dates": range,
                    "upcoming": upcoming,
                    "speakers": people,
                })
            );
        }
        OutputFormat::Human => {
            println!("{}", event.display_name());
            println!("{}", range);
            if upcoming {
                println!("(upcoming)");
            }
            for person in people {
                println!("  - {}", person.name);
            }
        }
    }
    Ok(())
}
