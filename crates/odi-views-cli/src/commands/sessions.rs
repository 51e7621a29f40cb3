//! Sessions command - event schedule grouped by start time

use std::path::Path;

use anyhow::{Context, Result};
use odi_views_core::{marshal_sessions, session_time, Session};

use super::read_json;
use crate::cli::{Cli, OutputFormat};

pub fn run(cli: &Cli, path: &Path) -> Result<()> {
    let sessions: Vec<Session> = read_json(path)?;
    let buckets = marshal_sessions(&sessions).context("Failed to group sessions")?;

    match cli.format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&buckets)?);
        }
        OutputFormat::Human => {
            for (time, bucket) in &buckets {
                println!("{}", session_time(time)?.trim());
                for session in bucket {
                    match &session.location {
                        Some(location) => println!("  {} ({})", session.title, location),
                        None => println!("  {}", session.title),
                    }
                }
            }
        }
    }

    if buckets.is_empty() {
        eprintln!("No sessions found");
    }

    Ok(())
}
