//! CLI argument definitions

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Render ODI content API records through the site view helpers
#[derive(Parser, Debug)]
#[command(name = "odi-views")]
#[command(author = "Open Data Institute")]
#[command(version)]
#[command(about = "Render ODI content API records through the site view helpers")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Site configuration file (JSON)
    #[arg(long, short, global = true, env = "ODI_VIEWS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(long, short = 'f', global = true, default_value = "human")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Command,
}

/// Output format for commands
#[derive(Debug, Clone, Copy, ValueEnum, Default)]
pub enum OutputFormat {
    /// Labelled, human-readable output
    #[default]
    Human,
    /// One JSON object
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Caption (credit line) for an asset
    Caption {
        /// Asset JSON file
        asset: PathBuf,
    },

    /// Media tag for an asset, wrapped in a captioned figure
    Attachment {
        /// Asset JSON file
        asset: PathBuf,

        /// Emit the bare media tag only
        #[arg(long)]
        no_caption: bool,
    },

    /// Group event sessions by start time
    Sessions {
        /// JSON file holding an array of sessions
        sessions: PathBuf,
    },

    /// Node title, subtitle and author byline for a publication
    Title {
        /// Publication JSON file
        publication: PathBuf,
    },

    /// Page title, Open Graph fields and canonical URL for a page
    Meta {
        /// Publication JSON file
        page: PathBuf,

        /// URL the page was requested at
        #[arg(long)]
        url: String,
    },

    /// Event dates in the site's timezone
    Event {
        /// Publication JSON file
        event: PathBuf,
    },

    /// Fetch a resource and print it as a data URI
    DataUri {
        /// Resource URL
        url: String,

        /// Request timeout in seconds
        #[arg(long, default_value = "10")]
        timeout: u64,
    },
}
