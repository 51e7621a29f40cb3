//! Error types for the view helpers

use thiserror::Error;

/// Errors raised while formatting content for display
#[derive(Error, Debug)]
pub enum ViewError {
    #[error("Missing {field} on {record}")]
    MissingField { record: String, field: &'static str },

    #[error("Unparsable date/time: {0:?}")]
    InvalidDateTime(String),

    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),

    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    #[error("Invalid URL: {0}")]
    Url(#[from] url::ParseError),

    #[error("Fetch failed: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ViewError>;
