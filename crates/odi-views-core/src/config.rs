//! Site-wide settings used by the helpers

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ViewError};

/// Settings for the site the helpers render for
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Last component of every page title
    pub site_name: String,

    /// Base URL of the content API (author images live here)
    pub content_api_url: String,

    /// IANA zone event times are shown in
    pub timezone: String,

    /// Path prefix of team member pages
    pub team_path_prefix: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site_name: "Open Data Institute".to_string(),
            content_api_url: "http://contentapi.theodi.org".to_string(),
            timezone: "Europe/London".to_string(),
            team_path_prefix: "/team".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn tz(&self) -> Result<Tz> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| ViewError::UnknownTimezone(self.timezone.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_fill_missing_fields() {
        let config: SiteConfig = serde_json::from_str(r#"{"site_name": "ODI Leeds"}"#).unwrap();
        assert_eq!(config.site_name, "ODI Leeds");
        assert_eq!(config.timezone, "Europe/London");
        assert_eq!(config.tz().unwrap(), chrono_tz::Europe::London);
    }

    #[test]
    fn test_unknown_timezone() {
        let config = SiteConfig {
            timezone: "Mars/Olympus".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.tz(), Err(ViewError::UnknownTimezone(_))));
    }
}
