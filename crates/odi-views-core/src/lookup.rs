//! Lookup collaborators: license labels, country names and site routes
//!
//! Helpers take these as trait objects so a host application can plug in its
//! own tables. The default implementations cover what the site needs.

use isocountry::CountryCode;

use crate::config::SiteConfig;

/// Turns a license code into a human-readable label
pub trait LicenseTranslator: Send + Sync {
    /// `None` for unknown codes
    fn translate(&self, code: &str) -> Option<String>;
}

/// Turns an ISO 3166 alpha-2 code into a country name
pub trait CountryLookup: Send + Sync {
    fn lookup(&self, iso_code: &str) -> Option<String>;
}

/// Named routes the helpers link to
pub trait Routes: Send + Sync {
    fn team_article_path(&self, slug: &str) -> String;
}

/// License titles from the Open Definition license register
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenDefinitionLicenses;

const OPEN_DEFINITION_LICENSES: &[(&str, &str)] = &[
    ("cc-by", "Creative Commons Attribution"),
    ("cc-by-sa", "Creative Commons Attribution Share-Alike"),
    ("cc-zero", "Creative Commons CCZero"),
    ("cc-nc", "Creative Commons Non-Commercial (Any)"),
    ("odc-by", "Open Data Commons Attribution License"),
    ("odc-odbl", "Open Data Commons Open Database License (ODbL)"),
    (
        "odc-pddl",
        "Open Data Commons Public Domain Dedication and Licence (PDDL)",
    ),
    ("uk-ogl", "UK Open Government Licence (OGL)"),
    ("ogl-uk-2.0", "Open Government Licence 2.0 (United Kingdom)"),
    ("ogl-uk-3.0", "Open Government Licence 3.0 (United Kingdom)"),
    ("gfdl", "GNU Free Documentation License"),
    ("other-pd", "Other (Public Domain)"),
    ("other-at", "Other (Attribution)"),
    ("other-open", "Other (Open)"),
    ("other-nc", "Other (Non-Commercial)"),
    ("other-closed", "Other (Not Open)"),
    ("notspecified", "License Not Specified"),
];

impl LicenseTranslator for OpenDefinitionLicenses {
    fn translate(&self, code: &str) -> Option<String> {
        let code = code.trim();
        OPEN_DEFINITION_LICENSES
            .iter()
            .find(|(c, _)| c.eq_ignore_ascii_case(code))
            .map(|(_, label)| label.to_string())
    }
}

/// Country names from the ISO 3166 table
#[derive(Debug, Clone, Copy, Default)]
pub struct IsoCountries;

impl CountryLookup for IsoCountries {
    fn lookup(&self, iso_code: &str) -> Option<String> {
        CountryCode::for_alpha2(&iso_code.trim().to_ascii_uppercase())
            .ok()
            .map(|c| c.name().to_string())
    }
}

/// Routes derived from [`SiteConfig`]
#[derive(Debug, Clone)]
pub struct SiteRoutes {
    team_prefix: String,
}

impl SiteRoutes {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            team_prefix: config.team_path_prefix.trim_end_matches('/').to_string(),
        }
    }
}

impl Routes for SiteRoutes {
    fn team_article_path(&self, slug: &str) -> String {
        format!("{}/{}", self.team_prefix, slug)
    }
}
