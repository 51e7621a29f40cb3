//! Content records as returned by the content API

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};

use crate::html::present;

/// Treat an explicit `null` like a missing key
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// A media attachment (image, video or document)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Asset {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub attribution: Option<String>,
    #[serde(default)]
    pub creator: Option<String>,
    /// Where the original work lives
    #[serde(default)]
    pub source: Option<String>,
    /// Open Definition license code, e.g. `cc-by`
    #[serde(default)]
    pub license: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub content_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub web_url: String,
}

/// Node level in the ODI network
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Level {
    Comms,
    Country,
    City,
    Pioneer,
    #[default]
    #[serde(other)]
    Other,
}

/// A person record, either an author or a related artefact
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Person {
    /// Content API id, usually a URL ending in `.json`
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub slug: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tag_ids: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub state: String,
    #[serde(default)]
    pub format: Option<String>,
}

impl Person {
    pub fn has_tag(&self, tag: &str) -> bool {
        self.tag_ids.iter().any(|t| t == tag)
    }

    pub fn is_published(&self) -> bool {
        self.state == "published"
    }
}

/// Format-specific fields of a publication
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PublicationDetails {
    #[serde(default, deserialize_with = "null_as_default")]
    pub nodes: Vec<Publication>,
    #[serde(default)]
    pub description: Option<String>,
    /// Body HTML
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub excerpt: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Artefact {
    #[serde(default, deserialize_with = "null_as_default")]
    pub related: Vec<Person>,
}

/// A page, node, event or article
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Publication {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub level: Level,
    #[serde(default, deserialize_with = "null_as_default")]
    pub beta: bool,
    #[serde(default)]
    pub host: Option<String>,
    #[serde(default)]
    pub area: Option<String>,
    /// ISO 3166 alpha-2 country code
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub author: Option<Person>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub details: PublicationDetails,
    #[serde(default, deserialize_with = "null_as_default")]
    pub format: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub artefact: Artefact,
    #[serde(default, deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    /// Explicit `<title>` override set by the page
    #[serde(default)]
    pub page_title: Option<String>,
}

impl Publication {
    /// Title, falling back to name
    pub fn display_name(&self) -> &str {
        present(self.title.as_deref())
            .or(self.name.as_deref())
            .unwrap_or("")
    }

    pub fn is_format(&self, format: &str) -> bool {
        self.format == format
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ModuleImage {
    #[serde(default)]
    pub web_url: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionDetails {
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub module_image: Option<ModuleImage>,
}

/// A scheduled session within an event
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Session {
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub slug: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub details: SessionDetails,
}

/// Display-ready projection of a [`Session`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectedSession {
    pub title: String,
    pub slug: String,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub location: Option<String>,
    pub module_image: Option<String>,
}

/// Sessions keyed by start time (`HH:MM:SS`), in first-seen order
pub type SessionBuckets = IndexMap<String, Vec<ProjectedSession>>;

/// Open Graph fields for a page
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub og_type: String,
    pub og_description: Option<String>,
    pub og_image: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publication_from_json() {
        let raw = r#"{
            "title": "Leeds",
            "level": "city",
            "beta": true,
            "region": "GB",
            "format": "node",
            "details": {"nodes": [{"name": "Sheffield", "level": "comms"}]}
        }"#;
        let publication: Publication = serde_json::from_str(raw).unwrap();
        assert_eq!(publication.level, Level::City);
        assert!(publication.beta);
        assert_eq!(publication.details.nodes[0].level, Level::Comms);
        assert_eq!(publication.details.nodes[0].display_name(), "Sheffield");
    }

    #[test]
    fn test_unknown_level() {
        let publication: Publication = serde_json::from_str(r#"{"level": "galactic"}"#).unwrap();
        assert_eq!(publication.level, Level::Other);
    }

    #[test]
    fn test_display_name_skips_blank_title() {
        let publication = Publication {
            title: Some("  ".to_string()),
            name: Some("Paris".to_string()),
            ..Default::default()
        };
        assert_eq!(publication.display_name(), "Paris");
    }

    #[test]
    fn test_null_fields_decode_as_defaults() {
        let asset: Asset = serde_json::from_str(
            r#"{"title": null, "content_type": null, "web_url": null, "license": null}"#,
        )
        .unwrap();
        assert_eq!(asset.title, "");
        assert_eq!(asset.content_type, "");
        assert_eq!(asset.license, None);

        let publication: Publication = serde_json::from_str(
            r#"{"level": null, "beta": null, "format": null, "description": null,
                "details": {"nodes": null}, "artefact": null}"#,
        )
        .unwrap();
        assert_eq!(publication.level, Level::Other);
        assert!(!publication.beta);
        assert_eq!(publication.format, "");
        assert!(publication.details.nodes.is_empty());

        let person: Person =
            serde_json::from_str(r#"{"name": null, "slug": null, "tag_ids": null, "state": null}"#)
                .unwrap();
        assert!(person.tag_ids.is_empty());
        assert!(!person.is_published());
    }

    #[test]
    fn test_person_tags() {
        let person = Person {
            tag_ids: vec!["team".to_string()],
            state: "published".to_string(),
            ..Default::default()
        };
        assert!(person.has_tag("team"));
        assert!(person.is_published());
    }
}
