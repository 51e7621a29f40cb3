//! Named partials and the helpers that render through them
//!
//! A host application registers its partials by name. Helpers look a
//! specialised partial up first and fall back to a generic one when it is not
//! registered, rather than rendering and recovering from a failure.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::{NoExpand, Regex};
use serde_json::{Map, Value};
use tracing::debug;

use crate::errors::{Result, ViewError};
use crate::html::SafeHtml;
use crate::types::{Person, Publication};

/// Generic partial used for modules without their own
pub const FALLBACK_MODULE: &str = "module/block";

/// Partial listing an event's speakers
pub const SPEAKERS_PARTIAL: &str = "content/speakers";

static SPEAKERS_LINE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^.+\[speakers\].+$").expect("valid speakers pattern"));

/// Renders named partials with a set of locals
pub trait Renderer: Send + Sync {
    fn has_partial(&self, name: &str) -> bool;

    fn render(&self, name: &str, locals: &Value) -> Result<SafeHtml>;
}

type PartialFn = Box<dyn Fn(&Value) -> Result<SafeHtml> + Send + Sync>;

/// [`Renderer`] backed by registered closures
#[derive(Default)]
pub struct PartialRegistry {
    partials: HashMap<String, PartialFn>,
}

impl PartialRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register<F>(&mut self, name: impl Into<String>, partial: F) -> &mut Self
    where
        F: Fn(&Value) -> Result<SafeHtml> + Send + Sync + 'static,
    {
        self.partials.insert(name.into(), Box::new(partial));
        self
    }

    pub fn with<F>(mut self, name: impl Into<String>, partial: F) -> Self
    where
        F: Fn(&Value) -> Result<SafeHtml> + Send + Sync + 'static,
    {
        self.register(name, partial);
        self
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.partials.keys().map(|k| k.as_str()).collect();
        names.sort();
        names
    }
}

impl std::fmt::Debug for PartialRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PartialRegistry")
            .field("partials", &self.names())
            .finish()
    }
}

impl Renderer for PartialRegistry {
    fn has_partial(&self, name: &str) -> bool {
        self.partials.contains_key(name)
    }

    fn render(&self, name: &str, locals: &Value) -> Result<SafeHtml> {
        let partial = self
            .partials
            .get(name)
            .ok_or_else(|| ViewError::TemplateNotFound(name.to_string()))?;
        partial(locals)
    }
}

/// Partial name for a page section, e.g. `case-studies` → `module/case_studies`
pub fn module_partial_name(section: &str) -> String {
    format!("module/{}", section.replace('-', "_"))
}

/// Render a page section with its own partial, or the generic module block
pub fn module_block(
    section: &str,
    publication: &Publication,
    renderer: &dyn Renderer,
) -> Result<SafeHtml> {
    let specific = module_partial_name(section);
    let name = if renderer.has_partial(&specific) {
        specific
    } else {
        debug!(section, partial = %specific, "no partial for section, using {}", FALLBACK_MODULE);
        FALLBACK_MODULE.to_string()
    };

    let mut locals = Map::new();
    locals.insert("section".to_string(), Value::String(section.to_string()));
    locals.insert("publication".to_string(), serde_json::to_value(publication)?);
    renderer.render(&name, &Value::Object(locals))
}

/// Speakers heading followed by the rendered speakers partial
pub fn summit_speakers(speakers: &[&Person], renderer: &dyn Renderer) -> Result<SafeHtml> {
    let mut locals = Map::new();
    locals.insert("speakers".to_string(), serde_json::to_value(speakers)?);

    let mut body = SafeHtml::trusted("\n      <hr />\n      <h2>Speakers</h2>\n    ");
    body.push_html(&renderer.render(SPEAKERS_PARTIAL, &Value::Object(locals))?);
    Ok(body)
}

/// Event description with each `[speakers]` placeholder line replaced by the
/// speakers block. The description is CMS-authored HTML and is trusted.
pub fn summit_description(
    publication: &Publication,
    speakers: &[&Person],
    renderer: &dyn Renderer,
) -> Result<SafeHtml> {
    if !SPEAKERS_LINE.is_match(&publication.description) {
        return Ok(SafeHtml::trusted(publication.description.clone()));
    }

    let block = summit_speakers(speakers, renderer)?;
    let description = SPEAKERS_LINE.replace_all(&publication.description, NoExpand(block.as_str()));
    Ok(SafeHtml::trusted(description.into_owned()))
}
