//! HTML escaping and tag building
//!
//! Everything that ends up in a template passes through [`SafeHtml`]. Raw
//! content-API text only becomes `SafeHtml` via [`escape`], so third-party
//! text cannot reach the page unescaped.

use std::fmt;

use scraper::Html;
use serde::Serialize;

/// Markup that can be embedded in a page without further escaping
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SafeHtml(String);

impl SafeHtml {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap markup that is already known to be safe (CMS-sanitised bodies,
    /// literals in this crate).
    pub fn trusted(markup: impl Into<String>) -> Self {
        Self(markup.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Append untrusted text, escaping it
    pub fn push_text(&mut self, text: &str) {
        self.0.push_str(&escape(text).0);
    }

    /// Append markup that is already safe
    pub fn push_html(&mut self, html: &SafeHtml) {
        self.0.push_str(&html.0);
    }

    /// Join fragments with a literal separator
    pub fn join(parts: &[SafeHtml], separator: &str) -> SafeHtml {
        let strings: Vec<&str> = parts.iter().map(|p| p.as_str()).collect();
        SafeHtml(strings.join(&escape(separator).0))
    }
}

impl fmt::Display for SafeHtml {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<SafeHtml> for String {
    fn from(html: SafeHtml) -> Self {
        html.0
    }
}

/// Escape text for use in HTML content or attribute values
pub fn escape(text: &str) -> SafeHtml {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    SafeHtml(out)
}

/// Return the value only if it is not blank
pub fn present(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

fn open_tag(name: &str, attrs: &[(&str, &str)]) -> String {
    let mut out = format!("<{}", name);
    for (key, value) in attrs {
        out.push_str(&format!(" {}=\"{}\"", key, escape(value)));
    }
    out
}

/// Build `<name attrs>content</name>`
pub fn content_tag(name: &str, attrs: &[(&str, &str)], content: &SafeHtml) -> SafeHtml {
    let mut out = open_tag(name, attrs);
    out.push('>');
    out.push_str(content.as_str());
    out.push_str(&format!("</{}>", name));
    SafeHtml(out)
}

/// Build a void element such as `<img ... />`
pub fn void_tag(name: &str, attrs: &[(&str, &str)]) -> SafeHtml {
    let mut out = open_tag(name, attrs);
    out.push_str(" />");
    SafeHtml(out)
}

pub fn link_to(label: &SafeHtml, href: &str, attrs: &[(&str, &str)]) -> SafeHtml {
    let mut all = vec![("href", href)];
    all.extend_from_slice(attrs);
    content_tag("a", &all, label)
}

pub fn image_tag(src: &str, attrs: &[(&str, &str)]) -> SafeHtml {
    let mut all = vec![("src", src)];
    all.extend_from_slice(attrs);
    void_tag("img", &all)
}

/// `<video>` with playback controls
pub fn video_tag(src: &str, attrs: &[(&str, &str)]) -> SafeHtml {
    let mut all = vec![("controls", "controls"), ("src", src)];
    all.extend_from_slice(attrs);
    content_tag("video", &all, &SafeHtml::new())
}

/// Text content of an HTML fragment, markup removed
pub fn strip_tags(html: &str) -> String {
    let fragment = Html::parse_fragment(html);
    fragment.root_element().text().collect()
}
