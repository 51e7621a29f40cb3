//! Page titles and social sharing metadata

use scraper::{Html, Selector};
use url::Url;

use crate::errors::Result;
use crate::html::{present, strip_tags};
use crate::types::{PageMeta, Publication};

/// `<title>` text: override, page title and site name joined by ` | `.
///
/// The page title has its markup stripped. Blank parts are left out, so a page
/// with neither override nor title gets just the site name.
pub fn page_title(override_title: Option<&str>, title: Option<&str>, site_name: &str) -> String {
    let stripped = title.map(|t| strip_tags(t).trim().to_string());
    [override_title, stripped.as_deref(), Some(site_name)]
        .into_iter()
        .filter_map(present)
        .collect::<Vec<_>>()
        .join(" | ")
}

/// Open Graph fields for a page.
///
/// Articles take their description from `details.description` and their image
/// from the first `<img>` in the body. Everything else uses the excerpt and
/// has no image.
pub fn article_meta(page: &Publication) -> PageMeta {
    let details = &page.details;
    let mut meta = PageMeta {
        og_type: page.format.clone(),
        ..Default::default()
    };

    if page.is_format("article") {
        meta.og_description = present(details.description.as_deref()).map(String::from);
        meta.og_image = present(details.content.as_deref()).and_then(first_image_src);
    } else {
        meta.og_description = present(details.excerpt.as_deref()).map(String::from);
    }

    meta
}

/// `src` of the first `<img>` in an HTML fragment
pub fn first_image_src(html: &str) -> Option<String> {
    let selector = Selector::parse("img").ok()?;
    let document = Html::parse_fragment(html);
    let src = document
        .select(&selector)
        .next()?
        .value()
        .attr("src")?
        .to_string();
    Some(src)
}

/// The request URL without its query string or fragment
pub fn canonical_url(request_url: &str) -> Result<String> {
    let mut url = Url::parse(request_url)?;
    url.set_query(None);
    url.set_fragment(None);
    Ok(url.to_string())
}
