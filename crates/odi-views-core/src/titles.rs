//! Node titles, subtitles and people

use crate::config::SiteConfig;
use crate::html::{content_tag, escape, image_tag, link_to, present, SafeHtml};
use crate::lookup::{CountryLookup, Routes};
use crate::types::{Level, Person, Publication};

/// Displayed title of a node, e.g. `ODI Comms Link - Paris (beta)`
pub fn node_title(publication: &Publication) -> SafeHtml {
    let mut title = SafeHtml::trusted("ODI ");
    if publication.level == Level::Comms {
        title.push_html(&SafeHtml::trusted("Comms Link - "));
    }
    title.push_text(publication.display_name());
    if publication.beta {
        title.push_html(&SafeHtml::trusted(" (beta)"));
    }
    title
}

/// Host, area and country of a node; country-level nodes have none
pub fn node_subtitle(publication: &Publication, countries: &dyn CountryLookup) -> Option<String> {
    if publication.level == Level::Country {
        return None;
    }

    let country = present(publication.region.as_deref()).and_then(|code| countries.lookup(code));
    let parts: Vec<&str> = [
        publication.host.as_deref(),
        publication.area.as_deref(),
        country.as_deref(),
    ]
    .into_iter()
    .filter_map(present)
    .collect();

    Some(parts.join(", "))
}

/// Titles of the nodes listed on a publication
pub fn node_names(publication: &Publication) -> Vec<SafeHtml> {
    publication.details.nodes.iter().map(node_title).collect()
}

/// Byline for a publication's author.
///
/// Published team members link to their team page with a thumbnail; anyone
/// else gets their name in a span.
pub fn author(
    publication: &Publication,
    routes: &dyn Routes,
    config: &SiteConfig,
) -> Option<SafeHtml> {
    let author = publication.author.as_ref()?;

    if author.has_tag("team") && author.is_published() {
        let mut label = escape(&author.name);
        label.push_html(&SafeHtml::trusted(" "));
        label.push_html(&author_image(author, config));
        Some(link_to(
            &label,
            &routes.team_article_path(&author.slug),
            &[("class", "author")],
        ))
    } else {
        Some(content_tag("span", &[("class", "author")], &escape(&author.name)))
    }
}

/// 50x50 square thumbnail from the content API
pub fn author_image(author: &Person, config: &SiteConfig) -> SafeHtml {
    let src = format!(
        "{}/{}/image?version=square",
        config.content_api_url.trim_end_matches('/'),
        author.slug
    );
    image_tag(
        &src,
        &[("alt", author.name.as_str()), ("width", "50"), ("height", "50")],
    )
}

/// Square image URL derived from a person's content API id
pub fn person_image(person: &Person) -> Option<String> {
    person
        .id
        .as_deref()
        .map(|id| id.replace(".json", "/image?version=square"))
}

/// People related to an event; `None` for anything that is not an event
pub fn speakers(publication: &Publication) -> Option<Vec<&Person>> {
    if !publication.is_format("event") {
        return None;
    }
    Some(
        publication
            .artefact
            .related
            .iter()
            .filter(|r| r.format.as_deref() == Some("person"))
            .collect(),
    )
}
