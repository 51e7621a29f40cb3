//! Media attachments and their credit lines

use crate::html::{content_tag, escape, image_tag, link_to, present, video_tag, SafeHtml};
use crate::lookup::LicenseTranslator;
use crate::types::Asset;

/// Credit line for an asset: `title; description. byline. license`
///
/// Blank parts are dropped along with their separator. All asset text is
/// escaped; only the license label and tags built here are trusted.
pub fn asset_caption(asset: &Asset, licenses: &dyn LicenseTranslator) -> SafeHtml {
    let mut parts = Vec::new();

    let mut title = escape(&asset.title);
    if let Some(description) = present(asset.description.as_deref()) {
        title.push_html(&SafeHtml::trusted("; "));
        title.push_text(description);
    }
    if !title.as_str().trim().is_empty() {
        parts.push(title);
    }

    if let Some(byline) = byline(asset) {
        match present(asset.source.as_deref()) {
            Some(source) => parts.push(link_to(&byline, source, &[])),
            None => parts.push(byline),
        }
    }

    let license = present(asset.license.as_deref())
        .and_then(|code| licenses.translate(code))
        .filter(|label| !label.trim().is_empty());
    if let Some(label) = license {
        parts.push(escape(&label));
    }

    SafeHtml::join(&parts, ". ")
}

/// Attribution, or "By creator" when there is none
fn byline(asset: &Asset) -> Option<SafeHtml> {
    if let Some(attribution) = present(asset.attribution.as_deref()) {
        return Some(escape(attribution));
    }
    present(asset.creator.as_deref()).map(|creator| {
        let mut byline = SafeHtml::trusted("By ");
        byline.push_text(creator);
        byline
    })
}

/// `<img>` or `<video>` for an asset; empty for other content types
pub fn media_tag(asset: &Asset, attrs: &[(&str, &str)]) -> SafeHtml {
    if asset.content_type.starts_with("image") {
        image_tag(&asset.web_url, attrs)
    } else if asset.content_type.starts_with("video") {
        video_tag(&asset.web_url, attrs)
    } else {
        SafeHtml::new()
    }
}

/// Media tag for an asset, wrapped in a captioned `<figure>` when `caption` is set
pub fn attachment(
    asset: Option<&Asset>,
    caption: bool,
    attrs: &[(&str, &str)],
    licenses: &dyn LicenseTranslator,
) -> SafeHtml {
    let Some(asset) = asset else {
        return SafeHtml::new();
    };

    let mut html = media_tag(asset, attrs);
    if !caption {
        return html;
    }

    html.push_html(&content_tag(
        "figcaption",
        &[],
        &asset_caption(asset, licenses),
    ));
    content_tag("figure", &[], &html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lookup::OpenDefinitionLicenses;

    fn make_asset() -> Asset {
        Asset {
            title: "Open Data Day".to_string(),
            content_type: "image/jpeg".to_string(),
            web_url: "http://assets.theodi.org/odd.jpg".to_string(),
            ..Default::default()
        }
    }

    fn caption(asset: &Asset) -> String {
        asset_caption(asset, &OpenDefinitionLicenses).into_string()
    }

    #[test]
    fn test_title_only() {
        assert_eq!(caption(&make_asset()), "Open Data Day");
    }

    #[test]
    fn test_full_caption() {
        let asset = Asset {
            description: Some("Crowd at the ODI".to_string()),
            attribution: Some("Photo: Jo Smith".to_string()),
            source: Some("http://flickr.com/jo".to_string()),
            license: Some("cc-by".to_string()),
            ..make_asset()
        };
        assert_eq!(
            caption(&asset),
            r#"Open Data Day; Crowd at the ODI. <a href="http://flickr.com/jo">Photo: Jo Smith</a>. Creative Commons Attribution"#
        );
    }

    #[test]
    fn test_no_attribution_no_creator_has_no_byline() {
        let asset = Asset {
            source: Some("http://flickr.com/jo".to_string()),
            license: Some("cc-by-sa".to_string()),
            ..make_asset()
        };
        assert_eq!(
            caption(&asset),
            "Open Data Day. Creative Commons Attribution Share-Alike"
        );
    }

    #[test]
    fn test_creator_byline() {
        let asset = Asset {
            attribution: Some("  ".to_string()),
            creator: Some("Jo Smith".to_string()),
            ..make_asset()
        };
        assert_eq!(caption(&asset), "Open Data Day. By Jo Smith");
    }

    #[test]
    fn test_attribution_wins_over_creator() {
        let asset = Asset {
            attribution: Some("ODI".to_string()),
            creator: Some("Jo Smith".to_string()),
            ..make_asset()
        };
        assert_eq!(caption(&asset), "Open Data Day. ODI");
    }

    #[test]
    fn test_unknown_license_is_dropped() {
        let asset = Asset {
            license: Some("all-mine".to_string()),
            ..make_asset()
        };
        assert_eq!(caption(&asset), "Open Data Day");
    }

    #[test]
    fn test_blank_title() {
        let asset = Asset {
            title: String::new(),
            creator: Some("Jo".to_string()),
            ..make_asset()
        };
        assert_eq!(caption(&asset), "By Jo");
    }

    #[test]
    fn test_escapes_asset_text() {
        let asset = Asset {
            title: "<script>alert(1)</script>".to_string(),
            description: Some("Fish & Chips".to_string()),
            creator: Some("\"Jo\"".to_string()),
            source: Some("http://x.org/?a=1&b=\"2\"".to_string()),
            ..make_asset()
        };
        assert_eq!(
            caption(&asset),
            "&lt;script&gt;alert(1)&lt;/script&gt;; Fish &amp; Chips. \
             <a href=\"http://x.org/?a=1&amp;b=&quot;2&quot;\">By &quot;Jo&quot;</a>"
        );
    }

    #[test]
    fn test_caption_is_idempotent() {
        let asset = Asset {
            creator: Some("Jo".to_string()),
            license: Some("odc-by".to_string()),
            ..make_asset()
        };
        assert_eq!(caption(&asset), caption(&asset));
    }

    #[test]
    fn test_attachment_absent() {
        assert_eq!(attachment(None, true, &[], &OpenDefinitionLicenses).as_str(), "");
    }

    #[test]
    fn test_attachment_image_with_caption() {
        let asset = make_asset();
        assert_eq!(
            attachment(Some(&asset), true, &[], &OpenDefinitionLicenses).as_str(),
            r#"<figure><img src="http://assets.theodi.org/odd.jpg" /><figcaption>Open Data Day</figcaption></figure>"#
        );
    }

    #[test]
    fn test_attachment_video_without_caption() {
        let asset = Asset {
            content_type: "video/mp4".to_string(),
            web_url: "http://assets.theodi.org/odd.mp4".to_string(),
            ..make_asset()
        };
        assert_eq!(
            attachment(Some(&asset), false, &[("width", "640")], &OpenDefinitionLicenses).as_str(),
            r#"<video controls="controls" src="http://assets.theodi.org/odd.mp4" width="640"></video>"#
        );
    }

    #[test]
    fn test_attachment_other_content_type() {
        let asset = Asset {
            content_type: "application/pdf".to_string(),
            ..make_asset()
        };
        assert_eq!(
            attachment(Some(&asset), false, &[], &OpenDefinitionLicenses).as_str(),
            ""
        );
        assert_eq!(
            attachment(Some(&asset), true, &[], &OpenDefinitionLicenses).as_str(),
            "<figure><figcaption>Open Data Day</figcaption></figure>"
        );
    }
}
