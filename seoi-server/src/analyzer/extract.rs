//! Meta tag extraction
//!
//! Parsing uses the html5ever tree builder through `scraper`, which recovers
//! from malformed markup instead of failing.

use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use seoi_common::seo::{MetaTagSet, FALLBACK_PRIMARY_COLOR};

static HEAD_TITLE_SELECTOR: Lazy<Selector> = Lazy::new(|| parse_selector("head title"));
static TITLE_SELECTOR: Lazy<Selector> = Lazy::new(|| parse_selector("title"));
static META_SELECTOR: Lazy<Selector> = Lazy::new(|| parse_selector("meta"));
static LINK_SELECTOR: Lazy<Selector> = Lazy::new(|| parse_selector("link[rel][href]"));

const THEME_COLOR_NAMES: [&str; 2] = ["theme-color", "msapplication-TileColor"];

fn parse_selector(selector: &str) -> Selector {
    // Selectors are compile-time constants
    Selector::parse(selector).unwrap_or_else(|e| panic!("invalid selector {selector:?}: {e}"))
}

/// Tags and color extracted from one document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractedPage {
    pub tags: MetaTagSet,
    pub primary_color: Option<String>,
}

fn non_empty<'a>(element: &'a ElementRef<'_>, attr: &str) -> Option<&'a str> {
    element.value().attr(attr).filter(|v| !v.is_empty())
}

fn extract_title(document: &Html) -> String {
    document
        .select(&HEAD_TITLE_SELECTOR)
        .next()
        .or_else(|| document.select(&TITLE_SELECTOR).next())
        .map(|element| element.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

fn extract_canonical(document: &Html) -> Option<String> {
    document
        .select(&LINK_SELECTOR)
        .filter(|link| {
            link.value()
                .attr("rel")
                .map(|rel| {
                    rel.split_ascii_whitespace()
                        .any(|token| token.eq_ignore_ascii_case("canonical"))
                })
                .unwrap_or(false)
        })
        .find_map(|link| non_empty(&link, "href").map(str::to_string))
}

/// Extract the tag set and primary color from raw HTML
pub fn extract_page(html: &str) -> ExtractedPage {
    let document = Html::parse_document(html);
    let mut tags = MetaTagSet::new();
    let mut theme_color: Option<String> = None;

    // The title goes in first so a <meta name="title"> replaces it
    tags.insert("title", extract_title(&document));

    for meta in document.select(&META_SELECTOR) {
        let name = non_empty(&meta, "name").or_else(|| non_empty(&meta, "property"));
        let content = non_empty(&meta, "content");

        let (Some(name), Some(content)) = (name, content) else {
            continue;
        };

        // Theme colors feed primary_color only and never become tag keys
        if THEME_COLOR_NAMES
            .iter()
            .any(|candidate| candidate.eq_ignore_ascii_case(name))
        {
            theme_color.get_or_insert_with(|| content.to_string());
            continue;
        }

        tags.insert(name, content);
    }

    if let Some(href) = extract_canonical(&document) {
        tags.insert("canonical", href);
    }

    let primary_color = theme_color.or_else(|| {
        tags.has("og:image")
            .then(|| FALLBACK_PRIMARY_COLOR.to_string())
    });

    tracing::trace!(tags = tags.len(), primary_color = ?primary_color, "Extracted meta tags");

    ExtractedPage {
        tags,
        primary_color,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_is_trimmed() {
        let page = extract_page("<html><head><title>\n  Hello World  \n</title></head></html>");
        assert_eq!(page.tags.get("title"), Some("Hello World"));
    }

    #[test]
    fn test_missing_title_is_empty_string() {
        let page = extract_page("<html><head></head><body>hi</body></html>");
        assert_eq!(page.tags.get("title"), Some(""));
        assert!(!page.tags.has("title"));
    }

    #[test]
    fn test_head_title_wins_over_svg_title() {
        let html = r#"<html><head><title>Page</title></head>
            <body><svg><title>Icon</title></svg></body></html>"#;
        assert_eq!(extract_page(html).tags.get("title"), Some("Page"));
    }

    #[test]
    fn test_name_falls_back_to_property() {
        let html = r#"<head>
            <meta name="description" content="Desc">
            <meta property="og:title" content="OG Title">
            <meta name="" property="og:type" content="website">
        </head>"#;
        let tags = extract_page(html).tags;
        assert_eq!(tags.get("description"), Some("Desc"));
        assert_eq!(tags.get("og:title"), Some("OG Title"));
        assert_eq!(tags.get("og:type"), Some("website"));
    }

    #[test]
    fn test_meta_without_name_or_content_is_skipped() {
        let html = r#"<head>
            <meta charset="utf-8">
            <meta name="robots">
            <meta name="keywords" content="">
            <meta content="orphan">
        </head>"#;
        let tags = extract_page(html).tags;
        // only the always-present title key
        assert_eq!(tags.len(), 1);
    }

    #[test]
    fn test_last_duplicate_wins() {
        let html = r#"<head>
            <meta name="description" content="first">
            <meta name="description" content="second">
        </head>"#;
        assert_eq!(extract_page(html).tags.get("description"), Some("second"));
    }

    #[test]
    fn test_meta_title_overrides_title_element() {
        let html = r#"<head><title>Element</title><meta name="title" content="Meta"></head>"#;
        assert_eq!(extract_page(html).tags.get("title"), Some("Meta"));
    }

    #[test]
    fn test_canonical_link() {
        let html = r#"<head>
            <link rel="stylesheet" href="/style.css">
            <link rel="Canonical" href="https://example.com/page">
        </head>"#;
        assert_eq!(
            extract_page(html).tags.get("canonical"),
            Some("https://example.com/page")
        );
    }

    #[test]
    fn test_canonical_with_empty_href_is_ignored() {
        let html = r#"<head><link rel="canonical" href=""></head>"#;
        assert_eq!(extract_page(html).tags.get("canonical"), None);
    }

    #[test]
    fn test_theme_color_first_match_wins() {
        let html = r##"<head>
            <meta name="msapplication-TileColor" content="#111111">
            <meta name="theme-color" content="#222222">
            <meta property="og:image" content="https://example.com/og.png">
        </head>"##;
        let page = extract_page(html);
        assert_eq!(page.primary_color.as_deref(), Some("#111111"));
        assert_eq!(page.tags.get("theme-color"), None);
        assert_eq!(page.tags.get("msapplication-TileColor"), None);
        assert_eq!(page.tags.get("og:image"), Some("https://example.com/og.png"));
    }

    #[test]
    fn test_theme_color_names_are_not_tag_keys() {
        let html = r##"<head>
            <meta name="THEME-COLOR" content="#ff6600">
            <meta name="msapplication-tilecolor" content="#00aa00">
        </head>"##;
        let page = extract_page(html);
        assert_eq!(page.primary_color.as_deref(), Some("#ff6600"));
        // only the always-present title key
        assert_eq!(page.tags.len(), 1);
    }

    #[test]
    fn test_og_image_without_theme_color_uses_fallback() {
        let html = r#"<head><meta property="og:image" content="https://example.com/og.png"></head>"#;
        let page = extract_page(html);
        assert_eq!(page.primary_color.as_deref(), Some(FALLBACK_PRIMARY_COLOR));
    }

    #[test]
    fn test_no_color_sources_leaves_color_unset() {
        let page = extract_page("<head><title>Plain</title></head>");
        assert_eq!(page.primary_color, None);
    }

    #[test]
    fn test_malformed_markup_is_tolerated() {
        let html = r#"<html><head><title>Broken<meta name="description" content="still found"
            <body><div><p>unclosed"#;
        let page = extract_page(html);
        assert!(page.tags.get("title").is_some());
    }
}
