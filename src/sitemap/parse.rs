//! `<loc>` extraction from sitemap documents.
//!
//! Documents are parsed leniently with `scraper`'s HTML5 parser, so a sitemap
//! with a broken declaration or stray markup still yields the `<loc>` text it
//! contains. Both `<urlset>` and `<sitemapindex>` documents use `<loc>`, so no
//! distinction is made between them here.
//!
//! The HTML5 parser reads `<![CDATA[...]]>` as a comment, so CDATA sections
//! are rewritten to escaped text before parsing.

use scraper::{Html, Selector};
use std::borrow::Cow;
use std::sync::LazyLock;

const LOC_SELECTOR_STR: &str = "loc";
const CDATA_OPEN: &str = "<![CDATA[";
const CDATA_CLOSE: &str = "]]>";

static LOC_SELECTOR: LazyLock<Selector> =
    LazyLock::new(|| crate::utils::parse_selector_unsafe(LOC_SELECTOR_STR, "sitemap <loc>"));

/// Extracts every `<loc>` entry from a sitemap body, in document order.
///
/// Text is trimmed; entries that are empty after trimming are skipped.
/// Text inside CDATA sections counts as element text.
pub fn extract_locations(body: &str) -> Vec<String> {
    let document = Html::parse_document(&unwrap_cdata(body));
    document
        .select(&LOC_SELECTOR)
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|loc| !loc.is_empty())
        .collect()
}

/// Replaces every CDATA section with its content, escaped as character data.
///
/// An unterminated section is left untouched.
fn unwrap_cdata(body: &str) -> Cow<'_, str> {
    if !body.contains(CDATA_OPEN) {
        return Cow::Borrowed(body);
    }

    let mut out = String::with_capacity(body.len());
    let mut rest = body;
    while let Some(open) = rest.find(CDATA_OPEN) {
        let content_start = open + CDATA_OPEN.len();
        let Some(close) = rest[content_start..].find(CDATA_CLOSE) else {
            break;
        };
        out.push_str(&rest[..open]);
        for c in rest[content_start..content_start + close].chars() {
            match c {
                '&' => out.push_str("&amp;"),
                '<' => out.push_str("&lt;"),
                '>' => out.push_str("&gt;"),
                _ => out.push(c),
            }
        }
        rest = &rest[content_start + close + CDATA_CLOSE.len()..];
    }
    out.push_str(rest);
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_locations_urlset() {
        let body = r#"<?xml version="1.0" encoding="UTF-8"?>
<urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <url><loc>https://x.com/about</loc><lastmod>2024-01-01</lastmod></url>
  <url><loc>https://x.com/contact</loc></url>
</urlset>"#;
        assert_eq!(
            extract_locations(body),
            vec!["https://x.com/about", "https://x.com/contact"]
        );
    }

    #[test]
    fn test_extract_locations_sitemap_index() {
        let body = r#"<sitemapindex xmlns="http://www.sitemaps.org/schemas/sitemap/0.9">
  <sitemap><loc>https://x.com/post-sitemap.xml</loc></sitemap>
  <sitemap><loc>https://x.com/page-sitemap.xml</loc></sitemap>
</sitemapindex>"#;
        assert_eq!(
            extract_locations(body),
            vec![
                "https://x.com/post-sitemap.xml",
                "https://x.com/page-sitemap.xml"
            ]
        );
    }

    #[test]
    fn test_extract_locations_trims_whitespace() {
        let body = "<urlset><url><loc>\n    https://x.com/page\n  </loc></url></urlset>";
        assert_eq!(extract_locations(body), vec!["https://x.com/page"]);
    }

    #[test]
    fn test_extract_locations_skips_empty_entries() {
        let body = "<urlset><url><loc>  </loc></url><url><loc>https://x.com/a</loc></url></urlset>";
        assert_eq!(extract_locations(body), vec!["https://x.com/a"]);
    }

    #[test]
    fn test_extract_locations_empty_document() {
        assert!(extract_locations("").is_empty());
        assert!(extract_locations("<urlset></urlset>").is_empty());
    }

    #[test]
    fn test_extract_locations_decodes_entities() {
        let body = "<urlset><url><loc>https://x.com/search?a=1&amp;b=2</loc></url></urlset>";
        assert_eq!(extract_locations(body), vec!["https://x.com/search?a=1&b=2"]);
    }

    #[test]
    fn test_extract_locations_ignores_image_loc() {
        // Namespaced image entries are not page URLs
        let body = r#"<urlset><url><loc>https://x.com/gallery</loc>
<image:image><image:loc>https://x.com/cat.png</image:loc></image:image></url></urlset>"#;
        assert_eq!(extract_locations(body), vec!["https://x.com/gallery"]);
    }

    #[test]
    fn test_extract_locations_keeps_duplicates() {
        let body = "<urlset><url><loc>https://x.com/a</loc></url><url><loc>https://x.com/a</loc></url></urlset>";
        assert_eq!(extract_locations(body).len(), 2);
    }

    #[test]
    fn test_extract_locations_reads_cdata() {
        let body = "<urlset><url><loc><![CDATA[https://x.com/a]]></loc></url><url><loc>https://x.com/b</loc></url></urlset>";
        assert_eq!(
            extract_locations(body),
            vec!["https://x.com/a", "https://x.com/b"]
        );
    }

    #[test]
    fn test_extract_locations_cdata_keeps_literal_ampersand() {
        let body = "<urlset><url><loc><![CDATA[ https://x.com/s?a=1&b=<2> ]]></loc></url></urlset>";
        assert_eq!(extract_locations(body), vec!["https://x.com/s?a=1&b=<2>"]);
    }

    #[test]
    fn test_unwrap_cdata_leaves_plain_and_unterminated_bodies() {
        assert!(matches!(unwrap_cdata("<loc>a</loc>"), Cow::Borrowed(_)));
        assert_eq!(
            unwrap_cdata("<loc><![CDATA[a</loc>"),
            "<loc><![CDATA[a</loc>"
        );
    }
}
