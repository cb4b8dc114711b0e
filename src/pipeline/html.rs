//! HTML extraction for the pipeline
//!
//! Two extractors, one per phase: the harvester wants every anchor href on a
//! listing page, the resolver wants the single canonical link of a detail
//! page. Hrefs are returned exactly as written in the markup; the pipeline
//! filters by string prefix and never resolves relative URLs, so anything
//! that does not start with the configured prefix simply fails the filter.

use scraper::{Html, Selector};

/// Extracts the href attribute of every `<a href>` in document order
///
/// Duplicates are kept; the pipeline performs no deduplication anywhere.
///
/// # Arguments
///
/// * `html` - The HTML content to parse
///
/// # Returns
///
/// A vector of raw href attribute values
pub fn extract_anchor_hrefs(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut hrefs = Vec::new();

    if let Ok(selector) = Selector::parse("a[href]") {
        for element in document.select(&selector) {
            if let Some(href) = element.value().attr("href") {
                hrefs.push(href.to_string());
            }
        }
    }

    hrefs
}

/// Extracts the target of a page's canonical link tag
///
/// Returns the href of the first `<link rel="canonical">` carrying one, or
/// `None` if the page declares no canonical URL.
///
/// # Arguments
///
/// * `html` - The HTML content to parse
///
/// # Returns
///
/// The canonical href, if present
pub fn extract_canonical(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("link[rel='canonical'][href]").ok()?;

    document
        .select(&selector)
        .next()
        .and_then(|element| element.value().attr("href"))
        .map(|href| href.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_anchor_hrefs() {
        let html = r#"
            <html>
            <body>
                <a href="https://a.example.com/1">One</a>
                <a href="https://b.example.com/2">Two</a>
            </body>
            </html>
        "#;
        let hrefs = extract_anchor_hrefs(html);
        assert_eq!(
            hrefs,
            vec!["https://a.example.com/1", "https://b.example.com/2"]
        );
    }

    #[test]
    fn test_anchors_without_href_are_skipped() {
        let html = r#"<html><body><a name="top">Anchor</a><a href="/x">X</a></body></html>"#;
        let hrefs = extract_anchor_hrefs(html);
        assert_eq!(hrefs, vec!["/x"]);
    }

    #[test]
    fn test_duplicate_hrefs_are_kept() {
        let html = r#"
            <html><body>
                <a href="https://a.example.com/1">One</a>
                <a href="https://a.example.com/1">One again</a>
            </body></html>
        "#;
        assert_eq!(extract_anchor_hrefs(html).len(), 2);
    }

    #[test]
    fn test_no_anchors() {
        let html = r#"<html><body><p>Nothing to see</p></body></html>"#;
        assert!(extract_anchor_hrefs(html).is_empty());
    }

    #[test]
    fn test_hrefs_preserve_document_order() {
        let html = r#"
            <html><body>
                <a href="/3">c</a>
                <a href="/1">a</a>
                <a href="/2">b</a>
            </body></html>
        "#;
        assert_eq!(extract_anchor_hrefs(html), vec!["/3", "/1", "/2"]);
    }

    #[test]
    fn test_extract_canonical() {
        let html = r#"
            <html><head>
                <link rel="canonical" href="https://a.example.com/canonical" />
            </head><body></body></html>
        "#;
        assert_eq!(
            extract_canonical(html),
            Some("https://a.example.com/canonical".to_string())
        );
    }

    #[test]
    fn test_no_canonical() {
        let html = r#"<html><head><title>No canonical here</title></head><body></body></html>"#;
        assert_eq!(extract_canonical(html), None);
    }

    #[test]
    fn test_canonical_ignores_other_link_rels() {
        let html = r#"
            <html><head>
                <link rel="stylesheet" href="/style.css" />
                <link rel="canonical" href="https://a.example.com/c" />
            </head><body></body></html>
        "#;
        assert_eq!(
            extract_canonical(html),
            Some("https://a.example.com/c".to_string())
        );
    }

    #[test]
    fn test_first_canonical_wins() {
        let html = r#"
            <html><head>
                <link rel="canonical" href="https://a.example.com/first" />
                <link rel="canonical" href="https://a.example.com/second" />
            </head><body></body></html>
        "#;
        assert_eq!(
            extract_canonical(html),
            Some("https://a.example.com/first".to_string())
        );
    }
}
