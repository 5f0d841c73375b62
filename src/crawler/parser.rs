//! Raw link extraction from fetched HTML
//!
//! The extractor reports every `href` attribute found on an anchor element,
//! in document order, duplicates and relative forms included. Scope
//! filtering and rewriting are the traversal's job, not the parser's.

use scraper::{Html, Selector};

/// Extracts the raw `href` values from all `<a>` elements in the document
///
/// The parser is error-recovering, so arbitrary bytes always produce a
/// traversable tree; a page with no anchors yields an empty list.
pub fn extract_hrefs(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    let mut hrefs = Vec::new();
    if let Ok(anchor_selector) = Selector::parse("a[href]") {
        for element in document.select(&anchor_selector) {
            if let Some(href) = element.value().attr("href") {
                hrefs.push(href.to_string());
            }
        }
    }

    hrefs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_single_href() {
        let html = r#"<html><body><a href="/page">Link</a></body></html>"#;
        assert_eq!(extract_hrefs(html), vec!["/page"]);
    }

    #[test]
    fn test_document_order_preserved() {
        let html = r#"
            <html><body>
                <a href="/first">1</a>
                <p><a href="/second">2</a></p>
                <a href="/third">3</a>
            </body></html>
        "#;
        assert_eq!(extract_hrefs(html), vec!["/first", "/second", "/third"]);
    }

    #[test]
    fn test_duplicates_kept() {
        let html = r#"<html><body><a href="/a">1</a><a href="/a">2</a></body></html>"#;
        assert_eq!(extract_hrefs(html), vec!["/a", "/a"]);
    }

    #[test]
    fn test_relative_and_absolute_forms_as_is() {
        let html = r#"
            <html><body>
                <a href="page.html">rel</a>
                <a href="https://www.example.com/abs">abs</a>
            </body></html>
        "#;
        assert_eq!(
            extract_hrefs(html),
            vec!["page.html", "https://www.example.com/abs"]
        );
    }

    #[test]
    fn test_anchor_without_href_skipped() {
        let html = r#"<html><body><a name="top">anchor</a><a href="/x">x</a></body></html>"#;
        assert_eq!(extract_hrefs(html), vec!["/x"]);
    }

    #[test]
    fn test_non_anchor_hrefs_ignored() {
        let html = r#"
            <html>
            <head><link rel="stylesheet" href="/style.css"></head>
            <body><a href="/only">only</a></body>
            </html>
        "#;
        assert_eq!(extract_hrefs(html), vec!["/only"]);
    }

    #[test]
    fn test_no_anchors() {
        let html = r#"<html><body><p>No links here</p></body></html>"#;
        assert!(extract_hrefs(html).is_empty());
    }

    #[test]
    fn test_malformed_html_still_yields_links() {
        let html = r#"<body><a href="/a">unclosed<a href="/b">"#;
        assert_eq!(extract_hrefs(html), vec!["/a", "/b"]);
    }
}
