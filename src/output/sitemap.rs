//! Sitemap XML rendering
//!
//! One `<url><loc>…</loc></url>` element per discovered link, in crawl
//! order, inside a `urlset` root in the sitemaps.org 0.9 namespace. No
//! dedup happens here (the crawl's visited set already did that) and no
//! URL validation is performed; addresses pass through as-is.

use crate::Result;
use quick_xml::se::Serializer;
use serde::Serialize;

/// The sitemaps.org 0.9 schema namespace
pub const SITEMAP_NAMESPACE: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

/// Standard XML declaration emitted ahead of the document
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// A single discovered URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    /// Absolute (or, for unresolvable inputs, root-relative) address
    #[serde(rename = "loc")]
    pub addr: String,
}

impl Link {
    pub fn new(addr: impl Into<String>) -> Self {
        Self { addr: addr.into() }
    }
}

#[derive(Serialize)]
#[serde(rename = "urlset")]
struct Urlset<'a> {
    #[serde(rename = "@xmlns")]
    xmlns: &'static str,
    #[serde(rename = "url")]
    links: &'a [Link],
}

/// Serializes the ordered link list into a sitemap document
pub fn render_sitemap(links: &[Link]) -> Result<String> {
    let urlset = Urlset {
        xmlns: SITEMAP_NAMESPACE,
        links,
    };

    let mut body = String::new();
    let mut serializer = Serializer::new(&mut body);
    serializer.indent(' ', 2);
    urlset.serialize(serializer)?;

    Ok(format!("{XML_DECLARATION}\n{body}"))
}
