//! Inkmap: a bounded-depth site crawler
//!
//! This crate crawls a website from a seed URL, follows links that stay
//! within the seed's site, and renders the discovered URLs as a
//! sitemaps.org 0.9 XML document.

pub mod crawler;
pub mod output;
pub mod url;

use thiserror::Error;

/// Main error type for Inkmap operations
///
/// Every crawl error is fatal: the first failed fetch anywhere in the link
/// graph propagates through the whole recursion and aborts the run. There is
/// no retry and no partial sitemap.
#[derive(Debug, Error)]
pub enum InkmapError {
    /// Transport-level failure from the fetch capability. The source is
    /// boxed so any [`crawler::Fetch`] implementation can report its own
    /// underlying error type.
    #[error("failed to fetch {url}: {source}")]
    Fetch {
        url: String,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("failed to decode response body from {url}: {source}")]
    Decode { url: String, source: reqwest::Error },

    #[error("failed to render sitemap: {0}")]
    Xml(#[from] quick_xml::errors::serialize::SeError),
}

/// Result type alias for Inkmap operations
pub type Result<T> = std::result::Result<T, InkmapError>;

// Re-export commonly used types
pub use crawler::{crawl, Fetch, HttpFetcher};
pub use output::{render_sitemap, Link};
pub use url::{domain_key, DomainKey};
