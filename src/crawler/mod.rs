//! Crawler module for web page fetching and traversal
//!
//! This module contains the core crawling logic, including:
//! - The HTTP fetch capability behind the [`Fetch`] trait
//! - Raw link extraction from fetched HTML
//! - The recursive depth-first traversal with visited-set deduplication

mod fetcher;
mod parser;
mod traversal;

pub use fetcher::{build_http_client, Fetch, HttpFetcher};
pub use parser::extract_hrefs;
pub use traversal::crawl;
