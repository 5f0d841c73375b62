//! Output module for Inkmap
//!
//! Renders the ordered link list produced by the crawler into the
//! sitemaps.org XML schema.

mod sitemap;

pub use sitemap::{render_sitemap, Link, SITEMAP_NAMESPACE, XML_DECLARATION};
