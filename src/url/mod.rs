//! URL handling module for Inkmap
//!
//! This module provides the domain-key classifier used for all scope
//! decisions during a crawl.

mod domain;

pub use domain::{domain_key, DomainKey};
