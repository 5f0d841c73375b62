use regex::Regex;
use std::borrow::Cow;
use std::sync::OnceLock;

/// Pattern for the site prefix: scheme, a `www`-prefixed host, and everything
/// up to (and including) the first path separator after it. Lazy so the match
/// stops at the first `/`.
const SITE_PREFIX_PATTERN: &str = r"^https?://www.+?/";

/// The "site" a URL belongs to, used to decide whether a discovered link is
/// in scope for the current crawl.
///
/// This is deliberately a heuristic prefix match, not a full authority parse:
/// only `http(s)://www...` hosts produce a distinct key, and anything
/// unparseable collapses into the root-relative marker. The permissive
/// fallback means malformed links count as same-site rather than being
/// rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DomainKey {
    /// Root-relative link (`/path`), or any input the site pattern cannot
    /// match. Path is known only relative to the current host.
    RootRelative,
    /// Scheme + `www`-host prefix through the first path separator,
    /// always ending in `/` (e.g. `https://www.example.com/`).
    Site(String),
}

impl DomainKey {
    /// Returns the prefix to prepend when rewriting a root-relative link to
    /// an absolute URL. The root-relative marker itself is `/`.
    pub fn as_prefix(&self) -> &str {
        match self {
            DomainKey::RootRelative => "/",
            DomainKey::Site(prefix) => prefix,
        }
    }
}

/// Computes the domain key for a URL
///
/// Root-relative inputs (leading `/`) map straight to the marker. Everything
/// else is given a trailing `/` if it lacks one, so the prefix match always
/// has a separator to anchor on, and then matched against
/// `^https?://www.+?/`. Inputs the pattern cannot match also map to the
/// marker.
///
/// Pure and deterministic; idempotent on its own `Site` output.
///
/// # Examples
///
/// ```
/// use inkmap::url::{domain_key, DomainKey};
///
/// assert_eq!(domain_key("/about"), DomainKey::RootRelative);
/// assert_eq!(
///     domain_key("https://www.example.com/a/b"),
///     DomainKey::Site("https://www.example.com/".to_string())
/// );
/// ```
pub fn domain_key(url: &str) -> DomainKey {
    if url.starts_with('/') {
        return DomainKey::RootRelative;
    }

    let padded: Cow<str> = if url.ends_with('/') {
        Cow::Borrowed(url)
    } else {
        Cow::Owned(format!("{url}/"))
    };

    static SITE_PREFIX: OnceLock<Regex> = OnceLock::new();
    let pattern = SITE_PREFIX
        .get_or_init(|| Regex::new(SITE_PREFIX_PATTERN).expect("site prefix pattern is valid"));

    match pattern.find(&padded) {
        Some(m) => DomainKey::Site(m.as_str().to_string()),
        None => DomainKey::RootRelative,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root_relative_path() {
        assert_eq!(domain_key("/about"), DomainKey::RootRelative);
    }

    #[test]
    fn test_bare_slash() {
        assert_eq!(domain_key("/"), DomainKey::RootRelative);
    }

    #[test]
    fn test_https_www_host() {
        assert_eq!(
            domain_key("https://www.example.com/path/to/page"),
            DomainKey::Site("https://www.example.com/".to_string())
        );
    }

    #[test]
    fn test_http_www_host() {
        assert_eq!(
            domain_key("http://www.example.com/path"),
            DomainKey::Site("http://www.example.com/".to_string())
        );
    }

    #[test]
    fn test_trailing_slash_appended_before_match() {
        // No path separator in the input; the classifier adds one.
        assert_eq!(
            domain_key("https://www.example.com"),
            DomainKey::Site("https://www.example.com/".to_string())
        );
    }

    #[test]
    fn test_key_stops_at_first_separator() {
        assert_eq!(
            domain_key("https://www.example.com/a/b/c"),
            DomainKey::Site("https://www.example.com/".to_string())
        );
    }

    #[test]
    fn test_host_without_www_falls_back() {
        // Permissive fallback: no www host means root-relative, i.e. in scope.
        assert_eq!(domain_key("https://example.com/page"), DomainKey::RootRelative);
    }

    #[test]
    fn test_unknown_scheme_falls_back() {
        assert_eq!(domain_key("mailto:someone@example.com"), DomainKey::RootRelative);
        assert_eq!(domain_key("ftp://www.example.com/"), DomainKey::RootRelative);
    }

    #[test]
    fn test_empty_input_falls_back() {
        assert_eq!(domain_key(""), DomainKey::RootRelative);
    }

    #[test]
    fn test_relative_path_without_slash_falls_back() {
        assert_eq!(domain_key("page.html"), DomainKey::RootRelative);
    }

    #[test]
    fn test_idempotent_on_site_keys() {
        let key = domain_key("https://www.example.com/deep/path?q=1");
        if let DomainKey::Site(prefix) = &key {
            assert_eq!(domain_key(prefix), key);
        } else {
            panic!("expected a site key");
        }
    }

    #[test]
    fn test_distinct_hosts_get_distinct_keys() {
        assert_ne!(
            domain_key("https://www.example.com/"),
            domain_key("https://www.other.com/")
        );
    }

    #[test]
    fn test_prefix_of_root_relative_marker() {
        assert_eq!(DomainKey::RootRelative.as_prefix(), "/");
    }
}
