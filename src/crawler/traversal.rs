//! Depth-first crawl traversal
//!
//! The traversal fetches each in-scope, not-yet-visited URL, extracts its
//! raw links, classifies them against the current page's domain key, and
//! recurses inline per link. Discovered links therefore come back in
//! pre-order, depth-first, document order: a page's own links appear
//! immediately after the page's entry, before any sibling page's links.

use crate::crawler::{extract_hrefs, Fetch};
use crate::output::Link;
use crate::url::{domain_key, DomainKey};
use crate::Result;
use std::collections::HashSet;

/// Crawls a site starting from `seed` and returns all discovered in-scope
/// links in traversal order
///
/// The seed page itself counts as depth 1; `max_depth == 0` means no depth
/// limit, in which case the crawl stops only when it runs out of reachable
/// unvisited links. The visited set lives exactly as long as this call and
/// is threaded through every recursion frame.
///
/// The first fetch failure anywhere in the link graph aborts the whole
/// crawl; no partial result is returned.
pub async fn crawl<F>(fetcher: &F, seed: &str, max_depth: u32) -> Result<Vec<Link>>
where
    F: Fetch + Sync,
{
    let mut visited = HashSet::new();
    crawl_page(fetcher, seed.to_string(), &mut visited, 1, max_depth).await
}

async fn crawl_page<F>(
    fetcher: &F,
    url: String,
    visited: &mut HashSet<String>,
    depth: u32,
    max_depth: u32,
) -> Result<Vec<Link>>
where
    F: Fetch + Sync,
{
    // 0 is the explicit "unlimited" sentinel. With a limit set, reaching it
    // is the recursion's base case; note the seed starts at depth 1, so
    // max_depth == 1 yields an empty crawl without fetching anything.
    if max_depth != 0 && depth == max_depth {
        return Ok(Vec::new());
    }

    tracing::debug!("crawling {} (depth {})", url, depth);

    let body = fetcher.fetch(&url).await?;
    let hrefs = extract_hrefs(&body);
    let page_key = domain_key(&url);

    let mut links = Vec::new();
    for href in hrefs {
        let key = domain_key(&href);
        let same_site = key == page_key;

        let target = if key == DomainKey::RootRelative {
            resolve_root_relative(page_key.as_prefix(), &href)
        } else {
            href
        };

        // The visited set guards only the root-relative branch: a same-site
        // absolute link is accepted every time it appears, so such a link
        // can be fetched once per distinct path that reaches it. Known
        // duplicate-fetch hazard, kept as-is.
        let in_scope =
            same_site || (key == DomainKey::RootRelative && !visited.contains(&target));
        if !in_scope {
            tracing::trace!("skipping out-of-scope link {}", target);
            continue;
        }

        links.push(Link::new(&target));
        visited.insert(target.clone());

        let nested = Box::pin(crawl_page(fetcher, target, visited, depth + 1, max_depth)).await?;
        links.extend(nested);
    }

    tracing::debug!("{} yielded {} in-scope links", url, links.len());
    Ok(links)
}

/// Rewrites a root-relative link to an absolute URL by prepending the
/// current page's domain key. The key always ends in `/`, so the link's own
/// leading `/` is dropped to keep a single separator at the join.
fn resolve_root_relative(prefix: &str, href: &str) -> String {
    format!("{}{}", prefix, href.strip_prefix('/').unwrap_or(href))
}
