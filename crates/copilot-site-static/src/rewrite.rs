//! Link rewriting for frozen pages.
//!
//! Pages link to each other and to assets with root-relative URLs
//! (`href="/resources"`, `src="/static/js/main.js"`). Static hosting needs
//! `.html` file names and an optional path prefix instead. Rewriting is a
//! single pass over a fixed table of disjoint literals; anything not in the
//! table is left as it is.

use std::collections::HashMap;
use std::sync::LazyLock;

use regex::{Captures, Regex};

use copilot_site_server::ROUTES;

/// Literal attribute prefixes rewritten to point under `{base_url}static/`.
const ASSET_PREFIXES: &[&str] = &["href", "src"];

/// Every literal the rewriter matches, paired with its replacement for
/// `base_url`.
fn rewrite_table(base_url: &str) -> Vec<(String, String)> {
    let mut table: Vec<(String, String)> = ASSET_PREFIXES
        .iter()
        .map(|attr| {
            (
                format!(r#"{}="/static/"#, attr),
                format!(r#"{}="{}static/"#, attr, base_url),
            )
        })
        .collect();

    for route in ROUTES {
        let replacement = if route.path == "/" {
            format!(r#"href="{}""#, base_url)
        } else {
            format!(r#"href="{}{}""#, base_url, route.output)
        };
        table.push((format!(r#"href="{}""#, route.path), replacement));
    }

    table
}

static LINK_RE: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = rewrite_table("/")
        .iter()
        .map(|(literal, _)| regex::escape(literal))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&pattern).expect("Invalid link rewrite regex")
});

/// Rewrites site links for a fixed base URL.
pub struct LinkRewriter {
    replacements: HashMap<String, String>,
}

impl LinkRewriter {
    /// `base_url` is used verbatim as a prefix and should end with `/`.
    pub fn new(base_url: &str) -> Self {
        Self {
            replacements: rewrite_table(base_url).into_iter().collect(),
        }
    }

    /// Rewrite every known link in `html`.
    pub fn rewrite(&self, html: &str) -> String {
        LINK_RE
            .replace_all(html, |caps: &Captures| {
                let matched = &caps[0];
                self.replacements
                    .get(matched)
                    .cloned()
                    .unwrap_or_else(|| matched.to_string())
            })
            .into_owned()
    }
}

/// Rewrite asset and navigation links in `html` for `base_url`.
pub fn update_asset_paths(html: &str, base_url: &str) -> String {
    LinkRewriter::new(base_url).rewrite(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn root_base_keeps_asset_paths() {
        let html = r#"<link rel="stylesheet" href="/static/css/style.css">"#;
        let result = update_asset_paths(html, "/");

        assert!(result.contains("/static/css/style.css"));
        assert!(!result.contains("//static"));
        assert_eq!(result, html);
    }

    #[test]
    fn rewrites_navigation_links() {
        let result = update_asset_paths(r#"<a href="/resources">Resources</a>"#, "/");
        assert_eq!(result, r#"<a href="/resources.html">Resources</a>"#);
    }

    #[test]
    fn rewrites_every_known_page() {
        let html = r#"<a href="/"></a><a href="/resources"></a><a href="/examples"></a><a href="/about"></a><a href="/author"></a><a href="/tutorials"></a><a href="/copilot-integration"></a>"#;
        let result = update_asset_paths(html, "/");

        assert_eq!(
            result,
            r#"<a href="/"></a><a href="/resources.html"></a><a href="/examples.html"></a><a href="/about.html"></a><a href="/author.html"></a><a href="/tutorials.html"></a><a href="/copilot-integration.html"></a>"#
        );
    }

    #[test]
    fn prefixes_base_url() {
        let html = r#"<link href="/static/css/style.css"><script src="/static/js/main.js"></script><a href="/">Home</a><a href="/about">About</a>"#;
        let result = update_asset_paths(html, "/copilot/");

        assert_eq!(
            result,
            r#"<link href="/copilot/static/css/style.css"><script src="/copilot/static/js/main.js"></script><a href="/copilot/">Home</a><a href="/copilot/about.html">About</a>"#
        );
    }

    #[test]
    fn leaves_unknown_links_alone() {
        let html = r#"<a href="/unknown">x</a><a href="/resources#official-docs">y</a><a href="https://docs.github.com/en/copilot">z</a><img src="/images/logo.png">"#;
        assert_eq!(update_asset_paths(html, "/site/"), html);
    }

    #[test]
    fn rewrites_in_a_single_pass() {
        // The replacement for the root link is itself a known link; it must
        // not be rewritten a second time.
        let result = update_asset_paths(r#"<a href="/">Home</a>"#, "/about");
        assert_eq!(result, r#"<a href="/about">Home</a>"#);
    }

    #[test]
    fn rewriter_is_reusable() {
        let rewriter = LinkRewriter::new("/");
        let first = rewriter.rewrite(r#"<a href="/examples">"#);
        let second = rewriter.rewrite(r#"<a href="/examples">"#);
        assert_eq!(first, second);
    }
}
