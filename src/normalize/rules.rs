//! Path rewrite rules
//!
//! ORDER MATTERS: the attribute and `url()` rules root each reference at `/`
//! first. The cleanup rule only fires on text that follows a `/`, so it must
//! run after them.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};
use std::borrow::Cow;

/// Literal markers counted before and after a rewrite.
pub const DIAGNOSTIC_MARKERS: &[&str] = &[r#"href="\"#, r#"src="\"#];

#[derive(Clone)]
pub struct RewriteRule {
    pub name: &'static str,
    pub pattern: Regex,
    pub replacement: &'static str,
}

impl RewriteRule {
    /// Apply the rule over the whole text, returning the result and the
    /// number of replacements made.
    pub fn apply<'t>(&self, text: &'t str) -> (Cow<'t, str>, usize) {
        let mut replaced = 0usize;
        let out = self.pattern.replace_all(text, |caps: &Captures<'_>| {
            replaced += 1;
            let mut dst = String::new();
            caps.expand(self.replacement, &mut dst);
            dst
        });
        (out, replaced)
    }
}

pub static REFERENCE_RULES: Lazy<Vec<RewriteRule>> = Lazy::new(|| {
    vec![
        RewriteRule {
            name: "href",
            pattern: Regex::new(r#"href="\\([^"]*)""#).expect("valid regex"),
            replacement: r#"href="/${1}""#,
        },
        RewriteRule {
            name: "src",
            pattern: Regex::new(r#"src="\\([^"]*)""#).expect("valid regex"),
            replacement: r#"src="/${1}""#,
        },
        RewriteRule {
            name: "css_url",
            pattern: Regex::new(r"url\(\\([^)]*)\)").expect("valid regex"),
            replacement: "url(/${1})",
        },
    ]
});

/// `/A\B` -> `/A/B`. The greedy run stops at a quote, so one application
/// converts the last backslash of each quote-free run that follows a `/`.
pub static CLEANUP_RULE: Lazy<RewriteRule> = Lazy::new(|| RewriteRule {
    name: "cleanup",
    pattern: Regex::new(r#"/([^"]*)\\"#).expect("valid regex"),
    replacement: "/${1}/",
});

/// Number of `href="\` and `src="\` occurrences in `text`.
pub fn count_backslash_refs(text: &str) -> usize {
    DIAGNOSTIC_MARKERS.iter().map(|marker| text.matches(marker).count()).sum()
}
