//! Shared domain types: configuration and per-file reports

use serde::{Deserialize, Deserializer};
use std::path::PathBuf;

/// Default build artifact rewritten when no paths are given.
pub const DEFAULT_TARGET: &str = "dist/index.html";

/// Default safety cap for the residual cleanup loop.
pub const DEFAULT_MAX_CLEANUP_PASSES: usize = 64;

pub fn default_extensions() -> &'static [&'static str] {
    &[".html", ".htm"]
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Markup file processed when the command line names no paths.
    pub target: PathBuf,

    /// Extensions collected when a directory is given.
    #[serde(deserialize_with = "deserialize_extensions")]
    pub extensions: Vec<String>,

    pub max_cleanup_passes: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            target: PathBuf::from(DEFAULT_TARGET),
            extensions: default_extensions().iter().map(|s| s.to_string()).collect(),
            max_cleanup_passes: DEFAULT_MAX_CLEANUP_PASSES,
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrList {
    One(String),
    Many(Vec<String>),
}

/// Accept either `"html, htm"` or `["html", ".htm"]`.
fn deserialize_extensions<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = match StringOrList::deserialize(deserializer)? {
        StringOrList::One(s) => s.split(',').map(str::to_string).collect(),
        StringOrList::Many(v) => v,
    };
    Ok(normalize_extensions(raw))
}

/// Trim, lowercase and dot-prefix extension names, dropping empty entries.
pub fn normalize_extensions<I, S>(raw: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    raw.into_iter()
        .map(|e| e.as_ref().trim().to_ascii_lowercase())
        .filter(|e| !e.is_empty() && e != ".")
        .map(|e| if e.starts_with('.') { e } else { format!(".{e}") })
        .collect()
}

/// Outcome of processing one markup file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixReport {
    pub path: PathBuf,
    /// Diagnostic count before the rewrite.
    pub found: usize,
    /// Diagnostic count after the rewrite.
    pub remaining: usize,
    /// Whether the file on disk was overwritten.
    pub written: bool,
    pub cleanup_passes: usize,
    /// The cleanup loop stopped at its pass cap before settling.
    pub hit_pass_cap: bool,
}

impl FixReport {
    pub fn unchanged(path: PathBuf) -> Self {
        Self { path, found: 0, remaining: 0, written: false, cleanup_passes: 0, hit_pass_cap: false }
    }

    pub fn fixed(&self) -> usize {
        self.found.saturating_sub(self.remaining)
    }

    pub fn is_noop(&self) -> bool {
        self.found == 0
    }

    /// True when the rewrite left nothing behind: no counted markers and a
    /// cleanup loop that reached its fixed point.
    pub fn is_complete(&self) -> bool {
        self.remaining == 0 && !self.hit_pass_cap
    }
}
