//! Path normalization

use std::path::Path;

pub fn normalize_path(path: &str) -> String {
    // Convert backslashes to forward slashes
    path.replace('\\', "/")
}

/// Render `path` relative to `base` when it lives underneath it, with forward
/// slashes, for status output.
pub fn display_path(path: &Path, base: &Path) -> String {
    let shown = path.strip_prefix(base).unwrap_or(path);
    let rendered = normalize_path(&shown.to_string_lossy());
    if rendered.is_empty() {
        ".".to_string()
    } else {
        rendered
    }
}
