//! Markup target discovery

use crate::domain::Config;
use crate::normalize::FixError;
use std::path::PathBuf;

pub mod scanner;

pub use scanner::TargetScanner;

/// Resolve command-line paths into the markup files to rewrite, falling back
/// to the configured target when no paths are given.
pub fn resolve_targets(paths: &[PathBuf], cfg: &Config) -> Result<Vec<PathBuf>, FixError> {
    let scanner = TargetScanner::new().extensions(cfg.extensions.clone());
    if paths.is_empty() {
        return scanner.scan(std::slice::from_ref(&cfg.target));
    }
    scanner.scan(paths)
}
