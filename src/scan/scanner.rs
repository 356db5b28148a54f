//! Target scanner over files and build directories

use crate::domain::default_extensions;
use crate::normalize::FixError;
use crate::utils::normalize_path;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Directories never descended into when walking a build output.
const SKIPPED_DIRS: &[&str] = &["node_modules"];

pub struct TargetScanner {
    extensions: Vec<String>,
}

impl Default for TargetScanner {
    fn default() -> Self {
        Self::new()
    }
}

impl TargetScanner {
    pub fn new() -> Self {
        Self {
            extensions: default_extensions().iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Set markup extensions collected from directories (e.g. ".html")
    pub fn extensions(mut self, extensions: Vec<String>) -> Self {
        self.extensions = extensions;
        self
    }

    fn has_markup_extension(&self, path: &Path) -> bool {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("").to_ascii_lowercase();
        if ext.is_empty() {
            return false;
        }
        self.extensions.iter().any(|e| e.trim_start_matches('.') == ext)
    }

    /// Resolve `paths` into files.
    ///
    /// Every path is checked before anything is returned, so a missing path
    /// fails the whole run before any file is rewritten. Files are taken
    /// as-is; directories contribute their markup files. The result is
    /// deduplicated and sorted.
    pub fn scan(&self, paths: &[PathBuf]) -> Result<Vec<PathBuf>, FixError> {
        if let Some(missing) = paths.iter().find(|p| !p.exists()) {
            return Err(FixError::NotFound(missing.clone()));
        }

        let mut targets = BTreeSet::new();
        for path in paths {
            if path.is_dir() {
                self.walk_dir(path, &mut targets);
            } else {
                targets.insert(path.clone());
            }
        }

        Ok(targets.into_iter().collect())
    }

    fn walk_dir(&self, root: &Path, targets: &mut BTreeSet<PathBuf>) {
        let mut skipped_extension = 0usize;
        let walker = WalkDir::new(root)
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_skipped_dir(entry));

        for entry in walker {
            let entry = match entry {
                Ok(e) => e,
                Err(err) => {
                    tracing::debug!("skipping unreadable entry under {}: {}", root.display(), err);
                    continue;
                }
            };
            if !entry.file_type().is_file() {
                continue;
            }
            if self.has_markup_extension(entry.path()) {
                targets.insert(entry.into_path());
            } else {
                skipped_extension += 1;
            }
        }

        tracing::debug!(
            "scanned {}: {} markup files, {} skipped by extension",
            normalize_path(&root.to_string_lossy()),
            targets.len(),
            skipped_extension
        );
    }
}

fn is_skipped_dir(entry: &DirEntry) -> bool {
    if !entry.file_type().is_dir() {
        return false;
    }
    match entry.file_name().to_str() {
        Some(name) => name.starts_with('.') || SKIPPED_DIRS.contains(&name),
        None => false,
    }
}
