//! Single-file rewrite: read, count, normalize, overwrite, recount

use crate::domain::FixReport;
use crate::normalize::normalizer::Normalizer;
use crate::normalize::rules::count_backslash_refs;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FixError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

#[derive(Debug, Clone, Copy, Default)]
pub struct FixOptions {
    /// Compute the report without touching the file.
    pub dry_run: bool,
}

/// Normalize the markup file at `path` in place.
///
/// A file with no `href="\` / `src="\` markers is left untouched, which makes
/// a second run over the same file a no-op. Residual markers after the
/// rewrite are reported through `FixReport::remaining`; they do not fail
/// the operation.
pub fn fix_file(
    path: &Path,
    normalizer: &Normalizer,
    options: FixOptions,
) -> Result<FixReport, FixError> {
    if !path.exists() {
        return Err(FixError::NotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            FixError::NotFound(path.to_path_buf())
        } else {
            FixError::Read { path: path.to_path_buf(), source }
        }
    })?;

    let found = count_backslash_refs(&content);
    tracing::debug!("{}: {} backslash references", path.display(), found);
    if found == 0 {
        return Ok(FixReport::unchanged(path.to_path_buf()));
    }

    let outcome = normalizer.normalize(&content);
    tracing::debug!(
        "{}: {} replacements over {} cleanup passes",
        path.display(),
        outcome.total_replacements(),
        outcome.cleanup_passes
    );

    let written = if options.dry_run {
        false
    } else {
        fs::write(path, &outcome.content)
            .map_err(|source| FixError::Write { path: path.to_path_buf(), source })?;
        true
    };

    let remaining = count_backslash_refs(&outcome.content);
    if remaining > 0 {
        tracing::warn!("{}: {} backslash references remain", path.display(), remaining);
    }

    Ok(FixReport {
        path: path.to_path_buf(),
        found,
        remaining,
        written,
        cleanup_passes: outcome.cleanup_passes,
        hit_pass_cap: outcome.hit_pass_cap,
    })
}
