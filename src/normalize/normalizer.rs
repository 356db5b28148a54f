//! In-memory markup normalizer

use crate::domain::{Config, DEFAULT_MAX_CLEANUP_PASSES};
use crate::normalize::rules::{RewriteRule, CLEANUP_RULE, REFERENCE_RULES};
use std::collections::BTreeMap;

pub struct Normalizer {
    rules: Vec<RewriteRule>,
    cleanup: RewriteRule,
    max_cleanup_passes: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizeOutcome {
    pub content: String,
    /// Replacements made per rule name.
    pub counts: BTreeMap<String, usize>,
    /// Cleanup passes that changed the text.
    pub cleanup_passes: usize,
    /// True when the loop stopped at the cap while still making changes.
    pub hit_pass_cap: bool,
}

impl NormalizeOutcome {
    pub fn total_replacements(&self) -> usize {
        self.counts.values().sum()
    }
}

impl Default for Normalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Normalizer {
    pub fn new() -> Self {
        Self {
            rules: REFERENCE_RULES.clone(),
            cleanup: CLEANUP_RULE.clone(),
            max_cleanup_passes: DEFAULT_MAX_CLEANUP_PASSES,
        }
    }

    pub fn from_config(cfg: &Config) -> Self {
        Self::new().with_max_cleanup_passes(cfg.max_cleanup_passes)
    }

    /// Cap on cleanup iterations. Values below 1 are raised to 1.
    pub fn with_max_cleanup_passes(mut self, passes: usize) -> Self {
        self.max_cleanup_passes = passes.max(1);
        self
    }

    pub fn max_cleanup_passes(&self) -> usize {
        self.max_cleanup_passes
    }

    /// Rewrite every backslash reference in `text`.
    ///
    /// The reference rules run once each, in order. The cleanup rule then
    /// runs until the text stops changing or the pass cap is reached. Each
    /// cleanup replacement turns one backslash into a slash, so a document
    /// with `k` backslashes settles within `k` passes.
    pub fn normalize(&self, text: &str) -> NormalizeOutcome {
        let mut counts = BTreeMap::new();
        let mut content = text.to_string();

        for rule in &self.rules {
            let (out, replaced) = rule.apply(&content);
            if replaced > 0 {
                content = out.into_owned();
                *counts.entry(rule.name.to_string()).or_insert(0) += replaced;
            }
        }

        let mut cleanup_passes = 0usize;
        let mut hit_pass_cap = false;
        loop {
            let (out, replaced) = self.cleanup.apply(&content);
            if replaced == 0 {
                break;
            }
            if cleanup_passes == self.max_cleanup_passes {
                hit_pass_cap = true;
                tracing::warn!(
                    "cleanup stopped after {} passes with backslashes still being rewritten",
                    self.max_cleanup_passes
                );
                break;
            }
            content = out.into_owned();
            cleanup_passes += 1;
            *counts.entry(self.cleanup.name.to_string()).or_insert(0) += replaced;
        }

        tracing::debug!(cleanup_passes, ?counts, "normalized markup");

        NormalizeOutcome { content, counts, cleanup_passes, hit_pass_cap }
    }
}
