//! Backslash path normalization for exported markup

pub mod document;
pub mod normalizer;
pub mod rules;

pub use document::{fix_file, FixError, FixOptions};
pub use normalizer::{NormalizeOutcome, Normalizer};
pub use rules::count_backslash_refs;
