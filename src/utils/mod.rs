//! Small shared helpers

pub mod dates;
pub mod paths;

pub use dates::{format_date, format_date_value};
pub use paths::{display_path, normalize_path};
