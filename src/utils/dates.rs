//! Display formatting for dates shown in the UI.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

const DISPLAY_FORMAT: &str = "%b %-d, %Y";

/// Format an API date string as `Mon D, YYYY`.
///
/// Accepts RFC 3339 timestamps (the calendar date in the timestamp's own
/// offset is used), offset-less `YYYY-MM-DDTHH:MM:SS` timestamps and plain
/// `YYYY-MM-DD` dates. Returns `None` for anything else.
pub fn format_date(input: &str) -> Option<String> {
    let input = input.trim();
    if input.is_empty() {
        return None;
    }

    let date = if let Ok(ts) = DateTime::parse_from_rfc3339(input) {
        ts.date_naive()
    } else if let Ok(ts) = NaiveDateTime::parse_from_str(input, "%Y-%m-%dT%H:%M:%S%.f") {
        ts.date()
    } else {
        NaiveDate::parse_from_str(input, "%Y-%m-%d").ok()?
    };

    Some(format_date_value(date))
}

pub fn format_date_value(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}
