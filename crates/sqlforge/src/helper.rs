//! Literal formatting helpers for callers assembling WHERE values.

use chrono::{NaiveDate, NaiveDateTime};

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Wrap a value in `%` wildcards for a `LIKE` comparison.
pub fn like_pattern(value: &str) -> String {
    format!("%{value}%")
}

/// Format a date-time value the way the target dialect compares it
/// (`yyyy-MM-dd HH:mm:ss`).
pub fn format_date_time(value: NaiveDateTime) -> String {
    value.format(DATE_TIME_FORMAT).to_string()
}

/// Format a date-only value (`yyyy-MM-dd`).
pub fn format_date(value: NaiveDate) -> String {
    value.format(DATE_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn like_pattern_wraps() {
        assert_eq!(like_pattern("bob"), "%bob%");
    }

    #[test]
    fn date_formats() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 9).unwrap();
        assert_eq!(format_date(date), "2024-03-09");
        let dt = date.and_hms_opt(13, 5, 7).unwrap();
        assert_eq!(format_date_time(dt), "2024-03-09 13:05:07");
    }
}
