//! Template value filters exposed to the external templating layer.
//!
//! Both filters are pure. `nice_date` formats a timestamp for display;
//! `starts_with` is the prefix test templates use for section checks (and
//! the favorites collection reuses internally).

use chrono::{DateTime, Datelike, Utc};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum FilterError {
    #[error("niceDate requires a date value, got none")]
    InvalidInput,
}

/// Format a date as `"Month Day, Year"`, e.g. `"January 5, 2024"`.
///
/// Month names are long-form US English regardless of host locale (chrono's
/// `%B` is locale-independent). An absent date is an error — the build should
/// abort rather than render a placeholder into the page.
pub fn nice_date(date: Option<&DateTime<Utc>>) -> Result<String, FilterError> {
    let date = date.ok_or(FilterError::InvalidInput)?;
    Ok(format!(
        "{} {}, {}",
        date.format("%B"),
        date.day(),
        date.year()
    ))
}

/// True iff `value` is present, non-empty, and begins with `prefix`.
///
/// Absent and empty strings both return false, never an error: templates call
/// this on items that may have no url at all.
pub fn starts_with(value: Option<&str>, prefix: &str) -> bool {
    match value {
        Some(s) if !s.is_empty() => s.starts_with(prefix),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn nice_date_long_month_no_zero_padding() {
        let d = date(2024, 1, 5);
        assert_eq!(nice_date(Some(&d)).unwrap(), "January 5, 2024");
    }

    #[test]
    fn nice_date_two_digit_day() {
        let d = date(2023, 12, 31);
        assert_eq!(nice_date(Some(&d)).unwrap(), "December 31, 2023");
    }

    #[test]
    fn nice_date_absent_is_an_error_not_a_placeholder() {
        let err = nice_date(None).unwrap_err();
        assert_eq!(err, FilterError::InvalidInput);
        assert!(!err.to_string().contains("Invalid Date"));
    }

    #[test]
    fn starts_with_matching_prefix() {
        assert!(starts_with(Some("/favorites/books/"), "/favorites/"));
    }

    #[test]
    fn starts_with_non_matching_prefix() {
        assert!(!starts_with(Some("/blog/hello/"), "/favorites/"));
    }

    #[test]
    fn starts_with_absent_value_is_false_never_errors() {
        assert!(!starts_with(None, "/favorites/"));
    }

    #[test]
    fn starts_with_empty_string_counts_as_absent() {
        assert!(!starts_with(Some(""), "/favorites/"));
    }

    #[test]
    fn starts_with_empty_prefix_matches_any_present_value() {
        assert!(starts_with(Some("/about/"), ""));
        assert!(!starts_with(Some(""), ""));
    }
}
