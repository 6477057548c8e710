//! Shared test utilities for the sitewire test suite.
//!
//! Provides compact [`ContentItem`] constructors and ordering assertions used
//! by the collections and output tests.

use chrono::{DateTime, NaiveDate, Utc};

use crate::types::ContentItem;

/// Build a content item from compact test inputs.
///
/// - `url`: empty string means "routed nowhere" (`Some("")`), which the
///   favorites filter must treat as absent. Use `.url = None` for a truly
///   missing url.
/// - `date`: `"YYYY-MM-DD"`, interpreted as midnight UTC. Panics on a
///   malformed literal so the fixture bug surfaces at the call site.
pub fn item(title: &str, url: &str, tags: &[&str], date: Option<&str>) -> ContentItem {
    ContentItem {
        url: Some(url.to_string()),
        title: Some(title.to_string()),
        date: date.map(parse_date),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    }
}

fn parse_date(s: &str) -> DateTime<Utc> {
    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .unwrap_or_else(|e| panic!("bad test date '{s}': {e}"));
    date.and_hms_opt(0, 0, 0)
        .expect("midnight is always valid")
        .and_utc()
}

/// Titles of a borrowed collection, in order.
pub fn titles<'a>(items: &[&'a ContentItem]) -> Vec<&'a str> {
    items.iter().map(|i| i.label()).collect()
}

/// Assert a collection is non-increasing in date across consecutive elements.
///
/// Undated items count as earliest, so they may only appear in a trailing run.
pub fn assert_newest_first(items: &[&ContentItem]) {
    for pair in items.windows(2) {
        assert!(
            pair[0].date >= pair[1].date,
            "collection not newest-first: '{}' ({:?}) before '{}' ({:?})",
            pair[0].label(),
            pair[0].date,
            pair[1].label(),
            pair[1].date,
        );
    }
}
