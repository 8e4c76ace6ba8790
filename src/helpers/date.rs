//! Date helper functions
//!
//! Front-matter dates are free-form strings. They are read twice: once
//! for display (`YYYY-MM-DD` prefix) and once for ordering, where a list
//! of parse strategies is tried in turn before settling on a floor value.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref DATE_PREFIX: Regex = Regex::new(r"^(\d{4}-\d{2}-\d{2})").unwrap();
}

/// A way of reading a sort timestamp out of a raw date string
struct Strategy {
    /// Number of leading characters considered
    width: usize,
    format: &'static str,
    date_only: bool,
}

const SORT_STRATEGIES: &[Strategy] = &[
    Strategy {
        width: 19,
        format: "%Y-%m-%d %H:%M:%S",
        date_only: false,
    },
    // YAML timestamp form, `2025-03-03T15:56:57Z`; wall-clock time, offset ignored
    Strategy {
        width: 19,
        format: "%Y-%m-%dT%H:%M:%S",
        date_only: false,
    },
    Strategy {
        width: 10,
        format: "%Y-%m-%d",
        date_only: true,
    },
];

/// RFC-822 layout used by RSS `pubDate`
pub const RFC822_FORMAT: &str = "%a, %d %b %Y %H:%M:%S +0000";

/// Display form of a date: the `YYYY-MM-DD` prefix, or the raw string
///
/// # Examples
/// ```ignore
/// display_date("2025-03-03 15:56:57+08:00") // -> "2025-03-03"
/// ```
pub fn display_date(raw: &str) -> String {
    match DATE_PREFIX.captures(raw) {
        Some(caps) => caps[1].to_string(),
        None => raw.to_string(),
    }
}

/// Timestamp used to order posts; never fails
pub fn sort_key(raw: &str) -> NaiveDateTime {
    SORT_STRATEGIES
        .iter()
        .find_map(|strategy| strategy.parse(raw))
        .unwrap_or_else(floor_timestamp)
}

/// Value given to dates no strategy understands; sorts after everything
pub fn floor_timestamp() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap_or(NaiveDateTime::MIN)
}

/// Text form of a sort timestamp, as substituted for `{{{datetime}}}`
pub fn format_timestamp(dt: &NaiveDateTime) -> String {
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// RSS publish date from scraped text: midnight of the leading
/// `YYYY-MM-DD`, or `now` when that does not parse
pub fn rss_pub_date(text: &str, now: &DateTime<Utc>) -> String {
    let head = leading_chars(text, 10);
    match NaiveDate::parse_from_str(head, "%Y-%m-%d") {
        Ok(date) => date.format("%a, %d %b %Y 00:00:00 +0000").to_string(),
        Err(_) => now.format(RFC822_FORMAT).to_string(),
    }
}

impl Strategy {
    fn parse(&self, raw: &str) -> Option<NaiveDateTime> {
        let head = leading_chars(raw, self.width);
        if self.date_only {
            NaiveDate::parse_from_str(head, self.format)
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        } else {
            NaiveDateTime::parse_from_str(head, self.format).ok()
        }
    }
}

/// At most `n` leading characters, cut on a char boundary
fn leading_chars(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_display_date() {
        assert_eq!(display_date("2025-03-03 15:56:57+08:00"), "2025-03-03");
        assert_eq!(display_date("2024-01-01"), "2024-01-01");
        assert_eq!(display_date("March 3rd"), "March 3rd");
        assert_eq!(display_date(""), "");
    }

    #[test]
    fn test_sort_key_full_timestamp() {
        let key = sort_key("2025-03-03 15:56:57+08:00");
        assert_eq!(format_timestamp(&key), "2025-03-03 15:56:57");
    }

    #[test]
    fn test_sort_key_date_only() {
        let key = sort_key("2024-01-01");
        assert_eq!(format_timestamp(&key), "2024-01-01 00:00:00");

        // Time part present but unreadable: falls back to the date
        let key = sort_key("2024-05-06 7 o'clock");
        assert_eq!(format_timestamp(&key), "2024-05-06 00:00:00");
    }

    #[test]
    fn test_sort_key_yaml_timestamp() {
        let key = sort_key("2025-03-03T15:56:57Z");
        assert_eq!(format_timestamp(&key), "2025-03-03 15:56:57");

        let key = sort_key("2025-03-03T15:56:57.25+08:00");
        assert_eq!(format_timestamp(&key), "2025-03-03 15:56:57");

        assert!(sort_key("2025-03-03T15:56:57Z") > sort_key("2025-03-03T09:00:00Z"));
    }

    #[test]
    fn test_sort_key_fallback() {
        let key = sort_key("someday");
        assert_eq!(key, floor_timestamp());
        assert_eq!(format_timestamp(&key), "0001-01-01 00:00:00");
        assert!(sort_key("2000-01-01") > key);
    }

    #[test]
    fn test_multibyte_input_does_not_panic() {
        assert_eq!(sort_key("二〇二五年三月三日"), floor_timestamp());
        assert_eq!(display_date("二〇二五年"), "二〇二五年");
    }

    #[test]
    fn test_rss_pub_date() {
        let now = Utc.with_ymd_and_hms(2026, 2, 3, 4, 5, 6).unwrap();
        assert_eq!(
            rss_pub_date("2025-06-15 and more", &now),
            "Sun, 15 Jun 2025 00:00:00 +0000"
        );
        assert_eq!(rss_pub_date("no date", &now), "Tue, 03 Feb 2026 04:05:06 +0000");
        assert_eq!(rss_pub_date("", &now), "Tue, 03 Feb 2026 04:05:06 +0000");
    }
}
