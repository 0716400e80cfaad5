//! Date parsing, formatting and validity checks.
//!
//! Components never talk to `chrono` directly for text conversion; they go
//! through [`DateCodec`] so owners can swap in their own rules.

mod pattern;

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};

pub use pattern::has_date_token;

/// Fixed pattern used to round-trip between typed text and dates.
pub const CANONICAL_PATTERN: &str = "MM/DD/YYYY";

/// Pattern used to show a committed date while the popover is closed.
pub const DEFAULT_DISPLAY_FORMAT: &str = "MMMM DD, YY";

/// Parse/format capability used by date components.
pub trait DateCodec: Send {
    /// Parse `text` against a moment-style `pattern`.
    fn parse(&self, text: &str, pattern: &str) -> Option<NaiveDate>;

    /// Render `date` with a moment-style `pattern`.
    fn format(&self, date: NaiveDate, pattern: &str) -> String;

    /// Whether `date` may be committed.
    fn is_valid(&self, date: NaiveDate) -> bool;

    /// Parse a loosely formatted initial value.
    ///
    /// Tries ISO 8601 dates and date-times, then RFC 2822, then the
    /// canonical pattern. Time and offset parts are dropped.
    fn parse_initial(&self, text: &str) -> Option<NaiveDate> {
        let text = text.trim();
        NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .ok()
            .or_else(|| DateTime::parse_from_rfc3339(text).ok().map(|dt| dt.date_naive()))
            .or_else(|| {
                NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S%.f")
                    .ok()
                    .map(|dt| dt.date())
            })
            .or_else(|| {
                NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S%.f")
                    .ok()
                    .map(|dt| dt.date())
            })
            .or_else(|| DateTime::parse_from_rfc2822(text).ok().map(|dt| dt.date_naive()))
            .or_else(|| self.parse(text, CANONICAL_PATTERN))
            .filter(|date| self.is_valid(*date))
    }
}

/// Default codec understanding moment-style tokens.
#[derive(Debug, Clone, Copy, Default)]
pub struct MomentCodec;

impl DateCodec for MomentCodec {
    fn parse(&self, text: &str, pattern: &str) -> Option<NaiveDate> {
        pattern::parse(text, pattern)
    }

    fn format(&self, date: NaiveDate, pattern: &str) -> String {
        pattern::format(date, pattern)
    }

    fn is_valid(&self, date: NaiveDate) -> bool {
        // YYYY must render as exactly four digits to parse back.
        (1..=9999).contains(&date.year())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn parse_initial_iso_date() {
        assert_eq!(MomentCodec.parse_initial("2024-03-15"), Some(d(2024, 3, 15)));
    }

    #[test]
    fn parse_initial_iso_datetime_variants() {
        let codec = MomentCodec;
        assert_eq!(
            codec.parse_initial("2024-03-15T10:30:00Z"),
            Some(d(2024, 3, 15))
        );
        assert_eq!(
            codec.parse_initial("2024-03-15T10:30:00+02:00"),
            Some(d(2024, 3, 15))
        );
        assert_eq!(
            codec.parse_initial("2024-03-15T10:30:00"),
            Some(d(2024, 3, 15))
        );
        assert_eq!(
            codec.parse_initial("2024-03-15 10:30:00.250"),
            Some(d(2024, 3, 15))
        );
    }

    #[test]
    fn parse_initial_rfc2822() {
        assert_eq!(
            MomentCodec.parse_initial("Fri, 15 Mar 2024 10:30:00 +0000"),
            Some(d(2024, 3, 15))
        );
    }

    #[test]
    fn parse_initial_canonical_fallback() {
        assert_eq!(MomentCodec.parse_initial("03/15/2024"), Some(d(2024, 3, 15)));
    }

    #[test]
    fn parse_initial_rejects_garbage() {
        assert_eq!(MomentCodec.parse_initial("not a date"), None);
        assert_eq!(MomentCodec.parse_initial(""), None);
    }

    #[test]
    fn validity_is_bounded_by_four_digit_years() {
        assert!(MomentCodec.is_valid(d(1, 1, 1)));
        assert!(MomentCodec.is_valid(d(9999, 12, 31)));
        assert!(!MomentCodec.is_valid(d(0, 6, 1)));
        assert!(!MomentCodec.is_valid(d(10000, 1, 1)));
    }

    #[test]
    fn canonical_round_trip_keeps_the_date() {
        let date = d(1999, 12, 31);
        let text = MomentCodec.format(date, CANONICAL_PATTERN);
        assert_eq!(text, "12/31/1999");
        assert_eq!(MomentCodec.parse(&text, CANONICAL_PATTERN), Some(date));
    }
}
