//! Small shared helpers.

use chrono::{DateTime, Utc};

/// Format a publish timestamp for display as "Mon D, YYYY".
///
/// This is the only date representation that reaches `news.json` and the
/// rendered page; the raw timestamp is used solely as a sort key and is
/// stripped before persisting.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(format_display_date(&some_may_6_2025), "May 6, 2025");
/// ```
pub fn format_display_date(ts: &DateTime<Utc>) -> String {
    ts.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_display_date() {
        let ts = Utc.with_ymd_and_hms(2025, 5, 6, 12, 0, 0).unwrap();
        assert_eq!(format_display_date(&ts), "May 6, 2025");
    }

    #[test]
    fn test_format_display_date_single_digit_day_unpadded() {
        let ts = Utc.with_ymd_and_hms(2024, 12, 3, 0, 0, 0).unwrap();
        assert_eq!(format_display_date(&ts), "Dec 3, 2024");
    }

    #[test]
    fn test_format_display_date_double_digit_day() {
        let ts = Utc.with_ymd_and_hms(2024, 1, 31, 23, 59, 59).unwrap();
        assert_eq!(format_display_date(&ts), "Jan 31, 2024");
    }
}
