//! Relative and absolute labels for timestamps and counters.

use chrono::{DateTime, Utc};

use super::{DAY, HOUR, MINUTE, MONTH};
use crate::domain::Timestamp;

/// Short label for how long ago `timestamp` was, seen from `now`.
///
/// Older than 30 days renders the month and two-digit year ("Jan '24").
/// Otherwise whole days, hours or minutes are shown, each threshold being
/// strict: exactly one day elapsed still reads "24h ago". Future timestamps
/// are not special-cased and produce negative minute counts.
pub fn humanize(timestamp: Timestamp, now: Timestamp) -> String {
    let elapsed = now.saturating_sub(timestamp);

    if elapsed > MONTH {
        format_utc(timestamp, "%b '%y")
    } else if elapsed > DAY {
        format!("{}d ago", elapsed / DAY)
    } else if elapsed > HOUR {
        format!("{}h ago", elapsed / HOUR)
    } else {
        format!("{}m ago", elapsed / MINUTE)
    }
}

/// View counter label: above one thousand it is shown in thousands with
/// one decimal, rounded half-up ("1.5k"); a zero decimal is dropped ("2k").
pub fn humanize_view_count(views: u64) -> String {
    if views <= 1000 {
        return views.to_string();
    }

    let tenths = views / 100 + u64::from(views % 100 >= 50);
    match tenths % 10 {
        0 => format!("{}k", tenths / 10),
        decimal => format!("{}.{}k", tenths / 10, decimal),
    }
}

/// W3C datetime in UTC, e.g. `2024-01-01T00:00:00Z`.
pub fn w3c_datetime(timestamp: Timestamp) -> String {
    format_utc(timestamp, "%Y-%m-%dT%H:%M:%SZ")
}

fn format_utc(timestamp: Timestamp, pattern: &str) -> String {
    DateTime::<Utc>::from_timestamp(timestamp, 0)
        .map(|at| at.format(pattern).to_string())
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    const NOW: Timestamp = 1_717_200_000;

    #[rstest]
    #[case::exactly_one_hour(HOUR, "60m ago")]
    #[case::just_over_one_hour(HOUR + 1, "1h ago")]
    #[case::exactly_one_day(DAY, "24h ago")]
    #[case::just_over_one_day(DAY + 1, "1d ago")]
    #[case::exactly_thirty_days(MONTH, "30d ago")]
    #[case::a_few_minutes(5 * MINUTE + 59, "5m ago")]
    #[case::just_now(0, "0m ago")]
    fn test_relative_thresholds(#[case] elapsed: i64, #[case] expected: &str) {
        assert_eq!(humanize(NOW - elapsed, NOW), expected);
    }

    #[test]
    fn test_older_than_a_month_is_absolute() {
        let new_year_2024 = 1_704_067_200;
        assert_eq!(humanize(new_year_2024, new_year_2024 + MONTH + 1), "Jan '24");
        assert_eq!(humanize(new_year_2024, new_year_2024 + 400 * DAY), "Jan '24");
    }

    #[test]
    fn test_extreme_timestamps_do_not_overflow() {
        assert_eq!(humanize(i64::MAX, i64::MIN), format!("{}m ago", i64::MIN / MINUTE));
        assert_eq!(humanize(i64::MIN, i64::MAX), "");
    }

    #[test]
    fn test_future_timestamp_truncates_toward_zero() {
        assert_eq!(humanize(NOW + 90, NOW), "-1m ago");
        assert_eq!(humanize(NOW + 30, NOW), "0m ago");
    }

    #[rstest]
    #[case(0, "0")]
    #[case(999, "999")]
    #[case(1000, "1000")]
    #[case(1001, "1k")]
    #[case(1049, "1k")]
    #[case(1050, "1.1k")]
    #[case(1500, "1.5k")]
    #[case(12_345, "12.3k")]
    #[case(999_999, "1000k")]
    #[case::largest_counter(u64::MAX, "18446744073709551.6k")]
    fn test_view_count(#[case] views: u64, #[case] expected: &str) {
        assert_eq!(humanize_view_count(views), expected);
    }

    #[test]
    fn test_w3c_datetime() {
        assert_eq!(w3c_datetime(0), "1970-01-01T00:00:00Z");
        assert_eq!(w3c_datetime(1_704_067_200 + 3_723), "2024-01-01T01:02:03Z");
    }
}
