//! Human-readable distance between two timestamps.

use chrono::{DateTime, Datelike, Months, Utc};

const MINUTES_IN_DAY: u64 = 1440;
const MINUTES_IN_MONTH: u64 = 43200;
const MINUTES_IN_TWO_MONTHS: u64 = 86400;

/// Describe how far `then` is from `now`, e.g. "3 days ago" or "in 2 hours".
///
/// Wording follows the usual "about / over / almost" buckets; a leading
/// "about " is dropped so recent edits read "1 hour ago".
pub fn humanize_distance(then: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let seconds = now.signed_duration_since(then).num_seconds();
    let (earlier, later) = if seconds < 0 { (now, then) } else { (then, now) };
    let words = distance_words(seconds.unsigned_abs(), calendar_months(earlier, later));

    let phrase = if seconds < 0 {
        format!("in {}", words)
    } else {
        format!("{} ago", words)
    };

    match phrase.strip_prefix("about ") {
        Some(rest) => rest.to_string(),
        None => phrase,
    }
}

/// Whole calendar months from `earlier` to `later`, not counting a
/// trailing partial month.
fn calendar_months(earlier: DateTime<Utc>, later: DateTime<Utc>) -> u64 {
    let mut months = (later.year() - earlier.year()) * 12 + later.month() as i32
        - earlier.month() as i32;
    if months > 0 {
        let anniversary = earlier.checked_add_months(Months::new(months as u32));
        if anniversary.is_some_and(|date| date > later) {
            months -= 1;
        }
    }
    months.max(0) as u64
}

fn distance_words(seconds: u64, months: u64) -> String {
    let minutes = (seconds + 30) / 60;

    if minutes == 0 {
        return "less than a minute".to_string();
    }
    if minutes < 45 {
        return plural(minutes, "minute");
    }
    if minutes < 90 {
        return "about 1 hour".to_string();
    }
    if minutes < MINUTES_IN_DAY {
        let hours = (minutes + 30) / 60;
        return format!("about {}", plural(hours, "hour"));
    }
    if minutes < 2520 {
        return "1 day".to_string();
    }
    if minutes < MINUTES_IN_MONTH {
        let days = (minutes + MINUTES_IN_DAY / 2) / MINUTES_IN_DAY;
        return plural(days, "day");
    }
    if minutes < MINUTES_IN_TWO_MONTHS {
        let months = (minutes + MINUTES_IN_MONTH / 2) / MINUTES_IN_MONTH;
        return format!("about {}", plural(months, "month"));
    }

    if months < 12 {
        let nearest = (minutes + MINUTES_IN_MONTH / 2) / MINUTES_IN_MONTH;
        return plural(nearest, "month");
    }

    let years = months / 12;
    match months % 12 {
        0..=2 => format!("about {}", plural(years, "year")),
        3..=8 => format!("over {}", plural(years, "year")),
        _ => format!("almost {}", plural(years + 1, "year")),
    }
}

fn plural(count: u64, unit: &str) -> String {
    if count == 1 {
        format!("1 {}", unit)
    } else {
        format!("{} {}s", count, unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn ago(duration: Duration) -> String {
        let now = Utc::now();
        humanize_distance(now - duration, now)
    }

    #[test]
    fn under_a_minute() {
        assert_eq!(ago(Duration::seconds(10)), "less than a minute ago");
    }

    #[test]
    fn minutes() {
        assert_eq!(ago(Duration::minutes(1)), "1 minute ago");
        assert_eq!(ago(Duration::minutes(5)), "5 minutes ago");
    }

    #[test]
    fn about_prefix_is_dropped_for_hours() {
        assert_eq!(ago(Duration::minutes(60)), "1 hour ago");
        assert_eq!(ago(Duration::hours(3)), "3 hours ago");
    }

    #[test]
    fn days() {
        assert_eq!(ago(Duration::hours(30)), "1 day ago");
        assert_eq!(ago(Duration::days(4)), "4 days ago");
    }

    #[test]
    fn months() {
        assert_eq!(ago(Duration::days(35)), "1 month ago");
        assert_eq!(ago(Duration::days(95)), "3 months ago");
    }

    #[test]
    fn years() {
        assert_eq!(ago(Duration::days(370)), "1 year ago");
        assert_eq!(ago(Duration::days(365 + 150)), "over 1 year ago");
        assert_eq!(ago(Duration::days(365 + 330)), "almost 2 years ago");
    }

    fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(year, month, day, 12, 0, 0).unwrap()
    }

    #[test]
    fn long_spans_count_calendar_months() {
        assert_eq!(
            humanize_distance(at(2020, 1, 1), at(2026, 9, 1)),
            "over 6 years ago"
        );
        assert_eq!(
            humanize_distance(at(2025, 1, 1), at(2025, 12, 27)),
            "12 months ago"
        );
        assert_eq!(
            humanize_distance(at(2024, 3, 1), at(2025, 3, 1)),
            "1 year ago"
        );
    }

    #[test]
    fn partial_month_is_not_counted() {
        assert_eq!(calendar_months(at(2024, 1, 31), at(2024, 2, 28)), 0);
        assert_eq!(calendar_months(at(2024, 1, 15), at(2025, 1, 14)), 11);
        assert_eq!(calendar_months(at(2024, 1, 15), at(2025, 1, 15)), 12);
    }

    #[test]
    fn future_timestamps_read_in() {
        let now = Utc::now();
        assert_eq!(
            humanize_distance(now + Duration::minutes(5), now),
            "in 5 minutes"
        );
    }
}
