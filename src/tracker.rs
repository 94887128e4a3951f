use chrono::{DateTime, Local};

/// Human-readable elapsed time since the last watering.
///
/// Buckets are floor divisions of the elapsed milliseconds: under a minute
/// reads "just now", then minutes up to an hour, hours up to a day, days
/// beyond that. A clock that ran backwards reads as "just now".
pub fn relative_time_label(last_watered: DateTime<Local>, now: DateTime<Local>) -> String {
    let elapsed_ms = (now - last_watered).num_milliseconds().max(0);
    let minutes = elapsed_ms / 60_000;
    let hours = elapsed_ms / 3_600_000;

    if minutes < 1 {
        "just now".to_string()
    } else if minutes < 60 {
        unit_label(minutes, "minute")
    } else if hours < 24 {
        unit_label(hours, "hour")
    } else {
        unit_label(hours / 24, "day")
    }
}

/// True iff the local calendar date of the last watering differs from the
/// local calendar date of `now`.
pub fn should_reset_daily_count(last_watered: DateTime<Local>, now: DateTime<Local>) -> bool {
    last_watered.date_naive() != now.date_naive()
}

fn unit_label(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn instant(hour: u32, min: u32, sec: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2026, 1, 5, hour, min, sec).unwrap()
    }

    #[test]
    fn under_one_minute_is_just_now() {
        let last = instant(12, 0, 0);
        assert_eq!(relative_time_label(last, last), "just now");
        assert_eq!(
            relative_time_label(last, last + Duration::seconds(59)),
            "just now"
        );
    }

    #[test]
    fn backwards_clock_is_just_now() {
        let last = instant(12, 0, 0);
        assert_eq!(
            relative_time_label(last, last - Duration::seconds(30)),
            "just now"
        );
    }

    #[test]
    fn minute_bucket_boundaries() {
        let last = instant(12, 0, 0);
        assert_eq!(
            relative_time_label(last, last + Duration::minutes(1)),
            "1 minute ago"
        );
        assert_eq!(
            relative_time_label(last, last + Duration::minutes(59)),
            "59 minutes ago"
        );
    }

    #[test]
    fn hour_bucket_boundaries() {
        let last = instant(0, 30, 0);
        assert_eq!(
            relative_time_label(last, last + Duration::minutes(60)),
            "1 hour ago"
        );
        assert_eq!(
            relative_time_label(last, last + Duration::hours(23) + Duration::minutes(59)),
            "23 hours ago"
        );
    }

    #[test]
    fn day_bucket_boundaries() {
        let last = instant(12, 0, 0);
        assert_eq!(
            relative_time_label(last, last + Duration::hours(24)),
            "1 day ago"
        );
        assert_eq!(
            relative_time_label(last, last + Duration::days(3) + Duration::hours(5)),
            "3 days ago"
        );
    }

    #[test]
    fn reset_across_midnight() {
        let last = instant(23, 59, 0);
        let next_morning = Local.with_ymd_and_hms(2026, 1, 6, 0, 1, 0).unwrap();
        assert!(should_reset_daily_count(last, next_morning));
    }

    #[test]
    fn no_reset_within_same_day() {
        let morning = instant(0, 1, 0);
        let night = instant(23, 59, 0);
        assert!(!should_reset_daily_count(morning, night));
    }
}
