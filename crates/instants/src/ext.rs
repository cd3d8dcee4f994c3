//! Convenience operations layered on [`Instant`].
//!
//! Everything here is a thin composition of [`Instant::add`] and
//! [`Instant::start_of_day`]; nothing touches the zone rules directly.

use chrono::{TimeDelta, Weekday};

use crate::instant::Instant;

const SECS_PER_DAY: f64 = 86_400.0;
const SECS_PER_HOUR: f64 = 3_600.0;

/// Extension surface for [`Instant`].
pub trait InstantExt {
    /// The UTC timestamp as ISO-8601 with fixed nine-digit fractional
    /// seconds and an explicit `+00:00` suffix.
    fn to_utc_iso_string(&self) -> String;

    /// Shift by `days` × 24h of elapsed time; fractional values permitted.
    fn add_days(&self, days: f64) -> Instant;

    fn add_hours(&self, hours: f64) -> Instant;

    fn add_minutes(&self, minutes: f64) -> Instant;

    fn add_seconds(&self, seconds: f64) -> Instant;

    /// Local midnight `days` days from this instant's local date (pass
    /// `1.0` for "tomorrow at midnight").
    fn next_start_of_day(&self, days: f64) -> Instant;

    /// Local midnight of the next occurrence of `target`, rolling a full
    /// week forward when the local date is already on `target`.
    fn next_start_of_weekday(&self, target: Weekday) -> Instant;

    /// Local midnight of the most recent occurrence of `target`:
    /// [`InstantExt::next_start_of_weekday`] minus seven days.
    fn start_of_week(&self, target: Weekday) -> Instant;
}

/// Elapsed seconds as a `TimeDelta`, rounded to whole nanoseconds.
fn delta_from_seconds(seconds: f64) -> TimeDelta {
    TimeDelta::nanoseconds((seconds * 1e9).round() as i64)
}

impl InstantExt for Instant {
    fn to_utc_iso_string(&self) -> String {
        self.utc().format("%Y-%m-%dT%H:%M:%S%.9f+00:00").to_string()
    }

    fn add_days(&self, days: f64) -> Instant {
        self.add(delta_from_seconds(days * SECS_PER_DAY))
    }

    fn add_hours(&self, hours: f64) -> Instant {
        self.add(delta_from_seconds(hours * SECS_PER_HOUR))
    }

    fn add_minutes(&self, minutes: f64) -> Instant {
        self.add(delta_from_seconds(minutes * 60.0))
    }

    fn add_seconds(&self, seconds: f64) -> Instant {
        self.add(delta_from_seconds(seconds))
    }

    fn next_start_of_day(&self, days: f64) -> Instant {
        self.start_of_day().add_days(days)
    }

    fn next_start_of_weekday(&self, target: Weekday) -> Instant {
        let current = i64::from(self.day_of_week().num_days_from_sunday());
        let ahead = i64::from(target.num_days_from_sunday());
        let days_to_add = (ahead - current).rem_euclid(7);
        // Already on the target weekday: roll a full week, never today.
        let days_to_add = if days_to_add > 0 { days_to_add } else { 7 };
        self.add_days(days_to_add as f64).start_of_day()
    }

    fn start_of_week(&self, target: Weekday) -> Instant {
        self.next_start_of_weekday(target).add_days(-7.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, FixedOffset};

    fn instant(value: &str, zone_id: &str) -> Instant {
        let parsed: DateTime<FixedOffset> = value.parse().unwrap();
        Instant::new(parsed, zone_id).unwrap()
    }

    #[test]
    fn renders_the_utc_iso_form_with_fixed_fractional_seconds() {
        assert_eq!(
            instant("2024-01-01T10:00:00-05:00", "America/New_York").to_utc_iso_string(),
            "2024-01-01T15:00:00.000000000+00:00"
        );
        assert_eq!(
            instant("2024-01-01T10:00:00+00:00", "Africa/Abidjan").to_utc_iso_string(),
            "2024-01-01T10:00:00.000000000+00:00"
        );
    }

    #[test]
    fn unit_wrappers_convert_to_elapsed_durations() {
        let base = instant("2024-01-01T10:00:00-05:00", "America/New_York");

        assert_eq!(
            base.add_days(5.0),
            instant("2024-01-06T10:00:00-05:00", "America/New_York")
        );
        assert_eq!(
            base.add_hours(5.0),
            instant("2024-01-01T15:00:00-05:00", "America/New_York")
        );
        assert_eq!(
            base.add_minutes(-5.0),
            instant("2024-01-01T09:55:00-05:00", "America/New_York")
        );
        assert_eq!(
            base.add_seconds(2.0),
            instant("2024-01-01T10:00:02-05:00", "America/New_York")
        );
    }

    #[test]
    fn fractional_units_are_permitted() {
        let base = instant("2024-01-01T00:00:00+00:00", "Africa/Abidjan");

        assert_eq!(
            base.add_days(1.5),
            instant("2024-01-02T12:00:00+00:00", "Africa/Abidjan")
        );
        assert_eq!(
            base.add_hours(0.25),
            instant("2024-01-01T00:15:00+00:00", "Africa/Abidjan")
        );
    }

    #[test]
    fn next_start_of_day_is_local_midnight_shifted_by_days() {
        assert_eq!(
            instant("2024-01-01T10:00:00-05:00", "America/New_York").next_start_of_day(5.0),
            instant("2024-01-06T00:00:00-05:00", "America/New_York")
        );
        assert_eq!(
            instant("2024-01-01T10:00:00+00:00", "America/New_York").next_start_of_day(-5.0),
            instant("2023-12-27T05:00:00+00:00", "America/New_York")
        );
        assert_eq!(
            instant("2024-01-01T10:00:00+00:00", "Africa/Abidjan").next_start_of_day(2.0),
            instant("2024-01-03T00:00:00+00:00", "Africa/Abidjan")
        );
    }

    #[test]
    fn next_start_of_weekday_finds_the_coming_local_midnight() {
        // Monday Jan 1, local: next Sunday is Jan 7.
        assert_eq!(
            instant("2024-01-01T10:00:00-05:00", "America/New_York")
                .next_start_of_weekday(Weekday::Sun),
            instant("2024-01-07T00:00:00-05:00", "America/New_York")
        );
        // Tuesday Jan 2, local: next Monday is Jan 8.
        assert_eq!(
            instant("2024-01-02T10:00:00+00:00", "America/New_York")
                .next_start_of_weekday(Weekday::Mon),
            instant("2024-01-08T05:00:00+00:00", "America/New_York")
        );
        // Monday Jan 1 in a zero-offset zone: next Friday is Jan 5.
        assert_eq!(
            instant("2024-01-01T10:00:00+00:00", "Africa/Abidjan")
                .next_start_of_weekday(Weekday::Fri),
            instant("2024-01-05T00:00:00+00:00", "Africa/Abidjan")
        );
    }

    #[test]
    fn next_start_of_weekday_rolls_a_full_week_when_already_on_target() {
        // 2024-01-07 is a Sunday; asking for Sunday must give Jan 14.
        assert_eq!(
            instant("2024-01-07T10:00:00-05:00", "America/New_York")
                .next_start_of_weekday(Weekday::Sun),
            instant("2024-01-14T00:00:00-05:00", "America/New_York")
        );
    }

    #[test]
    fn start_of_week_is_the_most_recent_target_weekday() {
        // Monday Jan 1 local (20:00 on Jan 1 in New York).
        assert_eq!(
            instant("2024-01-02T01:00:00+00:00", "America/New_York").start_of_week(Weekday::Sun),
            instant("2023-12-31T05:00:00+00:00", "America/New_York")
        );
        assert_eq!(
            instant("2024-01-02T01:00:00+00:00", "America/New_York").start_of_week(Weekday::Tue),
            instant("2023-12-26T05:00:00+00:00", "America/New_York")
        );
        assert_eq!(
            instant("2024-01-01T20:00:00+00:00", "Africa/Abidjan").start_of_week(Weekday::Sun),
            instant("2023-12-31T00:00:00+00:00", "Africa/Abidjan")
        );
    }
}
