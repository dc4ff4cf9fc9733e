//! Dates from time elapsed around the Unix epoch.
//!
//! Times are read as UTC and cut to whole days. A time before the epoch
//! belongs to the day it falls in, so one second before it is Dey 10 1348.

use std::time::{Duration, SystemTime};

use crate::{Date, consts::SECONDS_PER_DAY};

impl Date {
    /// Date `since` after Gregorian 1970-01-01T00:00Z.
    ///
    /// Partial days are dropped. Saturates at [`Date::MAX`].
    pub fn from_duration_since_epoch(since: Duration) -> Self {
        let days = since.as_secs() / SECONDS_PER_DAY;
        Self::from_unix_days(i64::try_from(days).unwrap_or(i64::MAX))
    }

    /// Date `before` ahead of Gregorian 1970-01-01T00:00Z.
    ///
    /// A partial day counts as the whole day it reaches into. Saturates at
    /// [`Date::MIN`].
    pub fn from_duration_before_epoch(before: Duration) -> Self {
        let day_nanos = Duration::from_secs(SECONDS_PER_DAY).as_nanos();
        let days = before.as_nanos().div_ceil(day_nanos);
        Self::from_unix_days(i64::try_from(days).map_or(i64::MIN, |days| -days))
    }

    /// UTC date of `time`, on either side of the epoch.
    pub fn from_system_time(time: SystemTime) -> Self {
        match time.duration_since(SystemTime::UNIX_EPOCH) {
            Ok(since) => Self::from_duration_since_epoch(since),
            Err(err) => Self::from_duration_before_epoch(err.duration()),
        }
    }
}

impl From<SystemTime> for Date {
    fn from(time: SystemTime) -> Self {
        Self::from_system_time(time)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DAY: u64 = SECONDS_PER_DAY;

    fn ymd(year: i32, month: u8, day: u8) -> Date {
        Date::from_ymd(year, month, day).unwrap()
    }

    fn before_epoch(secs: u64) -> SystemTime {
        SystemTime::UNIX_EPOCH
            .checked_sub(Duration::from_secs(secs))
            .unwrap()
    }

    #[test]
    fn test_epoch_itself() {
        assert_eq!(Date::from_system_time(SystemTime::UNIX_EPOCH), Date::UNIX_EPOCH);
        assert_eq!(Date::from_duration_since_epoch(Duration::ZERO), Date::UNIX_EPOCH);
        assert_eq!(Date::from_duration_before_epoch(Duration::ZERO), Date::UNIX_EPOCH);
    }

    #[test]
    fn test_system_time_after_epoch() {
        // Gregorian 2025-05-03
        let time = SystemTime::UNIX_EPOCH + Duration::from_secs(20_211 * DAY);
        assert_eq!(Date::from_system_time(time), ymd(1404, 2, 13));
        assert_eq!(Date::from(time), ymd(1404, 2, 13));

        let last_second = time + Duration::from_secs(DAY - 1);
        assert_eq!(Date::from_system_time(last_second), ymd(1404, 2, 13));
        assert_eq!(Date::from_system_time(last_second + Duration::from_secs(1)), ymd(1404, 2, 14));
    }

    #[test]
    fn test_system_time_before_epoch() {
        assert_eq!(Date::from_system_time(before_epoch(1)), ymd(1348, 10, 10));
        assert_eq!(Date::from_system_time(before_epoch(DAY)), ymd(1348, 10, 10));
        assert_eq!(Date::from_system_time(before_epoch(DAY + 1)), ymd(1348, 10, 9));
        assert_eq!(Date::from_system_time(before_epoch(286 * DAY)), Date::first_of_year(1348));
    }

    #[test]
    fn test_sub_second_before_epoch() {
        let before = Duration::from_nanos(1);
        assert_eq!(Date::from_duration_before_epoch(before), ymd(1348, 10, 10));
    }

    #[test]
    fn test_durations_saturate() {
        assert_eq!(Date::from_duration_since_epoch(Duration::MAX), Date::MAX);
        assert_eq!(Date::from_duration_before_epoch(Duration::MAX), Date::MIN);
    }

    #[test]
    fn test_matches_unix_days() {
        for days in [0, 1, 79, 20_168, 20_211, 1_000_000] {
            assert_eq!(
                Date::from_duration_since_epoch(Duration::from_secs(days * DAY)),
                Date::from_unix_days(i64::try_from(days).unwrap()),
                "{days} days"
            );
        }
    }
}
