//! Leap-year and month-length rules of the Jalali calendar.

use crate::consts::{
    DAYS_IN_COMMON_YEAR, DAYS_IN_MONTH, ESFAND, ESFAND_DAYS_LEAP, LEAP_CYCLE_YEARS,
    LEAP_RULE_FACTOR, LEAP_RULE_OFFSET, LEAPS_PER_CYCLE, MAX_DAYS_IN_YEAR, NON_LEAP_CORRECTION,
};
use crate::types::Month;
use crate::CalendarError;

/// Whether `year` is listed in [`NON_LEAP_CORRECTION`].
pub fn is_non_leap_correction(year: i32) -> bool {
    NON_LEAP_CORRECTION.binary_search(&year).is_ok()
}

/// The plain 33-year rule, without corrections.
const fn is_leap_by_cycle(year: i64) -> bool {
    (LEAP_RULE_FACTOR * year + LEAP_RULE_OFFSET).rem_euclid(LEAP_CYCLE_YEARS) < LEAPS_PER_CYCLE
}

/// Is `year` a leap year (366 days, Esfand has 30 days).
///
/// Uses the 33-year rule, corrected by [`NON_LEAP_CORRECTION`].
pub fn is_leap_year(year: i32) -> bool {
    if is_non_leap_correction(year) {
        return false;
    }
    // every correction year is > i32::MIN, so `year - 1` only runs where it can't overflow
    if year > NON_LEAP_CORRECTION[0] && is_non_leap_correction(year - 1) {
        return true;
    }
    is_leap_by_cycle(i64::from(year))
}

/// Number of days in `year` (365 or 366).
pub fn days_in_year(year: i32) -> u16 {
    if is_leap_year(year) {
        MAX_DAYS_IN_YEAR
    } else {
        DAYS_IN_COMMON_YEAR
    }
}

/// Number of days in `month` of `year`.
///
/// # Errors
/// Returns `CalendarError::InvalidMonth` if `month` is not in `1..=12`.
pub fn days_in_month(month: u8, year: i32) -> Result<u8, CalendarError> {
    Ok(Month::new(month)?.days_in(year))
}

/// Longest `month` can be in any year, used when no year is known.
///
/// # Errors
/// Returns `CalendarError::InvalidMonth` if `month` is not in `1..=12`.
pub fn max_days_in_month(month: u8) -> Result<u8, CalendarError> {
    Ok(Month::new(month)?.max_days())
}

pub(crate) fn month_length(month: Month, year: i32) -> u8 {
    if month.get() == ESFAND && is_leap_year(year) {
        ESFAND_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[usize::from(month.get())]
    }
}

// Day numbers: day 1 is the first day of year 1, computed without iterating years.

/// Leap years in `[0, year)` by the 33-year rule alone (negative when `year < 0`).
const fn cycle_leaps_before(year: i64) -> i64 {
    let cycles = year.div_euclid(LEAP_CYCLE_YEARS);
    let rest = year.rem_euclid(LEAP_CYCLE_YEARS);

    let mut count = cycles * LEAPS_PER_CYCLE;
    let mut y = 0;
    while y < rest {
        if is_leap_by_cycle(y) {
            count += 1;
        }
        y += 1;
    }
    count
}

/// Leap years in `[0, year)` with corrections applied.
///
/// A correction moves a leap day from year `c` to `c + 1`, so the count only
/// changes when the range ends right between the two.
fn leaps_before(year: i64) -> i64 {
    let corrected = i32::try_from(year - 1).is_ok_and(is_non_leap_correction);
    cycle_leaps_before(year) - i64::from(corrected)
}

/// Days from the start of year 1 to the start of `year` (negative before year 1).
pub(crate) fn days_before_year(year: i64) -> i64 {
    (year - 1) * i64::from(DAYS_IN_COMMON_YEAR) + leaps_before(year) - leaps_before(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Published leap years between 1210 and 1500
    const LEAPS_1210_TO_1500: [i32; 71] = [
        1210, 1214, 1218, 1222, 1226, 1230, 1234, 1238, 1243, 1247, 1251, 1255, 1259, 1263, 1267,
        1271, 1276, 1280, 1284, 1288, 1292, 1296, 1300, 1304, 1309, 1313, 1317, 1321, 1325, 1329,
        1333, 1337, 1342, 1346, 1350, 1354, 1358, 1362, 1366, 1370, 1375, 1379, 1383, 1387, 1391,
        1395, 1399, 1403, 1408, 1412, 1416, 1420, 1424, 1428, 1432, 1436, 1441, 1445, 1449, 1453,
        1457, 1461, 1465, 1469, 1474, 1478, 1482, 1486, 1490, 1494, 1498,
    ];

    #[test]
    fn test_leap_years_match_published_list() {
        for year in 1210..=1500 {
            let is_leap = is_leap_year(year);
            let in_list = LEAPS_1210_TO_1500.binary_search(&year).is_ok();
            assert_eq!(
                is_leap, in_list,
                "year {year} is miscalculated (computed leap: {is_leap}, listed: {in_list})"
            );
        }
    }

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year:        i32,
            is_leap:     bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year:        1403,
                is_leap:     true,
                description: "regular cycle leap",
            },
            TestCase {
                year:        1404,
                is_leap:     false,
                description: "regular cycle common year",
            },
            TestCase {
                year:        1348,
                is_leap:     false,
                description: "epoch year",
            },
            TestCase {
                year:        1502,
                is_leap:     false,
                description: "first correction year",
            },
            TestCase {
                year:        1503,
                is_leap:     true,
                description: "year after first correction",
            },
            TestCase {
                year:        2987,
                is_leap:     false,
                description: "last correction year",
            },
            TestCase {
                year:        2988,
                is_leap:     true,
                description: "year after last correction",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({}): expected {}",
                case.year,
                case.description,
                if case.is_leap {
                    "leap year"
                } else {
                    "not leap year"
                }
            );
        }
    }

    #[test]
    fn test_corrections_swap_leap_with_following_year() {
        for &year in &NON_LEAP_CORRECTION {
            assert!(is_leap_by_cycle(i64::from(year)), "{year} should be leap by cycle");
            assert!(
                !is_leap_by_cycle(i64::from(year) + 1),
                "{} should not be leap by cycle",
                year + 1
            );
            assert!(!is_non_leap_correction(year + 1));
        }
    }

    #[test]
    fn test_leap_rule_is_total_at_extremes() {
        // no overflow on either end of the year range
        let _ = is_leap_year(i32::MIN);
        let _ = is_leap_year(i32::MAX);
        assert_eq!(days_in_year(i32::MIN), if is_leap_year(i32::MIN) { 366 } else { 365 });
    }

    #[test]
    fn test_days_in_year_consistent_with_leap() {
        for year in -500..=3500 {
            let expected = if is_leap_year(year) { 366 } else { 365 };
            assert_eq!(days_in_year(year), expected, "year {year}");
        }
    }

    #[test]
    fn test_days_in_month_31_day_months() {
        for month in 1..=6 {
            assert_eq!(days_in_month(month, 1404), Ok(31), "Month {month} should have 31 days");
        }
    }

    #[test]
    fn test_days_in_month_30_day_months() {
        for month in 7..=11 {
            assert_eq!(days_in_month(month, 1404), Ok(30), "Month {month} should have 30 days");
        }
    }

    #[test]
    fn test_days_in_month_esfand() {
        assert_eq!(days_in_month(12, 1404), Ok(29));
        assert_eq!(days_in_month(12, 1403), Ok(30));
        assert_eq!(days_in_month(12, 1502), Ok(29), "correction year is not leap");
        assert_eq!(days_in_month(12, 1503), Ok(30), "year after a correction is leap");
    }

    #[test]
    fn test_days_in_month_invalid_month() {
        assert_eq!(days_in_month(0, 1404), Err(CalendarError::InvalidMonth(0)));
        assert_eq!(days_in_month(13, 1404), Err(CalendarError::InvalidMonth(13)));
    }

    #[test]
    fn test_max_days_in_month() {
        let expected = [31, 31, 31, 31, 31, 31, 30, 30, 30, 30, 30, 30];
        for (month, days) in (1..=12).zip(expected) {
            assert_eq!(max_days_in_month(month), Ok(days), "Month {month}");
        }
        assert_eq!(max_days_in_month(13), Err(CalendarError::InvalidMonth(13)));
    }

    #[test]
    fn test_month_lengths_sum_to_year_length() {
        for year in [1348, 1403, 1404, 1502, 1503] {
            let total: u16 = (1..=12)
                .map(|m| u16::from(days_in_month(m, year).unwrap()))
                .sum();
            assert_eq!(total, days_in_year(year), "year {year}");
        }
    }

    #[test]
    fn test_days_before_year_matches_summation() {
        assert_eq!(days_before_year(1), 0);

        let mut expected = 0;
        for year in 1..=3200 {
            assert_eq!(days_before_year(i64::from(year)), expected, "year {year}");
            expected += i64::from(days_in_year(year));
        }

        let mut expected = 0;
        for year in (-1200..1).rev() {
            expected -= i64::from(days_in_year(year));
            assert_eq!(days_before_year(i64::from(year)), expected, "year {year}");
        }
    }
}
