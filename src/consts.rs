/// Number of months in a year
pub const MONTHS_IN_YEAR: u8 = 12;

/// First month of the year (Farvardin)
pub const FARVARDIN: u8 = 1;
/// First month of the second half of the year (Mehr)
pub const MEHR: u8 = 7;
/// Dey, the month containing the Unix epoch
pub const DEY: u8 = 10;
/// Last month of the year (Esfand), the only leap-sensitive month
pub const ESFAND: u8 = 12;

/// First day of a month or year, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Days in Esfand for leap years
pub const ESFAND_DAYS_LEAP: u8 = 30;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// Esfand shows 29 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // Farvardin
    31, // Ordibehesht
    31, // Khordad
    31, // Tir
    31, // Mordad
    31, // Shahrivar
    30, // Mehr
    30, // Aban
    30, // Azar
    30, // Dey
    30, // Bahman
    29, // Esfand (non-leap, adjusted by is_leap_year check)
];

/// Last ordinal of the first half of the year (Shahrivar 31)
pub const FIRST_HALF_DAYS: u16 = 186;

/// Days in a common year
pub const DAYS_IN_COMMON_YEAR: u16 = 365;
/// Days in a leap year, the longest any year can be
pub const MAX_DAYS_IN_YEAR: u16 = 366;

/// Length of the arithmetic leap cycle in years
pub(crate) const LEAP_CYCLE_YEARS: i64 = 33;
/// Leap years in every arithmetic cycle
pub(crate) const LEAPS_PER_CYCLE: i64 = 8;
/// Days in one full arithmetic cycle
pub(crate) const DAYS_PER_CYCLE: i64 = LEAP_CYCLE_YEARS * DAYS_IN_COMMON_YEAR as i64 + LEAPS_PER_CYCLE;
/// Multiplier of the 33-year rule `(25 * year + 11) mod 33 < 8`
pub(crate) const LEAP_RULE_FACTOR: i64 = 25;
/// Offset of the 33-year rule
pub(crate) const LEAP_RULE_OFFSET: i64 = 11;

/// Years that are not leap while the 33-year rule marks them as leap.
///
/// The year following each of them is leap while the rule marks it as not.
/// Matches the astronomical algorithm on the 52.5°E meridian from 1178 to
/// 3000 AP. Sorted, so it can be binary searched.
///
/// Source: <https://github.com/unicode-org/icu4x/blob/3e3da0a0a34bfe3056d0f89183270ea683f4a23c/utils/calendrical_calculations/src/persian.rs#L23>
pub const NON_LEAP_CORRECTION: [i32; 78] = [
    1502, 1601, 1634, 1667, 1700, 1733, 1766, 1799, 1832, 1865, 1898, 1931, 1964, 1997, 2030, 2059,
    2063, 2096, 2129, 2158, 2162, 2191, 2195, 2224, 2228, 2257, 2261, 2290, 2294, 2323, 2327, 2356,
    2360, 2389, 2393, 2422, 2426, 2455, 2459, 2488, 2492, 2521, 2525, 2554, 2558, 2587, 2591, 2620,
    2624, 2653, 2657, 2686, 2690, 2719, 2723, 2748, 2752, 2756, 2781, 2785, 2789, 2818, 2822, 2847,
    2851, 2855, 2880, 2884, 2888, 2913, 2917, 2921, 2946, 2950, 2954, 2979, 2983, 2987,
];

/// Year holding Gregorian 1970-01-01
pub const EPOCH_YEAR: i32 = 1348;
/// Ordinal of Gregorian 1970-01-01 within [`EPOCH_YEAR`] (Dey 11)
pub const EPOCH_ORDINAL: u16 = 287;

/// Length of a UTC day in seconds, ignoring leap seconds like Unix time does
pub(crate) const SECONDS_PER_DAY: u64 = 86_400;
