//! Jalali (Solar Hijri) calendar core.
//!
//! A [`Date`] is a year and a day of that year ([`Ordinal`]). [`MonthDay`]
//! converts to and from ordinals once a year is known, and day, month and
//! year arithmetic rolls over year boundaries with the calendar's leap rule.
//!
//! ```
//! use jalali_date::{Date, MonthDay};
//!
//! let md = MonthDay::new(2, 13)?;
//! let date = Date::new_from_month_day(1404, md)?;
//! assert_eq!(date.add_days(11), Date::from_ymd(1404, 2, 24)?);
//!
//! // Esfand 30 only exists in leap years
//! let leap_day = Date::from_ymd(1403, 12, 30)?;
//! assert_eq!(leap_day.add_years(1), Date::from_ymd(1404, 12, 29)?);
//! # Ok::<(), jalali_date::CalendarError>(())
//! ```

mod arithmetic;
mod consts;
mod date;
mod epoch;
mod prelude;
mod rules;
mod types;

pub use consts::*;
pub use date::Date;
pub use rules::{days_in_month, days_in_year, is_leap_year, is_non_leap_correction, max_days_in_month};
pub use types::{Month, MonthDay, Ordinal};

/// Error type for building and converting calendar values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum CalendarError {
    /// Month outside `1..=12`.
    #[error("Invalid month: {0} (must be 1-{max})", max = MONTHS_IN_YEAR)]
    InvalidMonth(u8),

    /// Day outside the length of its month.
    #[error("Invalid day {day} for month {month} (must be 1-{max})")]
    InvalidDay { month: u8, day: u8, max: u8 },

    /// Day of year outside the length of its year.
    #[error("Day of year {value} out of range (must be 1-{max})")]
    OutOfRange { value: u16, max: u16 },
}
