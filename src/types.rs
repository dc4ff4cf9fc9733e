use crate::consts::{
    DAYS_IN_MONTH, ESFAND, ESFAND_DAYS_LEAP, FARVARDIN, MAX_DAYS_IN_YEAR, MEHR, MIN_DAY,
    MONTHS_IN_YEAR,
};
use crate::prelude::*;
use crate::rules::{days_in_year, month_length};
use crate::CalendarError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// A month value guaranteed to be in the range `1..=MONTHS_IN_YEAR` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MONTHS_IN_YEAR`
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` if the value is 0 or > `MONTHS_IN_YEAR`.
    pub fn new(value: u8) -> Result<Self, CalendarError> {
        let non_zero = NonZeroU8::new(value).ok_or(CalendarError::InvalidMonth(value))?;
        if value > MONTHS_IN_YEAR {
            return Err(CalendarError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Number of days in this month of `year`
    pub fn days_in(self, year: i32) -> u8 {
        month_length(self, year)
    }

    /// Longest this month can be in any year
    pub const fn max_days(self) -> u8 {
        if self.get() == ESFAND {
            ESFAND_DAYS_LEAP
        } else {
            DAYS_IN_MONTH[self.get() as usize]
        }
    }

    /// Iterates the months of a year in order.
    fn all() -> impl Iterator<Item = Self> {
        (FARVARDIN..=MONTHS_IN_YEAR).filter_map(|m| Self::new(m).ok())
    }
}

impl TryFrom<u8> for Month {
    type Error = CalendarError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day of the year, counted from 1.
///
/// A bare `Ordinal` is only known to fit the longest possible year; whether it
/// fits a specific year is checked by [`Ordinal::new_in_year`] and
/// [`crate::Date::new`].
///
/// `Ordinal` is not `Ord`: two ordinals only compare meaningfully inside one
/// year. When both are known to belong to the same year, compare their
/// [`Ordinal::get`] values; otherwise compare [`crate::Date`]s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Into, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Ordinal(u16);

impl Ordinal {
    /// First day of every year
    pub const MIN: Self = Self(MIN_DAY as u16);

    /// Last day of a leap year (366)
    pub const MAX: Self = Self(MAX_DAYS_IN_YEAR);

    /// Last day of a common year (365)
    pub const MAX_NON_LEAP: Self = Self(MAX_DAYS_IN_YEAR - 1);

    /// Creates an ordinal bounded by the longest possible year.
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` if the value is 0 or > `MAX_DAYS_IN_YEAR`.
    pub const fn new(value: u16) -> Result<Self, CalendarError> {
        Self::bounded(value, MAX_DAYS_IN_YEAR)
    }

    /// Creates an ordinal valid for `year`.
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` if the value is 0 or > `days_in_year(year)`.
    pub fn new_in_year(value: u16, year: i32) -> Result<Self, CalendarError> {
        Self::bounded(value, days_in_year(year))
    }

    /// Last day of `year` (365 or 366)
    pub fn last_of_year(year: i32) -> Self {
        Self(days_in_year(year))
    }

    /// Returns the day of year as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0
    }

    /// Whether this ordinal exists in `year`
    pub fn fits_year(self, year: i32) -> bool {
        self.0 <= days_in_year(year)
    }

    const fn bounded(value: u16, max: u16) -> Result<Self, CalendarError> {
        if value < Self::MIN.0 || value > max {
            return Err(CalendarError::OutOfRange { value, max });
        }
        Ok(Self(value))
    }
}

impl TryFrom<u16> for Ordinal {
    type Error = CalendarError;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// A month and day of month, not yet tied to a year.
///
/// Orders by month, then day, which is the same in every year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "MonthDayRecord", into = "MonthDayRecord")]
pub struct MonthDay {
    month: Month,
    day:   u8,
}

/// Wire shape of [`MonthDay`], validated on the way in.
#[derive(Serialize, Deserialize)]
struct MonthDayRecord {
    month: u8,
    day:   u8,
}

impl MonthDay {
    /// Farvardin 1
    pub const MIN: Self = Self {
        month: Month(NonZeroU8::MIN),
        day:   MIN_DAY,
    };

    /// Esfand 30, only present in leap years
    pub const MAX: Self = match NonZeroU8::new(ESFAND) {
        Some(month) => Self {
            month: Month(month),
            day:   ESFAND_DAYS_LEAP,
        },
        None => Self::MIN,
    };

    /// Creates a month and day, bounding the day by the longest the month can be.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` for a month outside `1..=12` and
    /// `CalendarError::InvalidDay` for a day outside `1..=max_days_in_month(month)`.
    pub fn new(month: u8, day: u8) -> Result<Self, CalendarError> {
        let month = Month::new(month)?;
        Self::checked(month, day, month.max_days())
    }

    /// Returns the month
    pub const fn month(self) -> Month {
        self.month
    }

    /// Returns the day of month
    pub const fn day(self) -> u8 {
        self.day
    }

    /// Day of `year` this month and day falls on.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDay` if the day does not exist in this
    /// month of `year` (Esfand 30 of a common year).
    pub fn to_ordinal(self, year: i32) -> Result<Ordinal, CalendarError> {
        let max = self.month.days_in(year);
        if self.day > max {
            return Err(CalendarError::InvalidDay {
                month: self.month.get(),
                day: self.day,
                max,
            });
        }

        let before: u16 = Month::all()
            .take_while(|m| *m < self.month)
            .map(|m| u16::from(m.days_in(year)))
            .sum();
        Ok(Ordinal(before + u16::from(self.day)))
    }

    /// Month and day of `ordinal` in `year`, the inverse of [`Self::to_ordinal`].
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` if `ordinal` is past the last day of `year`.
    pub fn from_ordinal(ordinal: Ordinal, year: i32) -> Result<Self, CalendarError> {
        let valid = Ordinal::new_in_year(ordinal.get(), year)?;

        let mut remaining = valid.get();
        for month in Month::all() {
            let length = u16::from(month.days_in(year));
            if remaining <= length {
                // remaining is at most 31 here
                let day = u8::try_from(remaining).map_err(|_| CalendarError::OutOfRange {
                    value: ordinal.get(),
                    max:   days_in_year(year),
                })?;
                return Ok(Self { month, day });
            }
            remaining -= length;
        }

        Err(CalendarError::OutOfRange {
            value: ordinal.get(),
            max:   days_in_year(year),
        })
    }

    /// Whether this month and day exists in `year`
    pub fn exists_in(self, year: i32) -> bool {
        self.day <= self.month.days_in(year)
    }

    /// This month and day with the day cut to the month's length in `year`,
    /// so Esfand 30 becomes Esfand 29 in a common year.
    pub fn clamp_to_year(self, year: i32) -> Self {
        Self::saturating(self.month, self.day, year)
    }

    /// `day` of `month`, cut to the month's length in `year`.
    pub(crate) fn saturating(month: Month, day: u8, year: i32) -> Self {
        Self {
            month,
            day: day.clamp(MIN_DAY, month.days_in(year)),
        }
    }

    /// Whether this is in the second half of the year (Mehr onward), where
    /// months are at most 30 days long
    pub const fn is_second_half(self) -> bool {
        self.month.get() >= MEHR
    }

    fn checked(month: Month, day: u8, max: u8) -> Result<Self, CalendarError> {
        if day < MIN_DAY || day > max {
            return Err(CalendarError::InvalidDay {
                month: month.get(),
                day,
                max,
            });
        }
        Ok(Self { month, day })
    }
}

impl TryFrom<(u8, u8)> for MonthDay {
    type Error = CalendarError;

    fn try_from((month, day): (u8, u8)) -> Result<Self, Self::Error> {
        Self::new(month, day)
    }
}

impl From<MonthDay> for (u8, u8) {
    fn from(value: MonthDay) -> Self {
        (value.month.get(), value.day)
    }
}

impl TryFrom<MonthDayRecord> for MonthDay {
    type Error = CalendarError;

    fn try_from(record: MonthDayRecord) -> Result<Self, Self::Error> {
        Self::new(record.month, record.day)
    }
}

impl From<MonthDay> for MonthDayRecord {
    fn from(value: MonthDay) -> Self {
        Self {
            month: value.month.get(),
            day:   value.day,
        }
    }
}
