use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::{
    CalendarError, EPOCH_ORDINAL, EPOCH_YEAR, Month, MonthDay, Ordinal,
    rules::{days_in_year, is_leap_year},
};

/// A day in the Jalali calendar: a year and the day of that year.
///
/// The ordinal is always valid for the year, so every `Date` exists. Month
/// and day are derived on demand through [`MonthDay`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "DateRecord", into = "DateRecord")]
pub struct Date {
    year:    i32,
    ordinal: Ordinal,
}

/// Wire shape of [`Date`], validated on the way in.
#[derive(Serialize, Deserialize)]
struct DateRecord {
    year:    i32,
    ordinal: u16,
}

impl Date {
    /// Earliest representable date
    pub const MIN: Self = Self {
        year:    i32::MIN,
        ordinal: Ordinal::MIN,
    };

    /// Latest representable date (`i32::MAX` is a leap year)
    pub const MAX: Self = Self {
        year:    i32::MAX,
        ordinal: Ordinal::MAX,
    };

    /// Gregorian 1970-01-01, Dey 11 1348
    pub const UNIX_EPOCH: Self = match Ordinal::new(EPOCH_ORDINAL) {
        Ok(ordinal) => Self {
            year: EPOCH_YEAR,
            ordinal,
        },
        Err(_) => Self::MIN,
    };

    /// Creates a date from a year and a day of that year.
    ///
    /// # Errors
    /// Returns `CalendarError::OutOfRange` if `ordinal` is past the last day of `year`.
    pub fn new(year: i32, ordinal: Ordinal) -> Result<Self, CalendarError> {
        let max = days_in_year(year);
        if ordinal.get() > max {
            return Err(CalendarError::OutOfRange {
                value: ordinal.get(),
                max,
            });
        }
        Ok(Self { year, ordinal })
    }

    /// Creates a date from a year and a month and day.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidDay` if the day does not exist in that month of `year`.
    pub fn new_from_month_day(year: i32, month_day: MonthDay) -> Result<Self, CalendarError> {
        let ordinal = month_day.to_ordinal(year)?;
        Self::new(year, ordinal)
    }

    /// Creates a date from raw year, month and day numbers.
    ///
    /// # Errors
    /// Returns `CalendarError::InvalidMonth` or `CalendarError::InvalidDay`
    /// if the month and day do not exist in `year`.
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self, CalendarError> {
        Self::new_from_month_day(year, MonthDay::new(month, day)?)
    }

    /// Farvardin 1 of `year`
    pub const fn first_of_year(year: i32) -> Self {
        Self {
            year,
            ordinal: Ordinal::MIN,
        }
    }

    /// Esfand 29 or 30 of `year`
    pub fn last_of_year(year: i32) -> Self {
        Self {
            year,
            ordinal: Ordinal::last_of_year(year),
        }
    }

    /// Only for values already known to be valid for `year`.
    pub(crate) const fn from_parts(year: i32, ordinal: Ordinal) -> Self {
        Self { year, ordinal }
    }

    /// Returns the year
    pub const fn year(&self) -> i32 {
        self.year
    }

    /// Returns the day of the year
    pub const fn ordinal(&self) -> Ordinal {
        self.ordinal
    }

    /// Returns the month and day of this date
    ///
    /// Every constructor checks the ordinal against the year, so the
    /// conversion cannot fail and the `MonthDay::MAX` fallback is unreachable.
    pub fn month_day(&self) -> MonthDay {
        let month_day = MonthDay::from_ordinal(self.ordinal, self.year);
        debug_assert!(
            month_day.is_ok(),
            "ordinal {} is not a day of year {}",
            self.ordinal,
            self.year
        );
        month_day.unwrap_or(MonthDay::MAX)
    }

    /// Returns the month
    pub fn month(&self) -> Month {
        self.month_day().month()
    }

    /// Returns the day of month
    pub fn day(&self) -> u8 {
        self.month_day().day()
    }

    /// Whether this date's year is a leap year
    pub fn is_leap_year(&self) -> bool {
        is_leap_year(self.year)
    }

    /// Number of days in this date's year
    pub fn days_in_year(&self) -> u16 {
        days_in_year(self.year)
    }

    /// Total order over dates: year first, then day of year.
    pub const fn compare(a: &Self, b: &Self) -> Ordering {
        if a.year < b.year {
            return Ordering::Less;
        }
        if a.year > b.year {
            return Ordering::Greater;
        }

        // same year, ordinals are comparable
        if a.ordinal.get() < b.ordinal.get() {
            return Ordering::Less;
        }
        if a.ordinal.get() > b.ordinal.get() {
            return Ordering::Greater;
        }

        Ordering::Equal
    }
}

impl PartialOrd for Date {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Date {
    fn cmp(&self, other: &Self) -> Ordering {
        Self::compare(self, other)
    }
}

impl TryFrom<(i32, u16)> for Date {
    type Error = CalendarError;

    fn try_from((year, ordinal): (i32, u16)) -> Result<Self, Self::Error> {
        Self::new(year, Ordinal::new(ordinal)?)
    }
}

impl TryFrom<(i32, u8, u8)> for Date {
    type Error = CalendarError;

    fn try_from((year, month, day): (i32, u8, u8)) -> Result<Self, Self::Error> {
        Self::from_ymd(year, month, day)
    }
}

impl From<Date> for (i32, u8, u8) {
    fn from(date: Date) -> Self {
        let md = date.month_day();
        (date.year, md.month().get(), md.day())
    }
}

impl TryFrom<DateRecord> for Date {
    type Error = CalendarError;

    fn try_from(record: DateRecord) -> Result<Self, Self::Error> {
        Self::try_from((record.year, record.ordinal))
    }
}

impl From<Date> for DateRecord {
    fn from(date: Date) -> Self {
        Self {
            year:    date.year,
            ordinal: date.ordinal.get(),
        }
    }
}
