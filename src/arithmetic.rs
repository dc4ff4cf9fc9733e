//! Day, month and year arithmetic over [`Date`], crossing year boundaries.
//!
//! Dates are mapped to a day number (the first day of year 1 is day 1) in
//! closed form, so adding any offset costs the same as adding one day.
//! Month and year offsets keep the day of month and cut it to the length of
//! the month they land in.

use std::ops::{Add, AddAssign, Sub, SubAssign};

use tracing::debug;

use crate::{
    Date, MONTHS_IN_YEAR, Month, MonthDay, Ordinal,
    consts::{DAYS_PER_CYCLE, LEAP_CYCLE_YEARS},
    rules::days_before_year,
};

impl Date {
    fn day_number(self) -> i64 {
        days_before_year(i64::from(self.year())) + i64::from(self.ordinal().get())
    }

    /// `None` when the day falls outside [`Date::MIN`]..=[`Date::MAX`].
    fn from_day_number(day: i64) -> Option<Self> {
        if day < Self::MIN.day_number() || day > Self::MAX.day_number() {
            return None;
        }

        // mean year length gets within a year of the answer
        let mut year = ((day - 1) * LEAP_CYCLE_YEARS).div_euclid(DAYS_PER_CYCLE) + 1;
        while days_before_year(year) >= day {
            year -= 1;
        }
        while days_before_year(year + 1) < day {
            year += 1;
        }

        let ordinal = u16::try_from(day - days_before_year(year)).ok()?;
        let year = i32::try_from(year).ok()?;
        Ordinal::new_in_year(ordinal, year)
            .ok()
            .map(|ordinal| Self::from_parts(year, ordinal))
    }

    /// Adds `delta` days, or `None` if the result is not representable.
    pub fn checked_add_days(self, delta: i64) -> Option<Self> {
        self.day_number()
            .checked_add(delta)
            .and_then(Self::from_day_number)
    }

    /// Subtracts `delta` days, or `None` if the result is not representable.
    pub fn checked_subtract_days(self, delta: i64) -> Option<Self> {
        delta
            .checked_neg()
            .and_then(|delta| self.checked_add_days(delta))
    }

    /// Adds a signed number of days, rolling over year boundaries.
    ///
    /// Saturates at [`Date::MIN`] and [`Date::MAX`].
    pub fn add_days(self, delta: i64) -> Self {
        self.checked_add_days(delta)
            .unwrap_or_else(|| self.saturate(delta, "days"))
    }

    /// Same as `add_days(-delta)`.
    pub fn subtract_days(self, delta: i64) -> Self {
        self.add_days(delta.saturating_neg())
    }

    /// Adds `years`, keeping the month and day.
    ///
    /// Esfand 30 lands on Esfand 29 when the target year is common. `None` if
    /// the year leaves the `i32` range.
    pub fn checked_add_years(self, years: i32) -> Option<Self> {
        let year = self.year().checked_add(years)?;
        Self::new_from_month_day(year, self.month_day().clamp_to_year(year)).ok()
    }

    /// Adds a signed number of years like [`Date::checked_add_years`].
    ///
    /// Saturates at [`Date::MIN`] and [`Date::MAX`].
    pub fn add_years(self, years: i32) -> Self {
        self.checked_add_years(years)
            .unwrap_or_else(|| self.saturate(i64::from(years), "years"))
    }

    /// Adds `months`, rolling over year boundaries and keeping the day of month.
    ///
    /// A day past the end of the target month is cut to its last day, so
    /// Shahrivar 31 plus one month is Mehr 30. `None` if the year leaves the
    /// `i32` range.
    pub fn checked_add_months(self, months: i64) -> Option<Self> {
        let month_day = self.month_day();
        let per_year = i64::from(MONTHS_IN_YEAR);

        // months elapsed since Farvardin of year 0
        let index = i64::from(self.year()) * per_year + i64::from(month_day.month().get() - 1);
        let index = index.checked_add(months)?;

        let year = i32::try_from(index.div_euclid(per_year)).ok()?;
        let month = u8::try_from(index.rem_euclid(per_year) + 1)
            .ok()
            .and_then(|month| Month::new(month).ok())?;
        Self::new_from_month_day(year, MonthDay::saturating(month, month_day.day(), year)).ok()
    }

    /// Adds a signed number of months like [`Date::checked_add_months`].
    ///
    /// Saturates at [`Date::MIN`] and [`Date::MAX`].
    pub fn add_months(self, months: i64) -> Self {
        self.checked_add_months(months)
            .unwrap_or_else(|| self.saturate(months, "months"))
    }

    fn saturate(self, delta: i64, unit: &'static str) -> Self {
        let bound = if delta < 0 { Self::MIN } else { Self::MAX };
        debug!(
            year = self.year(),
            ordinal = self.ordinal().get(),
            delta,
            unit,
            bound_year = bound.year(),
            "offset saturated at calendar bounds"
        );
        bound
    }

    /// Days from this date to `other`, negative when `other` is earlier.
    pub fn days_until(self, other: Self) -> i64 {
        other.day_number() - self.day_number()
    }

    /// Days since Gregorian 1970-01-01 (negative before it).
    pub fn to_unix_days(self) -> i64 {
        Self::UNIX_EPOCH.days_until(self)
    }

    /// Date `days` after Gregorian 1970-01-01, saturating like [`Date::add_days`].
    pub fn from_unix_days(days: i64) -> Self {
        Self::UNIX_EPOCH.add_days(days)
    }
}

impl Add<i64> for Date {
    type Output = Self;

    fn add(self, rhs: i64) -> Self::Output {
        self.add_days(rhs)
    }
}

impl Sub<i64> for Date {
    type Output = Self;

    fn sub(self, rhs: i64) -> Self::Output {
        self.subtract_days(rhs)
    }
}

impl AddAssign<i64> for Date {
    fn add_assign(&mut self, rhs: i64) {
        *self = self.add_days(rhs);
    }
}

impl SubAssign<i64> for Date {
    fn sub_assign(&mut self, rhs: i64) {
        *self = self.subtract_days(rhs);
    }
}

impl Sub for Date {
    type Output = i64;

    fn sub(self, rhs: Self) -> Self::Output {
        rhs.days_until(self)
    }
}
