use crate::Error;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, ESFAND_DAYS_COMMON, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    JALALI_CYCLE_YEARS, JALALI_LONG_MONTH_DAYS, JALALI_SHORT_MONTH_DAYS, JALALI_YEAR_SHIFT,
    LEAP_YEAR_CYCLE, MAX_DAY, MAX_MONTH,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;

/// A month number guaranteed to be in the range `1..=MAX_MONTH` (1..=12).
/// Shared by both calendars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Farvardin / January
    pub const FIRST: Self = Self(NonZeroU8::MIN);

    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `Error::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, Error> {
        let non_zero = NonZeroU8::new(value).ok_or(Error::InvalidMonth(value.into()))?;
        if value > MAX_MONTH {
            return Err(Error::InvalidMonth(value.into()));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Zero-based index into the month name tables
    #[inline]
    pub(crate) const fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }
}

impl TryFrom<u8> for Month {
    type Error = Error;

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

/// A day number in the range `1..=MAX_DAY` (1..=31).
///
/// Only range sanity is checked: day 31 of a 30-day month is representable
/// and converts to an arithmetically derived date. Use the `checked`
/// constructors on the date types to reject such days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    pub const FIRST: Self = Self(NonZeroU8::MIN);

    /// Creates a new Day, validating that it's non-zero and <= `MAX_DAY`
    ///
    /// # Errors
    /// Returns `Error::InvalidDay` if the value is 0 or > `MAX_DAY`.
    pub fn new(value: u8) -> Result<Self, Error> {
        let non_zero = NonZeroU8::new(value).ok_or(Error::InvalidDay(value.into()))?;
        if value > MAX_DAY {
            return Err(Error::InvalidDay(value.into()));
        }
        Ok(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Helper functions

/// Gregorian leap rule: divisible by 4, not by 100, unless by 400.
pub const fn is_leap_year(year: i32) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Jalali leap rule of the 33-year cycle used by the converter.
///
/// Eight years of every cycle are leap: those whose shifted position in the
/// cycle is a multiple of four, except the last position (32).
pub const fn is_jalali_leap_year(year: i32) -> bool {
    let position = (year as i64 + JALALI_YEAR_SHIFT).rem_euclid(JALALI_CYCLE_YEARS);
    position % 4 == 0 && position < JALALI_CYCLE_YEARS - 1
}

pub const fn jalali_days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    match month {
        1..=6 => JALALI_LONG_MONTH_DAYS,
        7..=11 => JALALI_SHORT_MONTH_DAYS,
        _ if is_jalali_leap_year(year) => JALALI_SHORT_MONTH_DAYS,
        _ => ESFAND_DAYS_COMMON,
    }
}
