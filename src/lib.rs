mod consts;
mod convert;
mod prelude;
mod types;

pub mod config;
pub mod events;
pub mod format;
pub mod grid;
pub mod locale;

pub use consts::*;
pub use format::{Directive, FormatSpec, format};
pub use locale::Language;
pub use types::{
    Day, Month, days_in_month, is_jalali_leap_year, is_leap_year, jalali_days_in_month,
};

use crate::prelude::*;
use chrono::{Datelike, NaiveDate, NaiveDateTime, Weekday};
use std::str::FromStr;

/// Error type for every fallible operation of the crate.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// A date component is not an integer.
    #[error("Invalid {component}: {value:?} is not an integer")]
    TypeMismatch {
        component: &'static str,
        value: String,
    },

    /// A date string does not have the `year/month/day` shape.
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    #[error("Invalid month: {0} (must be 1-{max})", max = MAX_MONTH)]
    InvalidMonth(i64),

    #[error("Invalid day: {0} (must be 1-{max})", max = MAX_DAY)]
    InvalidDay(i64),

    /// A converted year does not fit in an `i32`.
    #[error("Year out of range: {0}")]
    YearOutOfRange(i64),

    /// Day past the end of its month, only raised by the `checked` constructors.
    #[error("Invalid day {day} for month {year}/{month}")]
    DayOutOfMonth { year: i32, month: u8, day: u8 },

    #[error("Unsupported language {value:?}: only {allowed:?} are allowed")]
    UnsupportedLanguage {
        value: String,
        allowed: &'static [&'static str],
    },

    #[error("Unsupported month {value:?}: only {allowed:?} or 0-12 are allowed")]
    UnsupportedMonth {
        value: String,
        allowed: &'static [&'static str],
    },

    #[error("Unsupported color {value:?}: only {allowed:?} are allowed")]
    UnsupportedColor {
        value: String,
        allowed: &'static [&'static str],
    },

    #[error("Unsupported style {value:?}: only {allowed:?} are allowed")]
    UnsupportedStyle {
        value: String,
        allowed: &'static [&'static str],
    },

    #[error("Unsupported format directive {directive:?}: only {allowed:?} are allowed")]
    UnsupportedFormatDirective {
        directive: String,
        allowed: &'static [&'static str],
    },

    /// Writing rendered output failed.
    #[error("Output error: {0}")]
    Io(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

/// A date in the Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{year}/{month}/{day}")]
pub struct GregorianDate {
    pub year: i32,
    pub month: Month,
    pub day: Day,
}

/// A date in the Jalali (Solar Hijri) calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
#[display(fmt = "{year}/{month}/{day}")]
pub struct JalaliDate {
    pub year: i32,
    pub month: Month,
    pub day: Day,
}

impl GregorianDate {
    /// Creates a date after range sanity checks on month and day.
    ///
    /// The day is not checked against the length of the month.
    ///
    /// # Errors
    /// Returns `Error::InvalidMonth` or `Error::InvalidDay`.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, Error> {
        Ok(Self {
            year,
            month: Month::new(month)?,
            day: Day::new(day)?,
        })
    }

    /// Like [`GregorianDate::new`], also rejecting days past the end of the month.
    ///
    /// # Errors
    /// Returns `Error::DayOutOfMonth` in addition to the errors of `new`.
    pub fn checked(year: i32, month: u8, day: u8) -> Result<Self, Error> {
        let date = Self::new(year, month, day)?;
        if day > days_in_month(year, month) {
            return Err(Error::DayOutOfMonth { year, month, day });
        }
        Ok(date)
    }

    /// # Errors
    /// Returns `Error::YearOutOfRange` if the Jalali year does not fit in an `i32`.
    pub fn to_jalali(self) -> Result<JalaliDate, Error> {
        let (year, month, day) =
            convert::gregorian_to_jalali(self.year, self.month.get(), self.day.get())?;
        tracing::trace!(gregorian = %self, year, month, day, "converted to jalali");
        JalaliDate::new(year, month, day)
    }

    /// Returns `(year, month, day)` as plain integers.
    pub const fn to_tuple(self) -> (i32, u8, u8) {
        (self.year, self.month.get(), self.day.get())
    }

    /// Returns the equivalent `chrono` date, or `None` if the day does not
    /// exist in its month.
    pub fn to_naive(self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month.get().into(), self.day.get().into())
    }

    pub fn weekday(self) -> Option<Weekday> {
        self.to_naive().map(|date| date.weekday())
    }
}

impl JalaliDate {
    /// Creates a date after range sanity checks on month and day.
    ///
    /// The day is not checked against the length of the month.
    ///
    /// # Errors
    /// Returns `Error::InvalidMonth` or `Error::InvalidDay`.
    pub fn new(year: i32, month: u8, day: u8) -> Result<Self, Error> {
        Ok(Self {
            year,
            month: Month::new(month)?,
            day: Day::new(day)?,
        })
    }

    /// Like [`JalaliDate::new`], also rejecting days past the end of the month.
    ///
    /// # Errors
    /// Returns `Error::DayOutOfMonth` in addition to the errors of `new`.
    pub fn checked(year: i32, month: u8, day: u8) -> Result<Self, Error> {
        let date = Self::new(year, month, day)?;
        if day > jalali_days_in_month(year, month) {
            return Err(Error::DayOutOfMonth { year, month, day });
        }
        Ok(date)
    }

    /// # Errors
    /// Returns `Error::YearOutOfRange` if the Gregorian year does not fit in an `i32`.
    pub fn to_gregorian(self) -> Result<GregorianDate, Error> {
        let (year, month, day) =
            convert::jalali_to_gregorian(self.year, self.month.get(), self.day.get())?;
        tracing::trace!(jalali = %self, year, month, day, "converted to gregorian");
        GregorianDate::new(year, month, day)
    }

    /// Returns `(year, month, day)` as plain integers.
    pub const fn to_tuple(self) -> (i32, u8, u8) {
        (self.year, self.month.get(), self.day.get())
    }

    pub fn is_leap_year(self) -> bool {
        is_jalali_leap_year(self.year)
    }

    /// Number of days in this date's month.
    pub fn days_in_month(self) -> u8 {
        jalali_days_in_month(self.year, self.month.get())
    }

    /// `None` if the Gregorian equivalent is not representable.
    pub fn weekday(self) -> Option<Weekday> {
        self.to_gregorian().ok()?.weekday()
    }
}

impl TryFrom<NaiveDate> for GregorianDate {
    type Error = Error;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        let (month, day) = (date.month(), date.day());
        let month = u8::try_from(month).map_err(|_| Error::InvalidMonth(month.into()))?;
        let day = u8::try_from(day).map_err(|_| Error::InvalidDay(day.into()))?;
        Self::new(date.year(), month, day)
    }
}

impl TryFrom<GregorianDate> for JalaliDate {
    type Error = Error;

    fn try_from(date: GregorianDate) -> Result<Self, Self::Error> {
        date.to_jalali()
    }
}

impl TryFrom<JalaliDate> for GregorianDate {
    type Error = Error;

    fn try_from(date: JalaliDate) -> Result<Self, Self::Error> {
        date.to_gregorian()
    }
}

/// The Jalali date of a `chrono` calendar day.
///
/// # Errors
/// Never fails for dates `chrono` can represent; the error type is shared
/// with the other conversions.
pub fn jalali_of(date: NaiveDate) -> Result<JalaliDate, Error> {
    GregorianDate::try_from(date)?.to_jalali()
}

/// Converts a Gregorian date to Jalali.
///
/// ```
/// assert_eq!(
///     jalali_date::gregorian_to_jalali(2024, 3, 20).unwrap().to_tuple(),
///     (1403, 1, 1)
/// );
/// ```
///
/// # Errors
/// Returns `Error::InvalidMonth` / `Error::InvalidDay` if a component fails
/// the range sanity check, `Error::YearOutOfRange` if the result does not fit.
/// Days past the end of the month are not rejected.
pub fn gregorian_to_jalali(year: i32, month: u8, day: u8) -> Result<JalaliDate, Error> {
    GregorianDate::new(year, month, day)?.to_jalali()
}

/// Converts a Jalali date to Gregorian.
///
/// # Errors
/// Same as [`gregorian_to_jalali`].
pub fn jalali_to_gregorian(year: i32, month: u8, day: u8) -> Result<GregorianDate, Error> {
    JalaliDate::new(year, month, day)?.to_gregorian()
}

/// Formats the current local date and time.
///
/// # Errors
/// Returns `Error::UnsupportedFormatDirective` for an unknown `%` sequence.
pub fn now(spec: &str, language: Language) -> Result<String, Error> {
    now_at(chrono::Local::now().naive_local(), spec, language)
}

/// Formats `moment` as if it were the current date and time.
///
/// # Errors
/// Same as [`now`].
pub fn now_at(moment: NaiveDateTime, spec: &str, language: Language) -> Result<String, Error> {
    format(moment, spec, language)
}

// --- parsing of "year/month/day" ---

/// Splits `y/m/d` into integers, reporting the first non-integral component.
fn parse_components(s: &str) -> Result<(i32, u8, u8), Error> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(Error::InvalidFormat("empty date string".to_owned()));
    }

    let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
    let [year, month, day] = parts.as_slice() else {
        return Err(Error::InvalidFormat(format!(
            "expected year{DATE_SEPARATOR}month{DATE_SEPARATOR}day, found {} components",
            parts.len()
        )));
    };

    let year = parse_integer("year", year)?;
    let month = parse_integer("month", month)?;
    let day = parse_integer("day", day)?;

    let year = i32::try_from(year).map_err(|_| Error::InvalidFormat(format!("year {year} out of range")))?;
    let month = u8::try_from(month).map_err(|_| Error::InvalidMonth(month))?;
    let day = u8::try_from(day).map_err(|_| Error::InvalidDay(day))?;
    Ok((year, month, day))
}

fn parse_integer(component: &'static str, value: &str) -> Result<i64, Error> {
    value.parse::<i64>().map_err(|_| Error::TypeMismatch {
        component,
        value: value.to_owned(),
    })
}

impl FromStr for GregorianDate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = parse_components(s)?;
        Self::new(year, month, day)
    }
}

impl FromStr for JalaliDate {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (year, month, day) = parse_components(s)?;
        Self::new(year, month, day)
    }
}

impl serde::Serialize for GregorianDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for GregorianDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl serde::Serialize for JalaliDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for JalaliDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
