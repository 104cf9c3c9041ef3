//! strftime-like rendering of a moment as a Jalali date.
//!
//! A format string is parsed once into [`Item`]s and can then be rendered
//! against any moment in either [`Language`].
//!
//! ```
//! use chrono::NaiveDate;
//! use jalali_date::{Language, format};
//!
//! let moment = NaiveDate::from_ymd_opt(2024, 3, 20)
//!     .and_then(|d| d.and_hms_opt(14, 30, 0))
//!     .unwrap();
//! let out = format(moment, "%A %-d %B %Y, %I:%M %p", Language::Fingilish).unwrap();
//! assert_eq!(out, "4shanbe 1 farvardin 1403, 02:30 PM");
//! ```

use crate::locale::{Language, abbreviate};
use crate::{Error, JalaliDate, jalali_of, prelude::*};
use chrono::{Datelike, NaiveDateTime, Timelike, Weekday};
use std::str::FromStr;

/// The sentinel spec selecting the `year/month/day HH:MM:SS` layout.
pub const DEFAULT_SPEC: &str = "default";

const DIRECTIVE_START: char = '%';
const NO_PAD_FLAG: char = '-';

/// A single `%` directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Directive {
    #[display(fmt = "%a")]
    ShortWeekday,
    #[display(fmt = "%A")]
    FullWeekday,
    #[display(fmt = "%-d")]
    Day,
    #[display(fmt = "%d")]
    DayZero,
    #[display(fmt = "%b")]
    ShortMonth,
    #[display(fmt = "%B")]
    FullMonth,
    #[display(fmt = "%-m")]
    Month,
    #[display(fmt = "%m")]
    MonthZero,
    #[display(fmt = "%Y")]
    Year,
    /// Last two characters of the year, not padded.
    #[display(fmt = "%y")]
    Year2,
    #[display(fmt = "%-H")]
    Hour24,
    #[display(fmt = "%H")]
    Hour24Zero,
    #[display(fmt = "%-I")]
    Hour12,
    #[display(fmt = "%I")]
    Hour12Zero,
    #[display(fmt = "%p")]
    AmPm,
    #[display(fmt = "%-M")]
    Minute,
    #[display(fmt = "%M")]
    MinuteZero,
    #[display(fmt = "%-S")]
    Second,
    #[display(fmt = "%S")]
    SecondZero,
}

impl Directive {
    /// Every accepted spec, as listed in error messages.
    pub const ALLOWED: &'static [&'static str] = &[
        DEFAULT_SPEC, "%a", "%A", "%-d", "%d", "%b", "%B", "%-m", "%m", "%Y", "%y", "%-H", "%H",
        "%-I", "%I", "%p", "%-M", "%M", "%-S", "%S",
    ];

    pub fn from_token(token: &str) -> Option<Self> {
        let directive = match token {
            "%a" => Self::ShortWeekday,
            "%A" => Self::FullWeekday,
            "%-d" => Self::Day,
            "%d" => Self::DayZero,
            "%b" => Self::ShortMonth,
            "%B" => Self::FullMonth,
            "%-m" => Self::Month,
            "%m" => Self::MonthZero,
            "%Y" => Self::Year,
            "%y" => Self::Year2,
            "%-H" => Self::Hour24,
            "%H" => Self::Hour24Zero,
            "%-I" => Self::Hour12,
            "%I" => Self::Hour12Zero,
            "%p" => Self::AmPm,
            "%-M" => Self::Minute,
            "%M" => Self::MinuteZero,
            "%-S" => Self::Second,
            "%S" => Self::SecondZero,
            _ => return None,
        };
        Some(directive)
    }

    fn render(self, moment: &Moment, language: Language) -> String {
        let date = moment.date;
        let time = moment.time;
        let (is_pm, hour12) = time.hour12();
        let digits = |text: String| language.localize_digits(&text);
        match self {
            Self::ShortWeekday => abbreviate(language.weekday_name(moment.weekday)),
            Self::FullWeekday => language.weekday_name(moment.weekday).to_owned(),
            Self::ShortMonth => abbreviate(language.month_name(date.month)),
            Self::FullMonth => language.month_name(date.month).to_owned(),
            Self::AmPm => language.meridiem(is_pm).to_owned(),
            Self::Year2 => {
                let year = digits(date.year.to_string());
                let skip = year.chars().count().saturating_sub(2);
                year.chars().skip(skip).collect()
            }
            Self::Day => digits(date.day.to_string()),
            Self::DayZero => digits(zero_pad(date.day.get().into())),
            Self::Month => digits(date.month.to_string()),
            Self::MonthZero => digits(zero_pad(date.month.get().into())),
            Self::Year => digits(date.year.to_string()),
            Self::Hour24 => digits(time.hour().to_string()),
            Self::Hour24Zero => digits(zero_pad(time.hour())),
            Self::Hour12 => digits(hour12.to_string()),
            Self::Hour12Zero => digits(zero_pad(hour12)),
            Self::Minute => digits(time.minute().to_string()),
            Self::MinuteZero => digits(zero_pad(time.minute())),
            Self::Second => digits(time.second().to_string()),
            Self::SecondZero => digits(zero_pad(time.second())),
        }
    }
}

fn zero_pad(value: u32) -> String {
    format!("{value:02}")
}

/// One piece of a parsed pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Item {
    Literal(String),
    Directive(Directive),
}

/// A parsed format string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatSpec {
    /// `year/month/day HH:MM:SS`, digits localized in Farsi.
    Default,
    Pattern(Vec<Item>),
}

/// The resolved fields a spec renders from.
struct Moment {
    date: JalaliDate,
    weekday: Weekday,
    time: NaiveDateTime,
}

impl Moment {
    fn new(time: NaiveDateTime) -> Result<Self, Error> {
        Ok(Self {
            date: jalali_of(time.date())?,
            weekday: time.weekday(),
            time,
        })
    }
}

impl FormatSpec {
    /// Parses `spec` in a single left-to-right pass.
    ///
    /// A `%` in final position is a literal. `%-x` spans three characters,
    /// any other `%x` two.
    ///
    /// # Errors
    /// Returns `Error::UnsupportedFormatDirective` for the first `%`
    /// sequence that is not a known directive.
    pub fn parse(spec: &str) -> Result<Self, Error> {
        if spec == DEFAULT_SPEC {
            return Ok(Self::Default);
        }

        let chars: Vec<char> = spec.chars().collect();
        let mut items = Vec::new();
        let mut literal = String::new();
        let mut index = 0;

        while index < chars.len() {
            let c = chars[index];
            if c != DIRECTIVE_START || index == chars.len() - 1 {
                literal.push(c);
                index += 1;
                continue;
            }

            let width = if chars[index + 1] == NO_PAD_FLAG { 3 } else { 2 };
            let end = (index + width).min(chars.len());
            let token: String = chars[index..end].iter().collect();
            let directive =
                Directive::from_token(&token).ok_or_else(|| Error::UnsupportedFormatDirective {
                    directive: token,
                    allowed: Directive::ALLOWED,
                })?;

            if !literal.is_empty() {
                items.push(Item::Literal(std::mem::take(&mut literal)));
            }
            items.push(Item::Directive(directive));
            index += width;
        }

        if !literal.is_empty() {
            items.push(Item::Literal(literal));
        }

        tracing::debug!(spec, items = items.len(), "parsed format spec");
        Ok(Self::Pattern(items))
    }

    /// Renders `time` as a Jalali date/time.
    ///
    /// # Errors
    /// Returns `Error::YearOutOfRange` if the date has no Jalali equivalent.
    pub fn render(&self, time: NaiveDateTime, language: Language) -> Result<String, Error> {
        let moment = Moment::new(time)?;
        let out = match self {
            Self::Default => {
                let text = format!("{} {}", moment.date, time.format("%H:%M:%S"));
                language.localize_digits(&text)
            }
            Self::Pattern(items) => items
                .iter()
                .map(|item| match item {
                    Item::Literal(text) => text.clone(),
                    Item::Directive(directive) => directive.render(&moment, language),
                })
                .collect(),
        };
        Ok(out)
    }
}

impl FromStr for FormatSpec {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Renders `time` as a Jalali date/time according to `spec`.
///
/// # Errors
/// Returns `Error::UnsupportedFormatDirective` for an unknown `%` sequence;
/// no partial output is produced.
pub fn format(time: NaiveDateTime, spec: &str, language: Language) -> Result<String, Error> {
    FormatSpec::parse(spec)?.render(time, language)
}
