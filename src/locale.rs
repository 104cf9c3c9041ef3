//! Fixed display tables for the two supported languages.

use crate::{Error, Month, prelude::*};
use chrono::Weekday;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Farsi digit glyphs, indexed by ASCII digit value.
pub const FARSI_DIGITS: [char; 10] = ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

/// Weekday names starting Monday.
const FARSI_WEEKDAYS: [&str; 7] = ["دوشنبه", "سه شنبه", "چهارشنبه", "پنجشنبه", "جمعه", "شنبه", "یکشنبه"];
const FINGILISH_WEEKDAYS: [&str; 7] = ["2shanbe", "3shanbe", "4shanbe", "5shanbe", "jomeh", "shanbe", "1shanbe"];

pub const FARSI_MONTHS: [&str; 12] = [
    "فروردین",
    "اردیبهشت",
    "خرداد",
    "تیر",
    "مرداد",
    "شهریور",
    "مهر",
    "آبان",
    "آذر",
    "دی",
    "بهمن",
    "اسفند",
];

// Also the accepted month names of the CLI and config.
pub const FINGILISH_MONTHS: [&str; 12] = [
    "farvardin",
    "ordibehesht",
    "khordad",
    "tir",
    "mordad",
    "shahrivar",
    "mehr",
    "aban",
    "azar",
    "dey",
    "bahman",
    "esfand",
];

const FARSI_AM: &str = "صبح";
const FARSI_PM: &str = "بعد از ظهر";

/// Length of abbreviated weekday and month names, in characters.
const SHORT_NAME_CHARS: usize = 3;

/// Output language of formatted dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Language {
    #[default]
    #[display(fmt = "farsi")]
    Farsi,
    /// Latin transliteration of the Farsi names, ASCII digits.
    #[display(fmt = "fingilish")]
    Fingilish,
}

impl Language {
    pub const NAMES: &'static [&'static str] = &["farsi", "fingilish"];

    pub fn weekday_name(self, weekday: Weekday) -> &'static str {
        let index = weekday.num_days_from_monday() as usize;
        match self {
            Self::Farsi => FARSI_WEEKDAYS[index],
            Self::Fingilish => FINGILISH_WEEKDAYS[index],
        }
    }

    pub const fn month_name(self, month: Month) -> &'static str {
        match self {
            Self::Farsi => FARSI_MONTHS[month.index()],
            Self::Fingilish => FINGILISH_MONTHS[month.index()],
        }
    }

    /// Morning/afternoon phrase in Farsi, the raw `AM`/`PM` marker otherwise.
    pub const fn meridiem(self, is_pm: bool) -> &'static str {
        match (self, is_pm) {
            (Self::Farsi, false) => FARSI_AM,
            (Self::Farsi, true) => FARSI_PM,
            (Self::Fingilish, false) => "AM",
            (Self::Fingilish, true) => "PM",
        }
    }

    /// Applies the digit glyphs of this language to `s`.
    pub fn localize_digits(self, s: &str) -> String {
        match self {
            Self::Farsi => to_farsi_digits(s),
            Self::Fingilish => s.to_owned(),
        }
    }
}

/// Maps every ASCII digit to its Farsi glyph; other characters pass through.
pub fn to_farsi_digits(s: &str) -> String {
    s.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) => FARSI_DIGITS[d as usize],
            None => c,
        })
        .collect()
}

/// First three characters of a name, counted in Unicode scalar values.
pub(crate) fn abbreviate(name: &str) -> String {
    name.chars().take(SHORT_NAME_CHARS).collect()
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "farsi" => Ok(Self::Farsi),
            "fingilish" => Ok(Self::Fingilish),
            _ => Err(Error::UnsupportedLanguage {
                value: s.to_owned(),
                allowed: Self::NAMES,
            }),
        }
    }
}

impl TryFrom<String> for Language {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Language> for String {
    fn from(language: Language) -> Self {
        language.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_farsi_digits() {
        assert_eq!(to_farsi_digits("1403/1/1 09:05"), "۱۴۰۳/۱/۱ ۰۹:۰۵");
        assert_eq!(to_farsi_digits("abc-"), "abc-");
    }

    #[test]
    fn test_non_ascii_digits_untouched() {
        // Arabic-Indic digits are digits, but not ASCII ones
        assert_eq!(to_farsi_digits("٣"), "٣");
    }

    #[test]
    fn test_localize_digits_by_language() {
        assert_eq!(Language::Farsi.localize_digits("1403"), "۱۴۰۳");
        assert_eq!(Language::Fingilish.localize_digits("1403"), "1403");
    }

    #[test]
    fn test_weekday_names() {
        assert_eq!(Language::Farsi.weekday_name(Weekday::Sat), "شنبه");
        assert_eq!(Language::Farsi.weekday_name(Weekday::Tue), "سه شنبه");
        assert_eq!(Language::Fingilish.weekday_name(Weekday::Fri), "jomeh");
        assert_eq!(Language::Fingilish.weekday_name(Weekday::Sun), "1shanbe");
    }

    #[test]
    fn test_month_names() {
        let first = Month::new(1).unwrap();
        let last = Month::new(12).unwrap();
        assert_eq!(Language::Farsi.month_name(first), "فروردین");
        assert_eq!(Language::Fingilish.month_name(first), "farvardin");
        assert_eq!(Language::Farsi.month_name(last), "اسفند");
        assert_eq!(Language::Fingilish.month_name(last), "esfand");
    }

    #[test]
    fn test_abbreviate_counts_characters() {
        assert_eq!(abbreviate("ordibehesht"), "ord");
        assert_eq!(abbreviate("سه شنبه"), "سه ");
        assert_eq!(abbreviate("دی"), "دی");
    }

    #[test]
    fn test_meridiem() {
        assert_eq!(Language::Farsi.meridiem(false), "صبح");
        assert_eq!(Language::Farsi.meridiem(true), "بعد از ظهر");
        assert_eq!(Language::Fingilish.meridiem(true), "PM");
    }

    #[test]
    fn test_parse_language() {
        assert_eq!("farsi".parse::<Language>().unwrap(), Language::Farsi);
        assert_eq!("fingilish".parse::<Language>().unwrap(), Language::Fingilish);
        let err = "english".parse::<Language>().unwrap_err();
        assert_eq!(
            err.to_string(),
            r#"Unsupported language "english": only ["farsi", "fingilish"] are allowed"#
        );
    }

    #[test]
    fn test_language_serde() {
        let json = serde_json::to_string(&Language::Fingilish).unwrap();
        assert_eq!(json, r#""fingilish""#);
        let parsed: Language = serde_json::from_str(r#""farsi""#).unwrap();
        assert_eq!(parsed, Language::Farsi);
        assert!(serde_json::from_str::<Language>(r#""latin""#).is_err());
    }

    #[test]
    fn test_default_is_farsi() {
        assert_eq!(Language::default(), Language::Farsi);
        assert_eq!(Language::default().to_string(), "farsi");
    }
}
