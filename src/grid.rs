//! Month grid rendering with ANSI color and style escapes.

use crate::config::CalendarOptions;
use crate::locale::{FINGILISH_MONTHS, Language, to_farsi_digits};
use crate::{Error, JalaliDate, Month, jalali_days_in_month, jalali_of, prelude::*};
use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::str::FromStr;

const RESET: &str = "\x1b[0m";

/// Width of the title area and the rule under it.
const GRID_WIDTH: usize = 20;
const RULE: char = '—';
const DAYS_PER_WEEK: usize = 7;
/// Width of a day number inside its cell, a space follows each cell.
const CELL_WIDTH: usize = 2;

const FARSI_HEADER: &str = "شن ۱ش ۲ش ۳ش ۴ش ۵ش جم";
const FINGILISH_HEADER: &str = "sh 1s 2s 3s 4s 5s jo";

/// Which month of the current Jalali year to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(into = "String")]
pub enum MonthSelector {
    /// The month containing today.
    #[default]
    Now,
    Month(Month),
}

/// Month selectors arrive as names or numbers in config files.
#[derive(Deserialize)]
#[serde(untagged)]
enum MonthValue {
    Number(i64),
    Name(String),
}

impl MonthSelector {
    pub const NAMES: &'static [&'static str] = &[
        "now",
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

    /// Selects by number, where 0 means the current month.
    ///
    /// # Errors
    /// Returns `Error::UnsupportedMonth` outside `0..=12`.
    pub fn from_number(value: i64) -> Result<Self, Error> {
        let unsupported = || Error::UnsupportedMonth {
            value: value.to_string(),
            allowed: Self::NAMES,
        };
        match u8::try_from(value).map_err(|_| unsupported())? {
            0 => Ok(Self::Now),
            n => Month::new(n).map(Self::Month).map_err(|_| unsupported()),
        }
    }

    /// The concrete month this selector stands for on `today`.
    pub const fn resolve(self, today: JalaliDate) -> Month {
        match self {
            Self::Now => today.month,
            Self::Month(month) => month,
        }
    }
}

impl FromStr for MonthSelector {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Ok(number) = s.parse::<i64>() {
            return Self::from_number(number);
        }
        if s == "now" {
            return Ok(Self::Now);
        }
        FINGILISH_MONTHS
            .iter()
            .zip(1u8..)
            .find(|(name, _)| **name == s)
            .and_then(|(_, number)| Month::new(number).ok())
            .map(Self::Month)
            .ok_or_else(|| Error::UnsupportedMonth {
                value: s.to_owned(),
                allowed: Self::NAMES,
            })
    }
}

impl<'de> Deserialize<'de> for MonthSelector {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        match MonthValue::deserialize(deserializer)? {
            MonthValue::Number(n) => Self::from_number(n),
            MonthValue::Name(name) => name.parse(),
        }
        .map_err(serde::de::Error::custom)
    }
}

impl std::fmt::Display for MonthSelector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Now => f.write_str("now"),
            Self::Month(month) => f.write_str(Language::Fingilish.month_name(*month)),
        }
    }
}

impl From<MonthSelector> for String {
    fn from(selector: MonthSelector) -> Self {
        selector.to_string()
    }
}

/// Foreground color of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CalendarColor {
    /// Terminal default.
    #[default]
    #[display(fmt = "def")]
    Default,
    #[display(fmt = "black")]
    Black,
    #[display(fmt = "red")]
    Red,
    #[display(fmt = "blue")]
    Blue,
    #[display(fmt = "cyan")]
    Cyan,
    #[display(fmt = "green")]
    Green,
    #[display(fmt = "yellow")]
    Yellow,
    #[display(fmt = "pink")]
    Pink,
    #[display(fmt = "gray")]
    Gray,
}

impl CalendarColor {
    pub const ALL: [Self; 9] = [
        Self::Default,
        Self::Black,
        Self::Red,
        Self::Blue,
        Self::Cyan,
        Self::Green,
        Self::Yellow,
        Self::Pink,
        Self::Gray,
    ];

    pub const NAMES: &'static [&'static str] =
        &["def", "black", "red", "blue", "cyan", "green", "yellow", "pink", "gray"];

    pub const fn escape(self) -> &'static str {
        match self {
            Self::Default => RESET,
            Self::Black => "\x1b[30m",
            Self::Red => "\x1b[91m",
            Self::Blue => "\x1b[94m",
            Self::Cyan => "\x1b[36m",
            Self::Green => "\x1b[92m",
            Self::Yellow => "\x1b[93m",
            Self::Pink => "\x1b[95m",
            Self::Gray => "\x1b[90m",
        }
    }
}

impl FromStr for CalendarColor {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|color| color.to_string() == s)
            .ok_or_else(|| Error::UnsupportedColor {
                value: s.to_owned(),
                allowed: Self::NAMES,
            })
    }
}

impl TryFrom<String> for CalendarColor {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CalendarColor> for String {
    fn from(color: CalendarColor) -> Self {
        color.to_string()
    }
}

/// How today's cell is marked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum CalendarStyle {
    /// Gray background.
    #[default]
    #[display(fmt = "highlight")]
    Highlight,
    #[display(fmt = "underline")]
    Underline,
    #[display(fmt = "blink")]
    Blink,
}

impl CalendarStyle {
    pub const ALL: [Self; 3] = [Self::Highlight, Self::Underline, Self::Blink];
    pub const NAMES: &'static [&'static str] = &["highlight", "underline", "blink"];

    pub const fn escape(self) -> &'static str {
        match self {
            Self::Highlight => "\x1b[100m",
            Self::Underline => "\x1b[4m",
            Self::Blink => "\x1b[5m",
        }
    }
}

impl FromStr for CalendarStyle {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|style| style.to_string() == s)
            .ok_or_else(|| Error::UnsupportedStyle {
                value: s.to_owned(),
                allowed: Self::NAMES,
            })
    }
}

impl TryFrom<String> for CalendarStyle {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CalendarStyle> for String {
    fn from(style: CalendarStyle) -> Self {
        style.to_string()
    }
}

/// Column of a weekday in a Saturday-first week.
fn column(weekday: Weekday) -> usize {
    (weekday.num_days_from_monday() as usize + 2) % DAYS_PER_WEEK
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    chars
        .next()
        .map(|first| first.to_uppercase().chain(chars).collect())
        .unwrap_or_default()
}

/// Renders the selected month of the Jalali year containing `today`.
///
/// Rows run Saturday to Friday; Farsi rows are mirrored so Saturday is the
/// rightmost column. Today's cell is wrapped in the style escape.
///
/// # Errors
/// Returns `Error::YearOutOfRange` if `today` has no Jalali equivalent.
pub fn render_month(today: NaiveDate, options: &CalendarOptions) -> Result<String, Error> {
    let today = jalali_of(today)?;
    let month = options.month.resolve(today);
    let year = today.year;
    let language = options.language;
    let color = options.color.escape();
    let style = options.style.escape();

    let first = JalaliDate {
        year,
        month,
        day: crate::Day::FIRST,
    };
    // The first of a month always maps to a real Gregorian date.
    let offset = first.weekday().map_or(0, column);
    let days = jalali_days_in_month(year, month.get());
    tracing::debug!(%first, offset, days, %language, "rendering month grid");

    let title = match language {
        Language::Farsi => format!(
            "{} {}",
            to_farsi_digits(&year.to_string()),
            language.month_name(month)
        ),
        Language::Fingilish => format!("{} {year}", capitalize(language.month_name(month))),
    };
    let header = match language {
        Language::Farsi => FARSI_HEADER,
        Language::Fingilish => FINGILISH_HEADER,
    };

    let padding = GRID_WIDTH.saturating_sub(title.chars().count()) / 2;
    let mut out = String::new();
    out.push_str(&" ".repeat(padding));
    out.push_str(color);
    out.push_str(&title);
    out.push_str(RESET);
    out.push('\n');
    out.extend(std::iter::repeat_n(RULE, GRID_WIDTH));
    out.push('\n');
    out.push_str(header);
    out.push('\n');

    let mut cells: Vec<Option<u8>> = vec![None; offset];
    cells.extend((1..=days).map(Some));

    for week in cells.chunks(DAYS_PER_WEEK) {
        let mut row: Vec<Option<u8>> = week.to_vec();
        row.resize(DAYS_PER_WEEK, None);
        if language == Language::Farsi {
            row.reverse();
        }
        let used = row.iter().rposition(Option::is_some).map_or(0, |i| i + 1);

        for cell in &row[..used] {
            match cell {
                None => out.push_str(&" ".repeat(CELL_WIDTH + 1)),
                Some(day) => {
                    let number = language.localize_digits(&format!("{day:>CELL_WIDTH$}"));
                    let is_today = month == today.month && *day == today.day.get();
                    if is_today {
                        out.push_str(style);
                        out.push_str(&number);
                        out.push_str(RESET);
                    } else {
                        out.push_str(color);
                        out.push_str(&number);
                    }
                    out.push(' ');
                }
            }
        }
        out.push_str(RESET);
        out.push('\n');
    }

    Ok(out)
}

/// Prints the month grid for the local date to standard output.
///
/// # Errors
/// Returns `Error::Io` if standard output cannot be written, otherwise the
/// errors of [`render_month`].
pub fn print_calendar(options: &CalendarOptions) -> Result<(), Error> {
    let today = chrono::Local::now().date_naive();
    let grid = render_month(today, options)?;
    let mut stdout = std::io::stdout().lock();
    stdout.write_all(grid.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    // 1403/1/1, a Wednesday
    fn nowruz() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 20).unwrap()
    }

    fn options(month: MonthSelector, language: Language) -> CalendarOptions {
        CalendarOptions {
            month,
            language,
            ..CalendarOptions::default()
        }
    }

    #[test]
    fn test_month_selector_parse() {
        assert_eq!("now".parse::<MonthSelector>().unwrap(), MonthSelector::Now);
        assert_eq!("0".parse::<MonthSelector>().unwrap(), MonthSelector::Now);
        assert_eq!(
            "esfand".parse::<MonthSelector>().unwrap(),
            MonthSelector::Month(Month::new(12).unwrap())
        );
        assert_eq!(
            "7".parse::<MonthSelector>().unwrap(),
            MonthSelector::Month(Month::new(7).unwrap())
        );
        assert!(matches!(
            "13".parse::<MonthSelector>(),
            Err(Error::UnsupportedMonth { .. })
        ));
        assert!(matches!(
            "-1".parse::<MonthSelector>(),
            Err(Error::UnsupportedMonth { .. })
        ));
        assert!(matches!(
            "Farvardin".parse::<MonthSelector>(),
            Err(Error::UnsupportedMonth { .. })
        ));
    }

    #[test]
    fn test_month_selector_serde() {
        let parsed: MonthSelector = serde_json::from_str("3").unwrap();
        assert_eq!(parsed, MonthSelector::Month(Month::new(3).unwrap()));
        let parsed: MonthSelector = serde_json::from_str(r#""mehr""#).unwrap();
        assert_eq!(parsed, MonthSelector::Month(Month::new(7).unwrap()));
        let json = serde_json::to_string(&MonthSelector::Now).unwrap();
        assert_eq!(json, r#""now""#);
        assert!(serde_json::from_str::<MonthSelector>("13").is_err());
    }

    #[test]
    fn test_resolve() {
        let today = JalaliDate::new(1403, 5, 10).unwrap();
        assert_eq!(MonthSelector::Now.resolve(today).get(), 5);
        let dey = MonthSelector::Month(Month::new(10).unwrap());
        assert_eq!(dey.resolve(today).get(), 10);
    }

    #[test]
    fn test_color_and_style_parse() {
        assert_eq!("def".parse::<CalendarColor>().unwrap(), CalendarColor::Default);
        assert_eq!("pink".parse::<CalendarColor>().unwrap(), CalendarColor::Pink);
        assert_eq!(CalendarColor::Red.escape(), "\x1b[91m");
        let err = "purple".parse::<CalendarColor>().unwrap_err();
        assert!(err.to_string().contains(r#""gray""#));

        assert_eq!("blink".parse::<CalendarStyle>().unwrap(), CalendarStyle::Blink);
        assert_eq!(CalendarStyle::Highlight.escape(), "\x1b[100m");
        assert!(matches!(
            "bold".parse::<CalendarStyle>(),
            Err(Error::UnsupportedStyle { .. })
        ));
    }

    #[test]
    fn test_column_is_saturday_first() {
        assert_eq!(column(Weekday::Sat), 0);
        assert_eq!(column(Weekday::Sun), 1);
        assert_eq!(column(Weekday::Wed), 4);
        assert_eq!(column(Weekday::Fri), 6);
    }

    #[test]
    fn test_render_fingilish_farvardin_1403() {
        let grid =
            render_month(nowruz(), &options(MonthSelector::Now, Language::Fingilish)).unwrap();
        let lines: Vec<&str> = grid.lines().collect();

        // title, rule, header and five weeks
        assert_eq!(lines.len(), 8);
        assert!(lines[0].contains("Farvardin 1403"));
        assert_eq!(lines[1], "—".repeat(20));
        assert_eq!(lines[2], FINGILISH_HEADER);

        // Wednesday is the fifth column
        let first_week = format!(
            "{}\x1b[100m 1\x1b[0m \x1b[0m 2 \x1b[0m 3 \x1b[0m",
            " ".repeat(12)
        );
        assert_eq!(lines[3], first_week);
        assert!(lines[7].contains("31"));
    }

    #[test]
    fn test_render_other_month_has_no_today_marker() {
        let mehr = MonthSelector::Month(Month::new(7).unwrap());
        let grid = render_month(nowruz(), &options(mehr, Language::Fingilish)).unwrap();
        assert!(grid.contains("Mehr 1403"));
        assert!(!grid.contains(CalendarStyle::Highlight.escape()));
        assert!(grid.contains("30"));
        assert!(!grid.contains("31"));
    }

    #[test]
    fn test_render_leap_esfand() {
        let esfand = MonthSelector::Month(Month::new(12).unwrap());
        let grid = render_month(nowruz(), &options(esfand, Language::Fingilish)).unwrap();
        assert!(grid.contains("30 "));

        // 2023-06-01 falls in 1402, whose Esfand has 29 days
        let in_1402 = NaiveDate::from_ymd_opt(2023, 6, 1).unwrap();
        let grid = render_month(in_1402, &options(esfand, Language::Fingilish)).unwrap();
        assert!(grid.contains("Esfand 1402"));
        assert!(grid.contains("29 "));
        assert!(!grid.contains("30 "));
    }

    #[test]
    fn test_render_farsi_mirrors_rows() {
        let grid =
            render_month(nowruz(), &options(MonthSelector::Now, Language::Farsi)).unwrap();
        let lines: Vec<&str> = grid.lines().collect();
        assert!(lines[0].contains("۱۴۰۳ فروردین"));
        assert_eq!(lines[2], FARSI_HEADER);
        // Friday, Thursday, then today (Wednesday) at the third column
        let first_week = "\x1b[0m ۳ \x1b[0m ۲ \x1b[100m ۱\x1b[0m \x1b[0m";
        assert_eq!(lines[3], first_week);
        assert!(grid.contains("۳۱"));
    }

    #[test]
    fn test_render_uses_color() {
        let opts = CalendarOptions {
            color: CalendarColor::Cyan,
            style: CalendarStyle::Underline,
            ..options(MonthSelector::Now, Language::Fingilish)
        };
        let grid = render_month(nowruz(), &opts).unwrap();
        assert!(grid.contains("\x1b[36m 2 "));
        assert!(grid.contains("\x1b[4m 1\x1b[0m"));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("farvardin"), "Farvardin");
        assert_eq!(capitalize(""), "");
    }
}
