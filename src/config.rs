//! Per-operation options and their TOML file representation.

use crate::format::DEFAULT_SPEC;
use crate::grid::{CalendarColor, CalendarStyle, MonthSelector};
use crate::locale::Language;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Options of [`crate::now`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NowOptions {
    /// Format spec, `"default"` or a `%` pattern.
    pub format: String,
    pub language: Language,
}

impl Default for NowOptions {
    fn default() -> Self {
        Self {
            format: DEFAULT_SPEC.to_owned(),
            language: Language::default(),
        }
    }
}

/// Options of the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CalendarOptions {
    pub month: MonthSelector,
    pub language: Language,
    pub color: CalendarColor,
    pub style: CalendarStyle,
}

/// Options of the event listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EventsOptions {
    pub month: MonthSelector,
    /// Print `<month> <day>: <event>` lines instead of returning pairs.
    pub inplace: bool,
}

/// Top-level configuration file.
///
/// Every section and field is optional:
///
/// ```toml
/// [now]
/// format = "%A %-d %B %Y"
/// language = "fingilish"
///
/// [calendar]
/// month = "mehr"
/// color = "cyan"
/// style = "underline"
///
/// [events]
/// month = 1
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub now: NowOptions,
    pub calendar: CalendarOptions,
    pub events: EventsOptions,
}

/// Error type for loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl Config {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    /// Returns `ConfigError::Parse` for malformed TOML, unknown keys or
    /// values outside the closed sets.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses the configuration file at `path`.
    ///
    /// # Errors
    /// Returns `ConfigError::Read` if the file cannot be read, otherwise the
    /// errors of [`Config::from_toml_str`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_owned(),
            source,
        })?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Month;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.now.format, "default");
        assert_eq!(config.now.language, Language::Farsi);
        assert_eq!(config.calendar.month, MonthSelector::Now);
        assert_eq!(config.calendar.color, CalendarColor::Default);
        assert_eq!(config.calendar.style, CalendarStyle::Highlight);
        assert!(!config.events.inplace);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(Config::from_toml_str("").unwrap(), Config::default());
    }

    #[test]
    fn test_full_toml() {
        let config = Config::from_toml_str(
            r#"
            [now]
            format = "%A %-d %B %Y"
            language = "fingilish"

            [calendar]
            month = "mehr"
            color = "cyan"
            style = "underline"

            [events]
            month = 1
            inplace = true
            "#,
        )
        .unwrap();

        assert_eq!(config.now.format, "%A %-d %B %Y");
        assert_eq!(config.now.language, Language::Fingilish);
        assert_eq!(config.calendar.month, MonthSelector::Month(Month::new(7).unwrap()));
        assert_eq!(config.calendar.language, Language::Farsi);
        assert_eq!(config.calendar.color, CalendarColor::Cyan);
        assert_eq!(config.calendar.style, CalendarStyle::Underline);
        assert_eq!(config.events.month, MonthSelector::Month(Month::new(1).unwrap()));
        assert!(config.events.inplace);
    }

    #[test]
    fn test_rejects_values_outside_closed_sets() {
        let err = Config::from_toml_str("[calendar]\ncolor = \"purple\"").unwrap_err();
        assert!(err.to_string().contains("Unsupported color"));

        let err = Config::from_toml_str("[now]\nlanguage = \"english\"").unwrap_err();
        assert!(err.to_string().contains("Unsupported language"));

        assert!(Config::from_toml_str("[events]\nmonth = 13").is_err());
    }

    #[test]
    fn test_rejects_unknown_keys() {
        assert!(Config::from_toml_str("[now]\nzone = \"UTC\"").is_err());
        assert!(Config::from_toml_str("[clock]").is_err());
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/nonexistent/jalali.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn test_serde_json_round() {
        let options = CalendarOptions {
            month: MonthSelector::Month(Month::new(12).unwrap()),
            language: Language::Fingilish,
            color: CalendarColor::Gray,
            style: CalendarStyle::Blink,
        };
        let json = serde_json::to_string(&options).unwrap();
        assert_eq!(
            json,
            r#"{"month":"esfand","language":"fingilish","color":"gray","style":"blink"}"#
        );
        let parsed: CalendarOptions = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, options);
    }
}
