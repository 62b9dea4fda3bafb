//! Named date/time format patterns.
//!
//! Patterns use moment-style tokens (`YYYY`, `MMM`, `ddd`, `HH`, `A`) plus the
//! locale macros `L`, `LL`, `ll`, `lll` and `LT`. Rendering them is up to the
//! locale formatter; this module only owns the table and how callers override it.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// The process-wide default table. Read-only; adapters clone and merge it.
pub static DEFAULT_FORMATS: LazyLock<DateFormats> = LazyLock::new(|| {
    use FormatKey::*;
    let defaults = [
        (NormalDateWithWeekday, "ddd, MMM D"),
        (NormalDate, "D MMMM"),
        (ShortDate, "MMM D"),
        (MonthAndDate, "MMMM D"),
        (DayOfMonth, "D"),
        (Year, "YYYY"),
        (Month, "MMMM"),
        (MonthShort, "MMM"),
        (MonthAndYear, "MMMM YYYY"),
        (Weekday, "dddd"),
        (WeekdayShort, "ddd"),
        (Minutes, "mm"),
        (Hours12h, "hh"),
        (Hours24h, "HH"),
        (Seconds, "ss"),
        (FullTime, "LT"),
        (FullTime12h, "hh:mm A"),
        (FullTime24h, "HH:mm"),
        (FullDate, "ll"),
        (FullDateWithWeekday, "dddd, LL"),
        (FullDateTime, "lll"),
        (FullDateTime12h, "ll hh:mm A"),
        (FullDateTime24h, "ll HH:mm"),
        (KeyboardDate, "L"),
        (KeyboardDateTime, "L LT"),
        (KeyboardDateTime12h, "L hh:mm A"),
        (KeyboardDateTime24h, "L HH:mm"),
    ];
    DateFormats(
        defaults
            .into_iter()
            .map(|(key, pattern)| (key, pattern.to_string()))
            .collect(),
    )
});

// =============================================================================
// Format Key
// =============================================================================

/// Key of a named pattern in `DateFormats`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FormatKey {
    NormalDateWithWeekday,
    NormalDate,
    ShortDate,
    MonthAndDate,
    DayOfMonth,
    Year,
    Month,
    MonthShort,
    MonthAndYear,
    Weekday,
    WeekdayShort,
    Minutes,
    Hours12h,
    Hours24h,
    Seconds,
    FullTime,
    FullTime12h,
    FullTime24h,
    FullDate,
    FullDateWithWeekday,
    FullDateTime,
    FullDateTime12h,
    FullDateTime24h,
    KeyboardDate,
    KeyboardDateTime,
    KeyboardDateTime12h,
    KeyboardDateTime24h,
}

impl FormatKey {
    pub fn all() -> [FormatKey; 27] {
        use FormatKey::*;
        [
            NormalDateWithWeekday,
            NormalDate,
            ShortDate,
            MonthAndDate,
            DayOfMonth,
            Year,
            Month,
            MonthShort,
            MonthAndYear,
            Weekday,
            WeekdayShort,
            Minutes,
            Hours12h,
            Hours24h,
            Seconds,
            FullTime,
            FullTime12h,
            FullTime24h,
            FullDate,
            FullDateWithWeekday,
            FullDateTime,
            FullDateTime12h,
            FullDateTime24h,
            KeyboardDate,
            KeyboardDateTime,
            KeyboardDateTime12h,
            KeyboardDateTime24h,
        ]
    }

    /// The camelCase key name used in configuration.
    pub fn as_str(&self) -> &'static str {
        match self {
            FormatKey::NormalDateWithWeekday => "normalDateWithWeekday",
            FormatKey::NormalDate => "normalDate",
            FormatKey::ShortDate => "shortDate",
            FormatKey::MonthAndDate => "monthAndDate",
            FormatKey::DayOfMonth => "dayOfMonth",
            FormatKey::Year => "year",
            FormatKey::Month => "month",
            FormatKey::MonthShort => "monthShort",
            FormatKey::MonthAndYear => "monthAndYear",
            FormatKey::Weekday => "weekday",
            FormatKey::WeekdayShort => "weekdayShort",
            FormatKey::Minutes => "minutes",
            FormatKey::Hours12h => "hours12h",
            FormatKey::Hours24h => "hours24h",
            FormatKey::Seconds => "seconds",
            FormatKey::FullTime => "fullTime",
            FormatKey::FullTime12h => "fullTime12h",
            FormatKey::FullTime24h => "fullTime24h",
            FormatKey::FullDate => "fullDate",
            FormatKey::FullDateWithWeekday => "fullDateWithWeekday",
            FormatKey::FullDateTime => "fullDateTime",
            FormatKey::FullDateTime12h => "fullDateTime12h",
            FormatKey::FullDateTime24h => "fullDateTime24h",
            FormatKey::KeyboardDate => "keyboardDate",
            FormatKey::KeyboardDateTime => "keyboardDateTime",
            FormatKey::KeyboardDateTime12h => "keyboardDateTime12h",
            FormatKey::KeyboardDateTime24h => "keyboardDateTime24h",
        }
    }
}

impl fmt::Display for FormatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for FormatKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FormatKey::all()
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| DomainError::parse(format!("Unknown format key: {}", s)))
    }
}

// =============================================================================
// Format Tables
// =============================================================================

/// A complete table of named patterns: every `FormatKey` has an entry.
///
/// Serializes as a JSON object keyed by `FormatKey` names. Deserializing a
/// table with missing keys fails.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<FormatKey, String>", into = "BTreeMap<FormatKey, String>")]
pub struct DateFormats(BTreeMap<FormatKey, String>);

impl Default for DateFormats {
    fn default() -> Self {
        DEFAULT_FORMATS.clone()
    }
}

impl DateFormats {
    /// The pattern stored under `key`.
    pub fn get(&self, key: FormatKey) -> &str {
        self.0.get(&key).map(String::as_str).unwrap_or_default()
    }

    /// A copy of this table with `overrides` applied on top.
    pub fn merged(&self, overrides: &FormatOverrides) -> DateFormats {
        let mut merged = self.clone();
        for (key, pattern) in overrides.iter() {
            merged.0.insert(key, pattern.to_string());
        }
        merged
    }
}

impl TryFrom<BTreeMap<FormatKey, String>> for DateFormats {
    type Error = DomainError;

    fn try_from(table: BTreeMap<FormatKey, String>) -> Result<Self, Self::Error> {
        match FormatKey::all().into_iter().find(|key| !table.contains_key(key)) {
            Some(missing) => Err(DomainError::validation(format!(
                "Format table has no pattern for {}",
                missing
            ))),
            None => Ok(Self(table)),
        }
    }
}

impl From<DateFormats> for BTreeMap<FormatKey, String> {
    fn from(formats: DateFormats) -> Self {
        formats.0
    }
}

/// Caller-supplied replacements for some patterns.
///
/// Serializes as a JSON object keyed by `FormatKey` names; unknown keys are
/// rejected on deserialization.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormatOverrides(BTreeMap<FormatKey, String>);

impl FormatOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: FormatKey, pattern: impl Into<String>) -> Self {
        self.0.insert(key, pattern.into());
        self
    }

    pub fn get(&self, key: FormatKey) -> Option<&str> {
        self.0.get(&key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (FormatKey, &str)> {
        self.0.iter().map(|(key, pattern)| (*key, pattern.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_cover_every_key() {
        let formats = DateFormats::default();
        for key in FormatKey::all() {
            assert!(!formats.get(key).is_empty(), "{} has no pattern", key);
        }
        assert_eq!(formats.get(FormatKey::MonthAndYear), "MMMM YYYY");
        assert_eq!(formats.get(FormatKey::KeyboardDateTime12h), "L hh:mm A");
    }

    #[test]
    fn format_key_names_round_trip() {
        for key in FormatKey::all() {
            assert_eq!(key.as_str().parse::<FormatKey>().unwrap(), key);
            let json = serde_json::to_string(&key).unwrap();
            assert_eq!(json, format!("\"{}\"", key.as_str()));
        }
        assert!("fullTime13h".parse::<FormatKey>().is_err());
    }

    #[test]
    fn merge_replaces_only_overridden_keys() {
        let overrides = FormatOverrides::new()
            .with(FormatKey::KeyboardDate, "DD/MM/YYYY")
            .with(FormatKey::FullTime, "HH:mm");
        let merged = DateFormats::default().merged(&overrides);

        assert_eq!(merged.get(FormatKey::KeyboardDate), "DD/MM/YYYY");
        assert_eq!(merged.get(FormatKey::FullTime), "HH:mm");
        assert_eq!(
            merged.get(FormatKey::MonthAndYear),
            DEFAULT_FORMATS.get(FormatKey::MonthAndYear)
        );
    }

    #[test]
    fn merge_leaves_shared_defaults_untouched() {
        let overrides = FormatOverrides::new().with(FormatKey::Year, "YY");
        let _ = DateFormats::default().merged(&overrides);
        assert_eq!(DEFAULT_FORMATS.get(FormatKey::Year), "YYYY");
    }

    #[test]
    fn overrides_deserialize_from_json_object() {
        let overrides: FormatOverrides =
            serde_json::from_str(r#"{"keyboardDate": "DD.MM.YYYY", "hours24h": "H"}"#).unwrap();
        assert_eq!(overrides.get(FormatKey::KeyboardDate), Some("DD.MM.YYYY"));
        assert_eq!(overrides.get(FormatKey::Hours24h), Some("H"));
        assert_eq!(overrides.get(FormatKey::Year), None);
    }

    #[test]
    fn overrides_reject_unknown_keys() {
        let result = serde_json::from_str::<FormatOverrides>(r#"{"fullTime13h": "HH"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn table_serializes_with_camel_case_keys() {
        let json = serde_json::to_value(DateFormats::default()).unwrap();
        assert_eq!(json["fullDateTime24h"], "ll HH:mm");
        assert_eq!(json["normalDateWithWeekday"], "ddd, MMM D");
    }

    #[test]
    fn incomplete_table_is_rejected() {
        let result = serde_json::from_str::<DateFormats>(r#"{"year": "YYYY"}"#);
        assert!(result.is_err());

        let json = serde_json::to_string(&DateFormats::default()).unwrap();
        let back: DateFormats = serde_json::from_str(&json).unwrap();
        assert_eq!(back, DateFormats::default());
    }
}
