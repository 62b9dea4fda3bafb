//! Default locale formatter backed by chrono.
//!
//! Moment-style pattern tokens are translated into chrono `strftime`
//! specifiers. Locale macros (`L`, `LL`, `LT`, ...) are expanded according to a
//! small per-locale profile: date field order and 12/24-hour clock. Month and
//! weekday names are English.

use std::fmt::Write;

use calgrid_domain::DateValue;

use crate::infrastructure::ports::{LocaleFormatterPort, Meridiem};

// =============================================================================
// Locale profiles
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DateOrder {
    MonthDayYear,
    DayMonthYear,
    YearMonthDay,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct LocaleProfile {
    hour12: bool,
    order: DateOrder,
}

impl LocaleProfile {
    fn for_locale(locale: &str) -> Self {
        let normalized = locale.trim().replace('_', "-").to_ascii_lowercase();
        let language = normalized.split('-').next().unwrap_or_default();

        let hour12 = matches!(
            normalized.as_str(),
            "en" | "en-us" | "en-ca" | "en-au" | "en-nz" | "en-in" | "en-ph"
        ) || matches!(language, "hi" | "bn" | "ur" | "ar" | "ko");

        let order = if matches!(normalized.as_str(), "en" | "en-us" | "en-ph") {
            DateOrder::MonthDayYear
        } else if normalized == "en-ca"
            || matches!(language, "ja" | "zh" | "ko" | "hu" | "lt" | "mn")
        {
            DateOrder::YearMonthDay
        } else {
            DateOrder::DayMonthYear
        };

        Self { hour12, order }
    }

    /// The field-token pattern a locale macro stands for.
    fn expand(&self, macro_token: &str) -> String {
        let time = if self.hour12 { "h:mm A" } else { "HH:mm" };
        let time_seconds = if self.hour12 { "h:mm:ss A" } else { "HH:mm:ss" };
        let (numeric, numeric_short, long, medium) = match self.order {
            DateOrder::MonthDayYear => ("MM/DD/YYYY", "M/D/YYYY", "MMMM D, YYYY", "MMM D, YYYY"),
            DateOrder::DayMonthYear => ("DD/MM/YYYY", "D/M/YYYY", "D MMMM YYYY", "D MMM YYYY"),
            DateOrder::YearMonthDay => ("YYYY/MM/DD", "YYYY/M/D", "YYYY MMMM D", "YYYY MMM D"),
        };

        match macro_token {
            "LT" => time.to_string(),
            "LTS" => time_seconds.to_string(),
            "L" => numeric.to_string(),
            "l" => numeric_short.to_string(),
            "LL" => long.to_string(),
            "ll" => medium.to_string(),
            "LLL" => format!("{} {}", long, time),
            "lll" => format!("{} {}", medium, time),
            "LLLL" => format!("dddd, {} {}", long, time),
            "llll" => format!("ddd, {} {}", medium, time),
            other => other.to_string(),
        }
    }
}

// =============================================================================
// Pattern translation
// =============================================================================

enum Token {
    /// A locale macro, expanded before rendering.
    Macro,
    /// A field token and the chrono specifier that renders it.
    Field(&'static str),
}

/// Longest tokens first so that `MMMM` wins over `MM`.
const TOKENS: &[(&str, Token)] = &[
    ("LLLL", Token::Macro),
    ("LLL", Token::Macro),
    ("LTS", Token::Macro),
    ("LT", Token::Macro),
    ("LL", Token::Macro),
    ("L", Token::Macro),
    ("llll", Token::Macro),
    ("lll", Token::Macro),
    ("ll", Token::Macro),
    ("l", Token::Macro),
    ("YYYY", Token::Field("%Y")),
    ("YY", Token::Field("%y")),
    ("MMMM", Token::Field("%B")),
    ("MMM", Token::Field("%b")),
    ("MM", Token::Field("%m")),
    ("M", Token::Field("%-m")),
    ("DD", Token::Field("%d")),
    ("D", Token::Field("%-d")),
    ("dddd", Token::Field("%A")),
    ("ddd", Token::Field("%a")),
    ("d", Token::Field("%w")),
    ("HH", Token::Field("%H")),
    ("H", Token::Field("%-H")),
    ("hh", Token::Field("%I")),
    ("h", Token::Field("%-I")),
    ("mm", Token::Field("%M")),
    ("m", Token::Field("%-M")),
    ("ss", Token::Field("%S")),
    ("s", Token::Field("%-S")),
    ("A", Token::Field("%p")),
    ("a", Token::Field("%P")),
];

fn match_token(rest: &str) -> Option<(&'static str, &'static Token)> {
    TOKENS
        .iter()
        .find(|(token, _)| rest.starts_with(token))
        .map(|(token, kind)| (*token, kind))
}

fn push_literal(out: &mut String, literal: &str) {
    out.push_str(&literal.replace('%', "%%"));
}

/// Splits off a `[bracketed]` literal at the start of `rest`, if any.
fn bracketed(rest: &str) -> Option<(&str, &str)> {
    let inner = rest.strip_prefix('[')?;
    let close = inner.find(']')?;
    Some((&inner[..close], &inner[close + 1..]))
}

/// Replaces locale macros with field tokens, leaving everything else as is.
fn expand_macros(pattern: &str, profile: &LocaleProfile) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut rest = pattern;

    while let Some(ch) = rest.chars().next() {
        if let Some((literal, after)) = bracketed(rest) {
            out.push('[');
            out.push_str(literal);
            out.push(']');
            rest = after;
        } else if let Some((token, kind)) = match_token(rest) {
            match kind {
                Token::Macro => out.push_str(&profile.expand(token)),
                Token::Field(_) => out.push_str(token),
            }
            rest = &rest[token.len()..];
        } else {
            out.push(ch);
            rest = &rest[ch.len_utf8()..];
        }
    }

    out
}

/// Lowercases a macro-free pattern for display as an input mask.
fn to_helper_text(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len());
    let mut rest = pattern;

    while let Some(ch) = rest.chars().next() {
        if let Some((literal, after)) = bracketed(rest) {
            out.push('[');
            out.push_str(literal);
            out.push(']');
            rest = after;
        } else if let Some((token, _)) = match_token(rest) {
            match token {
                "A" | "a" => out.push_str("(a|p)m"),
                other => out.push_str(&other.to_lowercase()),
            }
            rest = &rest[token.len()..];
        } else {
            out.extend(ch.to_lowercase());
            rest = &rest[ch.len_utf8()..];
        }
    }

    out
}

/// Translates a macro-free pattern into a chrono format string.
fn to_strftime(pattern: &str) -> String {
    let mut out = String::with_capacity(pattern.len() * 2);
    let mut rest = pattern;

    while let Some(ch) = rest.chars().next() {
        if let Some((literal, after)) = bracketed(rest) {
            push_literal(&mut out, literal);
            rest = after;
        } else if let Some((token, Token::Field(spec))) = match_token(rest) {
            out.push_str(spec);
            rest = &rest[token.len()..];
        } else {
            push_literal(&mut out, &rest[..ch.len_utf8()]);
            rest = &rest[ch.len_utf8()..];
        }
    }

    out
}

// =============================================================================
// ChronoFormatter
// =============================================================================

/// `LocaleFormatterPort` implementation rendering through chrono.
#[derive(Debug, Clone, Default)]
pub struct ChronoFormatter;

impl ChronoFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl LocaleFormatterPort for ChronoFormatter {
    fn format_helper_text(&self, pattern: &str, locale: &str) -> String {
        to_helper_text(&expand_macros(pattern, &LocaleProfile::for_locale(locale)))
    }

    fn format(&self, value: &DateValue, pattern: &str, locale: &str) -> String {
        let strftime = to_strftime(&expand_macros(pattern, &LocaleProfile::for_locale(locale)));

        let mut rendered = String::new();
        match write!(rendered, "{}", value.as_naive().format(&strftime)) {
            Ok(()) => rendered,
            Err(_) => {
                tracing::warn!(pattern, locale, "Pattern could not be rendered, using ISO text");
                value.to_string()
            }
        }
    }

    fn uses_12_hour_clock(&self, locale: &str) -> bool {
        LocaleProfile::for_locale(locale).hour12
    }

    fn meridiem_text(&self, meridiem: Meridiem, _locale: &str) -> String {
        match meridiem {
            Meridiem::Am => "AM".to_string(),
            Meridiem::Pm => "PM".to_string(),
        }
    }

    fn format_number(&self, digits: &str, _locale: &str) -> String {
        digits.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use calgrid_domain::{DateFormats, FormatKey};

    fn leap_day_afternoon() -> DateValue {
        DateValue::from_ymd_hms(2024, 2, 29, 13, 5, 9).unwrap()
    }

    fn render(pattern: &str, locale: &str) -> String {
        ChronoFormatter::new().format(&leap_day_afternoon(), pattern, locale)
    }

    #[test]
    fn default_patterns_in_en_us() {
        let formats = DateFormats::default();
        let expected = [
            (FormatKey::NormalDateWithWeekday, "Thu, Feb 29"),
            (FormatKey::NormalDate, "29 February"),
            (FormatKey::DayOfMonth, "29"),
            (FormatKey::MonthAndYear, "February 2024"),
            (FormatKey::Weekday, "Thursday"),
            (FormatKey::WeekdayShort, "Thu"),
            (FormatKey::Hours12h, "01"),
            (FormatKey::Hours24h, "13"),
            (FormatKey::FullTime, "1:05 PM"),
            (FormatKey::FullTime24h, "13:05"),
            (FormatKey::FullDate, "Feb 29, 2024"),
            (FormatKey::FullDateWithWeekday, "Thursday, February 29, 2024"),
            (FormatKey::FullDateTime, "Feb 29, 2024 1:05 PM"),
            (FormatKey::KeyboardDate, "02/29/2024"),
            (FormatKey::KeyboardDateTime12h, "02/29/2024 01:05 PM"),
        ];
        for (key, rendered) in expected {
            assert_eq!(render(formats.get(key), "en-US"), rendered, "{}", key);
        }
    }

    #[test]
    fn macros_follow_locale_profile() {
        assert_eq!(render("L", "en-GB"), "29/02/2024");
        assert_eq!(render("LT", "en-GB"), "13:05");
        assert_eq!(render("LLL", "de-DE"), "29 February 2024 13:05");
        assert_eq!(render("L", "ja-JP"), "2024/02/29");
        assert_eq!(render("l", "en_US"), "2/29/2024");
    }

    #[test]
    fn brackets_and_percent_are_literal() {
        assert_eq!(render("[Week of] MMM D", "en-US"), "Week of Feb 29");
        assert_eq!(render("D [at] HH:mm", "en-US"), "29 at 13:05");
        assert_eq!(render("YYYY 100%", "en-US"), "2024 100%");
    }

    #[test]
    fn single_letter_tokens_are_unpadded() {
        let early = DateValue::from_ymd_hms(2024, 3, 4, 5, 6, 7).unwrap();
        let formatter = ChronoFormatter::new();
        assert_eq!(formatter.format(&early, "M/D H:m:s", "en-US"), "3/4 5:6:7");
        assert_eq!(formatter.format(&early, "MM/DD HH:mm:ss", "en-US"), "03/04 05:06:07");
        assert_eq!(formatter.format(&early, "h a", "en-US"), "5 am");
    }

    #[test]
    fn macro_expansion_keeps_field_tokens() {
        let us = LocaleProfile::for_locale("en-US");
        let fr = LocaleProfile::for_locale("fr-FR");
        assert_eq!(expand_macros("L LT", &us), "MM/DD/YYYY h:mm A");
        assert_eq!(expand_macros("L HH:mm", &fr), "DD/MM/YYYY HH:mm");
        assert_eq!(expand_macros("[L] L", &us), "[L] MM/DD/YYYY");
    }

    #[test]
    fn helper_text_leaves_bracketed_literals_alone() {
        let formatter = ChronoFormatter::new();
        assert_eq!(formatter.format_helper_text("L LT", "en-US"), "mm/dd/yyyy h:mm (a|p)m");
        assert_eq!(
            formatter.format_helper_text("[Day at] L", "en-US"),
            "[Day at] mm/dd/yyyy"
        );
        assert_eq!(
            formatter.format_helper_text("DD.MM.YYYY [Uhr] HH:mm", "de-DE"),
            "dd.mm.yyyy [Uhr] hh:mm"
        );
        assert_eq!(formatter.format_helper_text("LT", "en-GB"), "hh:mm");
    }

    #[test]
    fn hour_cycle_by_locale() {
        let formatter = ChronoFormatter::new();
        assert!(formatter.uses_12_hour_clock("en-US"));
        assert!(formatter.uses_12_hour_clock("hi-IN"));
        assert!(!formatter.uses_12_hour_clock("en-GB"));
        assert!(!formatter.uses_12_hour_clock("de"));
    }

    #[test]
    fn meridiem_and_numbers() {
        let formatter = ChronoFormatter::new();
        assert_eq!(formatter.meridiem_text(Meridiem::Am, "en-US"), "AM");
        assert_eq!(formatter.meridiem_text(Meridiem::Pm, "en-US"), "PM");
        assert_eq!(formatter.format_number("2024", "en-US"), "2024");
    }
}
