//! Port traits for infrastructure boundaries.
//!
//! Ports exist for:
//! - Clock (the single source of "now", swapped for a fixed clock in tests)
//! - Locale formatting (rendering patterns and locale-specific texts)

use calgrid_domain::DateValue;

// =============================================================================
// Testability Ports
// =============================================================================

/// Source of the current local civil time.
#[cfg_attr(test, mockall::automock)]
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateValue;
}

// =============================================================================
// Locale Ports
// =============================================================================

/// AM or PM, for meridiem labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Meridiem {
    Am,
    Pm,
}

/// Renders dates for a locale.
///
/// Patterns use the moment-style tokens of `calgrid_domain::DateFormats`.
#[cfg_attr(test, mockall::automock)]
pub trait LocaleFormatterPort: Send + Sync {
    /// Input mask hint for `pattern`: locale macros expanded, field tokens
    /// lowercased, meridiem tokens shown as `(a|p)m`. Bracketed literals are
    /// left untouched.
    fn format_helper_text(&self, pattern: &str, locale: &str) -> String;

    /// Render `value` using `pattern`.
    fn format(&self, value: &DateValue, pattern: &str, locale: &str) -> String;

    /// Whether the locale shows hours on a 12-hour clock by default.
    fn uses_12_hour_clock(&self, locale: &str) -> bool;

    /// Localized AM/PM label.
    fn meridiem_text(&self, meridiem: Meridiem, locale: &str) -> String;

    /// Localized digits for a numeric string.
    fn format_number(&self, digits: &str, locale: &str) -> String;
}
