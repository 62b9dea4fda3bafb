//! Calendar and clock units, and rounding modes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

pub(crate) const NANOS_PER_MICRO: i64 = 1_000;
pub(crate) const NANOS_PER_MILLI: i64 = 1_000_000;
pub(crate) const NANOS_PER_SECOND: i64 = 1_000_000_000;
pub(crate) const NANOS_PER_MINUTE: i64 = 60 * NANOS_PER_SECOND;
pub(crate) const NANOS_PER_HOUR: i64 = 60 * NANOS_PER_MINUTE;
pub(crate) const NANOS_PER_DAY: i64 = 24 * NANOS_PER_HOUR;
pub(crate) const NANOS_PER_WEEK: i64 = 7 * NANOS_PER_DAY;

// =============================================================================
// Time Unit
// =============================================================================

/// A unit of date/time arithmetic, ordered from smallest to largest.
///
/// Units up to `Weeks` have a fixed length. `Months`, `Quarters` and `Years`
/// are calendar units whose length depends on the date they are applied to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimeUnit {
    Nanoseconds,
    Microseconds,
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    Days,
    Weeks,
    Months,
    Quarters,
    Years,
}

impl TimeUnit {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeUnit::Nanoseconds => "nanoseconds",
            TimeUnit::Microseconds => "microseconds",
            TimeUnit::Milliseconds => "milliseconds",
            TimeUnit::Seconds => "seconds",
            TimeUnit::Minutes => "minutes",
            TimeUnit::Hours => "hours",
            TimeUnit::Days => "days",
            TimeUnit::Weeks => "weeks",
            TimeUnit::Months => "months",
            TimeUnit::Quarters => "quarters",
            TimeUnit::Years => "years",
        }
    }

    /// Length of the unit in nanoseconds, or `None` for calendar units.
    pub fn fixed_nanos(&self) -> Option<i64> {
        match self {
            TimeUnit::Nanoseconds => Some(1),
            TimeUnit::Microseconds => Some(NANOS_PER_MICRO),
            TimeUnit::Milliseconds => Some(NANOS_PER_MILLI),
            TimeUnit::Seconds => Some(NANOS_PER_SECOND),
            TimeUnit::Minutes => Some(NANOS_PER_MINUTE),
            TimeUnit::Hours => Some(NANOS_PER_HOUR),
            TimeUnit::Days => Some(NANOS_PER_DAY),
            TimeUnit::Weeks => Some(NANOS_PER_WEEK),
            TimeUnit::Months | TimeUnit::Quarters | TimeUnit::Years => None,
        }
    }

    /// Number of months in a calendar unit, or `None` for fixed units.
    pub fn months(&self) -> Option<u32> {
        match self {
            TimeUnit::Months => Some(1),
            TimeUnit::Quarters => Some(3),
            TimeUnit::Years => Some(12),
            _ => None,
        }
    }
}

impl fmt::Display for TimeUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for TimeUnit {
    type Err = DomainError;

    /// Accepts plural and singular unit names (`"days"`, `"day"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "nanoseconds" | "nanosecond" => Ok(TimeUnit::Nanoseconds),
            "microseconds" | "microsecond" => Ok(TimeUnit::Microseconds),
            "milliseconds" | "millisecond" => Ok(TimeUnit::Milliseconds),
            "seconds" | "second" => Ok(TimeUnit::Seconds),
            "minutes" | "minute" => Ok(TimeUnit::Minutes),
            "hours" | "hour" => Ok(TimeUnit::Hours),
            "days" | "day" => Ok(TimeUnit::Days),
            "weeks" | "week" => Ok(TimeUnit::Weeks),
            "months" | "month" => Ok(TimeUnit::Months),
            "quarters" | "quarter" => Ok(TimeUnit::Quarters),
            "years" | "year" => Ok(TimeUnit::Years),
            other => Err(DomainError::parse(format!("Unknown time unit: {}", other))),
        }
    }
}

// =============================================================================
// Rounding Mode
// =============================================================================

/// How `DateValue::round` resolves a value that is not on a unit boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Toward the earlier boundary.
    #[default]
    Floor,
    /// Toward the later boundary. Values already on a boundary are unchanged.
    Ceil,
    /// To the nearest boundary, halfway values go to the later one.
    HalfExpand,
}
