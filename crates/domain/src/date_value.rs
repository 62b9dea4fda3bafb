//! The immutable civil datetime value every calendar operation works on.
//!
//! `DateValue` wraps a `chrono::NaiveDateTime` (nanosecond precision, no time
//! zone) and exposes the small primitive set the calendar layer is built on:
//! unit arithmetic, rounding, field replacement, differences and ordering.
//! Every operation returns a new value.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Months, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::DomainError;
use crate::units::{RoundingMode, TimeUnit, NANOS_PER_SECOND};

// =============================================================================
// Field snapshots
// =============================================================================

/// All calendar fields of a `DateValue`.
///
/// `day_of_week` follows ISO numbering: 1 = Monday through 7 = Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateFields {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub day_of_week: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub nanosecond: u32,
}

/// A partial set of fields for `DateValue::with`. `None` keeps the current value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldOverrides {
    pub year: Option<i32>,
    pub month: Option<u32>,
    pub day: Option<u32>,
    pub hour: Option<u32>,
    pub minute: Option<u32>,
    pub second: Option<u32>,
    pub nanosecond: Option<u32>,
}

impl FieldOverrides {
    /// Overrides for the date fields only.
    pub fn date(year: i32, month: u32, day: u32) -> Self {
        Self {
            year: Some(year),
            month: Some(month),
            day: Some(day),
            ..Self::default()
        }
    }

    /// Overrides for the time-of-day fields only.
    pub fn time(hour: u32, minute: u32, second: u32) -> Self {
        Self {
            hour: Some(hour),
            minute: Some(minute),
            second: Some(second),
            ..Self::default()
        }
    }
}

// =============================================================================
// DateValue
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateValue(NaiveDateTime);

impl DateValue {
    pub fn new(inner: NaiveDateTime) -> Self {
        Self(inner)
    }

    /// Midnight of the given calendar date.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` if the date does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, DomainError> {
        Self::from_ymd_hms_nano(year, month, day, 0, 0, 0, 0)
    }

    pub fn from_ymd_hms(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Result<Self, DomainError> {
        Self::from_ymd_hms_nano(year, month, day, hour, minute, second, 0)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn from_ymd_hms_nano(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        nanosecond: u32,
    ) -> Result<Self, DomainError> {
        let date = NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
            DomainError::validation(format!("Invalid date: {:04}-{:02}-{:02}", year, month, day))
        })?;
        let time = valid_time(hour, minute, second, nanosecond)?;
        Ok(Self(date.and_time(time)))
    }

    /// Returns the wrapped chrono value.
    pub fn as_naive(&self) -> NaiveDateTime {
        self.0
    }

    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Month (1-12).
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Day of month (1-31).
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// ISO day of week: 1 = Monday, 7 = Sunday.
    pub fn day_of_week(&self) -> u32 {
        self.0.weekday().number_from_monday()
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    pub fn second(&self) -> u32 {
        self.0.second()
    }

    pub fn nanosecond(&self) -> u32 {
        self.0.nanosecond()
    }

    /// Number of days in this value's month.
    pub fn days_in_month(&self) -> u32 {
        last_valid_day(self.0.date())
    }

    pub fn fields(&self) -> DateFields {
        DateFields {
            year: self.year(),
            month: self.month(),
            day: self.day(),
            day_of_week: self.day_of_week(),
            hour: self.hour(),
            minute: self.minute(),
            second: self.second(),
            nanosecond: self.nanosecond(),
        }
    }

    /// The same calendar date at midnight.
    pub fn date_part(&self) -> Self {
        Self(self.0.date().and_time(NaiveTime::MIN))
    }

    /// Adds `amount` units. Negative amounts move backwards.
    ///
    /// Calendar units (months, quarters, years) keep the day of month, clamped
    /// to the length of the target month: January 31 plus one month is the
    /// last day of February.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::OutOfRange` if the result is not representable.
    pub fn add(&self, unit: TimeUnit, amount: i64) -> Result<Self, DomainError> {
        let out_of_range = || {
            DomainError::out_of_range(format!("adding {} {} to {}", amount, unit, self))
        };

        let shifted = match (unit.fixed_nanos(), unit.months()) {
            (Some(nanos), _) if nanos >= NANOS_PER_SECOND => amount
                .checked_mul(nanos / NANOS_PER_SECOND)
                .and_then(TimeDelta::try_seconds)
                .and_then(|delta| self.0.checked_add_signed(delta)),
            (Some(nanos), _) => amount
                .checked_mul(nanos)
                .map(TimeDelta::nanoseconds)
                .and_then(|delta| self.0.checked_add_signed(delta)),
            (None, Some(per_unit)) => {
                let months = amount
                    .unsigned_abs()
                    .checked_mul(u64::from(per_unit))
                    .and_then(|m| u32::try_from(m).ok())
                    .map(Months::new);
                match months {
                    Some(months) if amount >= 0 => self.0.checked_add_months(months),
                    Some(months) => self.0.checked_sub_months(months),
                    None => None,
                }
            }
            (None, None) => None,
        };

        shifted.map(Self).ok_or_else(out_of_range)
    }

    /// Subtracts `amount` units. Equivalent to `add(unit, -amount)`.
    pub fn subtract(&self, unit: TimeUnit, amount: i64) -> Result<Self, DomainError> {
        let negated = amount.checked_neg().ok_or_else(|| {
            DomainError::out_of_range(format!("subtracting {} {} from {}", amount, unit, self))
        })?;
        self.add(unit, negated)
    }

    /// Rounds the time of day to a multiple of `unit`.
    ///
    /// Only units up to and including days are accepted. Rounding up from the
    /// last part of a day lands on the next midnight.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::UnsupportedUnit` for weeks and calendar units.
    pub fn round(&self, unit: TimeUnit, mode: RoundingMode) -> Result<Self, DomainError> {
        let step = match unit.fixed_nanos() {
            Some(step) if unit <= TimeUnit::Days => step,
            _ => return Err(DomainError::unsupported_unit(unit.as_str(), "round")),
        };

        let elapsed = self.nanos_since_midnight();
        let floor = elapsed - elapsed % step;
        let rounded = match mode {
            RoundingMode::Floor => floor,
            RoundingMode::Ceil if floor == elapsed => floor,
            RoundingMode::Ceil => floor + step,
            RoundingMode::HalfExpand if (elapsed - floor) * 2 >= step => floor + step,
            RoundingMode::HalfExpand => floor,
        };

        self.date_part()
            .0
            .checked_add_signed(TimeDelta::nanoseconds(rounded))
            .map(Self)
            .ok_or_else(|| DomainError::out_of_range(format!("rounding {} up to {}", self, unit)))
    }

    /// Returns a copy with the given fields replaced.
    ///
    /// A day past the end of the target month is clamped to its last day.
    ///
    /// # Errors
    ///
    /// Returns `DomainError::Validation` for a month outside 1-12, a zero day,
    /// or an invalid time of day.
    pub fn with(&self, overrides: FieldOverrides) -> Result<Self, DomainError> {
        let year = overrides.year.unwrap_or_else(|| self.year());
        let month = overrides.month.unwrap_or_else(|| self.month());
        let day = overrides.day.unwrap_or_else(|| self.day());

        if !(1..=12).contains(&month) {
            return Err(DomainError::validation(format!("Invalid month: {}", month)));
        }
        if day == 0 {
            return Err(DomainError::validation("Day of month cannot be 0"));
        }

        let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
            DomainError::out_of_range(format!("year {} is not representable", year))
        })?;
        let date = first
            .with_day(day.min(last_valid_day(first)))
            .ok_or_else(|| DomainError::validation(format!("Invalid day: {}", day)))?;

        let time = valid_time(
            overrides.hour.unwrap_or_else(|| self.hour()),
            overrides.minute.unwrap_or_else(|| self.minute()),
            overrides.second.unwrap_or_else(|| self.second()),
            overrides.nanosecond.unwrap_or_else(|| self.nanosecond()),
        )?;

        Ok(Self(date.and_time(time)))
    }

    /// Signed amount of `unit`s from `self` to `other` (`other - self`).
    ///
    /// Fixed units give fractional totals. Months and years count whole units
    /// only; quarters are whole months divided by three.
    pub fn until(&self, other: &Self, unit: TimeUnit) -> Result<f64, DomainError> {
        match unit {
            TimeUnit::Months => Ok(self.whole_months_until(other)? as f64),
            TimeUnit::Quarters => Ok(self.whole_months_until(other)? as f64 / 3.0),
            TimeUnit::Years => Ok((self.whole_months_until(other)? / 12) as f64),
            fixed => {
                let unit_nanos = fixed
                    .fixed_nanos()
                    .ok_or_else(|| DomainError::unsupported_unit(fixed.as_str(), "until"))?;
                let delta = other.0.signed_duration_since(self.0);
                let total_nanos = i128::from(delta.num_seconds()) * i128::from(NANOS_PER_SECOND)
                    + i128::from(delta.subsec_nanos());
                Ok(total_nanos as f64 / unit_nanos as f64)
            }
        }
    }

    fn whole_months_until(&self, other: &Self) -> Result<i64, DomainError> {
        let mut months = i64::from(other.year() - self.year()) * 12 + i64::from(other.month())
            - i64::from(self.month());

        if months > 0 && self.add(TimeUnit::Months, months)? > *other {
            months -= 1;
        } else if months < 0 && self.add(TimeUnit::Months, months)? < *other {
            months += 1;
        }

        Ok(months)
    }

    fn nanos_since_midnight(&self) -> i64 {
        i64::from(self.0.num_seconds_from_midnight()) * NANOS_PER_SECOND
            + i64::from(self.0.nanosecond())
    }
}

fn valid_time(hour: u32, minute: u32, second: u32, nano: u32) -> Result<NaiveTime, DomainError> {
    NaiveTime::from_hms_nano_opt(hour, minute, second, nano).ok_or_else(|| {
        DomainError::validation(format!(
            "Invalid time: {:02}:{:02}:{:02}.{:09}",
            hour, minute, second, nano
        ))
    })
}

/// Last day of `date`'s month, found by asking chrono which days exist.
fn last_valid_day(date: NaiveDate) -> u32 {
    (28..=31)
        .rev()
        .find(|&day| date.with_day(day).is_some())
        .unwrap_or(28)
}

impl From<NaiveDateTime> for DateValue {
    fn from(inner: NaiveDateTime) -> Self {
        Self(inner)
    }
}

impl From<DateValue> for NaiveDateTime {
    fn from(value: DateValue) -> Self {
        value.0
    }
}

impl fmt::Display for DateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%dT%H:%M:%S%.f"))
    }
}

impl FromStr for DateValue {
    type Err = DomainError;

    /// Parses ISO-8601 civil text: a date, or a date and time separated by
    /// `T` or a space, with optional seconds and fraction.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        const DATETIME_FORMATS: [&str; 4] = [
            "%Y-%m-%dT%H:%M:%S%.f",
            "%Y-%m-%d %H:%M:%S%.f",
            "%Y-%m-%dT%H:%M",
            "%Y-%m-%d %H:%M",
        ];

        DATETIME_FORMATS
            .iter()
            .find_map(|format| NaiveDateTime::parse_from_str(s, format).ok())
            .or_else(|| {
                NaiveDate::parse_from_str(s, "%Y-%m-%d")
                    .ok()
                    .map(|date| date.and_time(NaiveTime::MIN))
            })
            .map(Self)
            .ok_or_else(|| DomainError::parse(format!("Not an ISO-8601 date/time: '{}'", s)))
    }
}
