//! First and last instants of the day, week, month and year containing a value.
//!
//! Every `end_of_*` is the matching next start minus one nanosecond, so it is
//! the last representable instant of the period and never the next period's
//! first instant.

use crate::date_value::{DateValue, FieldOverrides};
use crate::error::DomainError;
use crate::units::{RoundingMode, TimeUnit};

/// Midnight of `value`'s day.
pub fn start_of_day(value: &DateValue) -> Result<DateValue, DomainError> {
    value.round(TimeUnit::Days, RoundingMode::Floor)
}

/// 23:59:59.999999999 of `value`'s day.
///
/// Computed from the following midnight even when `value` is itself a
/// midnight, so `start_of_day(v) <= v <= end_of_day(v)` always holds.
pub fn end_of_day(value: &DateValue) -> Result<DateValue, DomainError> {
    start_of_day(value)?
        .add(TimeUnit::Days, 1)?
        .subtract(TimeUnit::Nanoseconds, 1)
}

/// Midnight of the Monday of `value`'s week.
pub fn start_of_week(value: &DateValue) -> Result<DateValue, DomainError> {
    let days_since_monday = i64::from(value.day_of_week()) - 1;
    value.date_part().subtract(TimeUnit::Days, days_since_monday)
}

/// Last instant of the Sunday of `value`'s week.
pub fn end_of_week(value: &DateValue) -> Result<DateValue, DomainError> {
    let days_to_next_monday = 7 - (i64::from(value.day_of_week()) - 1);
    value
        .date_part()
        .add(TimeUnit::Days, days_to_next_monday)?
        .subtract(TimeUnit::Nanoseconds, 1)
}

/// Midnight of the first day of `value`'s month.
pub fn start_of_month(value: &DateValue) -> Result<DateValue, DomainError> {
    let first = value.with(FieldOverrides {
        day: Some(1),
        ..FieldOverrides::default()
    })?;
    Ok(first.date_part())
}

/// Last instant of `value`'s month. December rolls over into the next year.
pub fn end_of_month(value: &DateValue) -> Result<DateValue, DomainError> {
    start_of_month(value)?
        .add(TimeUnit::Months, 1)?
        .subtract(TimeUnit::Nanoseconds, 1)
}

/// Midnight of January 1 of `value`'s year.
pub fn start_of_year(value: &DateValue) -> Result<DateValue, DomainError> {
    let first = value.with(FieldOverrides {
        month: Some(1),
        day: Some(1),
        ..FieldOverrides::default()
    })?;
    Ok(first.date_part())
}

/// Last instant of December 31 of `value`'s year.
pub fn end_of_year(value: &DateValue) -> Result<DateValue, DomainError> {
    start_of_year(value)?
        .add(TimeUnit::Years, 1)?
        .subtract(TimeUnit::Nanoseconds, 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dt(s: &str) -> DateValue {
        s.parse().unwrap()
    }

    #[test]
    fn day_bounds_hold_for_every_day_of_a_leap_year() {
        let mut d = dt("2024-01-01T13:27:45.123");
        for _ in 0..366 {
            let start = start_of_day(&d).unwrap();
            let end = end_of_day(&d).unwrap();
            assert!(start <= d && d <= end, "{} not within its day", d);
            assert_eq!(
                end.add(TimeUnit::Nanoseconds, 1).unwrap(),
                start.add(TimeUnit::Days, 1).unwrap()
            );
            d = d.add(TimeUnit::Days, 1).unwrap();
        }
    }

    #[test]
    fn end_of_day_at_midnight_stays_on_the_same_day() {
        let midnight = dt("2024-05-01T00:00:00");
        assert_eq!(start_of_day(&midnight).unwrap(), midnight);
        assert_eq!(end_of_day(&midnight).unwrap(), dt("2024-05-01T23:59:59.999999999"));
    }

    #[test]
    fn week_bounds_start_monday_and_end_sunday() {
        // Wednesday
        let d = dt("2024-05-01T10:45:00");
        assert_eq!(start_of_week(&d).unwrap(), dt("2024-04-29"));
        assert_eq!(end_of_week(&d).unwrap(), dt("2024-05-05T23:59:59.999999999"));

        let monday = dt("2024-04-29T08:00:00");
        assert_eq!(start_of_week(&monday).unwrap(), dt("2024-04-29"));

        let sunday = dt("2024-05-05T23:00:00");
        assert_eq!(start_of_week(&sunday).unwrap(), dt("2024-04-29"));
        assert_eq!(end_of_week(&sunday).unwrap(), dt("2024-05-05T23:59:59.999999999"));
    }

    #[test]
    fn week_bounds_cross_year_boundary() {
        // 2025-01-01 is a Wednesday
        let d = dt("2025-01-01T12:00:00");
        assert_eq!(start_of_week(&d).unwrap(), dt("2024-12-30"));
        assert_eq!(end_of_week(&d).unwrap(), dt("2025-01-05T23:59:59.999999999"));
    }

    #[test]
    fn february_of_leap_year() {
        let d = dt("2024-02-14T09:30:00");
        assert_eq!(start_of_month(&d).unwrap(), dt("2024-02-01"));
        assert_eq!(end_of_month(&d).unwrap(), dt("2024-02-29T23:59:59.999999999"));
    }

    #[test]
    fn end_of_december_rolls_into_next_year() {
        let d = dt("2024-12-31T18:00:00");
        assert_eq!(start_of_month(&d).unwrap(), dt("2024-12-01"));
        assert_eq!(end_of_month(&d).unwrap(), dt("2024-12-31T23:59:59.999999999"));
    }

    #[test]
    fn year_bounds() {
        let d = dt("2024-07-04T12:00:00");
        assert_eq!(start_of_year(&d).unwrap(), dt("2024-01-01"));
        assert_eq!(end_of_year(&d).unwrap(), dt("2024-12-31T23:59:59.999999999"));
    }
}
