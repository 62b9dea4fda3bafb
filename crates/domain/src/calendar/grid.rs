//! Month, week and year sequences for calendar pickers.

use serde::Serialize;

use crate::calendar::boundaries::{
    end_of_month, end_of_week, start_of_month, start_of_week, start_of_year,
};
use crate::date_value::DateValue;
use crate::error::DomainError;
use crate::units::TimeUnit;

pub const DAYS_PER_WEEK: usize = 7;
const MONTHS_PER_YEAR: usize = 12;

// =============================================================================
// WeekRow / MonthGrid
// =============================================================================

/// Seven consecutive midnights, Monday through Sunday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct WeekRow(Vec<DateValue>);

impl WeekRow {
    fn from_days(days: Vec<DateValue>) -> Self {
        debug_assert_eq!(days.len(), DAYS_PER_WEEK);
        Self(days)
    }

    pub fn days(&self) -> &[DateValue] {
        &self.0
    }

    /// The Monday of this row.
    pub fn first(&self) -> &DateValue {
        &self.0[0]
    }

    /// The Sunday of this row.
    pub fn last(&self) -> &DateValue {
        &self.0[DAYS_PER_WEEK - 1]
    }

    pub fn iter(&self) -> impl Iterator<Item = &DateValue> {
        self.0.iter()
    }
}

/// The full weeks covering one month, including the leading and trailing
/// days of the neighbouring months that complete the first and last week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct MonthGrid(Vec<WeekRow>);

impl MonthGrid {
    pub fn weeks(&self) -> &[WeekRow] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Every day of the grid in order.
    pub fn days(&self) -> impl Iterator<Item = &DateValue> {
        self.0.iter().flat_map(|week| week.iter())
    }
}

// =============================================================================
// Builders
// =============================================================================

/// January 1 through December 1 of `date`'s year.
///
/// Each entry is the previous one plus one month, starting from January 1,
/// so the result never leaves `date`'s year.
pub fn month_array(date: &DateValue) -> Result<Vec<DateValue>, DomainError> {
    let mut cursor = start_of_year(date)?;
    let mut months = Vec::with_capacity(MONTHS_PER_YEAR);
    months.push(cursor);

    while months.len() < MONTHS_PER_YEAR {
        cursor = cursor.add(TimeUnit::Months, 1)?;
        months.push(cursor);
    }

    Ok(months)
}

/// The week grid of `date`'s month.
///
/// Steps one day at a time from the Monday on or before the first of the
/// month while the cursor is before the last instant of the week holding the
/// month's last day. That instant is always a Sunday, so every row is full.
pub fn week_array(date: &DateValue) -> Result<MonthGrid, DomainError> {
    let anchor = start_of_week(&start_of_month(date)?)?;
    let boundary = end_of_week(&end_of_month(date)?)?;

    let mut weeks = Vec::new();
    let mut days = Vec::with_capacity(DAYS_PER_WEEK);
    let mut cursor = anchor;

    while cursor < boundary {
        days.push(cursor);
        if days.len() == DAYS_PER_WEEK {
            weeks.push(WeekRow::from_days(std::mem::take(&mut days)));
        }
        cursor = cursor.add(TimeUnit::Days, 1)?;
    }

    Ok(MonthGrid(weeks))
}

/// The seven days of the week containing `date`.
pub fn week_of(date: &DateValue) -> Result<WeekRow, DomainError> {
    let mut cursor = start_of_week(date)?;
    let mut days = Vec::with_capacity(DAYS_PER_WEEK);
    days.push(cursor);

    while days.len() < DAYS_PER_WEEK {
        cursor = cursor.add(TimeUnit::Days, 1)?;
        days.push(cursor);
    }

    Ok(WeekRow::from_days(days))
}

/// January 1 of every year from `start`'s year through `end`'s year.
///
/// Empty when `start`'s year is after `end`'s year.
pub fn year_range(start: &DateValue, end: &DateValue) -> Result<Vec<DateValue>, DomainError> {
    let first = start_of_year(start)?;
    let last = start_of_year(end)?;
    // Both anchors are January 1, so this is an exact year count.
    let elapsed_years = first.until(&last, TimeUnit::Years)? as i64;

    let mut years = Vec::new();
    let mut cursor = first;
    for step in 0..=elapsed_years {
        if step > 0 {
            cursor = cursor.add(TimeUnit::Years, 1)?;
        }
        years.push(cursor);
    }

    Ok(years)
}
