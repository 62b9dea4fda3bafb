//! Ordering and same-period checks.
//!
//! Equality at a granularity means equality after flooring both values to
//! that granularity, which for the calendar fields reduces to comparing the
//! leading fields.

use crate::date_value::DateValue;

pub fn is_same_day(value: &DateValue, comparing: &DateValue) -> bool {
    value.date_part() == comparing.date_part()
}

pub fn is_same_month(value: &DateValue, comparing: &DateValue) -> bool {
    (value.year(), value.month()) == (comparing.year(), comparing.month())
}

pub fn is_same_year(value: &DateValue, comparing: &DateValue) -> bool {
    value.year() == comparing.year()
}

/// Same calendar day and same hour; minutes and below are ignored.
pub fn is_same_hour(value: &DateValue, comparing: &DateValue) -> bool {
    is_same_day(value, comparing) && value.hour() == comparing.hour()
}

pub fn is_before(value: &DateValue, comparing: &DateValue) -> bool {
    value < comparing
}

pub fn is_after(value: &DateValue, comparing: &DateValue) -> bool {
    value > comparing
}

pub fn is_before_day(value: &DateValue, comparing: &DateValue) -> bool {
    value.date_part() < comparing.date_part()
}

pub fn is_after_day(value: &DateValue, comparing: &DateValue) -> bool {
    value.date_part() > comparing.date_part()
}

pub fn is_same_or_before_day(value: &DateValue, comparing: &DateValue) -> bool {
    value.date_part() <= comparing.date_part()
}

pub fn is_same_or_after_day(value: &DateValue, comparing: &DateValue) -> bool {
    value.date_part() >= comparing.date_part()
}

pub fn is_before_year(value: &DateValue, comparing: &DateValue) -> bool {
    value.year() < comparing.year()
}

pub fn is_after_year(value: &DateValue, comparing: &DateValue) -> bool {
    value.year() > comparing.year()
}

pub fn is_same_or_before_year(value: &DateValue, comparing: &DateValue) -> bool {
    value.year() <= comparing.year()
}

pub fn is_same_or_after_year(value: &DateValue, comparing: &DateValue) -> bool {
    value.year() >= comparing.year()
}

/// True when `date` lies in the closed interval `[start, end]`.
///
/// An inverted range (`start > end`) contains nothing, not even its endpoints.
pub fn is_within_range(date: &DateValue, (start, end): (&DateValue, &DateValue)) -> bool {
    if start > end {
        return false;
    }
    date == start || date == end || (is_after(date, start) && is_before(date, end))
}
