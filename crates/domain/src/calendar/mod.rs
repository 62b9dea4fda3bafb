//! Calendar boundaries, grids and comparisons derived from a single `DateValue`.
//!
//! Everything here is a pure function. Sequences are produced by stepping a
//! cursor forward one day (or one month, or one year) from a computed anchor,
//! so month lengths and leap years are left entirely to `DateValue` arithmetic.
//!
//! Weeks start on Monday (ISO numbering, see `DateValue::day_of_week`).

pub mod boundaries;
pub mod comparison;
pub mod grid;

pub use boundaries::{
    end_of_day, end_of_month, end_of_week, end_of_year, start_of_day, start_of_month,
    start_of_week, start_of_year,
};
pub use comparison::{
    is_after, is_after_day, is_after_year, is_before, is_before_day, is_before_year,
    is_same_day, is_same_hour, is_same_month, is_same_or_after_day, is_same_or_after_year,
    is_same_or_before_day, is_same_or_before_year, is_same_year, is_within_range,
};
pub use grid::{month_array, week_array, week_of, year_range, MonthGrid, WeekRow, DAYS_PER_WEEK};
