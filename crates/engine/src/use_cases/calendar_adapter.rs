//! Calendar adapter use case.
//!
//! `CalendarAdapter` is the function table a date picker talks to. It owns the
//! locale and format table, asks the clock for "now" and the locale formatter
//! for text, and delegates all date arithmetic to `DateValue` and the
//! `calgrid_domain::calendar` functions.

use std::sync::Arc;

use calgrid_domain::calendar;
use calgrid_domain::{
    DateFormats, DateValue, FieldOverrides, FormatKey, MonthGrid, TimeUnit, DEFAULT_FORMATS,
};

use crate::infrastructure::error::AdapterError;
use crate::infrastructure::ports::{ClockPort, LocaleFormatterPort, Meridiem};
use crate::infrastructure::settings::AdapterSettings;

/// Input accepted by [`CalendarAdapter::date`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateInput {
    /// The current local time.
    Now,
    /// No date selected.
    Null,
    Value(DateValue),
    /// ISO-8601 text.
    Text(String),
}

/// Date operations for a picker UI, bound to one locale and format table.
pub struct CalendarAdapter {
    locale: String,
    formats: DateFormats,
    clock: Arc<dyn ClockPort>,
    formatter: Arc<dyn LocaleFormatterPort>,
}

impl CalendarAdapter {
    pub fn new(
        clock: Arc<dyn ClockPort>,
        formatter: Arc<dyn LocaleFormatterPort>,
        settings: AdapterSettings,
    ) -> Self {
        let locale = settings.locale_or_default().to_string();
        let formats = DEFAULT_FORMATS.merged(&settings.formats);

        tracing::debug!(
            locale = %locale,
            overridden_formats = settings.formats.iter().count(),
            "Calendar adapter created"
        );

        Self {
            locale,
            formats,
            clock,
            formatter,
        }
    }

    pub fn formats(&self) -> &DateFormats {
        &self.formats
    }

    // =========================================================================
    // Construction & parsing
    // =========================================================================

    pub fn date(&self, input: DateInput) -> Result<Option<DateValue>, AdapterError> {
        match input {
            DateInput::Now => Ok(Some(self.clock.now())),
            DateInput::Null => Ok(None),
            DateInput::Value(value) => Ok(Some(value)),
            DateInput::Text(text) => Ok(Some(text.parse()?)),
        }
    }

    /// Parse `text` as ISO-8601. Empty text is "no date".
    ///
    /// `format` is accepted for interface compatibility; only ISO text is
    /// understood.
    pub fn parse(&self, text: &str, format: &str) -> Result<Option<DateValue>, AdapterError> {
        if text.is_empty() {
            return Ok(None);
        }
        tracing::trace!(text, format, "Parsing date text as ISO-8601");
        Ok(Some(text.parse()?))
    }

    // =========================================================================
    // Locale & formatting
    // =========================================================================

    pub fn is_12_hour_cycle_in_current_locale(&self) -> bool {
        self.formatter.uses_12_hour_clock(&self.locale)
    }

    pub fn get_current_locale_code(&self) -> &str {
        &self.locale
    }

    /// Input mask hint for `format`, e.g. `L LT` becomes `mm/dd/yyyy h:mm (a|p)m`
    /// in `en-US`.
    pub fn get_format_helper_text(&self, format: &str) -> String {
        self.formatter.format_helper_text(format, &self.locale)
    }

    pub fn format(&self, value: Option<&DateValue>, key: FormatKey) -> Option<String> {
        value.map(|value| self.format_by_string(value, self.formats.get(key)))
    }

    pub fn format_by_string(&self, value: &DateValue, format: &str) -> String {
        self.formatter.format(value, format, &self.locale)
    }

    pub fn format_number(&self, digits: &str) -> String {
        self.formatter.format_number(digits, &self.locale)
    }

    pub fn get_meridiem_text(&self, meridiem: Meridiem) -> String {
        self.formatter.meridiem_text(meridiem, &self.locale)
    }

    // =========================================================================
    // Arithmetic
    // =========================================================================

    pub fn add_seconds(&self, value: &DateValue, count: i64) -> Result<DateValue, AdapterError> {
        Ok(value.add(TimeUnit::Seconds, count)?)
    }

    pub fn add_minutes(&self, value: &DateValue, count: i64) -> Result<DateValue, AdapterError> {
        Ok(value.add(TimeUnit::Minutes, count)?)
    }

    pub fn add_hours(&self, value: &DateValue, count: i64) -> Result<DateValue, AdapterError> {
        Ok(value.add(TimeUnit::Hours, count)?)
    }

    pub fn add_days(&self, value: &DateValue, count: i64) -> Result<DateValue, AdapterError> {
        Ok(value.add(TimeUnit::Days, count)?)
    }

    pub fn add_weeks(&self, value: &DateValue, count: i64) -> Result<DateValue, AdapterError> {
        Ok(value.add(TimeUnit::Weeks, count)?)
    }

    pub fn add_months(&self, value: &DateValue, count: i64) -> Result<DateValue, AdapterError> {
        Ok(value.add(TimeUnit::Months, count)?)
    }

    pub fn add_years(&self, value: &DateValue, count: i64) -> Result<DateValue, AdapterError> {
        Ok(value.add(TimeUnit::Years, count)?)
    }

    pub fn get_next_month(&self, value: &DateValue) -> Result<DateValue, AdapterError> {
        self.add_months(value, 1)
    }

    pub fn get_previous_month(&self, value: &DateValue) -> Result<DateValue, AdapterError> {
        self.add_months(value, -1)
    }

    /// Signed total of `comparing - value` in `unit`, nanoseconds by default.
    pub fn get_diff(
        &self,
        value: &DateValue,
        comparing: &DateValue,
        unit: Option<TimeUnit>,
    ) -> Result<f64, AdapterError> {
        Ok(value.until(comparing, unit.unwrap_or(TimeUnit::Nanoseconds))?)
    }

    // =========================================================================
    // Field access
    // =========================================================================

    pub fn get_hours(&self, value: &DateValue) -> u32 {
        value.hour()
    }

    pub fn set_hours(&self, value: &DateValue, hours: u32) -> Result<DateValue, AdapterError> {
        Ok(value.with(FieldOverrides {
            hour: Some(hours),
            ..FieldOverrides::default()
        })?)
    }

    pub fn get_minutes(&self, value: &DateValue) -> u32 {
        value.minute()
    }

    pub fn set_minutes(&self, value: &DateValue, minutes: u32) -> Result<DateValue, AdapterError> {
        Ok(value.with(FieldOverrides {
            minute: Some(minutes),
            ..FieldOverrides::default()
        })?)
    }

    pub fn get_seconds(&self, value: &DateValue) -> u32 {
        value.second()
    }

    pub fn set_seconds(&self, value: &DateValue, seconds: u32) -> Result<DateValue, AdapterError> {
        Ok(value.with(FieldOverrides {
            second: Some(seconds),
            ..FieldOverrides::default()
        })?)
    }

    /// Month number, 1 = January.
    pub fn get_month(&self, value: &DateValue) -> u32 {
        value.month()
    }

    pub fn set_month(&self, value: &DateValue, month: u32) -> Result<DateValue, AdapterError> {
        Ok(value.with(FieldOverrides {
            month: Some(month),
            ..FieldOverrides::default()
        })?)
    }

    pub fn get_year(&self, value: &DateValue) -> i32 {
        value.year()
    }

    pub fn set_year(&self, value: &DateValue, year: i32) -> Result<DateValue, AdapterError> {
        Ok(value.with(FieldOverrides {
            year: Some(year),
            ..FieldOverrides::default()
        })?)
    }

    pub fn get_days_in_month(&self, value: &DateValue) -> u32 {
        value.days_in_month()
    }

    /// The date of `date` at the hour, minute and second of `time`.
    pub fn merge_date_and_time(
        &self,
        date: &DateValue,
        time: &DateValue,
    ) -> Result<DateValue, AdapterError> {
        Ok(date.with(FieldOverrides::time(time.hour(), time.minute(), time.second()))?)
    }

    // =========================================================================
    // Comparison
    // =========================================================================

    pub fn is_null(&self, value: Option<&DateValue>) -> bool {
        value.is_none()
    }

    /// Any constructed value is valid; only "no date" is not.
    pub fn is_valid(&self, value: Option<&DateValue>) -> bool {
        value.is_some()
    }

    /// Two nulls are equal; a null never equals a date.
    pub fn is_equal(&self, value: Option<&DateValue>, comparing: Option<&DateValue>) -> bool {
        value == comparing
    }

    pub fn is_same_day(&self, value: &DateValue, comparing: &DateValue) -> bool {
        calendar::is_same_day(value, comparing)
    }

    pub fn is_same_month(&self, value: &DateValue, comparing: &DateValue) -> bool {
        calendar::is_same_month(value, comparing)
    }

    pub fn is_same_year(&self, value: &DateValue, comparing: &DateValue) -> bool {
        calendar::is_same_year(value, comparing)
    }

    pub fn is_same_hour(&self, value: &DateValue, comparing: &DateValue) -> bool {
        calendar::is_same_hour(value, comparing)
    }

    pub fn is_before(&self, value: &DateValue, comparing: &DateValue) -> bool {
        calendar::is_before(value, comparing)
    }

    pub fn is_after(&self, value: &DateValue, comparing: &DateValue) -> bool {
        calendar::is_after(value, comparing)
    }

    pub fn is_before_day(&self, value: &DateValue, comparing: &DateValue) -> bool {
        calendar::is_before_day(value, comparing)
    }

    pub fn is_after_day(&self, value: &DateValue, comparing: &DateValue) -> bool {
        calendar::is_after_day(value, comparing)
    }

    pub fn is_same_or_before_day(&self, value: &DateValue, comparing: &DateValue) -> bool {
        calendar::is_same_or_before_day(value, comparing)
    }

    pub fn is_same_or_after_day(&self, value: &DateValue, comparing: &DateValue) -> bool {
        calendar::is_same_or_after_day(value, comparing)
    }

    pub fn is_before_year(&self, value: &DateValue, comparing: &DateValue) -> bool {
        calendar::is_before_year(value, comparing)
    }

    pub fn is_after_year(&self, value: &DateValue, comparing: &DateValue) -> bool {
        calendar::is_after_year(value, comparing)
    }

    pub fn is_same_or_before_year(&self, value: &DateValue, comparing: &DateValue) -> bool {
        calendar::is_same_or_before_year(value, comparing)
    }

    pub fn is_same_or_after_year(&self, value: &DateValue, comparing: &DateValue) -> bool {
        calendar::is_same_or_after_year(value, comparing)
    }

    pub fn is_within_range(&self, date: &DateValue, range: (&DateValue, &DateValue)) -> bool {
        calendar::is_within_range(date, range)
    }

    // =========================================================================
    // Boundaries
    // =========================================================================

    pub fn start_of_day(&self, value: &DateValue) -> Result<DateValue, AdapterError> {
        Ok(calendar::start_of_day(value)?)
    }

    pub fn end_of_day(&self, value: &DateValue) -> Result<DateValue, AdapterError> {
        Ok(calendar::end_of_day(value)?)
    }

    pub fn start_of_week(&self, value: &DateValue) -> Result<DateValue, AdapterError> {
        Ok(calendar::start_of_week(value)?)
    }

    pub fn end_of_week(&self, value: &DateValue) -> Result<DateValue, AdapterError> {
        Ok(calendar::end_of_week(value)?)
    }

    pub fn start_of_month(&self, value: &DateValue) -> Result<DateValue, AdapterError> {
        Ok(calendar::start_of_month(value)?)
    }

    pub fn end_of_month(&self, value: &DateValue) -> Result<DateValue, AdapterError> {
        Ok(calendar::end_of_month(value)?)
    }

    pub fn start_of_year(&self, value: &DateValue) -> Result<DateValue, AdapterError> {
        Ok(calendar::start_of_year(value)?)
    }

    pub fn end_of_year(&self, value: &DateValue) -> Result<DateValue, AdapterError> {
        Ok(calendar::end_of_year(value)?)
    }

    // =========================================================================
    // Grids
    // =========================================================================

    /// January 1 through December 1 of `value`'s year.
    pub fn get_month_array(&self, value: &DateValue) -> Result<Vec<DateValue>, AdapterError> {
        Ok(calendar::month_array(value)?)
    }

    /// Monday-first week rows covering `value`'s month.
    pub fn get_week_array(&self, value: &DateValue) -> Result<MonthGrid, AdapterError> {
        let grid = calendar::week_array(value)?;
        tracing::debug!(
            year = value.year(),
            month = value.month(),
            weeks = grid.len(),
            "Derived week grid"
        );
        Ok(grid)
    }

    pub fn get_year_range(
        &self,
        start: &DateValue,
        end: &DateValue,
    ) -> Result<Vec<DateValue>, AdapterError> {
        let years = calendar::year_range(start, end)?;
        tracing::debug!(
            start_year = start.year(),
            end_year = end.year(),
            count = years.len(),
            "Derived year range"
        );
        Ok(years)
    }

    /// Short weekday names, Monday first, taken from the current week.
    pub fn get_weekdays(&self) -> Result<Vec<String>, AdapterError> {
        let week = calendar::week_of(&self.clock.now())?;
        let pattern = self.formats.get(FormatKey::WeekdayShort);
        Ok(week
            .iter()
            .map(|day| self.format_by_string(day, pattern))
            .collect())
    }
}
