pub mod calendar;
pub mod date_value;
pub mod error;
pub mod formats;
pub mod units;

pub use error::DomainError;

// Re-export the date value and its field types
pub use date_value::{DateFields, DateValue, FieldOverrides};

// Re-export units
pub use units::{RoundingMode, TimeUnit};

// Re-export format tables
pub use formats::{DateFormats, FormatKey, FormatOverrides, DEFAULT_FORMATS};

// Re-export calendar grid types (the builder functions stay under `calendar::`)
pub use calendar::{MonthGrid, WeekRow, DAYS_PER_WEEK};
