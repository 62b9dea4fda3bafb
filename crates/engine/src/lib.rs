//! Calgrid engine library.
//!
//! Binds the calendar domain to a clock, a locale formatter and environment
//! settings, and exposes the result as `CalendarAdapter`.
//!
//! ## Structure
//!
//! - `use_cases/` - The calendar adapter operations
//! - `infrastructure/` - External dependency implementations (ports + adapters)
//! - `app` - Application composition

pub mod app;
pub mod infrastructure;
pub mod use_cases;

pub use app::App;
pub use infrastructure::error::AdapterError;
pub use use_cases::{CalendarAdapter, DateInput};
