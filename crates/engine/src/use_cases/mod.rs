//! Use cases - caller-facing operations.
//!
//! Use cases orchestrate domain functions and infrastructure ports.

pub mod calendar_adapter;

pub use calendar_adapter::{CalendarAdapter, DateInput};
