//! Unified error types for the domain layer
//!
//! Every fallible date operation (construction, arithmetic, rounding, field
//! replacement) reports through `DomainError`, so callers never see raw chrono
//! `Option`s or panics.

use thiserror::Error;

/// Unified error type for date operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// Validation failed (e.g., month 13, day 0, hour 24)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Arithmetic left the representable date range
    #[error("Date out of range: {0}")]
    OutOfRange(String),

    /// Parse error (ISO text, unit names, format keys)
    #[error("Parse error: {0}")]
    Parse(String),

    /// The operation does not accept this unit
    #[error("Unsupported unit '{unit}' for {operation}")]
    UnsupportedUnit {
        unit: &'static str,
        operation: &'static str,
    },
}

impl DomainError {
    /// Creates a validation error for invalid field values.
    ///
    /// # Example
    /// ```ignore
    /// if !(1..=12).contains(&month) {
    ///     return Err(DomainError::validation(format!("Invalid month: {}", month)));
    /// }
    /// ```
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an out-of-range error
    pub fn out_of_range(msg: impl Into<String>) -> Self {
        Self::OutOfRange(msg.into())
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this in `FromStr` implementations when the input string
    /// doesn't match any known variant or format.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create an unsupported unit error
    pub fn unsupported_unit(unit: &'static str, operation: &'static str) -> Self {
        Self::UnsupportedUnit { unit, operation }
    }
}
