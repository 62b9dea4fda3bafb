//! Unified engine error type.
//!
//! Date arithmetic failures come from the domain and pass through unchanged;
//! the engine only adds configuration failures of its own.

use calgrid_domain::DomainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AdapterError {
    /// A date operation failed.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Environment configuration is invalid.
    #[error("Settings error: {0}")]
    Settings(String),
}

impl AdapterError {
    pub fn settings(msg: impl Into<String>) -> Self {
        Self::Settings(msg.into())
    }
}
