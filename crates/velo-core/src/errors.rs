//! Unified error system for the Velo decision core
//!
//! A single error type shared by all workspace crates. Both error kinds the
//! core can produce are local-input validation failures: they indicate a
//! data or configuration defect upstream and are surfaced to the caller
//! immediately, never retried.

use serde::{Deserialize, Serialize};

/// Unified error type for all Velo core operations
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum VeloError {
    /// A `takes_effect_on` value could not be parsed as a date
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Error message describing the malformed date value
        message: String,
    },

    /// A symbolic route name missed the route registry
    #[error("Unknown route: {message}")]
    UnknownRoute {
        /// Error message naming the route that missed the registry
        message: String,
    },

    /// Invalid input or configuration
    #[error("Invalid: {message}")]
    Invalid {
        /// Error message describing the invalid input
        message: String,
    },

    /// Internal system error
    #[error("Internal error: {message}")]
    Internal {
        /// Error message describing the internal error
        message: String,
    },
}

impl VeloError {
    /// Create an invalid date error
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Create an unknown route error
    pub fn unknown_route(message: impl Into<String>) -> Self {
        Self::UnknownRoute {
            message: message.into(),
        }
    }

    /// Create an invalid input error
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

/// Result type alias using the unified error
pub type VeloResult<T> = Result<T, VeloError>;
