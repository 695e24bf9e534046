//! Error types for the salary engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while normalizing input,
//! resolving salary modes and loading configuration.

use thiserror::Error;

/// The main error type for the salary engine.
///
/// `ValidationRejected` and `ModeNotFound` are never fatal: the absorbing
/// operations fold them into "previous state retained". The remaining
/// variants only arise while loading configuration.
///
/// # Example
///
/// ```
/// use salary_engine::error::EngineError;
///
/// let error = EngineError::ModeNotFound { id: 99 };
/// assert_eq!(error.to_string(), "Salary mode not found: 99");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Raw amount text was malformed or out of range.
    #[error("Amount input rejected '{input}': {reason}")]
    ValidationRejected {
        /// The raw text that was rejected.
        input: String,
        /// Why the text was rejected.
        reason: String,
    },

    /// A salary mode id outside the fixed mode table.
    #[error("Salary mode not found: {id}")]
    ModeNotFound {
        /// The id that was looked up.
        id: u32,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Configuration parsed but holds a value the engine cannot use.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field, in dotted form (e.g. `input.max_length`).
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

impl EngineError {
    /// Shorthand for building a [`EngineError::ValidationRejected`].
    pub fn rejected(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ValidationRejected {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
