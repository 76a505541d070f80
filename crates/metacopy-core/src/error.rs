//! Error types for the MetaCopy decision core.
//!
//! All errors in the system are represented by the [`Error`] enum.
//! This ensures composable error handling across crates.

use thiserror::Error as ThisError;

/// The core error type for all MetaCopy operations.
///
/// The activation guard and the raw value formatter are total functions and
/// never produce one of these; only configuration-driven operations (title
/// rewriting, link resolution, config validation) can fail.
#[derive(ThisError, Debug)]
pub enum Error {
    /// Invalid configuration (bad title pattern, unusable strategy fields)
    #[error("Configuration error: {reason}")]
    ConfigError { reason: String },

    /// Front-matter block could not be interpreted
    #[error("Parse error: {reason}")]
    ParseError { reason: String },

    /// Generic unclassified error
    #[error("Error: {0}")]
    Other(String),
}

/// Convenient Result type alias
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a configuration error
    pub fn config_error(reason: impl Into<String>) -> Self {
        Error::ConfigError {
            reason: reason.into(),
        }
    }

    /// Create a parse error
    pub fn parse_error(reason: impl Into<String>) -> Self {
        Error::ParseError {
            reason: reason.into(),
        }
    }

    /// Create a generic error
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }
}
