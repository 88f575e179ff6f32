//! Configuration errors.

use core::num::ParseIntError;

use thiserror::Error;

/// An environment variable holds a value that cannot be used.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The log format is not one of `pretty`, `compact` or `json`.
    #[error("unknown log format '{0}', expected pretty, compact or json")]
    InvalidFormat(String),
    /// The depth bound is not a non-negative integer.
    #[error("invalid maximum discovery depth '{value}'")]
    InvalidMaxDepth {
        /// Raw value.
        value: String,
        /// Parse failure.
        #[source]
        source: ParseIntError,
    },
}
