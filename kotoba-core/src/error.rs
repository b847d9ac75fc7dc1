//! Error types for the KOTOBA core library.

use thiserror::Error;

/// Top-level error type for core operations.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Model output was not a JSON array of vocabulary items.
    #[error("Failed to parse vocabulary at line {line}, column {column}: {message} (raw text: '{excerpt}')")]
    Parse {
        /// Message from the JSON deserializer.
        message: String,
        /// 1-based line of the failure (0 when unknown).
        line: usize,
        /// 1-based column of the failure (0 when unknown).
        column: usize,
        /// Leading slice of the offending text.
        excerpt: String,
    },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The environment variable holding the API key is unset or empty.
    #[error("API key not found: environment variable {var} is unset or empty")]
    MissingApiKey {
        /// Name of the variable that was looked up.
        var: String,
    },

    /// Generic I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Convenience Result type alias.
pub type Result<T> = std::result::Result<T, CoreError>;
