//! LLM error types.

use thiserror::Error;

/// Errors that can occur during LLM operations.
#[derive(Debug, Error)]
pub enum LlmError {
    /// HTTP request failed.
    #[error("LLM request failed: {0}")]
    RequestFailed(String),

    /// Request timed out.
    #[error("LLM request timed out")]
    Timeout,

    /// LLM provider could not be reached.
    #[error("LLM provider unavailable: {0}")]
    Unavailable(String),

    /// Endpoint rejected the credentials.
    #[error("LLM provider rejected the API key (HTTP {status})")]
    Unauthorized {
        /// 401 or 403.
        status: u16,
    },

    /// Endpoint answered with a non-success status.
    #[error("LLM provider returned HTTP {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, possibly truncated.
        body: String,
    },

    /// Success status, but the body was not a chat completion.
    #[error("Malformed LLM response envelope: {0}")]
    InvalidResponse(String),

    /// Configuration error.
    #[error("LLM configuration error: {0}")]
    Config(String),
}

impl LlmError {
    /// Whether the failure is about credentials rather than connectivity.
    #[must_use]
    pub fn is_auth(&self) -> bool {
        matches!(self, LlmError::Unauthorized { .. })
    }
}

impl From<reqwest::Error> for LlmError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            LlmError::Timeout
        } else if err.is_connect() {
            LlmError::Unavailable(err.to_string())
        } else {
            LlmError::RequestFailed(err.to_string())
        }
    }
}
