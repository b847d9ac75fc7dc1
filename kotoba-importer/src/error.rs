//! Errors surfaced to the presentation layer.
//!
//! Every generation failure displays the same generic text. The tagged
//! [`ErrorKind`] and the underlying cause stay attached so callers can
//! choose their own messaging without parsing strings.

use std::fmt;

use kotoba_core::CoreError;
use kotoba_llm::LlmError;
use thiserror::Error;

/// Text shown to users on any failure.
pub const USER_MESSAGE: &str = "Error generating vocabulary. Please try again.";

/// What went wrong, coarse enough to drive user messaging.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The model call could not complete (connectivity, provider error,
    /// malformed provider envelope, timeout).
    Network,
    /// The provider rejected the API key.
    Auth,
    /// The completion was not a JSON array of vocabulary items.
    Parse,
    /// The category was blank; no call was made.
    InvalidInput,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Network => "network",
            Self::Auth => "auth",
            Self::Parse => "parse",
            Self::InvalidInput => "invalid_input",
        };
        write!(f, "{name}")
    }
}

/// Underlying cause of a [`GenerationError`].
#[derive(Debug, Error)]
pub enum Cause {
    /// Model call failed.
    #[error(transparent)]
    Llm(LlmError),
    /// Completion did not parse.
    #[error(transparent)]
    Parse(CoreError),
    /// Category was empty or whitespace.
    #[error("category is blank")]
    BlankCategory,
}

/// The single error returned by `generate_vocabulary`.
#[derive(Debug, Error)]
#[error("vocabulary generation failed")]
pub struct GenerationError {
    kind: ErrorKind,
    #[source]
    cause: Cause,
}

impl GenerationError {
    /// Tagged kind of the failure.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// The underlying error.
    #[must_use]
    pub fn cause(&self) -> &Cause {
        &self.cause
    }

    /// Message for end users; identical for every kind.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        USER_MESSAGE
    }

    pub(crate) fn blank_category() -> Self {
        Self {
            kind: ErrorKind::InvalidInput,
            cause: Cause::BlankCategory,
        }
    }
}

impl From<LlmError> for GenerationError {
    fn from(err: LlmError) -> Self {
        let kind = if err.is_auth() {
            ErrorKind::Auth
        } else {
            ErrorKind::Network
        };
        Self {
            kind,
            cause: Cause::Llm(err),
        }
    }
}

/// Only parser failures reach the service; configuration errors surface
/// earlier as [`SetupError`].
impl From<CoreError> for GenerationError {
    fn from(err: CoreError) -> Self {
        Self {
            kind: ErrorKind::Parse,
            cause: Cause::Parse(err),
        }
    }
}

/// Failure while wiring a service from configuration.
#[derive(Debug, Error)]
pub enum SetupError {
    /// Configuration or API key problem.
    #[error(transparent)]
    Core(#[from] CoreError),
    /// Client or prompt template problem.
    #[error(transparent)]
    Llm(#[from] LlmError),
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn display_is_generic_for_every_kind() {
        let errors = [
            GenerationError::from(LlmError::Unavailable("connection refused".into())),
            GenerationError::from(LlmError::Unauthorized { status: 401 }),
            GenerationError::from(CoreError::Parse {
                message: "expected value".into(),
                line: 1,
                column: 1,
                excerpt: "Sure!".into(),
            }),
            GenerationError::blank_category(),
        ];
        for err in &errors {
            assert_eq!(err.to_string(), "vocabulary generation failed");
            assert_eq!(err.user_message(), USER_MESSAGE);
        }
    }

    #[test]
    fn kinds_are_preserved() {
        assert_eq!(
            GenerationError::from(LlmError::Timeout).kind(),
            ErrorKind::Network
        );
        assert_eq!(
            GenerationError::from(LlmError::Status { status: 500, body: String::new() }).kind(),
            ErrorKind::Network
        );
        assert_eq!(
            GenerationError::from(LlmError::Unauthorized { status: 403 }).kind(),
            ErrorKind::Auth
        );
        assert_eq!(GenerationError::blank_category().kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn source_exposes_cause() {
        let err = GenerationError::from(LlmError::Unavailable("dns failure".into()));
        let source = err.source().expect("has source");
        assert!(source.to_string().contains("dns failure"));
        assert!(matches!(err.cause(), Cause::Llm(LlmError::Unavailable(_))));
    }

    #[test]
    fn parser_failure_maps_to_parse_kind() {
        let err = GenerationError::from(CoreError::Parse {
            message: "trailing characters".into(),
            line: 1,
            column: 3,
            excerpt: "[] ok".into(),
        });
        assert_eq!(err.kind(), ErrorKind::Parse);
        assert!(matches!(err.cause(), Cause::Parse(CoreError::Parse { column: 3, .. })));
    }

    #[test]
    fn kind_display_names() {
        assert_eq!(ErrorKind::InvalidInput.to_string(), "invalid_input");
        assert_eq!(ErrorKind::Auth.to_string(), "auth");
    }
}
