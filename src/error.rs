//! Custom error types and handling
//!
//! This module defines the client's error types. Every variant carries a
//! message suitable for showing to the user as-is.

use crate::config::ConfigError;
use crate::constants::messages;

/// Local validation failures; the submission never leaves the client
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{}", messages::NO_LANGUAGE)]
    NoLanguage,

    #[error("{}", messages::EMPTY_SUBMISSION)]
    EmptySubmission,
}

/// Failure of a single submission attempt
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Non-success status; `message` is the response body or the status reason
    #[error("Submission failed: {message}")]
    Rejected { status: u16, message: String },

    /// The request never produced a response
    #[error("Submission failed: {0}")]
    Transport(String),

    /// Success status, but the body was not a grading outcome
    #[error("Submission failed: malformed response from grading server ({0})")]
    MalformedResponse(String),
}

impl SubmitError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Validation(ValidationError::NoLanguage) => "NO_LANGUAGE",
            Self::Validation(ValidationError::EmptySubmission) => "EMPTY_SUBMISSION",
            Self::Rejected { .. } => "SUBMISSION_REJECTED",
            Self::Transport(_) => "TRANSPORT_ERROR",
            Self::MalformedResponse(_) => "MALFORMED_RESPONSE",
        }
    }

    /// Whether the request reached the backend at all
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<reqwest::Error> for SubmitError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            SubmitError::MalformedResponse(err.to_string())
        } else if err.is_timeout() {
            SubmitError::Transport("request timed out".to_string())
        } else if err.is_connect() {
            SubmitError::Transport("could not reach the grading server".to_string())
        } else {
            SubmitError::Transport(messages::UNEXPECTED_FAILURE.to_string())
        }
    }
}

/// Client-wide error type for everything outside the submit path
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("Request failed with status {status}: {message}")]
    Http { status: u16, message: String },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Unsupported language: {0}")]
    UnsupportedLanguage(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigError),
}

impl ClientError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Http { .. } => "HTTP_ERROR",
            Self::Network(_) => "NETWORK_ERROR",
            Self::MalformedResponse(_) => "MALFORMED_RESPONSE",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::UnsupportedLanguage(_) => "UNSUPPORTED_LANGUAGE",
            Self::Io(_) => "IO_ERROR",
            Self::Configuration(_) => "CONFIGURATION_ERROR",
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            ClientError::MalformedResponse(err.to_string())
        } else {
            ClientError::Network(err.to_string())
        }
    }
}

/// Result type alias using ClientError
pub type ClientResult<T> = Result<T, ClientError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        assert_eq!(
            ValidationError::NoLanguage.to_string(),
            "Please select a programming language."
        );
        assert_eq!(
            SubmitError::from(ValidationError::EmptySubmission).to_string(),
            "Please enter a solution or upload a file."
        );
    }

    #[test]
    fn test_rejected_message_carries_body() {
        let err = SubmitError::Rejected {
            status: 500,
            message: "internal error".to_string(),
        };
        assert_eq!(err.to_string(), "Submission failed: internal error");
        assert_eq!(err.error_code(), "SUBMISSION_REJECTED");
        assert!(!err.is_local());
    }
}
