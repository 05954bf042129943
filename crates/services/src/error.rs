//! Shared error types for the services crate.

use thiserror::Error;

/// Why `SubmitGate::begin` refused to call the submit handler.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SubmitRejected {
    #[error("a submission is already in flight")]
    AlreadySubmitting,
    #[error("{0}")]
    Incomplete(String),
}

/// Errors emitted while reading editor configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ConfigError {
    #[error("invalid banner duration: {raw}")]
    InvalidBannerDuration { raw: String },
    #[error("unknown editor mode: {raw}")]
    UnknownMode { raw: String },
    #[error("editor config is not valid: {message}")]
    Json { message: String },
}

impl ConfigError {
    pub(crate) fn from_json(err: serde_json::Error) -> Self {
        Self::Json {
            message: err.to_string(),
        }
    }
}
