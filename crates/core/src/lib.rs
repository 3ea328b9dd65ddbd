//! Shared primitives for the employee services.

#![forbid(unsafe_code)]

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type used across the employee crates.
pub type AppResult<T> = Result<T, AppError>;

/// Message carried by [`AppError::InvalidFields`].
pub const FIELD_VALIDATION_MESSAGE: &str = "Validation errors occurred.";

/// A validated non-empty UTF-8 string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NonEmptyString(String);

impl NonEmptyString {
    /// Creates a validated non-empty string.
    pub fn new(value: impl Into<String>) -> AppResult<Self> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(AppError::InvalidInput(
                "value must not be empty or whitespace".to_owned(),
            ));
        }

        Ok(Self(value))
    }

    /// Returns the underlying string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl From<NonEmptyString> for String {
    fn from(value: NonEmptyString) -> Self {
        value.0
    }
}

/// Common application error categories.
///
/// Display output is the client-facing message; no category prefix is added so
/// that both services surface the same text for the same failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AppError {
    /// Malformed input or violated invariant.
    #[error("{0}")]
    InvalidInput(String),

    /// One or more request fields failed validation, keyed by field name.
    #[error("Validation errors occurred.")]
    InvalidFields(BTreeMap<String, String>),

    /// Requested resource does not exist.
    #[error("{0}")]
    NotFound(String),

    /// Caller holds a valid role that lacks the required authority.
    #[error("{0}")]
    Forbidden(String),

    /// Upstream service unreachable, misbehaving, or retries exhausted.
    #[error("{0}")]
    Upstream(String),

    /// Internal unexpected error.
    #[error("{0}")]
    Internal(String),
}

impl AppError {
    /// Returns the per-field violations for [`AppError::InvalidFields`].
    #[must_use]
    pub fn field_details(&self) -> Option<&BTreeMap<String, String>> {
        match self {
            Self::InvalidFields(details) => Some(details),
            _ => None,
        }
    }
}
