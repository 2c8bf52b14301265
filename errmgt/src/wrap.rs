//! # Wrapping Helpers
//!
//! Attach a message to an arbitrary error without classifying it. The
//! wrapped error stays reachable through `source()`, so chain inspection
//! keeps working across wrappers.

use std::fmt;

use crate::kind::ErrorKind;
use crate::types::{BoxError, ManagedError};

/// An error annotated with a message, rendered as `"<message>: <source>"`
#[derive(Debug, thiserror::Error)]
#[error("{message}: {source}")]
pub struct WrappedError {
    message: String,
    #[source]
    source: BoxError,
}

impl WrappedError {
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The wrapped error, exactly as it was passed in
    pub fn inner(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        self.source.as_ref()
    }

    pub fn into_inner(self) -> BoxError {
        self.source
    }
}

/// Wrap `err` with a message
pub fn wrap(err: impl Into<BoxError>, message: impl Into<String>) -> WrappedError {
    WrappedError {
        message: message.into(),
        source: err.into(),
    }
}

/// Wrap `err` with a formatted message; see also [`wrapf!`](crate::wrapf)
pub fn wrap_fmt(err: impl Into<BoxError>, args: fmt::Arguments<'_>) -> WrappedError {
    wrap(err, args.to_string())
}

// ============================================================================
// Result Extension
// ============================================================================

/// Extension trait for wrapping the error side of a `Result`
pub trait ResultExt<T> {
    /// Wrap the error with a message
    fn wrap_err(self, message: impl Into<String>) -> Result<T, WrappedError>;

    /// Wrap the error with a lazily built message
    fn wrap_err_with<M, F>(self, f: F) -> Result<T, WrappedError>
    where
        M: Into<String>,
        F: FnOnce() -> M;

    /// Classify the error as the cause of a new [`ManagedError`]
    fn manage(self, kind: impl Into<ErrorKind>, message: impl Into<String>) -> Result<T, ManagedError>;
}

impl<T, E> ResultExt<T> for Result<T, E>
where
    E: Into<BoxError>,
{
    fn wrap_err(self, message: impl Into<String>) -> Result<T, WrappedError> {
        self.map_err(|e| wrap(e, message))
    }

    fn wrap_err_with<M, F>(self, f: F) -> Result<T, WrappedError>
    where
        M: Into<String>,
        F: FnOnce() -> M,
    {
        self.map_err(|e| wrap(e, f()))
    }

    #[track_caller]
    fn manage(self, kind: impl Into<ErrorKind>, message: impl Into<String>) -> Result<T, ManagedError> {
        match self {
            Ok(value) => Ok(value),
            Err(e) => Err(ManagedError::from_cause(kind, message, e)),
        }
    }
}
