//! # Convenience Error Constructors
//!
//! Shorthand constructors for the well-known kinds.

use crate::kind::ErrorKind;
use crate::types::{BoxError, ManagedError};

impl ManagedError {
    #[track_caller]
    pub fn validation(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::coded(ErrorKind::VALIDATION, code, message)
    }

    #[track_caller]
    pub fn not_found(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::coded(ErrorKind::NOT_FOUND, code, message)
    }

    #[track_caller]
    pub fn permission(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::coded(ErrorKind::PERMISSION, code, message)
    }

    #[track_caller]
    pub fn business(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::coded(ErrorKind::BUSINESS, code, message)
    }

    #[track_caller]
    pub fn internal(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self::coded(ErrorKind::INTERNAL, code, message)
    }

    /// External service failure caused by `cause`
    #[track_caller]
    pub fn external(
        code: impl Into<String>,
        message: impl Into<String>,
        cause: impl Into<BoxError>,
    ) -> Self {
        Self::coded_from_cause(ErrorKind::EXTERNAL, code, message, cause)
    }

    /// System-level failure caused by `cause`
    #[track_caller]
    pub fn system(
        code: impl Into<String>,
        message: impl Into<String>,
        cause: impl Into<BoxError>,
    ) -> Self {
        Self::coded_from_cause(ErrorKind::SYSTEM, code, message, cause)
    }

    /// Missing field or malformed value in caller input
    #[track_caller]
    pub fn invalid_field(field: impl Into<String>, reason: impl Into<String>) -> Self {
        let field = field.into();
        Self::coded(
            ErrorKind::VALIDATION,
            "invalid_field",
            format!("Invalid value for {}", field),
        )
        .with_details(reason)
        .with_context("field", field)
    }
}
