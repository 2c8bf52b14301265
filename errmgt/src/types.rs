//! # Managed Error Type
//!
//! This module contains the core error type: its constructors, fluent
//! builders and accessors. Trait implementations live in
//! [`conversions`](crate::conversions).

use std::error::Error as StdError;
use std::panic::Location;

use serde_json::Value;

use crate::context::ErrorContext;
use crate::kind::ErrorKind;

/// Result type alias defaulting to [`ManagedError`]
pub type Result<T, E = ManagedError> = std::result::Result<T, E>;

/// Boxed opaque error used as a cause
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Message stored when a caller supplies an empty one
pub const PLACEHOLDER_MESSAGE: &str = "unspecified error";

// ============================================================================
// Managed Error
// ============================================================================

/// A classified, contextualized failure
#[derive(Debug)]
pub struct ManagedError {
    pub(crate) kind: ErrorKind,
    pub(crate) code: Option<String>,
    pub(crate) message: String,
    pub(crate) details: Option<String>,
    pub(crate) context: ErrorContext,
    pub(crate) retryable: bool,
    pub(crate) status_code: Option<u16>,
    pub(crate) location: Option<&'static Location<'static>>,
    pub(crate) cause: Option<BoxError>,
}

impl ManagedError {
    /// Create a new error with a kind and message
    #[track_caller]
    pub fn new(kind: impl Into<ErrorKind>, message: impl Into<String>) -> Self {
        Self::build(kind.into(), None, message.into(), None)
    }

    /// Create a new error with a machine-readable code
    #[track_caller]
    pub fn coded(
        kind: impl Into<ErrorKind>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self::build(kind.into(), Some(code.into()), message.into(), None)
    }

    /// Create a new error owning `cause` as its underlying error
    #[track_caller]
    pub fn from_cause(
        kind: impl Into<ErrorKind>,
        message: impl Into<String>,
        cause: impl Into<BoxError>,
    ) -> Self {
        Self::build(kind.into(), None, message.into(), Some(cause.into()))
    }

    /// Create a new coded error owning `cause` as its underlying error
    #[track_caller]
    pub fn coded_from_cause(
        kind: impl Into<ErrorKind>,
        code: impl Into<String>,
        message: impl Into<String>,
        cause: impl Into<BoxError>,
    ) -> Self {
        Self::build(
            kind.into(),
            Some(code.into()),
            message.into(),
            Some(cause.into()),
        )
    }

    #[track_caller]
    pub(crate) fn build(
        kind: ErrorKind,
        code: Option<String>,
        message: String,
        cause: Option<BoxError>,
    ) -> Self {
        Self {
            kind,
            code: normalize_code(code),
            message: normalize_message(message),
            details: None,
            context: ErrorContext::new(),
            retryable: false,
            status_code: None,
            location: Some(Location::caller()),
            cause,
        }
    }

    // ========================================================================
    // Builders
    // ========================================================================

    /// Add context key-value pair, replacing any previous value for `key`
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.context.insert(key, value);
        self
    }

    /// Set the long-form explanation
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Set the retry hint
    pub fn with_retryable(mut self, retryable: bool) -> Self {
        self.retryable = retryable;
        self
    }

    /// Mark as retryable
    pub fn retryable(self) -> Self {
        self.with_retryable(true)
    }

    /// Set the transport status hint
    pub fn with_status_code(mut self, status_code: u16) -> Self {
        self.status_code = Some(status_code);
        self
    }

    /// Override the captured source location
    pub fn with_location(mut self, loc: &'static Location<'static>) -> Self {
        self.location = Some(loc);
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    pub fn context(&self) -> &ErrorContext {
        &self.context
    }

    /// Get a single context value by key
    pub fn get_context(&self, key: &str) -> Option<&Value> {
        self.context.get(key)
    }

    pub fn is_retryable(&self) -> bool {
        self.retryable
    }

    /// Explicit status hint, if one was set
    pub fn status_code(&self) -> Option<u16> {
        self.status_code
    }

    /// Explicit status hint, falling back to the kind's default
    pub fn effective_status_code(&self) -> Option<u16> {
        self.status_code.or_else(|| self.kind.default_status_code())
    }

    /// Where the error was constructed
    pub fn location(&self) -> Option<&'static Location<'static>> {
        self.location
    }

    /// Check if the error is of a specific kind
    pub fn is_kind(&self, kind: &ErrorKind) -> bool {
        self.kind == *kind
    }

    /// Loose equality used by chain matching: same kind and same code,
    /// whatever the message, details or context
    pub fn is_equivalent(&self, other: &ManagedError) -> bool {
        self.kind == other.kind && self.code == other.code
    }

    /// The underlying error, exactly as it was passed in
    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    /// Take ownership of the underlying error
    pub fn into_cause(self) -> Option<BoxError> {
        self.cause
    }

    /// Human-readable form, identical to `Display`
    pub fn render(&self) -> String {
        self.to_string()
    }
}

fn normalize_code(code: Option<String>) -> Option<String> {
    code.filter(|c| !c.trim().is_empty())
}

#[track_caller]
pub(crate) fn normalize_message(message: String) -> String {
    if !message.trim().is_empty() {
        return message;
    }
    let loc = Location::caller();
    tracing::warn!(
        file = loc.file(),
        line = loc.line(),
        "managed error constructed with an empty message"
    );
    PLACEHOLDER_MESSAGE.to_string()
}
