//! # Error Conversions
//!
//! `Display` and `std::error::Error` for [`ManagedError`], plus conversions
//! from standard library and serde error types.

use std::error::Error as StdError;
use std::fmt;
use std::io;

use crate::kind::ErrorKind;
use crate::types::ManagedError;

// ============================================================================
// Trait Implementations
// ============================================================================

/// `[kind] message` or `[kind:code] message`, then `: details` when set,
/// otherwise `: cause` using the cause's own `Display`
impl fmt::Display for ManagedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.code {
            Some(code) => write!(f, "[{}:{}] {}", self.kind, code, self.message)?,
            None => write!(f, "[{}] {}", self.kind, self.message)?,
        }

        if let Some(details) = &self.details {
            return write!(f, ": {}", details);
        }

        if let Some(cause) = &self.cause {
            write!(f, ": {}", cause)?;
        }

        Ok(())
    }
}

impl StdError for ManagedError {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause
            .as_ref()
            .map(|err| err.as_ref() as &(dyn StdError + 'static))
    }
}

// ============================================================================
// Conversions from Standard Library Types
// ============================================================================

impl From<io::Error> for ManagedError {
    #[track_caller]
    fn from(err: io::Error) -> Self {
        let io_kind = err.kind();

        let (kind, message, retryable) = match io_kind {
            io::ErrorKind::NotFound => (ErrorKind::NOT_FOUND, "Resource not found", false),
            io::ErrorKind::PermissionDenied => (ErrorKind::PERMISSION, "Permission denied", false),
            io::ErrorKind::InvalidInput | io::ErrorKind::InvalidData => {
                (ErrorKind::VALIDATION, "Invalid data", false)
            }
            io::ErrorKind::ConnectionRefused | io::ErrorKind::NotConnected => {
                (ErrorKind::EXTERNAL, "Connection failed", false)
            }
            io::ErrorKind::ConnectionReset | io::ErrorKind::ConnectionAborted => {
                (ErrorKind::EXTERNAL, "Connection interrupted", true)
            }
            io::ErrorKind::TimedOut => (ErrorKind::EXTERNAL, "Operation timed out", true),
            io::ErrorKind::Interrupted | io::ErrorKind::WouldBlock => {
                (ErrorKind::SYSTEM, "Operation interrupted", true)
            }
            _ => (ErrorKind::SYSTEM, "I/O operation failed", false),
        };

        Self::coded_from_cause(kind, "io", message, err)
            .with_context("io_kind", format!("{:?}", io_kind))
            .with_retryable(retryable)
    }
}

impl From<serde_json::Error> for ManagedError {
    #[track_caller]
    fn from(err: serde_json::Error) -> Self {
        use serde_json::error::Category;

        let (kind, message) = match err.classify() {
            Category::Io => (ErrorKind::SYSTEM, "Failed to read JSON"),
            Category::Syntax | Category::Data | Category::Eof => {
                (ErrorKind::VALIDATION, "Malformed JSON")
            }
        };
        let (line, column) = (err.line(), err.column());

        Self::coded_from_cause(kind, "json", message, err)
            .with_context("line", line)
            .with_context("column", column)
    }
}
