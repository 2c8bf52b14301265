//! # errmgt
//!
//! Structured, categorized errors for applications that need more than a
//! string: every [`ManagedError`] carries a kind, a message, an optional code
//! and details, key-value context, a retry hint and a status hint, and may
//! own the error that caused it.
//!
//! ## Organization
//!
//! - [`kind`] - Open classification with a registry of well-known kinds
//! - [`context`] - Key-value context attached to an error
//! - [`chain`] - Inspection of an error's `source()` chain
//! - [`wrap`](mod@wrap) - Message-only wrapping of arbitrary errors
//! - [`record`] - Flat serializable view for transport
//! - [`report`](mod@report) - Structured `tracing` emission
//! - [`macros`] - `wrapf!`, `bail!`, `ensure!`, `log_err!`
//!
//! ## Rendering
//!
//! `[kind] message` or `[kind:code] message`, followed by `: details` when
//! details are set, otherwise by `: cause` when a cause is present. Context is
//! never part of the rendered string.
//!
//! ## Usage Example
//!
//! ```rust
//! use errmgt::{ErrorKind, ManagedError};
//!
//! let err = ManagedError::coded(ErrorKind::VALIDATION, "invalid_email", "Email format is invalid")
//!     .with_details("Must contain @")
//!     .with_context("field", "email")
//!     .with_status_code(400);
//!
//! assert_eq!(
//!     err.to_string(),
//!     "[validation:invalid_email] Email format is invalid: Must contain @"
//! );
//! assert_eq!(err.kind().as_str(), "validation");
//! assert_eq!(err.code(), Some("invalid_email"));
//! assert_eq!(err.status_code(), Some(400));
//! ```
//!
//! Chain queries work on any error, however deeply the managed error is
//! wrapped:
//!
//! ```rust
//! use errmgt::{context_of, is_retryable, wrap, ErrorKind, ManagedError};
//!
//! let db = ManagedError::from_cause(ErrorKind::SYSTEM, "Failed to connect to database", "connection timeout")
//!     .retryable()
//!     .with_context("database", "users_db");
//! let err = wrap(db, "failed to register user");
//!
//! assert!(is_retryable(&err));
//! assert_eq!(context_of(&err).and_then(|c| c.get_str("database")), Some("users_db"));
//!
//! let plain = std::io::Error::new(std::io::ErrorKind::Other, "plain");
//! assert!(!is_retryable(&plain));
//! assert!(context_of(&plain).is_none());
//! ```

pub mod chain;
pub mod context;
pub mod conversions;
pub mod convenience;
pub mod kind;
pub mod macros;
pub mod record;
pub mod report;
pub mod types;
pub mod wrap;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// Public API re-exports
pub use chain::{
    chain as error_chain, context_of, find_in_chain, find_managed, is_kind, is_retryable, kind_of,
    matches, root_cause, status_code_of, Chain,
};
pub use context::ErrorContext;
pub use kind::ErrorKind;
pub use record::ErrorRecord;
pub use report::report;
pub use types::{BoxError, ManagedError, Result, PLACEHOLDER_MESSAGE};
pub use wrap::{wrap, wrap_fmt, ResultExt, WrappedError};
