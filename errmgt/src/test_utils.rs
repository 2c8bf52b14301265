//! Error Testing Utilities
//!
//! Assertion helpers, mock opaque errors and a scripted fallible operation
//! for exercising retry loops that consult [`is_retryable`](crate::is_retryable).

use std::error::Error as StdError;

use crate::chain;
use crate::kind::ErrorKind;
use crate::types::ManagedError;

/// Error assertion utilities for tests
pub struct ErrorAssertions;

impl ErrorAssertions {
    /// Assert that an error has the expected kind
    pub fn assert_kind(err: &ManagedError, expected: &ErrorKind) {
        assert_eq!(
            err.kind(),
            expected,
            "Expected error kind {}, got {}\nError: {}",
            expected,
            err.kind(),
            err
        );
    }

    /// Assert error code matches expected
    pub fn assert_code(err: &ManagedError, expected: &str) {
        assert_eq!(
            err.code(),
            Some(expected),
            "Expected error code '{}', got {:?}\nError: {}",
            expected,
            err.code(),
            err
        );
    }

    /// Assert that the first managed error of the chain is retryable
    pub fn assert_retryable(err: &(dyn StdError + 'static)) {
        assert!(
            chain::is_retryable(err),
            "Expected error to be retryable, but it's not\nError: {}",
            err
        );
    }

    /// Assert that the chain does not advertise a retry
    pub fn assert_not_retryable(err: &(dyn StdError + 'static)) {
        assert!(
            !chain::is_retryable(err),
            "Expected error to not be retryable, but it is\nError: {}",
            err
        );
    }

    /// Assert that an error carries a string context value
    pub fn assert_has_context(err: &ManagedError, key: &str, value: &str) {
        let actual = err.context().get_str(key);
        assert_eq!(
            actual,
            Some(value),
            "Expected context {}={}, got {:?}\nError: {}",
            key,
            value,
            actual,
            err
        );
    }

    /// Assert the exact rendered form
    pub fn assert_renders(err: &ManagedError, expected: &str) {
        assert_eq!(err.render(), expected);
    }
}

/// Mock error source for testing
#[derive(Debug, thiserror::Error)]
pub enum MockError {
    #[error("mock timeout")]
    Timeout,

    #[error("mock connection refused")]
    ConnectionRefused,

    #[error("mock not found: {0}")]
    NotFound(String),
}

/// Test helper to simulate fallible operations
pub struct FallibleOperation<T> {
    result: Result<T, MockError>,
    attempt: u32,
}

impl<T> FallibleOperation<T> {
    /// Create a new fallible operation
    pub fn new(result: Result<T, MockError>) -> Self {
        Self { result, attempt: 0 }
    }

    /// Set the attempt number for context
    pub fn with_attempt(mut self, attempt: u32) -> Self {
        self.attempt = attempt;
        self
    }

    /// Execute the operation; timeouts come back retryable
    pub fn execute(self) -> crate::Result<T> {
        let attempt = self.attempt;
        self.result.map_err(|e| {
            let retryable = matches!(e, MockError::Timeout);
            let kind = match e {
                MockError::NotFound(_) => ErrorKind::NOT_FOUND,
                MockError::Timeout | MockError::ConnectionRefused => ErrorKind::EXTERNAL,
            };
            ManagedError::coded_from_cause(kind, "mock", "mock operation failed", e)
                .with_retryable(retryable)
                .with_context("attempt", attempt)
        })
    }
}

/// Create a fallible operation that always succeeds
pub fn always_succeed<T>(value: T) -> FallibleOperation<T> {
    FallibleOperation::new(Ok(value))
}

/// Create a fallible operation that always fails with a non-retryable error
pub fn always_fail<T>() -> FallibleOperation<T> {
    FallibleOperation::new(Err(MockError::ConnectionRefused))
}

/// Create a fallible operation that times out n times then succeeds
pub fn fail_n_times<T: Clone>(
    fail_count: u32,
    success_value: T,
) -> impl FnMut() -> FallibleOperation<T> {
    let mut attempts = 0;
    move || {
        attempts += 1;
        if attempts <= fail_count {
            FallibleOperation::new(Err(MockError::Timeout)).with_attempt(attempts)
        } else {
            FallibleOperation::new(Ok(success_value.clone())).with_attempt(attempts)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// A caller-side retry loop; the crate itself never retries
    fn run_with_retries<T>(
        max_attempts: u32,
        mut op: impl FnMut() -> FallibleOperation<T>,
    ) -> (crate::Result<T>, u32) {
        let mut attempts = 0;
        loop {
            attempts += 1;
            match op().execute() {
                Err(err) if chain::is_retryable(&err) && attempts < max_attempts => continue,
                other => return (other, attempts),
            }
        }
    }

    #[test]
    fn test_assertions() {
        let err = ManagedError::coded(ErrorKind::VALIDATION, "invalid_email", "bad")
            .with_context("field", "email");
        ErrorAssertions::assert_kind(&err, &ErrorKind::VALIDATION);
        ErrorAssertions::assert_code(&err, "invalid_email");
        ErrorAssertions::assert_has_context(&err, "field", "email");
        ErrorAssertions::assert_not_retryable(&err);
        ErrorAssertions::assert_renders(&err, "[validation:invalid_email] bad");
    }

    #[test]
    fn test_fallible_operation() {
        assert!(always_succeed(42).execute().is_ok());

        let err = FallibleOperation::<()>::new(Err(MockError::NotFound("user".into())))
            .execute()
            .unwrap_err();
        ErrorAssertions::assert_kind(&err, &ErrorKind::NOT_FOUND);
        ErrorAssertions::assert_not_retryable(&err);
    }

    #[test]
    fn test_retry_loop_recovers() {
        let (result, attempts) = run_with_retries(5, fail_n_times(2, "success"));
        assert_eq!(result.unwrap(), "success");
        assert_eq!(attempts, 3);
    }

    #[test]
    fn test_retry_loop_gives_up() {
        let (result, attempts) = run_with_retries(3, fail_n_times(10, ()));
        let err = result.unwrap_err();
        ErrorAssertions::assert_retryable(&err);
        assert_eq!(attempts, 3);
        assert_eq!(err.get_context("attempt"), Some(&serde_json::json!(3)));
    }

    #[test]
    fn test_retry_loop_stops_on_fatal() {
        let (result, attempts) = run_with_retries(5, always_fail::<()>);
        assert!(result.is_err());
        assert_eq!(attempts, 1);
    }
}
