//! # Error Handling Macros
//!
//! - [`wrapf!`] - Wrap an error with a formatted message
//! - [`bail!`] - Early return with a managed error
//! - [`ensure!`] - Conditional check with a managed error
//! - [`log_err!`] - Report an error through `tracing` and hand it back

/// Wrap an error with a formatted message.
///
/// # Examples
///
/// ```rust
/// use errmgt::wrapf;
///
/// let err = wrapf!("connection reset", "request {} to {} failed", 7, "billing");
/// assert_eq!(err.to_string(), "request 7 to billing failed: connection reset");
/// ```
#[macro_export]
macro_rules! wrapf {
    ($err:expr, $($arg:tt)+) => {
        $crate::wrap_fmt($err, ::std::format_args!($($arg)+))
    };
}

/// Early return with a managed error.
///
/// Accepts either a ready-made error, or a kind, code and message followed
/// by optional `key => value` context pairs.
///
/// # Examples
///
/// ```rust
/// use errmgt::{bail, ErrorKind, Result};
///
/// fn withdraw(balance: u64, amount: u64) -> Result<u64> {
///     if amount > balance {
///         bail!(ErrorKind::BUSINESS, "insufficient_funds", "Not enough money", "balance" => balance);
///     }
///     Ok(balance - amount)
/// }
///
/// let err = withdraw(5, 10).unwrap_err();
/// assert_eq!(err.to_string(), "[business:insufficient_funds] Not enough money");
/// ```
#[macro_export]
macro_rules! bail {
    ($err:expr $(,)?) => {
        return ::std::result::Result::Err(::std::convert::From::from($err))
    };
    ($kind:expr, $code:expr, $msg:expr $(,)?) => {
        return ::std::result::Result::Err(::std::convert::From::from(
            $crate::ManagedError::coded($kind, $code, $msg),
        ))
    };
    ($kind:expr, $code:expr, $msg:expr, $($key:expr => $value:expr),+ $(,)?) => {{
        let err = $crate::ManagedError::coded($kind, $code, $msg);
        $(
            let err = err.with_context($key, $value);
        )+
        return ::std::result::Result::Err(::std::convert::From::from(err));
    }};
}

/// Conditional check with a managed error.
///
/// # Examples
///
/// ```rust
/// use errmgt::{ensure, ErrorKind, ManagedError, Result};
///
/// fn divide(a: i32, b: i32) -> Result<i32> {
///     ensure!(b != 0, ErrorKind::VALIDATION, "division_by_zero", "b must be non-zero");
///     Ok(a / b)
/// }
///
/// assert!(divide(1, 0).is_err());
/// assert_eq!(divide(6, 3).unwrap(), 2);
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $err:expr $(,)?) => {
        if !$cond {
            $crate::bail!($err);
        }
    };
    ($cond:expr, $kind:expr, $code:expr, $msg:expr $(,)?) => {
        if !$cond {
            $crate::bail!($kind, $code, $msg);
        }
    };
}

/// Report an error through `tracing` and return it unchanged.
///
/// # Examples
///
/// ```rust
/// use errmgt::{log_err, ErrorKind, ManagedError};
///
/// let result: Result<(), ManagedError> = Err(ManagedError::new(ErrorKind::SYSTEM, "disk full"));
/// let result = result.map_err(|e| log_err!(e));
/// assert!(result.is_err());
/// ```
#[macro_export]
macro_rules! log_err {
    ($err:expr) => {{
        let err = $err;
        $crate::report(&err);
        err
    }};
}

#[cfg(test)]
mod tests {
    use crate::{ErrorKind, ManagedError, Result};

    #[test]
    fn test_bail_macro() {
        fn test_fn() -> Result<()> {
            bail!(ManagedError::invalid_field("test", "bail test"));
        }

        let err = test_fn().unwrap_err();
        assert!(err.to_string().contains("test"));
    }

    #[test]
    fn test_bail_macro_with_context() {
        fn test_fn() -> Result<()> {
            bail!(ErrorKind::VALIDATION, "too_long", "Name too long", "max" => 32, "field" => "name");
        }

        let err = test_fn().unwrap_err();
        assert_eq!(err.code(), Some("too_long"));
        assert_eq!(err.context().get_str("field"), Some("name"));
        assert_eq!(err.get_context("max"), Some(&serde_json::json!(32)));
    }

    #[test]
    fn test_bail_into_boxed_error() {
        fn test_fn() -> std::result::Result<(), Box<dyn std::error::Error + Send + Sync>> {
            bail!(ErrorKind::INTERNAL, "boom", "exploded");
        }

        let err = test_fn().unwrap_err();
        assert!(crate::is_kind(err.as_ref(), &ErrorKind::INTERNAL));
    }

    #[test]
    fn test_ensure_macro() {
        fn test_fn(value: i32) -> Result<()> {
            ensure!(value > 0, ErrorKind::VALIDATION, "not_positive", "must be positive");
            Ok(())
        }

        assert!(test_fn(0).is_err());
        assert!(test_fn(1).is_ok());
    }

    #[test]
    fn test_ensure_macro_with_error() {
        fn test_fn(value: i32) -> Result<()> {
            ensure!(value < 10, ManagedError::invalid_field("value", "must be < 10"));
            Ok(())
        }

        assert!(test_fn(11).is_err());
        assert!(test_fn(9).is_ok());
    }

    #[test]
    fn test_wrapf_macro() {
        let err = wrapf!(ManagedError::new(ErrorKind::EXTERNAL, "down"), "call #{}", 3);
        assert_eq!(err.to_string(), "call #3: [external] down");
    }

    #[test]
    fn test_log_err_returns_error() {
        let err = log_err!(ManagedError::new(ErrorKind::SYSTEM, "disk full"));
        assert_eq!(err.message(), "disk full");
    }
}
