//! # Error Context
//!
//! Key-value pairs attached to a managed error for debugging and reporting.

use std::collections::btree_map::{self, BTreeMap};
use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Additional context for an error
///
/// Keys are unique; inserting an existing key replaces its value.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ErrorContext {
    entries: BTreeMap<String, Value>,
}

impl ErrorContext {
    /// Create a new empty error context
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a key-value pair to the context
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    /// Upsert a key-value pair, returning the replaced value if any
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Get a context value by key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    /// Get a context value by key when it holds a string
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in key order
    pub fn iter(&self) -> btree_map::Iter<'_, String, Value> {
        self.entries.iter()
    }
}

impl<'a> IntoIterator for &'a ErrorContext {
    type Item = (&'a String, &'a Value);
    type IntoIter = btree_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, V> FromIterator<(K, V)> for ErrorContext
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut context = Self::new();
        for (key, value) in iter {
            context.insert(key, value);
        }
        context
    }
}

/// Renders as `key=value` pairs separated by spaces; strings are unquoted
impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            match value {
                Value::String(s) => write!(f, "{}={}", key, s)?,
                other => write!(f, "{}={}", key, other)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_context_is_empty() {
        let ctx = ErrorContext::new();
        assert!(ctx.is_empty());
        assert_eq!(ctx.get("missing"), None);
    }

    #[test]
    fn test_upsert_keeps_latest_value() {
        let mut ctx = ErrorContext::new().with("a", "1");
        let previous = ctx.insert("a", "2");
        assert_eq!(previous, Some(json!("1")));
        assert_eq!(ctx.len(), 1);
        assert_eq!(ctx.get_str("a"), Some("2"));
    }

    #[test]
    fn test_scalar_values() {
        let ctx = ErrorContext::new()
            .with("user_id", 123)
            .with("ratio", 0.5)
            .with("admin", false);
        assert_eq!(ctx.get("user_id"), Some(&json!(123)));
        assert_eq!(ctx.get("admin"), Some(&json!(false)));
        assert_eq!(ctx.get_str("user_id"), None);
    }

    #[test]
    fn test_display() {
        let ctx = ErrorContext::new().with("field", "email").with("attempt", 2);
        assert_eq!(ctx.to_string(), "attempt=2 field=email");
        assert_eq!(ErrorContext::new().to_string(), "");
    }

    #[test]
    fn test_from_iterator() {
        let ctx: ErrorContext = vec![("a", "x"), ("b", "y"), ("a", "z")].into_iter().collect();
        assert_eq!(ctx.len(), 2);
        assert_eq!(ctx.get_str("a"), Some("z"));
    }

    #[test]
    fn test_serializes_as_object() {
        let ctx = ErrorContext::new().with("field", "email");
        let value = serde_json::to_value(&ctx).unwrap();
        assert_eq!(value, json!({ "field": "email" }));
    }
}
