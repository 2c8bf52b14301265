//! # Error Kinds
//!
//! Open, string-keyed classification for managed errors.
//!
//! A handful of well-known kinds ship with the crate and carry stable display
//! names. Callers can mint their own kinds with [`ErrorKind::new`] without
//! touching this module.

use std::borrow::Cow;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// Error Kind
// ============================================================================

/// Classification tag of a [`ManagedError`](crate::ManagedError)
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct ErrorKind(Cow<'static, str>);

impl ErrorKind {
    /// Input validation failures
    pub const VALIDATION: ErrorKind = ErrorKind(Cow::Borrowed("validation"));

    /// Requested resource does not exist
    pub const NOT_FOUND: ErrorKind = ErrorKind(Cow::Borrowed("not_found"));

    /// Authorization and permission failures
    pub const PERMISSION: ErrorKind = ErrorKind(Cow::Borrowed("permission"));

    /// Internal errors, usually bugs
    pub const INTERNAL: ErrorKind = ErrorKind(Cow::Borrowed("internal"));

    /// Failures of external services
    pub const EXTERNAL: ErrorKind = ErrorKind(Cow::Borrowed("external"));

    /// Business rule violations
    pub const BUSINESS: ErrorKind = ErrorKind(Cow::Borrowed("business"));

    /// System-level failures (I/O, resources, infrastructure)
    pub const SYSTEM: ErrorKind = ErrorKind(Cow::Borrowed("system"));

    /// Fallback for unnamed kinds
    pub const UNKNOWN: ErrorKind = ErrorKind(Cow::Borrowed("unknown"));

    /// Registry of the kinds shipped with the crate
    pub const WELL_KNOWN: &'static [ErrorKind] = &[
        Self::VALIDATION,
        Self::NOT_FOUND,
        Self::PERMISSION,
        Self::INTERNAL,
        Self::EXTERNAL,
        Self::BUSINESS,
        Self::SYSTEM,
    ];

    /// Create a caller-defined kind from a trimmed name. An empty name yields
    /// [`ErrorKind::UNKNOWN`].
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        let name = name.into();
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Self::UNKNOWN;
        }
        if trimmed.len() == name.len() {
            return Self(name);
        }
        Self(Cow::Owned(trimmed.to_string()))
    }

    /// Stable display name, used in rendering and serialization
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this kind is part of [`ErrorKind::WELL_KNOWN`]
    pub fn is_well_known(&self) -> bool {
        Self::WELL_KNOWN.contains(self)
    }

    /// Whether this kind describes a problem with the caller's request
    /// rather than with the system handling it
    pub fn is_client_side(&self) -> bool {
        *self == Self::VALIDATION
            || *self == Self::NOT_FOUND
            || *self == Self::PERMISSION
            || *self == Self::BUSINESS
    }

    /// Transport status hint used when an error carries no explicit status code
    pub fn default_status_code(&self) -> Option<u16> {
        match self.as_str() {
            "validation" => Some(400),
            "permission" => Some(403),
            "not_found" => Some(404),
            "business" => Some(422),
            "internal" | "system" => Some(500),
            "external" => Some(502),
            _ => None,
        }
    }

    fn from_name(name: &str) -> Self {
        let name = name.trim();
        if let Some(kind) = Self::from_legacy_name(name) {
            return kind;
        }
        match Self::WELL_KNOWN.iter().find(|k| k.as_str() == name) {
            Some(kind) => kind.clone(),
            None => Self::new(name.to_string()),
        }
    }

    /// Map a legacy CamelCase name onto its kind
    fn from_legacy_name(name: &str) -> Option<Self> {
        let kind = match name {
            "ValidationError" => Self::VALIDATION,
            "NotFoundError" => Self::NOT_FOUND,
            "PermissionError" => Self::PERMISSION,
            "InternalError" => Self::INTERNAL,
            "ExternalError" => Self::EXTERNAL,
            "BusinessError" => Self::BUSINESS,
            "SystemError" => Self::SYSTEM,
            "UnknownError" => Self::UNKNOWN,
            _ => return None,
        };
        Some(kind)
    }
}

impl Default for ErrorKind {
    fn default() -> Self {
        Self::UNKNOWN
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorKind {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from_name(s))
    }
}

/// Accepts the same names as [`FromStr`], legacy forms included
impl<'de> Deserialize<'de> for ErrorKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Ok(Self::from_name(&name))
    }
}

impl From<&'static str> for ErrorKind {
    fn from(name: &'static str) -> Self {
        Self::new(name)
    }
}

impl From<String> for ErrorKind {
    fn from(name: String) -> Self {
        Self::new(name)
    }
}

impl From<&ErrorKind> for ErrorKind {
    fn from(kind: &ErrorKind) -> Self {
        kind.clone()
    }
}
