//! # Error Records
//!
//! Flat, serializable view of a [`ManagedError`], e.g. for a response body.
//! The cause and the source location are internal and never serialized.
//! Absent optional fields and an empty context are omitted.

use serde::{Deserialize, Serialize, Serializer};

use crate::context::ErrorContext;
use crate::kind::ErrorKind;
use crate::types::ManagedError;

/// Serializable public fields of a managed error
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorRecord {
    #[serde(alias = "type")]
    pub kind: ErrorKind,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,

    pub message: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,

    #[serde(default, skip_serializing_if = "ErrorContext::is_empty")]
    pub context: ErrorContext,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,

    #[serde(default)]
    pub retryable: bool,
}

impl ManagedError {
    /// Snapshot the public fields
    pub fn to_record(&self) -> ErrorRecord {
        ErrorRecord::from(self)
    }

    /// Serialize the public fields to a JSON value
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self.to_record())
    }
}

impl From<&ManagedError> for ErrorRecord {
    fn from(err: &ManagedError) -> Self {
        Self {
            kind: err.kind.clone(),
            code: err.code.clone(),
            message: err.message.clone(),
            details: err.details.clone(),
            context: err.context.clone(),
            status_code: err.status_code,
            retryable: err.retryable,
        }
    }
}

/// Rebuild a cause-less managed error, e.g. on the receiving side of a transport
impl From<ErrorRecord> for ManagedError {
    #[track_caller]
    fn from(record: ErrorRecord) -> Self {
        let mut err = ManagedError::build(record.kind, record.code, record.message, None);
        err.details = record.details;
        err.context = record.context;
        err.status_code = record.status_code;
        err.retryable = record.retryable;
        err
    }
}

impl Serialize for ManagedError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_record().serialize(serializer)
    }
}
