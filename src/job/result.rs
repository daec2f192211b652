//! Result records returned by adapter execution.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Classifies a per-item failure encoded in a result record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// The item's input mode or payload kind is not recognised by the
    /// adapter.
    UnsupportedInput,
    /// The item's output mode is not recognised by the adapter.
    UnsupportedOutput,
    /// The payload had a recognised kind but an unusable shape.
    MalformedPayload,
    /// The remote provider rejected the item.
    Provider,
}

impl FailureKind {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UnsupportedInput => "unsupported_input",
            Self::UnsupportedOutput => "unsupported_output",
            Self::MalformedPayload => "malformed_payload",
            Self::Provider => "provider",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Structured error state for one failed job item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemFailure {
    kind: FailureKind,
    message: String,
}

impl ItemFailure {
    /// Creates a per-item failure record.
    #[must_use]
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Returns the failure classification.
    #[must_use]
    pub const fn kind(&self) -> FailureKind {
        self.kind
    }

    /// Returns the human-readable failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Success payload or structured error for one job item.
///
/// Success payloads are opaque to the framework; only the adapter and its
/// caller agree on their shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseData {
    /// The item failed; the record encodes the error state.
    Failure(ItemFailure),
    /// The item succeeded with an opaque payload.
    Success(Value),
}

impl ResponseData {
    /// Creates a success payload.
    #[must_use]
    pub const fn success(payload: Value) -> Self {
        Self::Success(payload)
    }

    /// Creates a success payload from a plain string.
    #[must_use]
    pub fn success_text(text: impl Into<String>) -> Self {
        Self::Success(Value::String(text.into()))
    }

    /// Creates a per-item failure payload.
    #[must_use]
    pub fn failure(kind: FailureKind, message: impl Into<String>) -> Self {
        Self::Failure(ItemFailure::new(kind, message))
    }

    /// Returns whether this payload encodes a failure.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        matches!(self, Self::Failure(_))
    }

    /// Returns the success payload, if any.
    #[must_use]
    pub const fn as_success(&self) -> Option<&Value> {
        match self {
            Self::Success(value) => Some(value),
            Self::Failure(_) => None,
        }
    }

    /// Returns the failure record, if any.
    #[must_use]
    pub const fn as_failure(&self) -> Option<&ItemFailure> {
        match self {
            Self::Failure(failure) => Some(failure),
            Self::Success(_) => None,
        }
    }
}

/// One result record, positionally aligned with the job item it answers.
///
/// Wire shape: `{ adapter_type, response_data }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobResult {
    adapter_type: String,
    response_data: ResponseData,
}

impl JobResult {
    /// Creates a result record.
    #[must_use]
    pub fn new(adapter_type: impl Into<String>, response_data: ResponseData) -> Self {
        Self {
            adapter_type: adapter_type.into(),
            response_data,
        }
    }

    /// Returns the tag of the adapter that produced this record.
    #[must_use]
    pub fn adapter_type(&self) -> &str {
        &self.adapter_type
    }

    /// Returns the response payload.
    #[must_use]
    pub const fn response_data(&self) -> &ResponseData {
        &self.response_data
    }
}
