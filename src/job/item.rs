//! Job items and their payloads.

use super::JobDomainError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// How a job item's input arrives at the adapter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InputMode {
    /// The payload is carried inline in the job item.
    Attached,
    /// The payload is a reference to externally stored data.
    Referenced,
}

impl InputMode {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Attached => "attached",
            Self::Referenced => "referenced",
        }
    }
}

impl fmt::Display for InputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for InputMode {
    type Error = JobDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "attached" => Ok(Self::Attached),
            "referenced" => Ok(Self::Referenced),
            _ => Err(JobDomainError::UnknownInputMode(value.to_owned())),
        }
    }
}

/// How a job item's results should be delivered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputMode {
    /// Results are returned inline in the result record.
    Attached,
    /// Results are written to externally stored data and referenced.
    Referenced,
}

impl OutputMode {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Attached => "attached",
            Self::Referenced => "referenced",
        }
    }
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for OutputMode {
    type Error = JobDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "attached" => Ok(Self::Attached),
            "referenced" => Ok(Self::Referenced),
            _ => Err(JobDomainError::UnknownOutputMode(value.to_owned())),
        }
    }
}

/// Typed job item payload.
///
/// Serialises to the wire shape `{ "type": <tag>, "data": <payload> }`.
/// Kinds unknown to the core round-trip through [`InputData::Opaque`], so
/// adapters can still match exhaustively over the cases they support while
/// new kinds flow through unchanged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "InputDataWire", into = "InputDataWire")]
pub enum InputData {
    /// An RSS feed subscription request.
    RssFeed(Value),
    /// A plain text document.
    Text(String),
    /// A payload of a kind unknown to the core, kept with its type tag.
    Opaque {
        /// Caller-supplied type tag.
        kind: String,
        /// Payload, opaque to the framework.
        payload: Value,
    },
}

impl InputData {
    /// Returns the payload's type tag.
    #[must_use]
    pub fn kind(&self) -> &str {
        match self {
            Self::RssFeed(_) => "rss_feed",
            Self::Text(_) => "text",
            Self::Opaque { kind, .. } => kind,
        }
    }
}

/// Wire representation of [`InputData`].
#[derive(Debug, Clone, Serialize, Deserialize)]
struct InputDataWire {
    #[serde(rename = "type")]
    kind: String,
    data: Value,
}

impl From<InputDataWire> for InputData {
    fn from(wire: InputDataWire) -> Self {
        let InputDataWire { kind, data } = wire;
        if kind == "rss_feed" {
            return Self::RssFeed(data);
        }
        if kind == "text" {
            // A `text` tag with a non-string payload is preserved verbatim
            // rather than guessed at.
            return match data {
                Value::String(text) => Self::Text(text),
                payload => Self::Opaque { kind, payload },
            };
        }
        Self::Opaque { kind, payload: data }
    }
}

impl From<InputData> for InputDataWire {
    fn from(data: InputData) -> Self {
        match data {
            InputData::RssFeed(payload) => Self {
                kind: "rss_feed".to_owned(),
                data: payload,
            },
            InputData::Text(text) => Self {
                kind: "text".to_owned(),
                data: Value::String(text),
            },
            InputData::Opaque { kind, payload } => Self {
                kind,
                data: payload,
            },
        }
    }
}

/// One element of a job's ordered work list.
///
/// Wire shape: `{ input_type, input_data, output_type }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobItem {
    input_type: InputMode,
    input_data: InputData,
    output_type: OutputMode,
}

impl JobItem {
    /// Creates a job item.
    #[must_use]
    pub const fn new(input_type: InputMode, input_data: InputData, output_type: OutputMode) -> Self {
        Self {
            input_type,
            input_data,
            output_type,
        }
    }

    /// Returns how the input arrives.
    #[must_use]
    pub const fn input_type(&self) -> InputMode {
        self.input_type
    }

    /// Returns the typed payload.
    #[must_use]
    pub const fn input_data(&self) -> &InputData {
        &self.input_data
    }

    /// Returns how results should be delivered.
    #[must_use]
    pub const fn output_type(&self) -> OutputMode {
        self.output_type
    }
}
