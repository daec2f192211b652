//! Post-negotiation service descriptor.

use super::JobDomainError;
use crate::ontology::domain::ServiceId;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Quality-of-service hint negotiated for one request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum QosClass {
    /// Default service level.
    #[default]
    Standard,
    /// Prioritised handling where the provider supports it.
    Expedited,
    /// The caller tolerates degraded or delayed handling.
    BestEffort,
}

impl QosClass {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Expedited => "expedited",
            Self::BestEffort => "best_effort",
        }
    }
}

impl fmt::Display for QosClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for QosClass {
    type Error = JobDomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "standard" => Ok(Self::Standard),
            "expedited" => Ok(Self::Expedited),
            "best_effort" => Ok(Self::BestEffort),
            _ => Err(JobDomainError::UnknownQosClass(value.to_owned())),
        }
    }
}

/// Post-negotiation parameter bundle binding a job to one service.
///
/// Created per-request by the caller and owned exclusively by the job
/// descriptor that embeds it; descriptors are never shared across jobs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceDescriptor {
    service_id: ServiceId,
    #[serde(default)]
    qos: QosClass,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    input_format: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    output_format: Option<String>,
}

impl ServiceDescriptor {
    /// Creates a descriptor targeting the given service with default
    /// options.
    #[must_use]
    pub const fn new(service_id: ServiceId) -> Self {
        Self {
            service_id,
            qos: QosClass::Standard,
            input_format: None,
            output_format: None,
        }
    }

    /// Sets the negotiated quality-of-service class.
    #[must_use]
    pub const fn with_qos(mut self, qos: QosClass) -> Self {
        self.qos = qos;
        self
    }

    /// Overrides the negotiated input format.
    #[must_use]
    pub fn with_input_format(mut self, format: impl Into<String>) -> Self {
        self.input_format = Some(format.into());
        self
    }

    /// Overrides the negotiated output format.
    #[must_use]
    pub fn with_output_format(mut self, format: impl Into<String>) -> Self {
        self.output_format = Some(format.into());
        self
    }

    /// Returns the target service identifier.
    #[must_use]
    pub const fn service_id(&self) -> &ServiceId {
        &self.service_id
    }

    /// Returns the negotiated quality-of-service class.
    #[must_use]
    pub const fn qos(&self) -> QosClass {
        self.qos
    }

    /// Returns the input format override, if negotiated.
    #[must_use]
    pub fn input_format(&self) -> Option<&str> {
        self.input_format.as_deref()
    }

    /// Returns the output format override, if negotiated.
    #[must_use]
    pub fn output_format(&self) -> Option<&str> {
        self.output_format.as_deref()
    }
}
