//! Identifier types for the service ontology.

use super::OntologyDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Maximum length for a service identifier.
const MAX_ID_LENGTH: usize = 100;

/// Validated, globally unique service identifier.
///
/// Service identifiers are opaque stable tokens used to address one external
/// capability (e.g. `aigents_rss_feeder`, `text_summarizer`). They are the
/// key under which adapters register and the value a job descriptor carries
/// to name its target.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ServiceId(String);

impl ServiceId {
    /// Creates a validated service identifier.
    ///
    /// The input is trimmed and lowercased. Only characters in `[a-z0-9_]`
    /// are accepted.
    ///
    /// # Errors
    ///
    /// Returns [`OntologyDomainError::EmptyServiceId`] when the value is
    /// empty after trimming, [`OntologyDomainError::InvalidServiceId`] when
    /// it contains characters outside `[a-z0-9_]`, or
    /// [`OntologyDomainError::ServiceIdTooLong`] when it exceeds 100
    /// characters.
    pub fn new(value: impl Into<String>) -> Result<Self, OntologyDomainError> {
        let raw = value.into();
        let normalized = raw.trim().to_ascii_lowercase();

        if normalized.is_empty() {
            return Err(OntologyDomainError::EmptyServiceId);
        }

        if normalized.len() > MAX_ID_LENGTH {
            return Err(OntologyDomainError::ServiceIdTooLong(raw));
        }

        let is_valid = normalized
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_');

        if !is_valid {
            return Err(OntologyDomainError::InvalidServiceId(raw));
        }

        Ok(Self(normalized))
    }

    /// Returns the service identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ServiceId {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl fmt::Display for ServiceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
