//! Service catalog record.

use super::{OntologyDomainError, ServiceCapabilities, ServiceId};
use serde::{Deserialize, Serialize};

/// Immutable record for one service known to the ontology.
///
/// A service names an external capability addressable by its stable
/// identifier. Records are created at ontology setup time and read-only for
/// the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    id: ServiceId,
    display_name: String,
    capabilities: ServiceCapabilities,
}

impl Service {
    /// Creates a validated service record.
    ///
    /// The display name is trimmed.
    ///
    /// # Errors
    ///
    /// Returns [`OntologyDomainError::EmptyDisplayName`] when the display
    /// name is blank after trimming.
    pub fn new(
        id: ServiceId,
        raw_display_name: impl Into<String>,
        capabilities: ServiceCapabilities,
    ) -> Result<Self, OntologyDomainError> {
        let display_name = raw_display_name.into().trim().to_owned();
        if display_name.is_empty() {
            return Err(OntologyDomainError::EmptyDisplayName);
        }
        Ok(Self {
            id,
            display_name,
            capabilities,
        })
    }

    /// Returns the stable service identifier.
    #[must_use]
    pub const fn id(&self) -> &ServiceId {
        &self.id
    }

    /// Returns the human-readable service name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Returns the capability metadata.
    #[must_use]
    pub const fn capabilities(&self) -> &ServiceCapabilities {
        &self.capabilities
    }
}
