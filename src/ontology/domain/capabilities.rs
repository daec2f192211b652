//! Service capability metadata.

use super::OntologyDomainError;
use serde::{Deserialize, Serialize};

/// Describes what an external service can do.
///
/// Capabilities carry a coarse category tag plus the input kinds the service
/// accepts, so callers can pick a service without knowing provider details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceCapabilities {
    category: String,
    input_kinds: Vec<String>,
    features: Vec<String>,
}

impl ServiceCapabilities {
    /// Creates capabilities with the required category tag.
    ///
    /// `input_kinds` and `features` default to empty lists.
    ///
    /// # Errors
    ///
    /// Returns [`OntologyDomainError::EmptyCategory`] when the category is
    /// blank after trimming.
    pub fn new(raw_category: impl Into<String>) -> Result<Self, OntologyDomainError> {
        let category = raw_category.into().trim().to_owned();
        if category.is_empty() {
            return Err(OntologyDomainError::EmptyCategory);
        }
        Ok(Self {
            category,
            input_kinds: Vec::new(),
            features: Vec::new(),
        })
    }

    /// Sets the input kinds the service accepts.
    #[must_use]
    pub fn with_input_kinds(mut self, kinds: impl IntoIterator<Item = String>) -> Self {
        self.input_kinds = kinds.into_iter().collect();
        self
    }

    /// Sets free-form feature flags.
    #[must_use]
    pub fn with_features(mut self, features: impl IntoIterator<Item = String>) -> Self {
        self.features = features.into_iter().collect();
        self
    }

    /// Returns the capability category.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Returns the input kinds the service accepts.
    #[must_use]
    pub fn input_kinds(&self) -> &[String] {
        &self.input_kinds
    }

    /// Returns whether the service declares support for an input kind.
    #[must_use]
    pub fn accepts_input_kind(&self, kind: &str) -> bool {
        self.input_kinds.iter().any(|k| k == kind)
    }

    /// Returns the free-form feature flags.
    #[must_use]
    pub fn features(&self) -> &[String] {
        &self.features
    }
}
