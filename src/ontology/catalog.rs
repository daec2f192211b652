//! Immutable service catalog and its configuration seed.

use crate::ontology::domain::{OntologyError, Service, ServiceCapabilities, ServiceId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Built-in identifier for the Aigents RSS feeder service.
pub const AIGENTS_RSS_FEEDER_ID: &str = "aigents_rss_feeder";

/// Built-in identifier for the text summarisation service.
pub const TEXT_SUMMARIZER_ID: &str = "text_summarizer";

/// One entry in a serialised service catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceEntry {
    /// Stable service identifier.
    pub id: String,
    /// Human-readable service name.
    pub display_name: String,
    /// Coarse capability category.
    pub category: String,
    /// Input kinds the service accepts.
    #[serde(default)]
    pub input_kinds: Vec<String>,
    /// Free-form feature flags.
    #[serde(default)]
    pub features: Vec<String>,
}

/// Serialisable seed for building a [`ServiceOntology`].
///
/// Where the catalog JSON comes from (file, environment, embedder) is the
/// caller's concern; this type only defines the shape and validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OntologyConfig {
    /// Catalog entries, one per known service.
    pub services: Vec<ServiceEntry>,
}

impl OntologyConfig {
    /// Parses a catalog from its JSON representation.
    ///
    /// # Errors
    ///
    /// Returns [`OntologyError::Configuration`] when the document is not
    /// valid catalog JSON.
    pub fn from_json(raw: &str) -> Result<Self, OntologyError> {
        serde_json::from_str(raw).map_err(|err| OntologyError::Configuration(err.to_string()))
    }

    /// Returns the catalog seed for the services shipped with this crate.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            services: vec![
                ServiceEntry {
                    id: AIGENTS_RSS_FEEDER_ID.to_owned(),
                    display_name: "Aigents RSS Feeder".to_owned(),
                    category: "feed".to_owned(),
                    input_kinds: vec!["rss_feed".to_owned()],
                    features: vec!["push".to_owned()],
                },
                ServiceEntry {
                    id: TEXT_SUMMARIZER_ID.to_owned(),
                    display_name: "Text Summariser".to_owned(),
                    category: "nlp".to_owned(),
                    input_kinds: vec!["text".to_owned()],
                    features: Vec::new(),
                },
            ],
        }
    }
}

/// Immutable catalog mapping service identifiers to service records.
///
/// Built once at startup and read-only thereafter, so concurrent lookups
/// need no locking. Tests build isolated catalogs per case instead of
/// sharing process-wide state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceOntology {
    services: HashMap<ServiceId, Service>,
}

impl ServiceOntology {
    /// Builds a catalog from a validated configuration seed.
    ///
    /// # Errors
    ///
    /// Returns [`OntologyError::Configuration`] when the seed is empty or
    /// contains duplicate identifiers, and [`OntologyError::Domain`] when an
    /// entry fails domain validation.
    pub fn from_config(config: OntologyConfig) -> Result<Self, OntologyError> {
        if config.services.is_empty() {
            return Err(OntologyError::Configuration(
                "service catalog contains no entries".to_owned(),
            ));
        }

        let mut services = HashMap::with_capacity(config.services.len());
        for entry in config.services {
            let id = ServiceId::new(entry.id)?;
            let capabilities = ServiceCapabilities::new(entry.category)?
                .with_input_kinds(entry.input_kinds)
                .with_features(entry.features);
            let service = Service::new(id.clone(), entry.display_name, capabilities)?;
            if services.insert(id.clone(), service).is_some() {
                return Err(OntologyError::Configuration(format!(
                    "duplicate service identifier in catalog: {id}"
                )));
            }
        }

        Ok(Self { services })
    }

    /// Builds the catalog of services shipped with this crate.
    ///
    /// # Errors
    ///
    /// Returns [`OntologyError`] when the built-in seed fails validation;
    /// this indicates a defect in the crate itself.
    pub fn builtin() -> Result<Self, OntologyError> {
        Self::from_config(OntologyConfig::builtin())
    }

    /// Returns the service record for a known identifier.
    ///
    /// Repeated calls with the same identifier return the same record; the
    /// lookup has no side effects.
    ///
    /// # Errors
    ///
    /// Returns [`OntologyError::UnknownService`] when the identifier was
    /// never registered.
    pub fn get_service(&self, service_id: &ServiceId) -> Result<&Service, OntologyError> {
        self.services
            .get(service_id)
            .ok_or_else(|| OntologyError::UnknownService(service_id.clone()))
    }

    /// Returns whether the catalog knows the identifier.
    #[must_use]
    pub fn contains(&self, service_id: &ServiceId) -> bool {
        self.services.contains_key(service_id)
    }

    /// Iterates over all catalog records in unspecified order.
    pub fn services(&self) -> impl Iterator<Item = &Service> {
        self.services.values()
    }

    /// Returns the number of known services.
    #[must_use]
    pub fn len(&self) -> usize {
        self.services.len()
    }

    /// Returns whether the catalog is empty.
    ///
    /// Always `false` for catalogs built through [`Self::from_config`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.services.is_empty()
    }
}
