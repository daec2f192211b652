//! Error types for ontology validation and catalog lookup.

use super::ServiceId;
use thiserror::Error;

/// Errors returned while constructing ontology domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OntologyDomainError {
    /// The service identifier is empty after trimming.
    #[error("service identifier must not be empty")]
    EmptyServiceId,

    /// The service identifier contains characters outside `[a-z0-9_]`.
    #[error(
        "service identifier '{0}' contains invalid characters (only lowercase alphanumeric and underscores allowed)"
    )]
    InvalidServiceId(String),

    /// The service identifier exceeds the 100-character limit.
    #[error("service identifier exceeds 100 character limit: {0}")]
    ServiceIdTooLong(String),

    /// The service display name is empty after trimming.
    #[error("service display name must not be empty")]
    EmptyDisplayName,

    /// The capability category is empty after trimming.
    #[error("service capability category must not be empty")]
    EmptyCategory,
}

/// Errors returned by ontology catalog operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum OntologyError {
    /// The identifier was never registered in the catalog.
    #[error("unknown service: {0}")]
    UnknownService(ServiceId),

    /// The backing service catalog is malformed.
    #[error("malformed service catalog: {0}")]
    Configuration(String),

    /// A catalog entry failed domain validation.
    #[error(transparent)]
    Domain(#[from] OntologyDomainError),
}
