//! Domain model for the service ontology.
//!
//! The ontology domain models stable service identifiers, descriptive
//! service records, and capability metadata for the external providers the
//! dispatch framework can reach. All infrastructure concerns are kept
//! outside the domain boundary.

mod capabilities;
mod error;
mod ids;
mod service;

pub use capabilities::ServiceCapabilities;
pub use error::{OntologyDomainError, OntologyError};
pub use ids::ServiceId;
pub use service::Service;
