//! Service ontology for Switchyard.
//!
//! The ontology is the catalog of known services: stable identifiers paired
//! with human-readable names and capability metadata. It is populated once
//! at startup and read-only thereafter, so lookups need no synchronisation.
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - The immutable catalog and its configuration seed in [`ServiceOntology`]
//!   and [`OntologyConfig`]

pub mod domain;

mod catalog;

pub use catalog::{
    AIGENTS_RSS_FEEDER_ID, OntologyConfig, ServiceEntry, ServiceOntology, TEXT_SUMMARIZER_ID,
};

#[cfg(test)]
mod tests;
