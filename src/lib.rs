//! Switchyard: ontology-backed service-adapter dispatch.
//!
//! This crate routes units of work (job descriptors) to pluggable service
//! adapters, each of which fronts one external provider. A stable service
//! identifier drawn from the ontology names the target; the service manager
//! resolves it to a live adapter and invokes the uniform execution contract.
//!
//! # Architecture
//!
//! Switchyard follows hexagonal architecture principles:
//!
//! - **Domain**: descriptor and catalog types with no infrastructure
//!   dependencies
//! - **Ports**: abstract trait interfaces for adapters, adapter discovery,
//!   and provider transports
//! - **Adapters**: concrete implementations of ports (reference provider
//!   adapter, in-memory test doubles)
//!
//! # Modules
//!
//! - [`ontology`]: the catalog of known services and their identifiers
//! - [`job`]: job and service descriptors, job items, and result records
//! - [`dispatch`]: the adapter execution contract and the service manager

pub mod dispatch;
pub mod job;
pub mod ontology;
