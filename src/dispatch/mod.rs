//! Adapter execution contract and service manager.
//!
//! This module owns the dispatch side of the framework: the polymorphic
//! [`ServiceAdapter`](ports::ServiceAdapter) contract every provider adapter
//! implements, the discovery and transport seams, and the
//! [`ServiceManager`](services::ServiceManager) that resolves a job's
//! service identifier to a live adapter and runs it. The module follows
//! hexagonal architecture:
//!
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
