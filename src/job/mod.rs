//! Job and service descriptor data model.
//!
//! A [`JobDescriptor`] is one unit of work: a [`ServiceDescriptor`] naming
//! the target service plus a non-empty ordered list of [`JobItem`]s. Each
//! item describes how its input arrives, what the payload is, and how
//! results should be delivered. Adapters answer with one [`JobResult`] per
//! item, in input order, so callers can zip inputs to outputs positionally.
//!
//! Descriptors are created by the caller, consumed exactly once by whichever
//! adapter the service manager resolves, and never mutated after creation.

mod descriptor;
mod error;
mod ids;
mod item;
mod result;
mod service_descriptor;
mod state;

pub use descriptor::JobDescriptor;
pub use error::JobDomainError;
pub use ids::JobId;
pub use item::{InputData, InputMode, JobItem, OutputMode};
pub use result::{FailureKind, ItemFailure, JobResult, ResponseData};
pub use service_descriptor::{QosClass, ServiceDescriptor};
pub use state::JobState;

#[cfg(test)]
mod tests;
