//! Job descriptor aggregate.

use super::{JobDomainError, JobId, JobItem, ServiceDescriptor};
use serde::{Deserialize, Serialize};

/// One unit of work submitted for execution.
///
/// Couples a [`ServiceDescriptor`] to a non-empty ordered list of
/// [`JobItem`]s. Consumed exactly once by whichever adapter the service
/// manager resolves; never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct JobDescriptor {
    id: JobId,
    service_descriptor: ServiceDescriptor,
    items: Vec<JobItem>,
}

impl JobDescriptor {
    /// Creates a job descriptor from a service descriptor and its items.
    ///
    /// # Errors
    ///
    /// Returns [`JobDomainError::EmptyJobItems`] when `items` is empty.
    pub fn new(
        service_descriptor: ServiceDescriptor,
        items: Vec<JobItem>,
    ) -> Result<Self, JobDomainError> {
        if items.is_empty() {
            return Err(JobDomainError::EmptyJobItems);
        }
        Ok(Self {
            id: JobId::new(),
            service_descriptor,
            items,
        })
    }

    /// Returns the job identifier.
    #[must_use]
    pub const fn id(&self) -> JobId {
        self.id
    }

    /// Returns the embedded service descriptor.
    #[must_use]
    pub const fn service_descriptor(&self) -> &ServiceDescriptor {
        &self.service_descriptor
    }

    /// Returns the ordered job items.
    #[must_use]
    pub fn items(&self) -> &[JobItem] {
        &self.items
    }
}
