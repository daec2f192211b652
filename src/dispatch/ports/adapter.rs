//! The polymorphic service adapter contract.

use crate::job::{JobDescriptor, JobDomainError, JobResult};
use crate::ontology::domain::ServiceId;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for adapter operations.
pub type AdapterResult<T> = Result<T, AdapterError>;

/// Execution contract implemented once per external provider.
///
/// An adapter consumes a [`JobDescriptor`] whose embedded service
/// descriptor's identifier matches its own, performs the work against the
/// remote provider, and returns one [`JobResult`] per job item, in input
/// order. Adapters own no job state beyond the call and must not mutate
/// shared framework state; provider-specific configuration (endpoints,
/// credentials) is set at construction.
///
/// Item-level failure semantics are the adapter's choice: the default is
/// per-item error result records, but an adapter may declare whole-job
/// atomic semantics and return `Err` instead. Either way the count and
/// order invariant holds for every `Ok` return.
#[async_trait]
pub trait ServiceAdapter: Send + Sync {
    /// Returns the service identifier this adapter advertises.
    fn service_id(&self) -> &ServiceId;

    /// Returns the tag stamped into every result record this adapter
    /// produces.
    fn adapter_type(&self) -> &str;

    /// Post-load initialisation hook.
    ///
    /// Invoked exactly once by the service manager after registration, in
    /// registration order. An adapter that fails here is marked unavailable
    /// and excluded from dispatch.
    async fn post_load_initialize(&self) -> AdapterResult<()> {
        Ok(())
    }

    /// Executes the job and returns one result record per item.
    ///
    /// Precondition: `job.service_descriptor().service_id()` equals
    /// [`Self::service_id`]; the service manager guarantees this before
    /// invocation, and an adapter receiving a mismatched job fails with
    /// [`AdapterError::ServiceMismatch`].
    async fn perform(&self, job: &JobDescriptor) -> AdapterResult<Vec<JobResult>>;
}

/// Errors returned by service adapter implementations.
#[derive(Debug, Clone, Error)]
pub enum AdapterError {
    /// The job was routed to an adapter with a different identity.
    #[error("job targets service {received} but adapter serves {expected}")]
    ServiceMismatch {
        /// The adapter's own identifier.
        expected: ServiceId,
        /// The identifier the job carried.
        received: ServiceId,
    },

    /// The job descriptor violated a domain invariant.
    #[error(transparent)]
    InvalidJob(#[from] JobDomainError),

    /// The post-load initialisation hook failed.
    #[error("adapter initialisation failed: {0}")]
    Initialization(String),

    /// The remote provider call failed.
    #[error("remote provider error: {0}")]
    Remote(Arc<dyn std::error::Error + Send + Sync>),

    /// The remote provider call timed out.
    #[error("remote provider call timed out: {0}")]
    Timeout(String),
}

impl AdapterError {
    /// Wraps a remote provider failure.
    pub fn remote(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Remote(Arc::new(err))
    }
}
