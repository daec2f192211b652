//! Process-wide adapter registry and dispatch authority.

use crate::dispatch::ports::{AdapterError, AdapterSource, AdapterSourceError, ServiceAdapter};
use crate::job::{JobDescriptor, JobResult};
use crate::ontology::domain::{OntologyError, ServiceId};
use crate::ontology::ServiceOntology;
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use thiserror::Error;
use tracing::{debug, error, warn};

/// Result type for service manager operations.
pub type DispatchResult<T> = Result<T, DispatchError>;

/// Errors surfaced by the service manager.
///
/// Nothing above the adapter boundary sees adapter-internal error types;
/// everything is translated into this taxonomy.
#[derive(Debug, Clone, Error)]
pub enum DispatchError {
    /// No adapter is registered for the identifier, or the registered one
    /// failed initialisation. Callers must treat the service as unavailable
    /// until the next registration cycle.
    #[error("service not available: {0}")]
    ServiceNotAvailable(ServiceId),

    /// The job reached an adapter whose identity differs from the job's
    /// target. This indicates a framework bug and is fatal to the dispatch
    /// call.
    #[error("job targets service {received} but was routed to adapter for {expected}")]
    ServiceMismatch {
        /// The adapter's own identifier.
        expected: ServiceId,
        /// The identifier the job carried.
        received: ServiceId,
    },

    /// The adapter failed while executing the job. The original cause is
    /// attached for diagnostics; the core never retries automatically.
    #[error("job execution failed for service {service_id}")]
    JobExecution {
        /// The service the job targeted.
        service_id: ServiceId,
        /// The adapter-internal failure.
        #[source]
        source: Arc<AdapterError>,
    },

    /// An adapter failed its initialisation hook during administrative
    /// registration.
    #[error("adapter initialisation failed for service {service_id}")]
    Initialization {
        /// The service the adapter advertises.
        service_id: ServiceId,
        /// The hook failure.
        #[source]
        source: Arc<AdapterError>,
    },

    /// An adapter advertises an identifier the ontology does not know, or
    /// the catalog itself is malformed.
    #[error(transparent)]
    Ontology(#[from] OntologyError),

    /// Adapter discovery through configuration failed.
    #[error(transparent)]
    Source(#[from] AdapterSourceError),

    /// The registry lock was poisoned by a panicking writer.
    #[error("registry state unavailable: {0}")]
    Registry(Arc<dyn std::error::Error + Send + Sync>),
}

impl DispatchError {
    /// Wraps a registry synchronisation failure.
    pub fn registry(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Registry(Arc::new(err))
    }
}

/// Registration conflict: two adapters claimed the same identifier.
///
/// Non-fatal. The later registration wins and setup continues; the conflict
/// is logged and reported so operators can see it.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("duplicate adapter registration for service {service_id}; keeping the later registration")]
pub struct DuplicateServiceError {
    service_id: ServiceId,
}

impl DuplicateServiceError {
    /// Creates a duplicate-registration record.
    #[must_use]
    pub const fn new(service_id: ServiceId) -> Self {
        Self { service_id }
    }

    /// Returns the contested service identifier.
    #[must_use]
    pub const fn service_id(&self) -> &ServiceId {
        &self.service_id
    }
}

/// Record of one adapter whose initialisation hook failed during setup.
#[derive(Debug, Clone)]
pub struct InitializationFailure {
    service_id: ServiceId,
    source: Arc<AdapterError>,
}

impl InitializationFailure {
    /// Returns the service whose adapter failed to initialise.
    #[must_use]
    pub const fn service_id(&self) -> &ServiceId {
        &self.service_id
    }

    /// Returns the hook failure.
    #[must_use]
    pub fn source(&self) -> &AdapterError {
        self.source.as_ref()
    }
}

/// What happened during [`ServiceManager::setup`].
///
/// Duplicate registrations and failed initialisation hooks are non-fatal,
/// so they are collected here instead of aborting setup.
#[derive(Debug, Clone, Default)]
pub struct SetupReport {
    duplicates: Vec<DuplicateServiceError>,
    failed_initializations: Vec<InitializationFailure>,
}

impl SetupReport {
    /// Returns the registration conflicts observed during setup.
    #[must_use]
    pub fn duplicates(&self) -> &[DuplicateServiceError] {
        &self.duplicates
    }

    /// Returns the adapters whose initialisation hooks failed.
    #[must_use]
    pub fn failed_initializations(&self) -> &[InitializationFailure] {
        &self.failed_initializations
    }

    /// Returns whether setup completed without conflicts or hook failures.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.duplicates.is_empty() && self.failed_initializations.is_empty()
    }
}

/// One live registry entry.
struct AdapterEntry {
    adapter: Arc<dyn ServiceAdapter>,
    available: bool,
    registered_at: DateTime<Utc>,
}

/// Registry of live adapters, keyed by service identifier.
///
/// The single place application code asks "give me the adapter for service
/// X" or "run this job". Registration happens at setup; afterwards the
/// registry is read-mostly, so lookups take the read lock only long enough
/// to clone an `Arc` handle — `perform` never runs under the lock, and
/// in-flight dispatches are never handed a partially-updated entry.
///
/// The manager is an explicitly constructed value the embedder owns; tests
/// build isolated managers per case instead of sharing a process global.
pub struct ServiceManager<C>
where
    C: Clock + Send + Sync,
{
    ontology: Arc<ServiceOntology>,
    clock: Arc<C>,
    registry: RwLock<HashMap<ServiceId, AdapterEntry>>,
}

impl<C> ServiceManager<C>
where
    C: Clock + Send + Sync,
{
    /// Builds a manager by merging configuration-discovered adapters with
    /// programmatically supplied ones, then running every surviving
    /// adapter's initialisation hook exactly once, in registration order.
    ///
    /// Programmatic adapters register after discovered ones, so on an
    /// identifier conflict the later registration wins. Conflicts and hook
    /// failures are logged and collected in the returned [`SetupReport`];
    /// an adapter that fails its hook is marked unavailable and excluded
    /// from dispatch while the rest of the registry remains usable.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Source`] when discovery fails and
    /// [`DispatchError::Ontology`] when an adapter advertises an identifier
    /// the ontology does not know.
    pub async fn setup(
        ontology: Arc<ServiceOntology>,
        source: &dyn AdapterSource,
        adapters: Vec<Arc<dyn ServiceAdapter>>,
        clock: Arc<C>,
    ) -> DispatchResult<(Self, SetupReport)> {
        let discovered = source.load().await?;

        let mut report = SetupReport::default();
        let mut entries: HashMap<ServiceId, AdapterEntry> = HashMap::new();
        let mut order: Vec<ServiceId> = Vec::new();

        for adapter in discovered.into_iter().chain(adapters) {
            let service_id = adapter.service_id().clone();
            ontology.get_service(&service_id)?;

            let entry = AdapterEntry {
                adapter,
                available: true,
                registered_at: clock.utc(),
            };
            if entries.insert(service_id.clone(), entry).is_some() {
                let conflict = DuplicateServiceError::new(service_id);
                warn!(service_id = %conflict.service_id(), "{conflict}");
                report.duplicates.push(conflict);
            } else {
                order.push(service_id);
            }
        }

        Self::initialize_all(&mut entries, &order, &mut report).await;

        let manager = Self {
            ontology,
            clock,
            registry: RwLock::new(entries),
        };
        Ok((manager, report))
    }

    /// Runs the post-load hook on every surviving entry, marking failures
    /// unavailable.
    async fn initialize_all(
        entries: &mut HashMap<ServiceId, AdapterEntry>,
        order: &[ServiceId],
        report: &mut SetupReport,
    ) {
        for service_id in order {
            let Some(entry) = entries.get_mut(service_id) else {
                continue;
            };
            if let Err(err) = entry.adapter.post_load_initialize().await {
                error!(%service_id, %err, "adapter initialisation failed; marking unavailable");
                entry.available = false;
                report.failed_initializations.push(InitializationFailure {
                    service_id: service_id.clone(),
                    source: Arc::new(err),
                });
            }
        }
    }

    /// Returns the catalog this manager resolves identities against.
    #[must_use]
    pub fn ontology(&self) -> &ServiceOntology {
        &self.ontology
    }

    /// Returns the adapter registered and available for `service_id`.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::ServiceNotAvailable`] when the identifier is
    /// unregistered or its adapter was marked unavailable.
    pub fn get_adapter(&self, service_id: &ServiceId) -> DispatchResult<Arc<dyn ServiceAdapter>> {
        let registry = self
            .registry
            .read()
            .map_err(|err| DispatchError::registry(std::io::Error::other(err.to_string())))?;
        registry
            .get(service_id)
            .filter(|entry| entry.available)
            .map(|entry| Arc::clone(&entry.adapter))
            .ok_or_else(|| DispatchError::ServiceNotAvailable(service_id.clone()))
    }

    /// Returns when the adapter for `service_id` was registered.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::ServiceNotAvailable`] when the identifier
    /// has no registry entry.
    pub fn registered_at(&self, service_id: &ServiceId) -> DispatchResult<DateTime<Utc>> {
        let registry = self
            .registry
            .read()
            .map_err(|err| DispatchError::registry(std::io::Error::other(err.to_string())))?;
        registry
            .get(service_id)
            .map(|entry| entry.registered_at)
            .ok_or_else(|| DispatchError::ServiceNotAvailable(service_id.clone()))
    }

    /// Returns the identifiers of all registered adapters, available or
    /// not, in unspecified order.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Registry`] when the registry lock is
    /// poisoned.
    pub fn registered_services(&self) -> DispatchResult<Vec<ServiceId>> {
        let registry = self
            .registry
            .read()
            .map_err(|err| DispatchError::registry(std::io::Error::other(err.to_string())))?;
        Ok(registry.keys().cloned().collect())
    }

    /// Resolves the job's service identifier and runs the adapter.
    ///
    /// The adapter's result sequence is propagated unchanged: one record per
    /// job item, in input order. Adapter-internal failures are caught,
    /// logged, and re-surfaced as [`DispatchError::JobExecution`] wrapping
    /// the original cause, so callers never need to know adapter-internal
    /// error types. A reported identity mismatch surfaces as
    /// [`DispatchError::ServiceMismatch`] instead, since it indicates a
    /// framework bug rather than a provider failure.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::ServiceNotAvailable`],
    /// [`DispatchError::ServiceMismatch`], or
    /// [`DispatchError::JobExecution`].
    pub async fn dispatch(&self, job: &JobDescriptor) -> DispatchResult<Vec<JobResult>> {
        let service_id = job.service_descriptor().service_id().clone();
        let adapter = self.get_adapter(&service_id)?;
        debug!(%service_id, job_id = %job.id(), items = job.items().len(), "dispatching job");

        match adapter.perform(job).await {
            Ok(results) => Ok(results),
            Err(AdapterError::ServiceMismatch { expected, received }) => {
                error!(%expected, %received, job_id = %job.id(), "job routed to wrong adapter");
                Err(DispatchError::ServiceMismatch { expected, received })
            }
            Err(err) => {
                error!(%service_id, job_id = %job.id(), %err, "job execution failed");
                Err(DispatchError::JobExecution {
                    service_id,
                    source: Arc::new(err),
                })
            }
        }
    }

    /// Registers an adapter after startup (administrative hot-reload).
    ///
    /// The initialisation hook runs before the registry entry is swapped in,
    /// so in-flight dispatches never observe an uninitialised adapter. When
    /// the identifier was already registered the previous entry is replaced
    /// and the conflict returned, mirroring last-registration-wins setup
    /// semantics.
    ///
    /// # Errors
    ///
    /// Returns [`DispatchError::Ontology`] for identifiers the catalog does
    /// not know and [`DispatchError::Initialization`] when the hook fails;
    /// in both cases the registry is left unchanged.
    pub async fn register_adapter(
        &self,
        adapter: Arc<dyn ServiceAdapter>,
    ) -> DispatchResult<Option<DuplicateServiceError>> {
        let service_id = adapter.service_id().clone();
        self.ontology.get_service(&service_id)?;

        if let Err(err) = adapter.post_load_initialize().await {
            error!(%service_id, %err, "adapter initialisation failed during registration");
            return Err(DispatchError::Initialization {
                service_id,
                source: Arc::new(err),
            });
        }

        let entry = AdapterEntry {
            adapter,
            available: true,
            registered_at: self.clock.utc(),
        };
        let mut registry = self
            .registry
            .write()
            .map_err(|err| DispatchError::registry(std::io::Error::other(err.to_string())))?;
        let previous = registry.insert(service_id.clone(), entry);

        Ok(previous.map(|_| {
            let conflict = DuplicateServiceError::new(service_id);
            warn!(service_id = %conflict.service_id(), "{conflict}");
            conflict
        }))
    }
}
