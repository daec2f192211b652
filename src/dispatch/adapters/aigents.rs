//! Reference adapter for the Aigents RSS feeder provider.

use crate::dispatch::ports::{
    AdapterError, AdapterResult, FeedRequest, FeedTransport, FeedTransportError, ServiceAdapter,
};
use crate::job::{
    FailureKind, InputData, InputMode, ItemFailure, JobDescriptor, JobItem, JobResult, JobState,
    OutputMode, ResponseData,
};
use crate::ontology::domain::{OntologyError, Service, ServiceId};
use crate::ontology::{AIGENTS_RSS_FEEDER_ID, ServiceOntology};
use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, error};

/// Tag stamped into every result record this adapter produces.
const ADAPTER_TYPE: &str = "aigents";

/// Forwards RSS feed subscriptions to the Aigents provider.
///
/// The adapter accepts `attached` items carrying an `rss_feed` payload with
/// an `area` field and pushes each one through its [`FeedTransport`].
///
/// Failure semantics are per-item: an unrecognised item shape fails that
/// single item with an error result record while the rest of the job
/// proceeds. Provider-side failures abort the whole job, since a transport
/// that has started failing will not recover mid-job.
pub struct AigentsFeederAdapter {
    service: Service,
    transport: Arc<dyn FeedTransport>,
}

impl AigentsFeederAdapter {
    /// Creates an adapter fronting the given service record.
    #[must_use]
    pub fn new(service: Service, transport: Arc<dyn FeedTransport>) -> Self {
        Self { service, transport }
    }

    /// Creates an adapter by looking up its own identity in the ontology.
    ///
    /// # Errors
    ///
    /// Returns [`OntologyError::UnknownService`] when the catalog does not
    /// know the Aigents RSS feeder service.
    pub fn from_ontology(
        ontology: &ServiceOntology,
        transport: Arc<dyn FeedTransport>,
    ) -> Result<Self, OntologyError> {
        let service_id = ServiceId::new(AIGENTS_RSS_FEEDER_ID)?;
        let service = ontology.get_service(&service_id)?.clone();
        Ok(Self::new(service, transport))
    }

    /// Validates one item and prepares its provider request.
    fn prepare_item(item: &JobItem) -> Result<FeedRequest, ItemFailure> {
        if item.input_type() != InputMode::Attached {
            return Err(ItemFailure::new(
                FailureKind::UnsupportedInput,
                format!("input type '{}' is not supported", item.input_type()),
            ));
        }
        if item.output_type() != OutputMode::Attached {
            return Err(ItemFailure::new(
                FailureKind::UnsupportedOutput,
                format!("output type '{}' is not supported", item.output_type()),
            ));
        }

        let InputData::RssFeed(payload) = item.input_data() else {
            return Err(ItemFailure::new(
                FailureKind::UnsupportedInput,
                format!("payload kind '{}' is not an rss_feed", item.input_data().kind()),
            ));
        };

        let area = payload
            .get("area")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                ItemFailure::new(
                    FailureKind::MalformedPayload,
                    "rss_feed payload is missing a string 'area' field",
                )
            })?;

        Ok(FeedRequest::new(area, payload.clone()))
    }

    /// Pushes one prepared request and shapes the provider's answer.
    async fn push_item(&self, request: &FeedRequest) -> AdapterResult<ResponseData> {
        match self.transport.push_feed(request).await {
            Ok(ack) => Ok(ResponseData::success_text(ack.message())),
            Err(FeedTransportError::Timeout(deadline)) => Err(AdapterError::Timeout(deadline)),
            Err(err) => Err(AdapterError::remote(err)),
        }
    }
}

#[async_trait]
impl ServiceAdapter for AigentsFeederAdapter {
    fn service_id(&self) -> &ServiceId {
        self.service.id()
    }

    fn adapter_type(&self) -> &str {
        ADAPTER_TYPE
    }

    async fn perform(&self, job: &JobDescriptor) -> AdapterResult<Vec<JobResult>> {
        let received = job.service_descriptor().service_id();
        if received != self.service.id() {
            return Err(AdapterError::ServiceMismatch {
                expected: self.service.id().clone(),
                received: received.clone(),
            });
        }

        let mut state = JobState::Received;
        state = state.advance(JobState::Validating)?;

        let prepared: Vec<Result<FeedRequest, ItemFailure>> =
            job.items().iter().map(Self::prepare_item).collect();

        if prepared.iter().all(Result::is_err) {
            state = state.advance(JobState::Rejected)?;
            debug!(job_id = %job.id(), state = %state, "every item failed validation");
            let results = prepared
                .into_iter()
                .filter_map(Result::err)
                .map(|failure| JobResult::new(ADAPTER_TYPE, ResponseData::Failure(failure)))
                .collect();
            return Ok(results);
        }

        state = state.advance(JobState::Executing)?;
        let mut results = Vec::with_capacity(prepared.len());
        for item in prepared {
            match item {
                Err(failure) => {
                    debug!(job_id = %job.id(), kind = %failure.kind(), "item failed validation");
                    results.push(JobResult::new(ADAPTER_TYPE, ResponseData::Failure(failure)));
                }
                Ok(request) => match self.push_item(&request).await {
                    Ok(response) => results.push(JobResult::new(ADAPTER_TYPE, response)),
                    Err(err) => {
                        let terminal = state.advance(JobState::Failed)?;
                        error!(job_id = %job.id(), state = %terminal, %err, "feed push failed");
                        return Err(err);
                    }
                },
            }
        }

        state = state.advance(JobState::Completed)?;
        debug!(job_id = %job.id(), state = %state, results = results.len(), "job completed");
        Ok(results)
    }
}
