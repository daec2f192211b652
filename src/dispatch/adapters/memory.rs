//! In-memory adapter source and feed transport for tests and embedders.

use crate::dispatch::ports::{
    AdapterSource, AdapterSourceResult, FeedAck, FeedRequest, FeedTransport, FeedTransportError,
    FeedTransportResult, ServiceAdapter,
};
use async_trait::async_trait;
use std::sync::{Arc, RwLock};

/// Acknowledgement message answered by the in-memory provider.
const PROVIDER_ACK: &str = "Ok.";

/// Adapter source backed by a fixed, pre-constructed adapter list.
///
/// Stands in for configuration-driven discovery in tests and in embedders
/// that assemble their adapters in code.
#[derive(Clone, Default)]
pub struct StaticAdapterSource {
    adapters: Vec<Arc<dyn ServiceAdapter>>,
}

impl StaticAdapterSource {
    /// Creates a source yielding the given adapters in order.
    #[must_use]
    pub fn new(adapters: Vec<Arc<dyn ServiceAdapter>>) -> Self {
        Self { adapters }
    }

    /// Creates a source that discovers nothing.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AdapterSource for StaticAdapterSource {
    async fn load(&self) -> AdapterSourceResult<Vec<Arc<dyn ServiceAdapter>>> {
        Ok(self.adapters.clone())
    }
}

/// Thread-safe in-memory feed transport.
///
/// Models provider behaviour without network access: pushed requests are
/// recorded for inspection and failures can be scripted per test.
#[derive(Debug, Clone, Default)]
pub struct InMemoryFeedTransport {
    state: Arc<RwLock<InMemoryTransportState>>,
}

#[derive(Debug, Default)]
struct InMemoryTransportState {
    pushed: Vec<FeedRequest>,
    failure: Option<FeedTransportError>,
}

impl InMemoryFeedTransport {
    /// Creates a transport that acknowledges every push.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Scripts the transport to fail every subsequent push with `err`.
    ///
    /// # Errors
    ///
    /// Returns transport errors when lock acquisition fails.
    pub fn set_failure(&self, err: FeedTransportError) -> FeedTransportResult<()> {
        let mut state = self.state.write().map_err(|lock_err| {
            FeedTransportError::provider(std::io::Error::other(lock_err.to_string()))
        })?;
        state.failure = Some(err);
        Ok(())
    }

    /// Clears a scripted failure.
    ///
    /// # Errors
    ///
    /// Returns transport errors when lock acquisition fails.
    pub fn clear_failure(&self) -> FeedTransportResult<()> {
        let mut state = self.state.write().map_err(|lock_err| {
            FeedTransportError::provider(std::io::Error::other(lock_err.to_string()))
        })?;
        state.failure = None;
        Ok(())
    }

    /// Returns the requests pushed so far, in push order.
    ///
    /// # Errors
    ///
    /// Returns transport errors when lock acquisition fails.
    pub fn pushed_feeds(&self) -> FeedTransportResult<Vec<FeedRequest>> {
        let state = self.state.read().map_err(|lock_err| {
            FeedTransportError::provider(std::io::Error::other(lock_err.to_string()))
        })?;
        Ok(state.pushed.clone())
    }
}

#[async_trait]
impl FeedTransport for InMemoryFeedTransport {
    async fn push_feed(&self, request: &FeedRequest) -> FeedTransportResult<FeedAck> {
        let mut state = self.state.write().map_err(|lock_err| {
            FeedTransportError::provider(std::io::Error::other(lock_err.to_string()))
        })?;
        if let Some(failure) = &state.failure {
            return Err(failure.clone());
        }
        state.pushed.push(request.clone());
        Ok(FeedAck::new(PROVIDER_ACK))
    }
}
