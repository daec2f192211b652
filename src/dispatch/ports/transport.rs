//! Transport port for feed-forwarding providers.

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;
use thiserror::Error;

/// Result type for feed transport operations.
pub type FeedTransportResult<T> = Result<T, FeedTransportError>;

/// One feed subscription pushed to a provider.
#[derive(Debug, Clone, PartialEq)]
pub struct FeedRequest {
    area: String,
    payload: Value,
}

impl FeedRequest {
    /// Creates a feed request for the given area.
    #[must_use]
    pub fn new(area: impl Into<String>, payload: Value) -> Self {
        Self {
            area: area.into(),
            payload,
        }
    }

    /// Returns the feed area.
    #[must_use]
    pub fn area(&self) -> &str {
        &self.area
    }

    /// Returns the raw request payload.
    #[must_use]
    pub const fn payload(&self) -> &Value {
        &self.payload
    }
}

/// Provider acknowledgement for one pushed feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedAck {
    message: String,
}

impl FeedAck {
    /// Creates an acknowledgement with the provider's message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Returns the provider's acknowledgement message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// Wire-level contract for reaching a feed-forwarding provider.
///
/// Concrete transports (HTTP, RPC, message queue) live outside this crate;
/// retry, backoff, and authentication toward the provider are the
/// transport's internal concern.
#[async_trait]
pub trait FeedTransport: Send + Sync {
    /// Pushes one feed subscription to the provider.
    async fn push_feed(&self, request: &FeedRequest) -> FeedTransportResult<FeedAck>;
}

/// Errors returned by feed transport implementations.
#[derive(Debug, Clone, Error)]
pub enum FeedTransportError {
    /// The provider could not be reached.
    #[error("feed provider unreachable: {0}")]
    Unreachable(String),

    /// The provider did not answer within the transport's deadline.
    #[error("feed provider timed out after {0}")]
    Timeout(String),

    /// The provider answered with an error.
    #[error("feed provider rejected the request: {0}")]
    Provider(Arc<dyn std::error::Error + Send + Sync>),
}

impl FeedTransportError {
    /// Wraps a provider-side failure.
    pub fn provider(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Provider(Arc::new(err))
    }
}
