//! Discovery port for configuration-seeded adapters.

use super::ServiceAdapter;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for adapter source operations.
pub type AdapterSourceResult<T> = Result<T, AdapterSourceError>;

/// Yields adapters discovered through configuration at setup time.
///
/// The configuration mechanics themselves (file format, paths, secrets)
/// live outside this crate; the service manager only needs something that
/// can produce constructed adapter instances to merge with the ones the
/// embedder passes in programmatically.
#[async_trait]
pub trait AdapterSource: Send + Sync {
    /// Loads the configured adapters in their configured order.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterSourceError::Configuration`] when the backing
    /// configuration is malformed or an adapter cannot be constructed.
    async fn load(&self) -> AdapterSourceResult<Vec<Arc<dyn ServiceAdapter>>>;
}

/// Errors returned by adapter source implementations.
#[derive(Debug, Clone, Error)]
pub enum AdapterSourceError {
    /// The backing configuration is malformed.
    #[error("adapter configuration error: {0}")]
    Configuration(Arc<dyn std::error::Error + Send + Sync>),
}

impl AdapterSourceError {
    /// Wraps a configuration failure.
    pub fn configuration(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Configuration(Arc::new(err))
    }
}
