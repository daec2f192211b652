//! Port contracts for adapter execution, discovery, and provider transport.

mod adapter;
mod source;
mod transport;

pub use adapter::{AdapterError, AdapterResult, ServiceAdapter};
pub use source::{AdapterSource, AdapterSourceError, AdapterSourceResult};
pub use transport::{FeedAck, FeedRequest, FeedTransport, FeedTransportError, FeedTransportResult};
