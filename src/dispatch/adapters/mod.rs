//! Adapter implementations for dispatch ports.

pub mod aigents;
pub mod memory;

pub use aigents::AigentsFeederAdapter;
pub use memory::{InMemoryFeedTransport, StaticAdapterSource};
