//! Error types for job descriptor validation and execution state tracking.

use super::JobState;
use thiserror::Error;

/// Errors returned while constructing or advancing job domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum JobDomainError {
    /// The job item sequence is empty.
    #[error("job descriptor requires at least one job item")]
    EmptyJobItems,

    /// The input mode string is not one of the recognised values.
    #[error("unknown input mode: {0}")]
    UnknownInputMode(String),

    /// The output mode string is not one of the recognised values.
    #[error("unknown output mode: {0}")]
    UnknownOutputMode(String),

    /// The quality-of-service class string is not one of the recognised
    /// values.
    #[error("unknown qos class: {0}")]
    UnknownQosClass(String),

    /// The requested execution state transition is not allowed.
    #[error("invalid job state transition: {from} -> {to}")]
    InvalidJobTransition {
        /// State the execution was in.
        from: JobState,
        /// State the transition asked for.
        to: JobState,
    },
}
