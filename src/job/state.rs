//! Per-execution job state machine.

use super::JobDomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// State of one job execution inside an adapter.
///
/// Allowed transitions:
///
/// ```text
/// Received -> Validating -> Executing -> Completed
///                        \-> Rejected   \-> Failed
/// ```
///
/// `Completed`, `Rejected`, and `Failed` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum JobState {
    /// The job has been handed to the adapter.
    Received,
    /// Item shapes are being checked against the adapter's contract.
    Validating,
    /// The externally-visible work is in progress.
    Executing,
    /// All work finished; results are available.
    Completed,
    /// Validation failed before any side effect occurred.
    Rejected,
    /// Execution failed after validation passed.
    Failed,
}

impl JobState {
    /// Returns the canonical string representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Received => "received",
            Self::Validating => "validating",
            Self::Executing => "executing",
            Self::Completed => "completed",
            Self::Rejected => "rejected",
            Self::Failed => "failed",
        }
    }

    /// Returns whether no further transitions are allowed.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed | Self::Rejected | Self::Failed)
    }

    /// Advances the execution to the next state.
    ///
    /// # Errors
    ///
    /// Returns [`JobDomainError::InvalidJobTransition`] when the transition
    /// is not part of the state machine.
    pub const fn advance(self, to: Self) -> Result<Self, JobDomainError> {
        let allowed = matches!(
            (self, to),
            (Self::Received, Self::Validating)
                | (Self::Validating, Self::Executing | Self::Rejected)
                | (Self::Executing, Self::Completed | Self::Failed)
        );
        if allowed {
            Ok(to)
        } else {
            Err(JobDomainError::InvalidJobTransition { from: self, to })
        }
    }
}

impl fmt::Display for JobState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
