//! Orchestration services for adapter registration and job dispatch.

mod manager;

pub use manager::{
    DispatchError, DispatchResult, DuplicateServiceError, InitializationFailure, ServiceManager,
    SetupReport,
};
