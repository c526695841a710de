//! Application layer for consultation-assistant
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

#[cfg(test)]
pub(crate) mod testing;

// Re-export commonly used types
pub use config::{DEFAULT_IDLE_TIMEOUT, StreamParams};
pub use ports::{
    auth::{AuthTokenProvider, AuthorizationGate, Entitlement},
    consultation_transport::{ConsultationTransport, FragmentStream, TransportError},
    renderer::{NoRenderer, OutputRenderer, SessionSnapshot},
};
pub use use_cases::streaming_client::{SessionOutcome, StreamError, StreamSession, StreamingClient};
pub use use_cases::submission_controller::{SubmissionController, SubmitError};
