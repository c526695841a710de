//! Infrastructure layer for consultation-assistant
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod auth;
pub mod config;
pub mod http;

// Re-export commonly used types
pub use auth::{
    entitlement::{DEFAULT_REQUIRED_PLAN, PlanEntitlementGate},
    gate_from_config,
    token::{DEFAULT_TOKEN_ENV, EnvTokenProvider, FileTokenProvider},
    token_provider_from_config,
};
pub use config::{
    ConfigIssue, ConfigLoader, FileAuthConfig, FileConfig, FileEndpointConfig,
    FileEntitlementConfig, FileOutputConfig, FileStreamConfig, Severity,
};
pub use http::{
    sse::decode_fragments,
    transport::{DEFAULT_ENDPOINT, HttpConsultationTransport},
};
