//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure and presentation adapters
//! must implement.

pub mod auth;
pub mod consultation_transport;
pub mod renderer;
