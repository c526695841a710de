//! Domain layer for consultation-assistant
//!
//! This crate contains the core entities and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Consultation
//!
//! A [`ConsultationForm`] holds what the clinician typed. Validating it yields
//! a [`ConsultationRequest`], the immutable payload sent to the backend.
//!
//! ## Session
//!
//! One submission is streamed back as ordered [`Fragment`]s. A
//! [`SessionMachine`] tracks the lifecycle
//! (`Requesting → Streaming → Complete | Failed | Cancelled`) and an
//! [`OutputAccumulator`] concatenates the fragments into the document shown to
//! the user.

pub mod auth;
pub mod consultation;
pub mod core;
pub mod session;

// Re-export commonly used types
pub use auth::AuthToken;
pub use consultation::{
    form::ConsultationForm,
    request::{ConsultationRequest, VISIT_DATE_FORMAT, parse_visit_date},
};
pub use core::error::{TransitionError, ValidationError};
pub use session::{
    accumulator::OutputAccumulator, machine::SessionMachine, status::SessionStatus,
    stream::Fragment,
};
