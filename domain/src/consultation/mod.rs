//! Consultation input domain.
//!
//! - [`form::ConsultationForm`]: raw, editable field values
//! - [`request::ConsultationRequest`]: validated, immutable submission

pub mod form;
pub mod request;
