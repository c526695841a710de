//! Consultation stream session domain.
//!
//! - [`status::SessionStatus`]: the five lifecycle states
//! - [`machine::SessionMachine`]: explicit transition functions between them
//! - [`accumulator::OutputAccumulator`]: the growing generated document
//! - [`stream::Fragment`]: one ordered chunk of document text

pub mod accumulator;
pub mod machine;
pub mod status;
pub mod stream;
