//! Core domain concepts shared across all subdomains.
//!
//! - [`error::ValidationError`]: rejected consultation input
//! - [`error::TransitionError`]: illegal session state transitions

pub mod error;
