//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod streaming_client;
pub mod submission_controller;
