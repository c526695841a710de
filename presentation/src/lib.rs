//! Presentation layer for consultation-assistant
//!
//! This crate contains CLI definitions, the streaming console renderer
//! and the fallback view for accounts without the required plan.

pub mod cli;
pub mod output;

// Re-export commonly used types
pub use cli::commands::Cli;
pub use output::console::ConsoleRenderer;
pub use output::formatter::{OutcomeFormatter, WAITING_MESSAGE};
pub use output::upsell::UpsellView;
