//! Terminal output: streaming renderer, status formatting and the upsell view

pub mod console;
pub mod formatter;
pub mod upsell;
