//! Application-level configuration.
//!
//! - [`StreamParams`]: stream liveness control (idle timeout)

pub mod stream_params;

pub use stream_params::{DEFAULT_IDLE_TIMEOUT, StreamParams};
