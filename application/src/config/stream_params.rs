//! Stream parameters: session liveness control.
//!
//! [`StreamParams`] groups the static parameters that bound how long a
//! [`StreamingClient`](crate::use_cases::streaming_client::StreamingClient)
//! waits on the backend.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default maximum silence on a stream before it is failed.
pub const DEFAULT_IDLE_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreamParams {
    /// Maximum time without any event, including the wait for the response
    /// to start. Always finite.
    pub idle_timeout: Duration,
}

impl Default for StreamParams {
    fn default() -> Self {
        Self {
            idle_timeout: DEFAULT_IDLE_TIMEOUT,
        }
    }
}

impl StreamParams {
    pub fn with_idle_timeout(mut self, timeout: Duration) -> Self {
        self.idle_timeout = timeout;
        self
    }
}
