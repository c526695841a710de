//! Stream configuration from TOML (`[stream]` section)

use consult_application::{DEFAULT_IDLE_TIMEOUT, StreamParams};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw stream configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileStreamConfig {
    /// Fail the session after this many seconds without any event
    pub idle_timeout_secs: u64,
}

impl Default for FileStreamConfig {
    fn default() -> Self {
        Self {
            idle_timeout_secs: DEFAULT_IDLE_TIMEOUT.as_secs(),
        }
    }
}

impl FileStreamConfig {
    /// Convert to application-layer [`StreamParams`].
    pub fn to_stream_params(&self) -> StreamParams {
        StreamParams::default().with_idle_timeout(Duration::from_secs(self.idle_timeout_secs))
    }
}
