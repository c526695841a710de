//! Endpoint configuration from TOML (`[endpoint]` section)

use crate::http::transport::DEFAULT_ENDPOINT;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Raw endpoint configuration from TOML
///
/// # Example
///
/// ```toml
/// [endpoint]
/// url = "https://consult.example.com/api/consultation"
/// connect_timeout_secs = 10
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEndpointConfig {
    /// Full URL of the streaming consultation endpoint
    pub url: String,
    /// TCP/TLS connect timeout in seconds
    pub connect_timeout_secs: u64,
}

impl Default for FileEndpointConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_ENDPOINT.to_string(),
            connect_timeout_secs: 10,
        }
    }
}

impl FileEndpointConfig {
    pub fn connect_timeout(&self) -> Duration {
        Duration::from_secs(self.connect_timeout_secs)
    }
}
