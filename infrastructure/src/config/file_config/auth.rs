//! Credential configuration from TOML (`[auth]` section)

use crate::auth::token::DEFAULT_TOKEN_ENV;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw credential configuration from TOML
///
/// When `token_file` is set it takes precedence over `token_env`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAuthConfig {
    /// Environment variable holding the bearer token
    pub token_env: String,
    /// File holding the bearer token
    pub token_file: Option<PathBuf>,
}

impl Default for FileAuthConfig {
    fn default() -> Self {
        Self {
            token_env: DEFAULT_TOKEN_ENV.to_string(),
            token_file: None,
        }
    }
}
