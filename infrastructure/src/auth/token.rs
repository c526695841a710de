//! Token providers backed by the local environment.
//!
//! Both providers re-read their source on every call, so a token refreshed
//! or revoked between submissions is picked up immediately.

use async_trait::async_trait;
use consult_application::AuthTokenProvider;
use consult_domain::AuthToken;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Default environment variable holding the bearer token.
pub const DEFAULT_TOKEN_ENV: &str = "CONSULT_TOKEN";

/// Reads the token from an environment variable.
#[derive(Debug, Clone)]
pub struct EnvTokenProvider {
    var: String,
}

impl EnvTokenProvider {
    pub fn new(var: impl Into<String>) -> Self {
        Self { var: var.into() }
    }
}

impl Default for EnvTokenProvider {
    fn default() -> Self {
        Self::new(DEFAULT_TOKEN_ENV)
    }
}

#[async_trait]
impl AuthTokenProvider for EnvTokenProvider {
    async fn get_token(&self) -> Option<AuthToken> {
        let token = std::env::var(&self.var).ok().and_then(AuthToken::new);
        if token.is_none() {
            debug!(var = %self.var, "No token in environment");
        }
        token
    }
}

/// Reads the token from a file, e.g. one kept fresh by a login helper.
#[derive(Debug, Clone)]
pub struct FileTokenProvider {
    path: PathBuf,
}

impl FileTokenProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl AuthTokenProvider for FileTokenProvider {
    async fn get_token(&self) -> Option<AuthToken> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => AuthToken::new(contents),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "Failed to read token file");
                None
            }
        }
    }
}
