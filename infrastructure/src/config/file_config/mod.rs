//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to application types on use.

mod auth;
mod endpoint;
mod entitlement;
mod output;
mod stream;

pub use auth::FileAuthConfig;
pub use endpoint::FileEndpointConfig;
pub use entitlement::FileEntitlementConfig;
pub use output::FileOutputConfig;
pub use stream::FileStreamConfig;

use serde::{Deserialize, Serialize};

/// Severity level of a configuration issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Fatal: the configuration cannot work at all.
    Error,
    /// Non-fatal: the configuration works but may not behave as expected.
    Warning,
}

/// A detected issue in the loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub field: &'static str,
    pub message: String,
}

impl ConfigIssue {
    fn error(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            field,
            message: message.into(),
        }
    }

    fn warning(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            field,
            message: message.into(),
        }
    }
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Backend endpoint
    pub endpoint: FileEndpointConfig,
    /// Stream liveness
    pub stream: FileStreamConfig,
    /// Where the bearer token comes from
    pub auth: FileAuthConfig,
    /// Subscription plan check
    pub entitlement: FileEntitlementConfig,
    /// Output settings
    pub output: FileOutputConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        let url = self.endpoint.url.trim();
        if url.is_empty() {
            issues.push(ConfigIssue::error("endpoint.url", "endpoint.url is empty"));
        } else if !(url.starts_with("http://") || url.starts_with("https://")) {
            issues.push(ConfigIssue::error(
                "endpoint.url",
                format!("endpoint.url must be an http(s) URL, got '{}'", url),
            ));
        } else if url.starts_with("http://")
            && !(url.starts_with("http://localhost") || url.starts_with("http://127.0.0.1"))
        {
            issues.push(ConfigIssue::warning(
                "endpoint.url",
                "endpoint.url is not https; consultation notes would be sent unencrypted",
            ));
        }

        if self.stream.idle_timeout_secs == 0 {
            issues.push(ConfigIssue::error(
                "stream.idle_timeout_secs",
                "stream.idle_timeout_secs must be greater than 0",
            ));
        }

        if self.endpoint.connect_timeout_secs == 0 {
            issues.push(ConfigIssue::error(
                "endpoint.connect_timeout_secs",
                "endpoint.connect_timeout_secs must be greater than 0",
            ));
        }

        if self.auth.token_file.is_none() && self.auth.token_env.trim().is_empty() {
            issues.push(ConfigIssue::error(
                "auth.token_env",
                "auth.token_env is empty and no auth.token_file is set",
            ));
        }

        if self.entitlement.required_plan.trim().is_empty() {
            issues.push(ConfigIssue::warning(
                "entitlement.required_plan",
                "entitlement.required_plan is empty; no account will be entitled",
            ));
        }

        issues
    }

    /// True if any issue is an [`Severity::Error`].
    pub fn has_errors(&self) -> bool {
        self.validate()
            .iter()
            .any(|issue| issue.severity == Severity::Error)
    }
}
