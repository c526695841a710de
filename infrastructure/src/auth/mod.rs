//! Identity adapters
//!
//! - [`token::EnvTokenProvider`] / [`token::FileTokenProvider`]: bearer tokens
//! - [`entitlement::PlanEntitlementGate`]: subscription plan check

pub mod entitlement;
pub mod token;

use crate::config::{FileAuthConfig, FileEntitlementConfig};
use consult_application::AuthTokenProvider;
use entitlement::PlanEntitlementGate;
use std::sync::Arc;
use token::{EnvTokenProvider, FileTokenProvider};

/// Build the token provider selected by the `[auth]` section.
pub fn token_provider_from_config(config: &FileAuthConfig) -> Arc<dyn AuthTokenProvider> {
    match &config.token_file {
        Some(path) => Arc::new(FileTokenProvider::new(path.clone())),
        None => Arc::new(EnvTokenProvider::new(config.token_env.clone())),
    }
}

/// Build the entitlement gate described by the `[entitlement]` section.
pub fn gate_from_config(config: &FileEntitlementConfig) -> PlanEntitlementGate {
    PlanEntitlementGate::new(config.required_plan.clone(), config.plans.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use consult_application::AuthorizationGate;
    use std::io::Write;

    #[tokio::test]
    async fn token_file_takes_precedence() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "file-jwt").unwrap();

        let config = FileAuthConfig {
            token_env: "CONSULT_TEST_UNSET_TOKEN".to_string(),
            token_file: Some(file.path().to_path_buf()),
        };
        let provider = token_provider_from_config(&config);
        assert_eq!(provider.get_token().await.unwrap().secret(), "file-jwt");
    }

    #[test]
    fn gate_follows_configured_plans() {
        let mut config = FileEntitlementConfig::default();
        assert!(!gate_from_config(&config).has_entitlement());

        config.plans = vec!["Premium_Subscription".to_string()];
        assert!(gate_from_config(&config).has_entitlement());
    }
}
