//! Entitlement configuration from TOML (`[entitlement]` section)

use crate::auth::entitlement::DEFAULT_REQUIRED_PLAN;
use serde::{Deserialize, Serialize};

/// Raw entitlement configuration from TOML
///
/// # Example
///
/// ```toml
/// [entitlement]
/// required_plan = "premium_subscription"
/// plans = ["premium_subscription"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEntitlementConfig {
    /// Plan required to use the assistant
    pub required_plan: String,
    /// Plans the signed-in account currently holds
    pub plans: Vec<String>,
}

impl Default for FileEntitlementConfig {
    fn default() -> Self {
        Self {
            required_plan: DEFAULT_REQUIRED_PLAN.to_string(),
            plans: Vec::new(),
        }
    }
}
