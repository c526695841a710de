//! Plan-based entitlement gate.

use consult_application::AuthorizationGate;

/// Plan that unlocks the consultation assistant.
pub const DEFAULT_REQUIRED_PLAN: &str = "premium_subscription";

/// Grants access when the account's active plans include the required one.
#[derive(Debug, Clone)]
pub struct PlanEntitlementGate {
    required_plan: String,
    active_plans: Vec<String>,
}

impl PlanEntitlementGate {
    pub fn new(required_plan: impl Into<String>, active_plans: Vec<String>) -> Self {
        Self {
            required_plan: required_plan.into(),
            active_plans,
        }
    }

    pub fn required_plan(&self) -> &str {
        &self.required_plan
    }
}

impl AuthorizationGate for PlanEntitlementGate {
    fn has_entitlement(&self) -> bool {
        self.active_plans
            .iter()
            .any(|plan| plan.trim().eq_ignore_ascii_case(&self.required_plan))
    }
}
