//! Identity ports: bearer tokens and the entitlement gate.

use async_trait::async_trait;
use consult_domain::AuthToken;

/// Supplies the bearer credential of the signed-in user.
///
/// Called once per submission; the core never caches the result, so an
/// implementation may refresh or revoke tokens between submissions.
#[async_trait]
pub trait AuthTokenProvider: Send + Sync {
    /// The current token, or `None` when the user is not signed in.
    async fn get_token(&self) -> Option<AuthToken>;
}

/// Capability check evaluated before the consultation flow is reachable.
pub trait AuthorizationGate: Send + Sync {
    /// Does the current identity hold an active entitlement?
    fn has_entitlement(&self) -> bool;
}

/// Proof that an [`AuthorizationGate`] was satisfied.
///
/// [`SubmissionController`](crate::use_cases::submission_controller::SubmissionController)
/// can only be built with one of these, so the core is unreachable without the
/// predicate having passed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entitlement {
    _checked: (),
}

impl Entitlement {
    /// Evaluate `gate` once; `None` means the fallback view should be shown.
    pub fn check(gate: &dyn AuthorizationGate) -> Option<Self> {
        gate.has_entitlement().then_some(Self { _checked: () })
    }
}
