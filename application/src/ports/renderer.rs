//! Output rendering port
//!
//! Defines how the current state of a consultation stream is displayed.

use consult_domain::SessionStatus;

/// Borrowed view of a session handed to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSnapshot<'a> {
    pub status: SessionStatus,
    /// The full accumulated document, not just the latest fragment.
    pub document: &'a str,
    /// Present once the session has `Failed`.
    pub failure: Option<&'a str>,
}

/// Callback for session updates
///
/// Called after every fragment and on every status transition, always from
/// the task that owns the session. Implementations live in the presentation
/// layer.
pub trait OutputRenderer: Send + Sync {
    fn render(&self, snapshot: &SessionSnapshot<'_>);
}

/// No-op renderer for when output display is not needed
pub struct NoRenderer;

impl OutputRenderer for NoRenderer {
    fn render(&self, _snapshot: &SessionSnapshot<'_>) {}
}
