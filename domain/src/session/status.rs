//! Lifecycle status of a consultation stream.

use std::fmt;

/// Where a [`SessionMachine`](super::machine::SessionMachine) currently is.
///
/// `Requesting` and `Streaming` are live; the other three are terminal and
/// absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SessionStatus {
    /// Request sent, no fragment received yet.
    Requesting,
    /// At least one fragment received.
    Streaming,
    /// The server closed the stream normally.
    Complete,
    /// Transport error, server error, malformed event or idle timeout.
    Failed,
    /// Aborted by the consumer.
    Cancelled,
}

impl SessionStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            SessionStatus::Complete | SessionStatus::Failed | SessionStatus::Cancelled
        )
    }

    /// Whether a new submission may start while a session is in this state.
    pub fn allows_submit(&self) -> bool {
        self.is_terminal()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::Requesting => "requesting",
            SessionStatus::Streaming => "streaming",
            SessionStatus::Complete => "complete",
            SessionStatus::Failed => "failed",
            SessionStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
