//! Explicit state machine for one consultation stream.
//!
//! ```text
//! Requesting ──fragment──▶ Streaming ──fragment──▶ Streaming
//!     │                        │
//!     ├──complete──────────────┼──▶ Complete
//!     ├──failure───────────────┼──▶ Failed
//!     └──cancel────────────────┴──▶ Cancelled
//! ```
//!
//! Every transition out of a terminal state is rejected with
//! [`TransitionError::AlreadyTerminal`], except [`cancel`](SessionMachine::cancel)
//! which is an idempotent no-op there.

use super::status::SessionStatus;
use crate::core::error::TransitionError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionMachine {
    status: SessionStatus,
    fragments: usize,
    failure: Option<String>,
}

impl SessionMachine {
    /// A machine for a request that has just been sent.
    pub fn new() -> Self {
        Self {
            status: SessionStatus::Requesting,
            fragments: 0,
            failure: None,
        }
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Number of fragments accepted so far.
    pub fn fragments_received(&self) -> usize {
        self.fragments
    }

    /// Why the session failed, if it did.
    pub fn failure_reason(&self) -> Option<&str> {
        self.failure.as_deref()
    }

    /// A fragment arrived. Moves `Requesting` to `Streaming`.
    pub fn on_fragment(&mut self) -> Result<SessionStatus, TransitionError> {
        self.ensure_live()?;
        self.fragments += 1;
        self.status = SessionStatus::Streaming;
        Ok(self.status)
    }

    /// The server closed the stream normally.
    pub fn on_complete(&mut self) -> Result<SessionStatus, TransitionError> {
        self.ensure_live()?;
        self.status = SessionStatus::Complete;
        Ok(self.status)
    }

    /// The transport or the server failed.
    pub fn on_failure(&mut self, reason: impl Into<String>) -> Result<SessionStatus, TransitionError> {
        self.ensure_live()?;
        self.failure = Some(reason.into());
        self.status = SessionStatus::Failed;
        Ok(self.status)
    }

    /// Consumer-initiated abort.
    ///
    /// Returns `true` only for the call that actually moved the machine to
    /// `Cancelled`.
    pub fn cancel(&mut self) -> bool {
        if self.is_terminal() {
            return false;
        }
        self.status = SessionStatus::Cancelled;
        true
    }

    fn ensure_live(&self) -> Result<(), TransitionError> {
        if self.is_terminal() {
            Err(TransitionError::AlreadyTerminal(self.status))
        } else {
            Ok(())
        }
    }
}

impl Default for SessionMachine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_requesting() {
        let machine = SessionMachine::new();
        assert_eq!(machine.status(), SessionStatus::Requesting);
        assert_eq!(machine.fragments_received(), 0);
        assert!(machine.failure_reason().is_none());
    }

    #[test]
    fn first_fragment_moves_to_streaming() {
        let mut machine = SessionMachine::new();
        assert_eq!(machine.on_fragment(), Ok(SessionStatus::Streaming));
        assert_eq!(machine.on_fragment(), Ok(SessionStatus::Streaming));
        assert_eq!(machine.fragments_received(), 2);
    }

    #[test]
    fn complete_without_fragments_is_allowed() {
        let mut machine = SessionMachine::new();
        assert_eq!(machine.on_complete(), Ok(SessionStatus::Complete));
    }

    #[test]
    fn failure_records_reason() {
        let mut machine = SessionMachine::new();
        machine.on_fragment().unwrap();
        assert_eq!(machine.on_failure("connection reset"), Ok(SessionStatus::Failed));
        assert_eq!(machine.failure_reason(), Some("connection reset"));
    }

    #[test]
    fn no_fragment_after_failure() {
        let mut machine = SessionMachine::new();
        machine.on_failure("boom").unwrap();
        assert_eq!(
            machine.on_fragment(),
            Err(TransitionError::AlreadyTerminal(SessionStatus::Failed))
        );
        assert_eq!(machine.fragments_received(), 0);
    }

    #[test]
    fn terminal_states_are_absorbing() {
        let mut machine = SessionMachine::new();
        machine.on_complete().unwrap();
        assert!(machine.on_failure("late").is_err());
        assert!(machine.on_complete().is_err());
        assert!(!machine.cancel());
        assert_eq!(machine.status(), SessionStatus::Complete);
        assert!(machine.failure_reason().is_none());
    }

    #[test]
    fn cancel_while_streaming_happens_once() {
        let mut machine = SessionMachine::new();
        machine.on_fragment().unwrap();

        assert!(machine.cancel());
        assert_eq!(machine.status(), SessionStatus::Cancelled);

        assert!(!machine.cancel());
        assert_eq!(machine.status(), SessionStatus::Cancelled);
    }

    #[test]
    fn cancel_before_first_fragment() {
        let mut machine = SessionMachine::new();
        assert!(machine.cancel());
        assert_eq!(
            machine.on_fragment(),
            Err(TransitionError::AlreadyTerminal(SessionStatus::Cancelled))
        );
    }
}
