//! Streaming client use case.
//!
//! Turns one [`ConsultationRequest`] into a long-lived, cancellable stream of
//! document fragments.
//!
//! [`StreamingClient::open`] checks the credential and builds a
//! [`StreamSession`] without touching the network. [`StreamingClient::run`]
//! then issues the single transport call and drives the session's
//! [`SessionMachine`] until it reaches a terminal state:
//!
//! ```text
//! open(request, token) ──▶ StreamSession (Requesting)
//!                               │ run()
//!                               ▼
//!            ┌── cancel token fired ──────────▶ Cancelled
//!  select! ──┼── no event within idle timeout ─▶ Failed
//!  (biased)  ├── Some(Ok(fragment)) ──────────▶ Streaming (loop)
//!            ├── Some(Err(e)) ────────────────▶ Failed
//!            └── None (server closed) ────────▶ Complete
//! ```
//!
//! The fragment stream is dropped before the terminal state is reported, so
//! the connection is always released by the time a renderer sees
//! `Failed` or `Cancelled`.

use crate::config::StreamParams;
use crate::ports::consultation_transport::{
    ConsultationTransport, FragmentStream, TransportError,
};
use crate::ports::renderer::{OutputRenderer, SessionSnapshot};
use consult_domain::{
    AuthToken, ConsultationRequest, Fragment, OutputAccumulator, SessionMachine, SessionStatus,
    TransitionError,
};
use futures::StreamExt;
use std::sync::Arc;
use thiserror::Error;
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Errors raised before a session exists.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StreamError {
    #[error("Authentication required")]
    AuthRequired,
}

/// One in-flight consultation request.
///
/// Owns the request, the token captured at creation, the lifecycle machine,
/// the accumulated document and the cancellation handle.
#[derive(Debug)]
pub struct StreamSession {
    request: ConsultationRequest,
    token: AuthToken,
    machine: SessionMachine,
    output: OutputAccumulator,
    cancellation: CancellationToken,
}

impl StreamSession {
    fn new(request: ConsultationRequest, token: AuthToken) -> Self {
        Self {
            request,
            token,
            machine: SessionMachine::new(),
            output: OutputAccumulator::new(),
            cancellation: CancellationToken::new(),
        }
    }

    pub fn status(&self) -> SessionStatus {
        self.machine.status()
    }

    pub fn document(&self) -> &str {
        self.output.document()
    }

    pub fn request(&self) -> &ConsultationRequest {
        &self.request
    }

    pub fn token(&self) -> &AuthToken {
        &self.token
    }

    /// A handle that cancels this session from another task.
    pub fn cancellation(&self) -> CancellationToken {
        self.cancellation.clone()
    }

    /// Cancel in place. Returns `true` only for the call that moved the
    /// session to `Cancelled`; later calls are no-ops.
    pub fn cancel(&mut self) -> bool {
        self.cancellation.cancel();
        self.machine.cancel()
    }

    /// Accept the next fragment and return the full document.
    pub fn accept(&mut self, fragment: &Fragment) -> Result<&str, TransitionError> {
        self.machine.on_fragment()?;
        Ok(self.output.append(fragment))
    }

    pub fn snapshot(&self) -> SessionSnapshot<'_> {
        SessionSnapshot {
            status: self.machine.status(),
            document: self.output.document(),
            failure: self.machine.failure_reason(),
        }
    }

    fn into_outcome(self) -> SessionOutcome {
        SessionOutcome {
            status: self.machine.status(),
            fragments: self.machine.fragments_received(),
            failure: self.machine.failure_reason().map(str::to_string),
            document: self.output.into_document(),
        }
    }
}

/// Terminal result of a session.
///
/// The document is kept for every terminal state, so a failed or cancelled
/// session still shows whatever was produced before it ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionOutcome {
    pub status: SessionStatus,
    pub document: String,
    pub failure: Option<String>,
    pub fragments: usize,
}

impl SessionOutcome {
    /// Outcome for a session whose task died without reporting.
    pub fn aborted(reason: impl Into<String>) -> Self {
        Self {
            status: SessionStatus::Failed,
            document: String::new(),
            failure: Some(reason.into()),
            fragments: 0,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.status == SessionStatus::Complete
    }
}

/// How the event loop ended.
enum Termination {
    Closed,
    Failed(TransportError),
    /// The session refused a fragment; only possible once it is terminal.
    Rejected(TransitionError),
    Cancelled,
}

/// Opens and drives consultation streams over a [`ConsultationTransport`].
#[derive(Clone)]
pub struct StreamingClient {
    transport: Arc<dyn ConsultationTransport>,
    params: StreamParams,
}

impl StreamingClient {
    pub fn new(transport: Arc<dyn ConsultationTransport>) -> Self {
        Self {
            transport,
            params: StreamParams::default(),
        }
    }

    pub fn with_params(mut self, params: StreamParams) -> Self {
        self.params = params;
        self
    }

    pub fn params(&self) -> &StreamParams {
        &self.params
    }

    /// Build a session for `request`.
    ///
    /// Fails with [`StreamError::AuthRequired`] when no token is available;
    /// the transport is never touched in that case.
    pub fn open(
        &self,
        request: ConsultationRequest,
        token: Option<AuthToken>,
    ) -> Result<StreamSession, StreamError> {
        let token = token.ok_or(StreamError::AuthRequired)?;
        Ok(StreamSession::new(request, token))
    }

    /// Send the request and consume the response until a terminal state.
    ///
    /// `renderer` sees the session after every fragment and on every status
    /// transition. Never panics on transport problems; they end as `Failed`.
    pub async fn run(
        &self,
        mut session: StreamSession,
        renderer: &dyn OutputRenderer,
    ) -> SessionOutcome {
        session.output.reset();
        renderer.render(&session.snapshot());

        let termination = match self.connect(&session).await {
            Ok(events) => self.pump(&mut session, events, renderer).await,
            Err(termination) => termination,
        };

        match termination {
            Termination::Closed => {
                if session.machine.on_complete().is_ok() {
                    info!(
                        fragments = session.machine.fragments_received(),
                        bytes = session.document().len(),
                        "Consultation stream complete"
                    );
                }
            }
            Termination::Failed(err) => {
                warn!(error = %err, "Consultation stream failed");
                record_failure(&mut session, err.to_string());
            }
            Termination::Rejected(err) => {
                warn!(error = %err, "Fragment rejected by the session");
                record_failure(&mut session, err.to_string());
            }
            Termination::Cancelled => {
                if session.machine.cancel() {
                    info!("Consultation stream cancelled");
                }
            }
        }

        renderer.render(&session.snapshot());
        session.into_outcome()
    }

    /// Issue the transport call, racing it against cancellation and the idle
    /// timeout.
    async fn connect(&self, session: &StreamSession) -> Result<FragmentStream, Termination> {
        let idle = self.params.idle_timeout;
        debug!(
            idle_timeout_secs = idle.as_secs(),
            notes_len = session.request.notes().len(),
            "Opening consultation stream"
        );

        tokio::select! {
            biased;
            _ = session.cancellation.cancelled() => Err(Termination::Cancelled),
            opened = timeout(idle, self.transport.open(&session.request, &session.token)) => {
                match opened {
                    Ok(Ok(events)) => Ok(events),
                    Ok(Err(err)) => Err(Termination::Failed(err)),
                    Err(_) => Err(Termination::Failed(TransportError::Timeout(idle))),
                }
            }
        }
    }

    /// Feed fragments into the session until the stream ends.
    ///
    /// Takes `events` by value so the connection is dropped on return.
    async fn pump(
        &self,
        session: &mut StreamSession,
        mut events: FragmentStream,
        renderer: &dyn OutputRenderer,
    ) -> Termination {
        let idle = self.params.idle_timeout;
        let cancellation = session.cancellation.clone();

        loop {
            let next = tokio::select! {
                biased;
                _ = cancellation.cancelled() => return Termination::Cancelled,
                next = timeout(idle, events.next()) => next,
            };

            let fragment = match next {
                Ok(Some(Ok(fragment))) => fragment,
                Ok(Some(Err(err))) => return Termination::Failed(err),
                Ok(None) => return Termination::Closed,
                Err(_) => return Termination::Failed(TransportError::Timeout(idle)),
            };

            let from = session.status();
            if let Err(err) = session.accept(&fragment) {
                return Termination::Rejected(err);
            }
            if from != session.status() {
                debug!(from = %from, to = %session.status(), "Session transition");
            }
            renderer.render(&session.snapshot());
        }
    }
}

fn record_failure(session: &mut StreamSession, reason: String) {
    if let Err(err) = session.machine.on_failure(reason) {
        debug!(error = %err, status = %session.status(), "Failure not recorded");
    }
}
