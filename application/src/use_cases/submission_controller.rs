//! Submission controller use case.
//!
//! Owns the consultation form flow: validates input, fetches a fresh token,
//! and runs at most one [`StreamSession`](super::streaming_client::StreamSession)
//! at a time on a background task.
//!
//! Submitting while a session is `Requesting` or `Streaming` fails with
//! [`SubmitError::AlreadyInProgress`]; nothing about the running session
//! changes.

use super::streaming_client::{SessionOutcome, StreamError, StreamingClient};
use crate::ports::auth::{AuthTokenProvider, Entitlement};
use crate::ports::renderer::{OutputRenderer, SessionSnapshot};
use consult_domain::{ConsultationForm, ConsultationRequest, SessionStatus, ValidationError};
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

/// Errors that can occur when submitting a consultation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmitError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Authentication required")]
    AuthRequired,

    #[error("A consultation is already being generated")]
    AlreadyInProgress,
}

impl From<StreamError> for SubmitError {
    fn from(err: StreamError) -> Self {
        match err {
            StreamError::AuthRequired => SubmitError::AuthRequired,
        }
    }
}

/// Forwards snapshots to the real renderer and publishes the status.
///
/// The status is published only after the inner render returns, so a
/// terminal status frees the controller once that session has drawn its
/// last frame.
struct StatusTap {
    inner: Arc<dyn OutputRenderer>,
    status: watch::Sender<SessionStatus>,
}

impl OutputRenderer for StatusTap {
    fn render(&self, snapshot: &SessionSnapshot<'_>) {
        self.inner.render(snapshot);
        self.status.send_replace(snapshot.status);
    }
}

struct ActiveSession {
    cancellation: CancellationToken,
    status: watch::Receiver<SessionStatus>,
    task: Option<JoinHandle<SessionOutcome>>,
}

impl ActiveSession {
    fn status(&self) -> SessionStatus {
        let published = *self.status.borrow();
        let task_gone = self.task.as_ref().is_none_or(JoinHandle::is_finished);
        if !published.is_terminal() && task_gone {
            SessionStatus::Failed
        } else {
            published
        }
    }
}

/// Drives consultation submissions for one user.
///
/// Constructing one requires an [`Entitlement`], so the controller is only
/// reachable after the authorization gate passed. Dropping the controller
/// cancels any session still in flight.
pub struct SubmissionController {
    client: StreamingClient,
    tokens: Arc<dyn AuthTokenProvider>,
    renderer: Arc<dyn OutputRenderer>,
    active: Option<ActiveSession>,
    _entitlement: Entitlement,
}

impl SubmissionController {
    pub fn new(
        entitlement: Entitlement,
        client: StreamingClient,
        tokens: Arc<dyn AuthTokenProvider>,
        renderer: Arc<dyn OutputRenderer>,
    ) -> Self {
        Self {
            client,
            tokens,
            renderer,
            active: None,
            _entitlement: entitlement,
        }
    }

    /// Status of the current (or last) session, `None` before the first submit.
    ///
    /// A session whose task ended without publishing a terminal status
    /// (e.g. a renderer panicked) reports `Failed`.
    pub fn status(&self) -> Option<SessionStatus> {
        self.active.as_ref().map(ActiveSession::status)
    }

    /// Whether the submit affordance should be enabled.
    pub fn can_submit(&self) -> bool {
        self.status().is_none_or(|status| status.allows_submit())
    }

    /// Validate `form` and submit it.
    pub async fn submit_form(&mut self, form: &ConsultationForm) -> Result<(), SubmitError> {
        self.ensure_idle()?;
        let request = form.to_request()?;
        self.submit(request).await
    }

    /// Start streaming a consultation.
    ///
    /// Returns as soon as the session has been started; fragments are
    /// delivered to the renderer from a background task. Fetches a fresh
    /// token every time.
    pub async fn submit(&mut self, request: ConsultationRequest) -> Result<(), SubmitError> {
        self.ensure_idle()?;

        let token = self.tokens.get_token().await;
        let session = self.client.open(request, token).inspect_err(|_| {
            warn!("No credential available, consultation not sent");
        })?;

        let (status_tx, status_rx) = watch::channel(session.status());
        let cancellation = session.cancellation();
        let tap = StatusTap {
            inner: self.renderer.clone(),
            status: status_tx,
        };
        let client = self.client.clone();

        info!(visit_date = %session.request().visit_date(), "Submitting consultation");
        let task = tokio::spawn(async move { client.run(session, &tap).await });

        self.active = Some(ActiveSession {
            cancellation,
            status: status_rx,
            task: Some(task),
        });
        Ok(())
    }

    /// Cancel the in-flight session.
    ///
    /// Returns `true` if a live session was asked to stop. Calling it again,
    /// or when nothing is running, does nothing.
    pub fn cancel(&mut self) -> bool {
        match &self.active {
            Some(active) if !active.status().is_terminal() => {
                let first = !active.cancellation.is_cancelled();
                active.cancellation.cancel();
                if first {
                    debug!("Cancellation requested");
                }
                first
            }
            _ => false,
        }
    }

    /// Wait for the current session to reach a terminal state.
    ///
    /// Returns `None` if there is no session or it was already awaited.
    /// Dropping the returned future early leaves the session awaitable, so
    /// this can race a cancel signal in `select!`.
    pub async fn wait(&mut self) -> Option<SessionOutcome> {
        let active = self.active.as_mut()?;
        let joined = active.task.as_mut()?.await;
        active.task = None;
        let outcome = match joined {
            Ok(outcome) => outcome,
            Err(err) => {
                warn!(error = %err, "Consultation task ended abnormally");
                SessionOutcome::aborted(format!("session task aborted: {}", err))
            }
        };
        Some(outcome)
    }

    fn ensure_idle(&self) -> Result<(), SubmitError> {
        if self.can_submit() {
            Ok(())
        } else {
            Err(SubmitError::AlreadyInProgress)
        }
    }
}

impl Drop for SubmissionController {
    fn drop(&mut self) {
        if let Some(active) = &self.active {
            active.cancellation.cancel();
        }
    }
}
