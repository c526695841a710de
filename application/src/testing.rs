//! Fakes shared by the use case tests.

use crate::ports::auth::{AuthTokenProvider, AuthorizationGate};
use crate::ports::consultation_transport::{ConsultationTransport, FragmentStream, TransportError};
use crate::ports::renderer::{OutputRenderer, SessionSnapshot};
use async_trait::async_trait;
use consult_domain::{AuthToken, ConsultationRequest, Fragment, SessionStatus};
use futures::StreamExt;
use futures::channel::mpsc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

pub(crate) type Event = Result<Fragment, TransportError>;

pub(crate) fn jane_doe() -> ConsultationRequest {
    ConsultationRequest::parse("Jane Doe", "2024-01-15", "BP 120/80, follow-up in 2 weeks").unwrap()
}

pub(crate) fn token() -> Option<AuthToken> {
    AuthToken::new("test-jwt")
}

/// Replays a fixed list of events, then closes.
pub(crate) struct ScriptedTransport {
    events: Mutex<Option<Vec<Event>>>,
    open_error: Option<TransportError>,
    pub calls: AtomicUsize,
    pub seen: Mutex<Vec<(ConsultationRequest, AuthToken)>>,
}

impl ScriptedTransport {
    pub fn new(events: Vec<Event>) -> Self {
        Self {
            events: Mutex::new(Some(events)),
            open_error: None,
            calls: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(error: TransportError) -> Self {
        Self {
            open_error: Some(error),
            ..Self::new(Vec::new())
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ConsultationTransport for ScriptedTransport {
    async fn open(
        &self,
        request: &ConsultationRequest,
        token: &AuthToken,
    ) -> Result<FragmentStream, TransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen
            .lock()
            .unwrap()
            .push((request.clone(), token.clone()));
        if let Some(err) = &self.open_error {
            return Err(err.clone());
        }
        let events = self.events.lock().unwrap().take().unwrap_or_default();
        Ok(futures::stream::iter(events).boxed())
    }
}

/// Hands out a stream fed by the test through an unbounded channel.
///
/// `sender.is_closed()` turns true once the client drops the stream, which is
/// how tests observe the connection being released.
pub(crate) struct ChannelTransport {
    receiver: Mutex<Option<mpsc::UnboundedReceiver<Event>>>,
}

impl ChannelTransport {
    pub fn new() -> (Self, mpsc::UnboundedSender<Event>) {
        let (tx, rx) = mpsc::unbounded();
        (
            Self {
                receiver: Mutex::new(Some(rx)),
            },
            tx,
        )
    }
}

#[async_trait]
impl ConsultationTransport for ChannelTransport {
    async fn open(
        &self,
        _request: &ConsultationRequest,
        _token: &AuthToken,
    ) -> Result<FragmentStream, TransportError> {
        let receiver = self
            .receiver
            .lock()
            .unwrap()
            .take()
            .ok_or_else(|| TransportError::Connection("already opened".to_string()))?;
        Ok(receiver.boxed())
    }
}

/// Never resolves `open`; used for idle timeout and early cancel tests.
pub(crate) struct HangingTransport;

#[async_trait]
impl ConsultationTransport for HangingTransport {
    async fn open(
        &self,
        _request: &ConsultationRequest,
        _token: &AuthToken,
    ) -> Result<FragmentStream, TransportError> {
        futures::future::pending().await
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Frame {
    pub status: SessionStatus,
    pub document: String,
    pub failure: Option<String>,
}

#[derive(Default)]
pub(crate) struct RecordingRenderer {
    pub frames: Mutex<Vec<Frame>>,
}

impl RecordingRenderer {
    pub fn frames(&self) -> Vec<Frame> {
        self.frames.lock().unwrap().clone()
    }

    pub fn statuses(&self) -> Vec<SessionStatus> {
        self.frames().into_iter().map(|f| f.status).collect()
    }

    pub fn count(&self, status: SessionStatus) -> usize {
        self.statuses().into_iter().filter(|s| *s == status).count()
    }
}

impl OutputRenderer for RecordingRenderer {
    fn render(&self, snapshot: &SessionSnapshot<'_>) {
        self.frames.lock().unwrap().push(Frame {
            status: snapshot.status,
            document: snapshot.document.to_string(),
            failure: snapshot.failure.map(str::to_string),
        });
    }
}

/// Token provider that counts how often it is asked.
pub(crate) struct CountingTokens {
    token: Option<AuthToken>,
    pub calls: AtomicUsize,
}

impl CountingTokens {
    pub fn new(token: Option<AuthToken>) -> Self {
        Self {
            token,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl AuthTokenProvider for CountingTokens {
    async fn get_token(&self) -> Option<AuthToken> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.token.clone()
    }
}

pub(crate) struct Entitled;

impl AuthorizationGate for Entitled {
    fn has_entitlement(&self) -> bool {
        true
    }
}
