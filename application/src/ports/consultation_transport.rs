//! Consultation transport port
//!
//! Defines how the application layer opens a streaming consultation request.

use async_trait::async_trait;
use consult_domain::{AuthToken, ConsultationRequest, Fragment};
use futures::stream::BoxStream;
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur while opening or reading a consultation stream
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("Connection error: {0}")]
    Connection(String),

    #[error("Server returned HTTP {code}: {body}")]
    Status { code: u16, body: String },

    #[error("Malformed stream event: {0}")]
    MalformedEvent(String),

    #[error("No data received for {} seconds", seconds(.0))]
    Timeout(Duration),
}

/// Whole seconds print without a fraction; anything finer keeps one decimal.
fn seconds(duration: &Duration) -> String {
    if duration.subsec_nanos() == 0 {
        duration.as_secs().to_string()
    } else {
        format!("{:.1}", duration.as_secs_f64())
    }
}

/// Ordered fragments of one response.
///
/// The stream ends (`None`) when the server closes the connection normally.
/// Dropping it must release the underlying connection.
pub type FragmentStream = BoxStream<'static, Result<Fragment, TransportError>>;

/// Transport for consultation requests
///
/// Implementations (adapters) live in the infrastructure layer. `open` issues
/// exactly one request carrying `request` as the body and `token` as the
/// bearer credential, and resolves once the response has started.
#[async_trait]
pub trait ConsultationTransport: Send + Sync {
    async fn open(
        &self,
        request: &ConsultationRequest,
        token: &AuthToken,
    ) -> Result<FragmentStream, TransportError>;
}
