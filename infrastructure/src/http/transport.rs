//! HTTP adapter for [`ConsultationTransport`].
//!
//! Sends the consultation as a JSON `POST` with a bearer token and reads the
//! response as a server-sent event stream.

use super::sse::decode_fragments;
use async_trait::async_trait;
use consult_application::{ConsultationTransport, FragmentStream, TransportError};
use consult_domain::{AuthToken, ConsultationRequest};
use reqwest::header::ACCEPT;
use std::time::Duration;
use tracing::{debug, error};

/// Default consultation endpoint of a locally running backend.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000/api/consultation";

/// Maximum number of body characters quoted in an HTTP error.
const ERROR_BODY_PREVIEW: usize = 200;

/// Streams consultations from the backend over HTTP.
#[derive(Debug, Clone)]
pub struct HttpConsultationTransport {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpConsultationTransport {
    /// Build a transport for `endpoint`.
    ///
    /// Only the connect phase is bounded here; stream liveness is governed by
    /// the client's idle timeout.
    pub fn new(
        endpoint: impl Into<String>,
        connect_timeout: Duration,
    ) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .build()
            .map_err(|e| TransportError::Connection(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl ConsultationTransport for HttpConsultationTransport {
    async fn open(
        &self,
        request: &ConsultationRequest,
        token: &AuthToken,
    ) -> Result<FragmentStream, TransportError> {
        debug!(endpoint = %self.endpoint, "POST consultation");

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(token.secret())
            .header(ACCEPT, "text/event-stream")
            .json(request)
            .send()
            .await
            .map_err(|e| TransportError::Connection(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let preview: String = body.chars().take(ERROR_BODY_PREVIEW).collect();
            error!(status = %status, endpoint = %self.endpoint, "Consultation request rejected");
            return Err(TransportError::Status {
                code: status.as_u16(),
                body: preview,
            });
        }

        Ok(decode_fragments(response.bytes_stream()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use consult_domain::Fragment;
    use futures::StreamExt;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn jane_doe() -> ConsultationRequest {
        ConsultationRequest::parse("Jane Doe", "2024-01-15", "BP 120/80, follow-up in 2 weeks")
            .unwrap()
    }

    fn token() -> AuthToken {
        AuthToken::new("test-jwt").unwrap()
    }

    fn transport(server: &MockServer) -> HttpConsultationTransport {
        HttpConsultationTransport::new(
            format!("{}/api/consultation", server.uri()),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn posts_json_with_bearer_and_streams_fragments() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/api/consultation"))
            .and(header("authorization", "Bearer test-jwt"))
            .and(header("content-type", "application/json"))
            .and(header("accept", "text/event-stream"))
            .and(body_json(serde_json::json!({
                "patient_name": "Jane Doe",
                "date_of_visit": "2024-01-15",
                "notes": "BP 120/80, follow-up in 2 weeks",
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("content-type", "text/event-stream")
                    .set_body_string("data: Summary\n\ndata: Patient stable.\n\n"),
            )
            .expect(1)
            .mount(&server)
            .await;

        let stream = transport(&server).open(&jane_doe(), &token()).await.unwrap();
        let fragments: Vec<_> = stream.collect().await;

        assert_eq!(
            fragments,
            vec![
                Ok(Fragment::from("Summary")),
                Ok(Fragment::from("Patient stable.")),
            ]
        );
    }

    #[tokio::test]
    async fn non_success_status_is_reported() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(403).set_body_string("subscription required"))
            .mount(&server)
            .await;

        let err = match transport(&server).open(&jane_doe(), &token()).await {
            Err(err) => err,
            Ok(_) => panic!("expected an HTTP error"),
        };
        assert_eq!(
            err,
            TransportError::Status {
                code: 403,
                body: "subscription required".to_string(),
            }
        );
    }

    #[tokio::test]
    async fn unreachable_backend_is_connection_error() {
        let transport =
            HttpConsultationTransport::new("http://127.0.0.1:1/api/consultation", Duration::from_secs(1))
                .unwrap();

        let result = transport.open(&jane_doe(), &token()).await;
        assert!(matches!(result, Err(TransportError::Connection(_))));
    }
}
