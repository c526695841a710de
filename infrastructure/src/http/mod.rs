//! HTTP streaming adapter
//!
//! - [`transport::HttpConsultationTransport`]: `POST` + bearer auth via reqwest
//! - [`sse::decode_fragments`]: server-sent events to [`Fragment`](consult_domain::Fragment)s

pub mod sse;
pub mod transport;
