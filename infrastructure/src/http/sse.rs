//! Server-sent event decoding.
//!
//! Turns a raw response body into ordered [`Fragment`]s: one fragment per
//! dispatched event, holding the event's `data` exactly as framed by the
//! server (multi-line `data:` fields are joined with `\n`).

use bytes::Bytes;
use consult_application::{FragmentStream, TransportError};
use consult_domain::Fragment;
use eventsource_stream::{EventStreamError, Eventsource};
use futures::{Stream, StreamExt};
use std::fmt::Display;

/// Decode an SSE byte stream into fragments.
///
/// Body errors become [`TransportError::Connection`]; undecodable payloads
/// (invalid UTF-8, broken framing) become [`TransportError::MalformedEvent`].
/// Dropping the returned stream drops `body`.
pub fn decode_fragments<S, E>(body: S) -> FragmentStream
where
    S: Stream<Item = Result<Bytes, E>> + Send + 'static,
    E: Display + Send + 'static,
{
    body.eventsource()
        .map(|event| match event {
            Ok(event) => Ok(Fragment::from(event.data)),
            Err(EventStreamError::Transport(err)) => {
                Err(TransportError::Connection(err.to_string()))
            }
            Err(err) => Err(TransportError::MalformedEvent(err.to_string())),
        })
        .boxed()
}
