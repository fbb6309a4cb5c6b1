//! Request dumper: the catch-all echo handler.
//!
//! Renders the inbound request back to wire form (request line, headers,
//! body) and answers 200 with those bytes. A request whose body cannot be
//! read gets a 500 with the error text. Write failures toward a client that
//! disconnected mid-response stay inside that connection's task; they never
//! reach the listener.

use axum::{
    body::{to_bytes, Body},
    extract::Request,
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
};
use thiserror::Error;

/// Failure to render a request back to bytes.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The request body could not be read to completion.
    #[error("failed to read request body: {0}")]
    Body(axum::Error),
}

/// Respond to any request with a verbatim dump of the request itself.
pub async fn dump_handler(request: Request) -> Response {
    let (parts, body) = request.into_parts();
    match render_request(&parts, body).await {
        Ok(dump) => (StatusCode::OK, dump).into_response(),
        Err(err) => (StatusCode::INTERNAL_SERVER_ERROR, err.to_string()).into_response(),
    }
}

/// Serialize request line, headers, and body to wire form.
///
/// Header names come out in canonical title-case (the `http` crate stores
/// them lowercase) and in arrival order, which `HeaderMap` preserves. The
/// body is read in full; an echo server must not truncate.
async fn render_request(parts: &Parts, body: Body) -> Result<Vec<u8>, RenderError> {
    let mut dump = Vec::with_capacity(256);
    dump.extend_from_slice(
        format!("{} {} {:?}\r\n", parts.method, parts.uri, parts.version).as_bytes(),
    );
    for (name, value) in parts.headers.iter() {
        dump.extend_from_slice(canonical_name(name.as_str()).as_bytes());
        dump.extend_from_slice(b": ");
        dump.extend_from_slice(value.as_bytes());
        dump.extend_from_slice(b"\r\n");
    }
    dump.extend_from_slice(b"\r\n");

    let body = to_bytes(body, usize::MAX).await.map_err(RenderError::Body)?;
    dump.extend_from_slice(&body);
    Ok(dump)
}

/// Title-case a header name per HTTP convention: `content-type` → `Content-Type`.
fn canonical_name(name: &str) -> String {
    let mut canonical = String::with_capacity(name.len());
    let mut at_segment_start = true;
    for c in name.chars() {
        if at_segment_start {
            canonical.push(c.to_ascii_uppercase());
        } else {
            canonical.push(c);
        }
        at_segment_start = c == '-';
    }
    canonical
}
