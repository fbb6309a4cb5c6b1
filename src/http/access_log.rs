//! Access logging middleware.
//!
//! One line per request, emitted before delegating to the inner handler.
//! Logging never blocks, rejects, or alters the request.

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::Response,
};

use crate::http::AppState;

/// Log `<METHOD> request from <remote-host> on <local-host:port>`, then
/// delegate unconditionally.
///
/// The remote host is the connection's peer IP (port stripped); the local
/// address is the accepting listener's, carried in state. It is never taken
/// from the client-supplied `Host` header, which is forgeable.
pub async fn record_request(
    State(state): State<AppState>,
    ConnectInfo(remote): ConnectInfo<SocketAddr>,
    request: Request,
    next: Next,
) -> Response {
    let line = format!(
        "{} request from {} on {}\n",
        request.method(),
        remote.ip(),
        state.local_addr
    );
    state.access_log.write_line(&line);

    next.run(request).await
}
