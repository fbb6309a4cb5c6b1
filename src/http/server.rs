//! Handler chain assembly.
//!
//! # Responsibilities
//! - Create the Axum router with the catch-all dump handler
//! - Wire up middleware (access log, tracing)
//! - Carry per-listener state into the handlers

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{middleware, routing::any, Router};
use tower_http::trace::TraceLayer;

use crate::http::{access_log, dump};
use crate::observability::logging::AccessLog;

/// Per-listener state injected into the handler chain.
#[derive(Clone)]
pub struct AppState {
    /// Address of the accepting socket, as bound. Sourced from the listener,
    /// never from client-supplied headers.
    pub local_addr: SocketAddr,

    /// Shared access-log sink; serializes concurrent line writes internally.
    pub access_log: Arc<dyn AccessLog>,
}

/// Build the handler chain every listener serves: the request dumper on a
/// catch-all route, wrapped by the access logger.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", any(dump::dump_handler))
        .route("/{*path}", any(dump::dump_handler))
        .layer(middleware::from_fn_with_state(
            state,
            access_log::record_request,
        ))
        .layer(TraceLayer::new_for_http())
}
