//! Multi-port listener supervision.
//!
//! # Responsibilities
//! - Bind one listener per validated port, all serving the same handler chain
//! - Run the last port's listener on the calling task, the rest as tasks
//! - Funnel every fatal listener error through one termination path
//!
//! The listeners form one logical unit: the first bind or serve failure on
//! any port terminates the whole process. There is no degraded mode and no
//! graceful shutdown; a listener runs until process exit.

use std::net::SocketAddr;
use std::sync::Arc;

use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::mpsc;

use crate::addr::BindSpec;
use crate::http::{build_router, AppState};
use crate::observability::logging::AccessLog;

/// Fatal listener errors. Any one of these takes the whole process down.
#[derive(Debug, Error)]
pub enum ServeError {
    /// Composed `ip:port` did not parse as a socket address.
    #[error("invalid listen address {addr:?}: {source}")]
    Address {
        addr: String,
        source: std::net::AddrParseError,
    },

    /// Could not acquire the socket (port in use, permission denied).
    #[error("failed to bind {addr}: {source}")]
    Bind {
        addr: String,
        source: std::io::Error,
    },

    /// The accept loop failed while serving.
    #[error("error while serving {addr}: {source}")]
    Serve {
        addr: String,
        source: std::io::Error,
    },

    /// The serve loop returned without an error. Still fatal: listeners are
    /// expected to run forever.
    #[error("listener on {addr} stopped unexpectedly")]
    Stopped { addr: String },
}

/// Bind and serve every port in `spec` until the first fatal error.
///
/// All ports except the last get their own spawned listener task; the last
/// runs inline on the calling task. Each task reports its fatal error into
/// one channel, and the caller returns the first error received, whether
/// from a background listener or its own inline one.
pub async fn serve(spec: BindSpec, access_log: Arc<dyn AccessLog>) -> Result<(), ServeError> {
    // validate() guarantees a non-empty port list; nothing to supervise
    // otherwise.
    let Some((foreground, background)) = spec.ports.split_last() else {
        return Ok(());
    };

    let (fatal_tx, mut fatal_rx) = mpsc::channel::<ServeError>(1);

    for port in background {
        let addr = spec.host_port(port);
        let access_log = access_log.clone();
        let fatal_tx = fatal_tx.clone();
        tokio::spawn(async move {
            let err = listen_and_serve(addr, access_log).await;
            let _ = fatal_tx.send(err).await;
        });
    }
    drop(fatal_tx);

    let foreground_addr = spec.host_port(foreground);
    tokio::select! {
        err = listen_and_serve(foreground_addr, access_log) => Err(err),
        Some(err) = fatal_rx.recv() => Err(err),
    }
}

/// Bind `addr` and serve the handler chain on it. Only returns on failure.
///
/// Each listener builds its own handler chain instance so the access logger
/// sees the local address of the socket the request actually arrived on.
async fn listen_and_serve(addr: String, access_log: Arc<dyn AccessLog>) -> ServeError {
    tracing::info!("Listening on {addr}");

    let sock: SocketAddr = match addr.parse() {
        Ok(sock) => sock,
        Err(source) => return ServeError::Address { addr, source },
    };

    let listener = match TcpListener::bind(sock).await {
        Ok(listener) => listener,
        Err(source) => return ServeError::Bind { addr, source },
    };

    let local_addr = match listener.local_addr() {
        Ok(local_addr) => local_addr,
        Err(source) => return ServeError::Bind { addr, source },
    };

    let state = AppState {
        local_addr,
        access_log,
    };
    let app = build_router(state).into_make_service_with_connect_info::<SocketAddr>();

    match axum::serve(listener, app).await {
        Ok(()) => ServeError::Stopped { addr },
        Err(source) => ServeError::Serve { addr, source },
    }
}
