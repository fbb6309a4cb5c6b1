//! Diagnostic HTTP echo server.
//!
//! Binds one or more TCP ports (optionally on a specific IP) and answers
//! every HTTP request with a verbatim dump of the request itself, so
//! operators can see exactly what a client or intermediary put on the wire.
//!
//! ```text
//!   CLI tokens ──▶ addr::validate ──▶ BindSpec (ip, ports)
//!                                        │
//!                                        ▼
//!                          net::supervisor::serve
//!                        one listener task per port
//!                                        │
//!                     ┌──────────────────┴─────────────────┐
//!                     ▼                                    ▼
//!            access_log middleware  ──────▶  dump handler (echo bytes)
//! ```
//!
//! All listeners run as one logical unit: the first bind or serve failure on
//! any port terminates the whole process.

pub mod addr;
pub mod http;
pub mod net;
pub mod observability;

pub use addr::{validate, BindSpec, ValidationError};
pub use net::supervisor::{serve, ServeError};
pub use observability::logging::{AccessLog, MemoryLog, StderrLog};
