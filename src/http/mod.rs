//! HTTP handler chain: access logging wrapped around the request dumper.

pub mod access_log;
pub mod dump;
pub mod server;

pub use server::{build_router, AppState};
