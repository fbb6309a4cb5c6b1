//! Logging: tracing subscriber setup and the access-log sink.

pub mod logging;
