//! Logging subsystem.
//!
//! Two kinds of output, kept separate on purpose:
//! - Diagnostic logging (startup, listeners, serve errors) goes through
//!   `tracing`, initialized once by [`init`].
//! - The per-request access record has a fixed operator-facing format and
//!   goes through an injected [`AccessLog`] sink, so tests can capture it
//!   deterministically and concurrent listeners get atomic line writes.

use std::io::Write;
use std::sync::Mutex;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber. Log lines go to standard error;
/// `RUST_LOG` overrides the default filter.
pub fn init() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "httpecho=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Sink for access-log lines.
///
/// Implementations must keep each call atomic with respect to concurrent
/// callers: lines from different listeners may interleave, but a single line
/// is never torn or merged.
pub trait AccessLog: Send + Sync {
    /// Write one complete log line (trailing newline included).
    fn write_line(&self, line: &str);
}

/// Production sink: standard error, one locked write per line.
pub struct StderrLog;

impl AccessLog for StderrLog {
    fn write_line(&self, line: &str) {
        let mut stderr = std::io::stderr().lock();
        let _ = stderr.write_all(line.as_bytes());
    }
}

/// Capturing sink for tests.
#[derive(Default)]
pub struct MemoryLog {
    lines: Mutex<Vec<String>>,
}

impl MemoryLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// All lines captured so far.
    pub fn lines(&self) -> Vec<String> {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

impl AccessLog for MemoryLog {
    fn write_line(&self, line: &str) {
        self.lines
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(line.to_string());
    }
}
