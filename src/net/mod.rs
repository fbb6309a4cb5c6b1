//! Listener supervision.

pub mod supervisor;
