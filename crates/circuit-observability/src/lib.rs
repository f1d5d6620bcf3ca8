//! # circuit-observability
//!
//! Tracing subscriber setup, span macros and the in-memory turn log.

pub mod tracing_setup;
pub mod turn_log;

pub use tracing_setup::init_tracing;
pub use turn_log::{TurnLog, TurnLogEntry, TurnSummary};
