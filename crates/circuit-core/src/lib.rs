//! # circuit-core
//!
//! Foundation crate for the circuit search assistant.
//! Defines all types, traits, errors, config, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::CircuitConfig;
pub use errors::{CircuitError, CircuitResult};
pub use models::{
    AnsweredQuestion, CandidateSet, Field, FilterLogic, Intent, QuestionSpec, Record, RecordView,
    Response,
};
