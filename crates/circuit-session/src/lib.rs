//! # circuit-session
//!
//! Multi-turn dialogue over the dataset: per-session state with a bounded
//! undo stack, and the engine that turns user input into responses.

pub mod dialogue;
pub mod manager;
pub mod messages;
pub mod picker;
pub mod state;

pub use dialogue::{DialogueEngine, EngineStatus};
pub use manager::SessionManager;
pub use picker::{FixedPicker, SeededPicker};
pub use state::{DialogueSnapshot, DialogueState, UndoStack};
