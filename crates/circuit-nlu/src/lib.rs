//! # circuit-nlu
//!
//! Natural-language understanding for the circuit search assistant.
//!
//! - [`LlmNluProvider`]: OpenAI-compatible chat completions backend.
//! - [`RuleBasedNlu`]: deterministic local rules, always available.
//! - [`NluChain`]: infallible facade that falls back from the first to the second.

pub mod cache;
pub mod client;
pub mod degradation;
pub mod fallback;
pub mod llm_provider;
pub mod options;
pub mod parse;
pub mod prompts;

pub use cache::KeywordCache;
pub use client::{ChatCompletion, ChatMessage, ChatRequest, HttpChatClient};
pub use degradation::NluChain;
pub use fallback::RuleBasedNlu;
pub use llm_provider::LlmNluProvider;
