//! Span definitions per operation: dialogue turn, retrieval, NLU call.

/// Create a dialogue turn span.
#[macro_export]
macro_rules! dialogue_span {
    ($session_id:expr, $operation:expr) => {
        tracing::info_span!("circuit.dialogue", session_id = %$session_id, operation = %$operation)
    };
}

/// Create a retrieval span.
#[macro_export]
macro_rules! retrieval_span {
    ($keywords:expr) => {
        tracing::info_span!("circuit.retrieval", keywords = ?$keywords)
    };
}

/// Create an NLU call span.
#[macro_export]
macro_rules! nlu_span {
    ($operation:expr, $provider:expr) => {
        tracing::info_span!("circuit.nlu", operation = %$operation, provider = %$provider)
    };
}
