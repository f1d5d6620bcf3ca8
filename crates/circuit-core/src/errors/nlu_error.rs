/// NLU capability errors. Always recoverable: callers substitute a fallback.
#[derive(Debug, thiserror::Error)]
pub enum NluError {
    #[error("transport failed: {reason}")]
    Transport { reason: String },

    #[error("request timed out after {secs}s")]
    Timeout { secs: u64 },

    #[error("http status {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("malformed response: {reason}")]
    MalformedResponse { reason: String },

    #[error("response missing required field: {field}")]
    MissingField { field: String },

    #[error("provider unavailable: {provider}")]
    Unavailable { provider: String },
}
