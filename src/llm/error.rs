// src/llm/error.rs
// Error types for the generative-language gateway

use thiserror::Error;

/// Failure modes of a generation call. Upstream error text never leaks into
/// generated content; callers branch on the variant.
#[derive(Error, Debug)]
pub enum AiError {
    #[error("request to generative endpoint failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    #[error("generative endpoint returned status {status}")]
    UpstreamError { status: u16 },
    #[error("generative endpoint returned a malformed body")]
    MalformedResponse,
}

/// Generation result type
pub type AiResult<T> = Result<T, AiError>;
