// src/metadata/error.rs
// Error types for the movie-database gateway

use thiserror::Error;

/// Failure modes of a metadata lookup.
#[derive(Error, Debug)]
pub enum MetadataError {
    #[error("movie not found: {title}")]
    NotFound { title: String },
    #[error("metadata endpoint returned status {status}")]
    UpstreamError { status: u16 },
    #[error("request to metadata endpoint failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
    #[error("metadata endpoint returned a malformed body")]
    MalformedResponse,
}

impl MetadataError {
    pub fn not_found(title: impl Into<String>) -> Self {
        Self::NotFound {
            title: title.into(),
        }
    }
}

/// Metadata lookup result type
pub type MetadataResult<T> = Result<T, MetadataError>;
