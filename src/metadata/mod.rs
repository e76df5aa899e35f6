//! Movie metadata lookup against the external movie-database API.

pub mod client;
pub mod error;
pub mod types;

pub use client::OmdbClient;
pub use error::{MetadataError, MetadataResult};
pub use types::MovieRecord;
