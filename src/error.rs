//! Error types for the catalog fetch layer
//!
//! Normalization and image URL derivation are total and never produce these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Missing configuration: {0} is not set")]
    MissingConfig(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Backend returned {status}: {body}")]
    Backend { status: u16, body: String },

    #[error("Invalid record: {0}")]
    InvalidRecord(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CatalogError>;
