//! Error types for the editor

use thiserror::Error;

/// Failures talking to a document store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Document not found: {0}")]
    NotFound(String),

    #[error("Invalid document key: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

#[derive(Error, Debug)]
pub enum EditorError {
    #[error("Failed to load document '{key}': {source}")]
    Load {
        key: String,
        #[source]
        source: StoreError,
    },

    #[error("Failed to save document '{key}': {source}")]
    Save {
        key: String,
        #[source]
        source: StoreError,
    },
}
