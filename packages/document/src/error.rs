//! Error types for the document model

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DocumentError {
    #[error("Duplicate node id: {0}")]
    DuplicateId(String),

    #[error("Node id uses the reserved palette prefix: {0}")]
    ReservedId(String),

    #[error("Node id is empty")]
    EmptyId,
}
