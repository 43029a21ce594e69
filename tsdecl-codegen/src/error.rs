//! Error types for declaration generation.

use thiserror::Error;

use tsdecl_model::ModelError;

/// Error type for declaration generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Constants cannot be combined with properties or fields: a
    /// value-initialized constant contradicts a declaration-only block.
    #[error("constants cannot be emitted together with properties or fields")]
    ConflictingOutput,

    /// Model construction error.
    #[error("model error: {0}")]
    Model(#[from] ModelError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
