//! Error types for descriptor handling and graph construction.

use thiserror::Error;

use crate::descriptor::TypeFamily;

/// Error type for type-graph construction operations.
#[derive(Debug, Error)]
pub enum ModelError {
    /// A root identity whose family is not Class was added to the builder.
    #[error("type '{key}' is not a composite type (family {family}); only classes can be added as roots")]
    InvalidRoot {
        /// Offending type key.
        key: String,
        /// Family the identity classified as.
        family: TypeFamily,
    },

    /// An enum node was requested for a non-enumeration identity.
    #[error("type '{key}' is not an enumeration")]
    NotAnEnum {
        /// Offending type key.
        key: String,
    },

    /// An identity required by the builder is missing from the descriptor set.
    #[error("type '{key}' is not present in the descriptor set")]
    UnknownType {
        /// Missing type key.
        key: String,
    },

    /// A primitive name that does not match any known primitive kind.
    #[error("'{name}' is not a supported primitive kind")]
    UnsupportedPrimitive {
        /// Unrecognized primitive name.
        name: String,
    },
}

impl ModelError {
    /// Creates an invalid root error.
    pub fn invalid_root(key: impl Into<String>, family: TypeFamily) -> Self {
        Self::InvalidRoot {
            key: key.into(),
            family,
        }
    }

    /// Creates a not-an-enum error.
    pub fn not_an_enum(key: impl Into<String>) -> Self {
        Self::NotAnEnum { key: key.into() }
    }

    /// Creates an unknown type error.
    pub fn unknown_type(key: impl Into<String>) -> Self {
        Self::UnknownType { key: key.into() }
    }

    /// Creates an unsupported primitive error.
    pub fn unsupported_primitive(name: impl Into<String>) -> Self {
        Self::UnsupportedPrimitive { name: name.into() }
    }
}

/// Error type for descriptor-document ingestion.
#[derive(Debug, Error)]
pub enum IngestError {
    /// JSON parsing error.
    #[error("descriptor document error: {0}")]
    Json(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The same type key appears more than once in one document.
    #[error("duplicate type descriptor: '{key}'")]
    Duplicate {
        /// Duplicated type key.
        key: String,
    },
}

impl IngestError {
    /// Creates a duplicate descriptor error.
    pub fn duplicate(key: impl Into<String>) -> Self {
        Self::Duplicate { key: key.into() }
    }
}
