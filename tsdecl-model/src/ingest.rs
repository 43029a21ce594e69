//! Descriptor-document ingestion.
//!
//! Stands in for the reflection layer: a JSON document lists the raw type
//! descriptors of one build, which are validated into a [`DescriptorSet`].

use std::path::Path;

use serde::Deserialize;

use crate::descriptor::{DescriptorSet, TypeDescriptor};
use crate::error::IngestError;

#[derive(Debug, Deserialize)]
struct DescriptorDocument {
    types: Vec<TypeDescriptor>,
}

/// Parses a descriptor document from a JSON string.
///
/// # Errors
/// Returns `IngestError::Json` for a malformed document and
/// `IngestError::Duplicate` if one type key appears twice.
pub fn parse_descriptors(json: &str) -> Result<DescriptorSet, IngestError> {
    let document: DescriptorDocument = serde_json::from_str(json)?;

    let mut set = DescriptorSet::new();
    for descriptor in document.types {
        if set.contains(&descriptor.key) {
            return Err(IngestError::duplicate(descriptor.key.as_str()));
        }
        set.insert(descriptor);
    }

    tracing::debug!("ingested {} type descriptors", set.len());
    Ok(set)
}

/// Reads and parses a descriptor document from a file.
///
/// # Errors
/// Returns `IngestError::Io` if the file cannot be read, plus everything
/// [`parse_descriptors`] returns.
pub fn read_descriptors(path: impl AsRef<Path>) -> Result<DescriptorSet, IngestError> {
    let json = std::fs::read_to_string(path)?;
    parse_descriptors(&json)
}
