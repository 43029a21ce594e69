//! # tsdecl Codegen
//!
//! TypeScript declaration emission from resolved type models.
//!
//! This crate provides:
//! - Output-mode selection (properties, fields, constants, enums)
//! - Pluggable naming, visibility and literal-conversion policies
//! - Module-grouped declaration rendering with qualified names

pub mod error;
pub mod generator;
pub mod output;
pub mod policy;
pub mod writer;

pub use error::CodegenError;
pub use generator::DeclarationGenerator;
pub use output::OutputMode;
pub use policy::{
    MemberNameFormatter, ModuleNameFormatter, TypeConverter, TypeConverters,
    TypeVisibilityPredicate,
};
pub use writer::IndentWriter;

use tsdecl_model::TypeModel;

/// Generates declarations for a model with the default policies and mode.
///
/// # Errors
/// Returns `CodegenError` if generation fails.
pub fn generate_declarations(model: &TypeModel) -> Result<String, CodegenError> {
    DeclarationGenerator::new().generate(model)
}

/// Generates declarations for a model and writes them to a file.
///
/// # Errors
/// Returns `CodegenError` if generation or writing fails.
pub fn generate_to_file(model: &TypeModel, path: &std::path::Path) -> Result<(), CodegenError> {
    let script = generate_declarations(model)?;
    std::fs::write(path, script)?;
    Ok(())
}
