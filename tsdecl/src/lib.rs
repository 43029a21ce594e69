//! # tsdecl
//!
//! TypeScript declaration generation from host-language type descriptions.
//!
//! tsdecl turns a set of raw type descriptors (classes, enumerations, their
//! members and inheritance relationships) into a well-formed TypeScript
//! declaration document.
//!
//! ## Features
//!
//! - **Canonical type graph** - one shared node per identity, so cyclic and
//!   diamond-shaped reference graphs resolve without duplication
//! - **Module-grouped output** - declarations grouped by namespace with
//!   qualified cross-module references
//! - **Selectable output modes** - properties, fields, constants and enums
//! - **Pluggable rendering policies** - naming, visibility and
//!   literal-conversion overrides without touching traversal
//!
//! ## Quick Start
//!
//! ```ignore
//! use tsdecl::prelude::*;
//!
//! let descriptors = read_descriptors("types.json")?;
//! let script = definitions(&descriptors)
//!     .for_type("Shop.Order")
//!     .generate()?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`model`] - descriptors, type graph, builder and resolver
//! - [`codegen`] - declaration emitter, output modes and policies
//! - [`fluent`] - chainable configuration wrapper

pub mod fluent;
pub mod prelude;

/// Type descriptors, graph construction and resolution.
pub mod model {
    pub use tsdecl_model::*;
}

/// Declaration emission.
pub mod codegen {
    pub use tsdecl_codegen::*;
}

// Re-export commonly used items at the crate root
pub use tsdecl_codegen::{CodegenError, DeclarationGenerator, OutputMode};
pub use tsdecl_model::{
    DescriptorSet, ModelError, Resolver, TypeGraphBuilder, TypeKey, TypeModel,
};

pub use fluent::{Definitions, definitions};
