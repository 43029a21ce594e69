//! Commonly used types, re-exported in one place.

pub use tsdecl_codegen::{CodegenError, DeclarationGenerator, OutputMode, TypeConverters};
pub use tsdecl_model::{
    DescriptorSet, EnumValueDescriptor, IngestError, Literal, ModelError, PrimitiveKind,
    PropertyDescriptor, Resolver, TypeDescriptor, TypeGraphBuilder, TypeKey, TypeModel,
    TypeOverrides, TypeShape, parse_descriptors, read_descriptors,
};

pub use crate::fluent::{Definitions, definitions};
