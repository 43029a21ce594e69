//! # tsdecl Model
//!
//! Type descriptors, the type-node graph and reference resolution.
//!
//! This crate provides:
//! - Raw type descriptors and their family classification
//! - Transitive-closure graph construction from root classes
//! - Canonical resolution of cyclic, generic and collection references
//! - Module membership bookkeeping
//! - JSON descriptor-document ingestion

pub mod builder;
pub mod descriptor;
pub mod error;
pub mod graph;
pub mod ingest;
pub mod model;
pub mod resolver;

pub use builder::TypeGraphBuilder;
pub use descriptor::{
    DescriptorSet, EnumValueDescriptor, Literal, PrimitiveKind, PropertyDescriptor,
    TypeDescriptor, TypeFamily, TypeKey, TypeOverrides, TypeShape,
};
pub use error::{IngestError, ModelError};
pub use graph::{
    ClassNode, CollectionRef, EnumMember, EnumNode, Module, Node, NodeId, Property, SystemKind,
    TypeGraph, TypeRef,
};
pub use ingest::{parse_descriptors, read_descriptors};
pub use model::TypeModel;
pub use resolver::Resolver;
