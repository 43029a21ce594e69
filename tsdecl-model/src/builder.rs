//! Transitive-closure construction of the unresolved type graph.

use crate::descriptor::{
    DescriptorSet, PropertyDescriptor, TypeDescriptor, TypeFamily, TypeKey, TypeShape,
};
use crate::error::ModelError;
use crate::graph::{ClassNode, EnumMember, EnumNode, Node, NodeId, Property, TypeGraph, TypeRef};

/// Builds the class/enum node set reachable from a set of root classes.
///
/// Every composite identity reachable from a root through bases, members,
/// generic arguments or collection elements becomes a node in the graph, so
/// the resolver can later replace placeholder references with canonical
/// nodes instead of leaving dangling stubs. References themselves stay
/// unresolved; generic and collection resolution is deferred to the
/// resolver.
pub struct TypeGraphBuilder<'a> {
    descriptors: &'a DescriptorSet,
    graph: TypeGraph,
}

impl<'a> TypeGraphBuilder<'a> {
    /// Creates a builder over the given descriptor set.
    #[must_use]
    pub fn new(descriptors: &'a DescriptorSet) -> Self {
        Self {
            descriptors,
            graph: TypeGraph::new(),
        }
    }

    /// Adds a root class and everything reachable from it.
    ///
    /// Adding an identity that is already part of the graph is a no-op and
    /// returns the existing node.
    ///
    /// # Errors
    /// Returns `ModelError::UnknownType` if the identity is missing from
    /// the descriptor set and `ModelError::InvalidRoot` if it does not
    /// classify as a class.
    pub fn add(&mut self, key: &TypeKey) -> Result<NodeId, ModelError> {
        let descriptor = self
            .descriptors
            .get(key)
            .ok_or_else(|| ModelError::unknown_type(key.as_str()))?;

        let TypeShape::Class {
            base,
            base_generic_args,
            generic_params,
            properties,
        } = &descriptor.shape
        else {
            return Err(ModelError::invalid_root(key.as_str(), descriptor.family()));
        };

        if let Some(id) = self.graph.canonical(key) {
            return Ok(id);
        }

        tracing::debug!("adding class '{}' to the type graph", key);

        let node = Self::class_node(descriptor, base, base_generic_args, generic_params, properties);
        // Registered before reference traversal so cyclic graphs terminate.
        let id = self.graph.insert(Node::Class(node));

        if let Some(base_key) = base {
            self.add(base_key)?;
        }
        for arg in base_generic_args {
            self.add_reference(arg)?;
        }
        for property in properties {
            self.add_reference(&property.type_key)?;
            for arg in &property.generic_args {
                self.add_reference(arg)?;
            }
        }

        Ok(id)
    }

    /// Adds an enumeration node for the given identity.
    ///
    /// # Errors
    /// Returns `ModelError::UnknownType` if the identity is missing from
    /// the descriptor set and `ModelError::NotAnEnum` if it does not
    /// classify as an enumeration.
    pub fn add_enum(&mut self, key: &TypeKey) -> Result<NodeId, ModelError> {
        let descriptor = self
            .descriptors
            .get(key)
            .ok_or_else(|| ModelError::unknown_type(key.as_str()))?;

        let TypeShape::Enum { values } = &descriptor.shape else {
            return Err(ModelError::not_an_enum(key.as_str()));
        };

        if let Some(id) = self.graph.canonical(key) {
            return Ok(id);
        }

        tracing::debug!("adding enum '{}' to the type graph", key);

        let node = EnumNode {
            key: descriptor.key.clone(),
            name: descriptor.declared_name().to_string(),
            module: descriptor.declared_module().to_string(),
            values: values
                .iter()
                .map(|value| EnumMember {
                    name: value.name.clone(),
                    value: value.value,
                })
                .collect(),
            ignored: descriptor.overrides.ignore,
        };

        Ok(self.graph.insert(Node::Enum(node)))
    }

    /// Returns the accumulated graph as input to resolution.
    #[must_use]
    pub fn build(self) -> TypeGraph {
        self.graph
    }

    /// Registers the composite type behind a member reference, descending
    /// through collection elements until one is found.
    fn add_reference(&mut self, key: &TypeKey) -> Result<(), ModelError> {
        match self.descriptors.family_of(key) {
            Some(TypeFamily::Class) => {
                self.add(key)?;
            }
            Some(TypeFamily::Enum) => {
                self.add_enum(key)?;
            }
            Some(TypeFamily::Collection) => {
                let element = match self.descriptors.get(key).map(|descriptor| &descriptor.shape) {
                    Some(TypeShape::Collection { element }) => element.clone(),
                    _ => None,
                };
                if let Some(element_key) = element {
                    self.add_reference(&element_key)?;
                }
            }
            // System types, generic parameters, opaque and unknown
            // identities contribute no nodes.
            _ => {}
        }
        Ok(())
    }

    fn class_node(
        descriptor: &TypeDescriptor,
        base: &Option<TypeKey>,
        base_generic_args: &[TypeKey],
        generic_params: &[String],
        properties: &[PropertyDescriptor],
    ) -> ClassNode {
        let mut node = ClassNode {
            key: descriptor.key.clone(),
            name: descriptor.declared_name().to_string(),
            module: descriptor.declared_module().to_string(),
            base: base.as_ref().map(|key| TypeRef::Unresolved(key.clone())),
            base_generic_args: base_generic_args
                .iter()
                .map(|key| TypeRef::Unresolved(key.clone()))
                .collect(),
            generic_params: generic_params
                .iter()
                .map(|name| TypeRef::GenericParam(name.clone()))
                .collect(),
            properties: Vec::new(),
            fields: Vec::new(),
            constants: Vec::new(),
            ignored: descriptor.overrides.ignore,
        };

        for property in properties {
            let member = Property {
                name: property.name.clone(),
                ty: TypeRef::Unresolved(property.type_key.clone()),
                generic_args: property
                    .generic_args
                    .iter()
                    .map(|key| TypeRef::Unresolved(key.clone()))
                    .collect(),
                optional: property.optional,
                ignored: property.ignored,
                constant: property.constant.clone(),
            };
            if property.constant.is_some() {
                node.constants.push(member);
            } else if property.field {
                node.fields.push(member);
            } else {
                node.properties.push(member);
            }
        }

        node
    }
}
