//! Canonical resolution of type references.
//!
//! The resolver visits every node of a built graph exactly once and
//! rewrites each placeholder reference into its canonical form. Resolution
//! is memoized per identity, which is what breaks reference cycles: the
//! second encounter of an identity returns the already-registered node
//! instead of recursing. Identities that classify as neither system,
//! collection nor registered composite degrade to the `Any` sentinel, so a
//! single unsupported member never aborts a build.

use std::collections::HashMap;

use crate::descriptor::{DescriptorSet, TypeKey, TypeShape};
use crate::graph::{CollectionRef, Node, SystemKind, TypeGraph, TypeRef};

/// Rewrites every reference in a graph to a canonical node.
pub struct Resolver<'a> {
    descriptors: &'a DescriptorSet,
}

impl<'a> Resolver<'a> {
    /// Creates a resolver over the given descriptor set.
    #[must_use]
    pub fn new(descriptors: &'a DescriptorSet) -> Self {
        Self { descriptors }
    }

    /// Resolves every reference in the graph.
    ///
    /// Already-resolved references pass through unchanged, so resolving a
    /// resolved graph is a no-op.
    pub fn resolve(&self, graph: &mut TypeGraph) {
        let mut cache: HashMap<TypeKey, TypeRef> = graph
            .canonical_entries()
            .map(|(key, id)| (key.clone(), TypeRef::Node(id)))
            .collect();

        tracing::debug!("resolving references of {} nodes", graph.len());

        for id in graph.ids().collect::<Vec<_>>() {
            let Node::Class(class) = graph.node_mut(id) else {
                continue;
            };

            if let Some(base) = class.base.take() {
                class.base = Some(self.resolve_ref(&mut cache, base));
            }
            for arg in &mut class.base_generic_args {
                self.rewrite(&mut cache, arg);
            }
            for member in class
                .properties
                .iter_mut()
                .chain(class.fields.iter_mut())
                .chain(class.constants.iter_mut())
            {
                self.rewrite(&mut cache, &mut member.ty);
                for arg in &mut member.generic_args {
                    self.rewrite(&mut cache, arg);
                }
            }
        }
    }

    fn rewrite(&self, cache: &mut HashMap<TypeKey, TypeRef>, reference: &mut TypeRef) {
        let taken = std::mem::replace(reference, TypeRef::Any);
        *reference = self.resolve_ref(cache, taken);
    }

    fn resolve_ref(&self, cache: &mut HashMap<TypeKey, TypeRef>, reference: TypeRef) -> TypeRef {
        match reference {
            TypeRef::Unresolved(key) => self.resolve_key(cache, &key),
            resolved => resolved,
        }
    }

    fn resolve_key(&self, cache: &mut HashMap<TypeKey, TypeRef>, key: &TypeKey) -> TypeRef {
        if let Some(reference) = cache.get(key) {
            return reference.clone();
        }

        let resolved = match self.descriptors.get(key).map(|descriptor| &descriptor.shape) {
            Some(TypeShape::Primitive { primitive }) => TypeRef::System(SystemKind::of(*primitive)),
            Some(TypeShape::Collection { element }) => {
                let items = match element {
                    Some(element_key) => self.resolve_key(cache, element_key),
                    None => TypeRef::Any,
                };
                // Same-shaped nested collections collapse into one
                // reference carrying the nesting depth.
                let (items, dimension) = match items {
                    TypeRef::Collection(inner) => (inner.items, inner.dimension + 1),
                    other => (other, 1),
                };
                TypeRef::Collection(Box::new(CollectionRef { items, dimension }))
            }
            Some(TypeShape::GenericParam { name }) => TypeRef::GenericParam(name.clone()),
            // Composite identities never admitted to the graph, opaque
            // shapes and unknown identities all degrade to the sentinel.
            _ => TypeRef::Any,
        };

        cache.insert(key.clone(), resolved.clone());
        resolved
    }
}
