//! Pluggable rendering policies.
//!
//! Each policy is a pure function over a node or name, held by the
//! generator and evaluated at fixed points of the tree walk. Swapping a
//! policy never changes traversal or textual structure.

use std::collections::HashMap;

use tsdecl_model::{ClassNode, Property, TypeKey};

/// Formats the declaration name of a class member.
pub type MemberNameFormatter = Box<dyn Fn(&Property) -> String>;

/// Formats the declaration name of a module.
pub type ModuleNameFormatter = Box<dyn Fn(&str) -> String>;

/// Decides whether a class declaration is individually marked exported.
pub type TypeVisibilityPredicate = Box<dyn Fn(&ClassNode) -> bool>;

/// Produces the literal replacement text for one converted identity.
pub type TypeConverter = Box<dyn Fn(&TypeKey) -> String>;

pub(crate) fn default_member_name() -> MemberNameFormatter {
    Box::new(|property| property.name.clone())
}

pub(crate) fn default_module_name() -> ModuleNameFormatter {
    Box::new(str::to_string)
}

pub(crate) fn default_visibility() -> TypeVisibilityPredicate {
    Box::new(|_| false)
}

/// Registry of literal-conversion overrides keyed by identity.
///
/// A registered conversion replaces structural qualification wherever the
/// identity is referenced.
#[derive(Default)]
pub struct TypeConverters {
    converters: HashMap<TypeKey, TypeConverter>,
}

impl TypeConverters {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a converter for an identity, replacing any previous one.
    pub fn register(&mut self, key: TypeKey, converter: TypeConverter) {
        self.converters.insert(key, converter);
    }

    /// Returns true if a converter is registered for the identity.
    #[must_use]
    pub fn is_registered(&self, key: &TypeKey) -> bool {
        self.converters.contains_key(key)
    }

    /// Converts an identity to its replacement text, if a converter is
    /// registered.
    #[must_use]
    pub fn convert(&self, key: &TypeKey) -> Option<String> {
        self.converters.get(key).map(|converter| converter(key))
    }
}
