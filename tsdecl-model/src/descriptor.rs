//! Raw type descriptors.
//!
//! This module contains the data structures describing host-language type
//! declarations as reported by the descriptor-acquisition layer: identities,
//! member lists, inheritance, enum literals and attribute-derived overrides.
//! Descriptors are the input of the graph builder; they carry no resolved
//! cross-references themselves.

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Stable key uniquely identifying one host-language type declaration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TypeKey(String);

impl TypeKey {
    /// Creates a new type key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Returns the key as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TypeKey {
    fn from(key: &str) -> Self {
        Self(key.to_string())
    }
}

impl From<String> for TypeKey {
    fn from(key: String) -> Self {
        Self(key)
    }
}

/// Host-language primitive kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrimitiveKind {
    /// Boolean.
    Bool,
    /// Single character.
    Char,
    /// Character string.
    #[serde(rename = "string")]
    Str,
    /// Signed 8-bit integer.
    I8,
    /// Signed 16-bit integer.
    I16,
    /// Signed 32-bit integer.
    I32,
    /// Signed 64-bit integer.
    I64,
    /// Unsigned 8-bit integer.
    U8,
    /// Unsigned 16-bit integer.
    U16,
    /// Unsigned 32-bit integer.
    U32,
    /// Unsigned 64-bit integer.
    U64,
    /// 32-bit floating point.
    F32,
    /// 64-bit floating point.
    F64,
    /// Fixed-point decimal.
    Decimal,
    /// Date and time of day.
    #[serde(rename = "datetime")]
    DateTime,
}

impl PrimitiveKind {
    /// Returns the canonical name of the primitive kind.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Char => "char",
            Self::Str => "string",
            Self::I8 => "i8",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::U8 => "u8",
            Self::U16 => "u16",
            Self::U32 => "u32",
            Self::U64 => "u64",
            Self::F32 => "f32",
            Self::F64 => "f64",
            Self::Decimal => "decimal",
            Self::DateTime => "datetime",
        }
    }

    /// Parses a primitive kind from its canonical name.
    ///
    /// # Errors
    /// Returns `ModelError::UnsupportedPrimitive` for a name that does not
    /// match any known primitive kind.
    pub fn parse(name: &str) -> Result<Self, ModelError> {
        match name {
            "bool" => Ok(Self::Bool),
            "char" => Ok(Self::Char),
            "string" => Ok(Self::Str),
            "i8" => Ok(Self::I8),
            "i16" => Ok(Self::I16),
            "i32" => Ok(Self::I32),
            "i64" => Ok(Self::I64),
            "u8" => Ok(Self::U8),
            "u16" => Ok(Self::U16),
            "u32" => Ok(Self::U32),
            "u64" => Ok(Self::U64),
            "f32" => Ok(Self::F32),
            "f64" => Ok(Self::F64),
            "decimal" => Ok(Self::Decimal),
            "datetime" => Ok(Self::DateTime),
            _ => Err(ModelError::unsupported_primitive(name)),
        }
    }
}

/// Compile-time literal bound to a constant member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    /// Boolean literal.
    Bool(bool),
    /// Integer literal.
    Integer(i64),
    /// Floating point literal.
    Number(f64),
    /// String literal.
    String(String),
}

/// One declared member of a composite type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDescriptor {
    /// Member name.
    pub name: String,
    /// Identity of the member type.
    #[serde(rename = "type")]
    pub type_key: TypeKey,
    /// Generic arguments declared on the member type.
    #[serde(default)]
    pub generic_args: Vec<TypeKey>,
    /// Whether the member may be absent.
    #[serde(default)]
    pub optional: bool,
    /// Whether the member is excluded from generated output.
    #[serde(default)]
    pub ignored: bool,
    /// Whether the member is an instance field rather than a property.
    #[serde(default)]
    pub field: bool,
    /// Literal value for constant members.
    #[serde(default)]
    pub constant: Option<Literal>,
}

impl PropertyDescriptor {
    /// Creates a plain property descriptor for the given member type.
    #[must_use]
    pub fn new(name: impl Into<String>, type_key: impl Into<TypeKey>) -> Self {
        Self {
            name: name.into(),
            type_key: type_key.into(),
            generic_args: Vec::new(),
            optional: false,
            ignored: false,
            field: false,
            constant: None,
        }
    }
}

/// One declared value of an enumeration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumValueDescriptor {
    /// Value name.
    pub name: String,
    /// Declared integer value, verbatim.
    pub value: i64,
}

impl EnumValueDescriptor {
    /// Creates a new enum value descriptor.
    #[must_use]
    pub fn new(name: impl Into<String>, value: i64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// Shape of an identity as reported by the descriptor layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum TypeShape {
    /// A primitive type.
    Primitive {
        /// Primitive kind.
        primitive: PrimitiveKind,
    },
    /// A composite class type.
    Class {
        /// Base type identity, if any (the universal root type is excluded
        /// by the descriptor layer).
        #[serde(default)]
        base: Option<TypeKey>,
        /// Generic arguments carried by the base type reference.
        #[serde(default)]
        base_generic_args: Vec<TypeKey>,
        /// Names of declared generic type parameters.
        #[serde(default)]
        generic_params: Vec<String>,
        /// Declared members only; inherited members are reachable through
        /// the base identity.
        #[serde(default)]
        properties: Vec<PropertyDescriptor>,
    },
    /// An enumeration type.
    Enum {
        /// Declared name/value pairs, in declaration order.
        values: Vec<EnumValueDescriptor>,
    },
    /// An enumerable type.
    Collection {
        /// Element type identity; `None` for an enumerable of opaque
        /// elements.
        #[serde(default)]
        element: Option<TypeKey>,
    },
    /// A generic type parameter.
    GenericParam {
        /// Parameter name.
        name: String,
    },
    /// An unclassifiable external type.
    Opaque,
}

/// Coarse classification of an identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeFamily {
    /// Primitive types.
    System,
    /// Enumerable types.
    Collection,
    /// Composite class types.
    Class,
    /// Enumeration types.
    Enum,
    /// Generic type parameters.
    GenericParameter,
    /// Everything else.
    Other,
}

impl fmt::Display for TypeFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::System => "System",
            Self::Collection => "Collection",
            Self::Class => "Class",
            Self::Enum => "Enum",
            Self::GenericParameter => "GenericParameter",
            Self::Other => "Other",
        };
        f.write_str(name)
    }
}

/// Attribute-derived overrides resolved by the descriptor layer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeOverrides {
    /// Custom declaration name.
    #[serde(default)]
    pub name: Option<String>,
    /// Custom module name.
    #[serde(default)]
    pub module: Option<String>,
    /// Whether the type is excluded from generated output.
    #[serde(default)]
    pub ignore: bool,
}

/// Immutable description of one host-language type declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    /// Identity of the declaration.
    pub key: TypeKey,
    /// Declared type name.
    pub name: String,
    /// Declaring namespace.
    #[serde(default)]
    pub namespace: String,
    /// Reported shape.
    #[serde(flatten)]
    pub shape: TypeShape,
    /// Attribute-derived overrides.
    #[serde(default)]
    pub overrides: TypeOverrides,
}

impl TypeDescriptor {
    /// Creates a descriptor with no namespace and no overrides.
    #[must_use]
    pub fn new(key: impl Into<TypeKey>, name: impl Into<String>, shape: TypeShape) -> Self {
        Self {
            key: key.into(),
            name: name.into(),
            namespace: String::new(),
            shape,
            overrides: TypeOverrides::default(),
        }
    }

    /// Classifies the identity into its family.
    #[must_use]
    pub fn family(&self) -> TypeFamily {
        match &self.shape {
            TypeShape::Primitive { .. } => TypeFamily::System,
            TypeShape::Collection { .. } => TypeFamily::Collection,
            TypeShape::Class { .. } => TypeFamily::Class,
            TypeShape::Enum { .. } => TypeFamily::Enum,
            TypeShape::GenericParam { .. } => TypeFamily::GenericParameter,
            TypeShape::Opaque => TypeFamily::Other,
        }
    }

    /// Returns the declaration name, honoring the override.
    #[must_use]
    pub fn declared_name(&self) -> &str {
        self.overrides.name.as_deref().unwrap_or(&self.name)
    }

    /// Returns the module name, honoring the override.
    #[must_use]
    pub fn declared_module(&self) -> &str {
        self.overrides.module.as_deref().unwrap_or(&self.namespace)
    }
}

/// Keyed registry of type descriptors for one build.
#[derive(Debug, Clone, Default)]
pub struct DescriptorSet {
    types: HashMap<TypeKey, TypeDescriptor>,
}

impl DescriptorSet {
    /// Creates an empty descriptor set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a descriptor, replacing any previous descriptor for the same
    /// key.
    pub fn insert(&mut self, descriptor: TypeDescriptor) -> Option<TypeDescriptor> {
        self.types.insert(descriptor.key.clone(), descriptor)
    }

    /// Looks up a descriptor by key.
    #[must_use]
    pub fn get(&self, key: &TypeKey) -> Option<&TypeDescriptor> {
        self.types.get(key)
    }

    /// Returns true if a descriptor with the given key exists.
    #[must_use]
    pub fn contains(&self, key: &TypeKey) -> bool {
        self.types.contains_key(key)
    }

    /// Classifies a key into its family, if the key is known.
    #[must_use]
    pub fn family_of(&self, key: &TypeKey) -> Option<TypeFamily> {
        self.types.get(key).map(TypeDescriptor::family)
    }

    /// Returns the number of descriptors in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if the set contains no descriptors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Iterates over all descriptors.
    pub fn iter(&self) -> impl Iterator<Item = &TypeDescriptor> {
        self.types.values()
    }
}
