//! The type-node graph.
//!
//! Class and enum nodes live in an arena indexed by [`NodeId`]; every
//! cross-reference between nodes goes through a [`TypeRef`], so one identity
//! is represented by exactly one node per build even in the presence of
//! reference cycles. System and collection references are value-typed
//! leaves. Module membership is tracked on both sides (node and module) and
//! changes only through [`TypeGraph::assign_module`].

use std::collections::{BTreeSet, HashMap};

use crate::descriptor::{Literal, PrimitiveKind, TypeKey};

/// Index of a class or enum node in the graph arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        Self(index as u32)
    }

    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

/// Kinds of system types in the target declaration grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SystemKind {
    /// Numeric types.
    Number,
    /// Strings and characters.
    String,
    /// Booleans.
    Bool,
    /// Dates.
    Date,
}

impl SystemKind {
    /// Classifies a primitive kind into its system kind.
    #[must_use]
    pub const fn of(kind: PrimitiveKind) -> Self {
        match kind {
            PrimitiveKind::Bool => Self::Bool,
            PrimitiveKind::Char | PrimitiveKind::Str => Self::String,
            PrimitiveKind::I8
            | PrimitiveKind::I16
            | PrimitiveKind::I32
            | PrimitiveKind::I64
            | PrimitiveKind::U8
            | PrimitiveKind::U16
            | PrimitiveKind::U32
            | PrimitiveKind::U64
            | PrimitiveKind::F32
            | PrimitiveKind::F64
            | PrimitiveKind::Decimal => Self::Number,
            PrimitiveKind::DateTime => Self::Date,
        }
    }

    /// Returns the target-grammar spelling of the system kind.
    #[must_use]
    pub const fn ts_name(&self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::String => "string",
            Self::Bool => "boolean",
            Self::Date => "Date",
        }
    }
}

/// A collection reference with its flattened nesting depth.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionRef {
    /// Element type of the innermost collection.
    pub items: TypeRef,
    /// Number of collection wrappers around the element type.
    pub dimension: u32,
}

/// A reference to a type from inside the graph.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeRef {
    /// Placeholder written by the builder, rewritten by the resolver.
    Unresolved(TypeKey),
    /// Canonical class or enum node.
    Node(NodeId),
    /// System type leaf.
    System(SystemKind),
    /// Collection of a resolved element type.
    Collection(Box<CollectionRef>),
    /// Generic type parameter, referenced by name.
    GenericParam(String),
    /// The opaque sentinel.
    Any,
}

impl TypeRef {
    /// Returns true if the reference no longer contains placeholders.
    #[must_use]
    pub fn is_resolved(&self) -> bool {
        match self {
            Self::Unresolved(_) => false,
            Self::Collection(collection) => collection.items.is_resolved(),
            _ => true,
        }
    }
}

/// One member of a class node.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    /// Member name.
    pub name: String,
    /// Member type.
    pub ty: TypeRef,
    /// Generic arguments declared on the member type.
    pub generic_args: Vec<TypeRef>,
    /// Whether the member may be absent.
    pub optional: bool,
    /// Whether the member is excluded from generated output.
    pub ignored: bool,
    /// Literal value for constant members.
    pub constant: Option<Literal>,
}

/// A composite class in the graph.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassNode {
    /// Originating identity.
    pub key: TypeKey,
    /// Declaration name.
    pub name: String,
    /// Owning module name.
    pub module: String,
    /// Base type reference, if any.
    pub base: Option<TypeRef>,
    /// Generic arguments carried by the base type reference.
    pub base_generic_args: Vec<TypeRef>,
    /// Declared generic type parameters.
    pub generic_params: Vec<TypeRef>,
    /// Declared properties, in declaration order.
    pub properties: Vec<Property>,
    /// Declared instance fields, in declaration order.
    pub fields: Vec<Property>,
    /// Declared constant members, in declaration order.
    pub constants: Vec<Property>,
    /// Whether the class is excluded from generated output.
    pub ignored: bool,
}

/// One declared value of an enum node.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumMember {
    /// Value name.
    pub name: String,
    /// Declared integer value, verbatim.
    pub value: i64,
}

/// An enumeration in the graph.
#[derive(Debug, Clone, PartialEq)]
pub struct EnumNode {
    /// Originating identity.
    pub key: TypeKey,
    /// Declaration name.
    pub name: String,
    /// Owning module name.
    pub module: String,
    /// Declared values, in declaration order.
    pub values: Vec<EnumMember>,
    /// Whether the enum is excluded from generated output.
    pub ignored: bool,
}

/// A node in the graph arena.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Composite class node.
    Class(ClassNode),
    /// Enumeration node.
    Enum(EnumNode),
}

impl Node {
    /// Returns the originating identity of the node.
    #[must_use]
    pub fn key(&self) -> &TypeKey {
        match self {
            Self::Class(class) => &class.key,
            Self::Enum(enumeration) => &enumeration.key,
        }
    }

    /// Returns the declaration name of the node.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Class(class) => &class.name,
            Self::Enum(enumeration) => &enumeration.name,
        }
    }

    /// Returns the owning module name of the node.
    #[must_use]
    pub fn module(&self) -> &str {
        match self {
            Self::Class(class) => &class.module,
            Self::Enum(enumeration) => &enumeration.module,
        }
    }

    /// Returns true if the node is excluded from generated output.
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        match self {
            Self::Class(class) => class.ignored,
            Self::Enum(enumeration) => enumeration.ignored,
        }
    }

    /// Returns the node as a class, if it is one.
    #[must_use]
    pub fn as_class(&self) -> Option<&ClassNode> {
        match self {
            Self::Class(class) => Some(class),
            Self::Enum(_) => None,
        }
    }

    /// Returns the node as an enum, if it is one.
    #[must_use]
    pub fn as_enum(&self) -> Option<&EnumNode> {
        match self {
            Self::Class(_) => None,
            Self::Enum(enumeration) => Some(enumeration),
        }
    }

    fn set_module(&mut self, module: &str) {
        match self {
            Self::Class(class) => class.module = module.to_string(),
            Self::Enum(enumeration) => enumeration.module = module.to_string(),
        }
    }
}

/// A named grouping of declarations.
#[derive(Debug, Clone, PartialEq)]
pub struct Module {
    name: String,
    classes: BTreeSet<NodeId>,
    enums: BTreeSet<NodeId>,
}

impl Module {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            classes: BTreeSet::new(),
            enums: BTreeSet::new(),
        }
    }

    /// Returns the module name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Class nodes owned by the module, in node-creation order.
    pub fn classes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.classes.iter().copied()
    }

    /// Enum nodes owned by the module, in node-creation order.
    pub fn enums(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.enums.iter().copied()
    }

    /// Returns true if the module owns no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty() && self.enums.is_empty()
    }

    fn add(&mut self, id: NodeId, node: &Node) {
        match node {
            Node::Class(_) => self.classes.insert(id),
            Node::Enum(_) => self.enums.insert(id),
        };
    }

    fn remove(&mut self, id: NodeId) {
        self.classes.remove(&id);
        self.enums.remove(&id);
    }
}

/// The class/enum node set of one build.
///
/// Nodes are created by the builder, rewritten by the resolver and read-only
/// afterwards. The canonical map guarantees at most one node per identity.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TypeGraph {
    nodes: Vec<Node>,
    canonical: HashMap<TypeKey, NodeId>,
    modules: Vec<Module>,
    module_index: HashMap<String, usize>,
}

impl TypeGraph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a node and registers it as the canonical node for its
    /// identity. The node is also added to its module.
    pub(crate) fn insert(&mut self, node: Node) -> NodeId {
        let id = NodeId::new(self.nodes.len());
        self.canonical.insert(node.key().clone(), id);
        let module = node.module().to_string();
        self.nodes.push(node);
        self.add_to_module(id, &module);
        id
    }

    /// Returns the canonical node for an identity, if one exists.
    #[must_use]
    pub fn canonical(&self, key: &TypeKey) -> Option<NodeId> {
        self.canonical.get(key).copied()
    }

    /// Returns the node with the given id.
    ///
    /// # Panics
    /// Panics if the id does not belong to this graph.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Returns the node with the given id mutably, for resolution and
    /// post-build adjustments such as ignore flags.
    ///
    /// # Panics
    /// Panics if the id does not belong to this graph.
    pub fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.index()]
    }

    /// Returns the number of nodes in the graph.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the graph contains no nodes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterates over all node ids in creation order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> {
        (0..self.nodes.len()).map(NodeId::new)
    }

    /// Iterates over the canonical identity map.
    pub fn canonical_entries(&self) -> impl Iterator<Item = (&TypeKey, NodeId)> {
        self.canonical.iter().map(|(key, id)| (key, *id))
    }

    /// Modules in creation order.
    pub fn modules(&self) -> impl Iterator<Item = &Module> {
        self.modules.iter()
    }

    /// Looks up a module by name.
    #[must_use]
    pub fn module(&self, name: &str) -> Option<&Module> {
        self.module_index.get(name).map(|&index| &self.modules[index])
    }

    /// Moves a node into the named module.
    ///
    /// The node is removed from its previous module first, so it is never a
    /// member of two modules at once.
    pub fn assign_module(&mut self, id: NodeId, module: &str) {
        let previous = self.nodes[id.index()].module().to_string();
        if previous == module && self.module_index.contains_key(module) {
            return;
        }
        if let Some(&index) = self.module_index.get(&previous) {
            self.modules[index].remove(id);
        }
        self.nodes[id.index()].set_module(module);
        self.add_to_module(id, module);
    }

    fn add_to_module(&mut self, id: NodeId, module: &str) {
        let index = match self.module_index.get(module) {
            Some(&index) => index,
            None => {
                let index = self.modules.len();
                self.modules.push(Module::new(module));
                self.module_index.insert(module.to_string(), index);
                index
            }
        };
        let node = &self.nodes[id.index()];
        self.modules[index].add(id, node);
    }
}
