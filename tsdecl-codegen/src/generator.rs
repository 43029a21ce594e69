//! Declaration generation from resolved type models.

use std::collections::{HashMap, HashSet};

use tsdecl_model::{
    ClassNode, EnumNode, Literal, Module, NodeId, Property, TypeGraph, TypeModel, TypeRef,
};

use crate::error::CodegenError;
use crate::output::OutputMode;
use crate::policy::{
    MemberNameFormatter, ModuleNameFormatter, TypeConverter, TypeConverters,
    TypeVisibilityPredicate, default_member_name, default_module_name, default_visibility,
};
use crate::writer::IndentWriter;

/// Renders a resolved type model into declaration text.
///
/// Naming, visibility and literal-conversion behavior is supplied through
/// pluggable policies; the tree walk itself is fixed.
pub struct DeclarationGenerator {
    member_formatter: MemberNameFormatter,
    module_formatter: ModuleNameFormatter,
    visibility: TypeVisibilityPredicate,
    converters: TypeConverters,
}

/// State local to one `generate` call.
struct RenderContext {
    emitted: HashSet<NodeId>,
    module_names: HashMap<String, String>,
}

impl Default for DeclarationGenerator {
    fn default() -> Self {
        Self {
            member_formatter: default_member_name(),
            module_formatter: default_module_name(),
            visibility: default_visibility(),
            converters: TypeConverters::new(),
        }
    }
}

impl DeclarationGenerator {
    /// Creates a generator with the default policies.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the member name formatter.
    pub fn set_member_formatter(&mut self, formatter: impl Fn(&Property) -> String + 'static) {
        self.member_formatter = Box::new(formatter);
    }

    /// Replaces the module name formatter.
    pub fn set_module_formatter(&mut self, formatter: impl Fn(&str) -> String + 'static) {
        self.module_formatter = Box::new(formatter);
    }

    /// Replaces the class visibility predicate.
    pub fn set_visibility(&mut self, predicate: impl Fn(&ClassNode) -> bool + 'static) {
        self.visibility = Box::new(predicate);
    }

    /// Registers a literal-conversion override for one identity.
    pub fn register_converter(
        &mut self,
        key: impl Into<tsdecl_model::TypeKey>,
        converter: impl Fn(&tsdecl_model::TypeKey) -> String + 'static,
    ) {
        let boxed: TypeConverter = Box::new(converter);
        self.converters.register(key.into(), boxed);
    }

    /// Generates declarations with the default output mode (properties and
    /// enums).
    ///
    /// # Errors
    /// Returns `CodegenError` on a contradictory output mode.
    pub fn generate(&self, model: &TypeModel) -> Result<String, CodegenError> {
        self.generate_with(model, OutputMode::DEFAULT)
    }

    /// Generates declarations for the requested output mode.
    ///
    /// # Errors
    /// Returns `CodegenError::ConflictingOutput` before producing any text
    /// if constants are combined with properties or fields.
    pub fn generate_with(
        &self,
        model: &TypeModel,
        mode: OutputMode,
    ) -> Result<String, CodegenError> {
        if mode.conflicts() {
            return Err(CodegenError::ConflictingOutput);
        }

        let graph = model.graph();
        // The module-rename table lives for exactly one call.
        let mut context = RenderContext {
            emitted: HashSet::new(),
            module_names: graph
                .modules()
                .map(|module| {
                    (
                        module.name().to_string(),
                        (self.module_formatter)(module.name()),
                    )
                })
                .collect(),
        };
        let mut writer = IndentWriter::new();

        if mode.classes_requested() && !model.references().is_empty() {
            for reference in model.references() {
                writer.line(&format!("/// <reference path=\"{reference}\" />"));
            }
            writer.blank();
        }

        for module in graph.modules() {
            self.append_module(graph, module, mode, &mut context, &mut writer);
        }

        Ok(writer.finish())
    }

    fn append_module(
        &self,
        graph: &TypeGraph,
        module: &Module,
        mode: OutputMode,
        context: &mut RenderContext,
        writer: &mut IndentWriter,
    ) {
        if !Self::module_contributes(graph, module, mode) {
            return;
        }

        tracing::debug!("emitting module '{}'", module.name());

        // Constants carry initializers, so their module cannot be ambient;
        // an enums-only module is concrete as well.
        let ambient = mode != OutputMode::ENUMS && !mode.contains(OutputMode::CONSTANTS);
        let formatted = context
            .module_names
            .get(module.name())
            .cloned()
            .unwrap_or_else(|| module.name().to_string());
        let wrapped = !formatted.is_empty();

        if wrapped {
            let keyword = if ambient { "declare module" } else { "module" };
            writer.line(&format!("{keyword} {formatted} {{"));
            writer.indent();
        }

        if mode.contains(OutputMode::ENUMS) {
            for id in module.enums() {
                if let Some(enumeration) = graph.node(id).as_enum() {
                    if !enumeration.ignored {
                        Self::append_enum(enumeration, writer);
                    }
                }
            }
        }

        if mode.classes_requested() {
            for id in module.classes() {
                if let Some(class) = graph.node(id).as_class() {
                    if !class.ignored {
                        self.append_class(graph, id, class, module.name(), mode, context, writer);
                    }
                }
            }
        }

        if mode.contains(OutputMode::CONSTANTS) {
            for id in module.classes() {
                if let Some(class) = graph.node(id).as_class() {
                    if !class.ignored {
                        self.append_constants(graph, class, module.name(), context, writer);
                    }
                }
            }
        }

        if wrapped {
            writer.dedent();
            writer.line("}");
        }
    }

    fn module_contributes(graph: &TypeGraph, module: &Module, mode: OutputMode) -> bool {
        let enums = mode.contains(OutputMode::ENUMS)
            && module.enums().any(|id| !graph.node(id).is_ignored());
        let classes =
            mode.classes_requested() && module.classes().any(|id| !graph.node(id).is_ignored());
        let constants = mode.contains(OutputMode::CONSTANTS)
            && module.classes().any(|id| {
                let node = graph.node(id);
                !node.is_ignored()
                    && node.as_class().is_some_and(|class| {
                        class
                            .constants
                            .iter()
                            .any(|member| !member.ignored && member.constant.is_some())
                    })
            });
        enums || classes || constants
    }

    fn append_enum(enumeration: &EnumNode, writer: &mut IndentWriter) {
        writer.line(&format!("export enum {} {{", enumeration.name));
        writer.indent();
        let last = enumeration.values.len().saturating_sub(1);
        for (index, value) in enumeration.values.iter().enumerate() {
            let separator = if index == last { "" } else { "," };
            writer.line(&format!("{} = {}{}", value.name, value.value, separator));
        }
        writer.dedent();
        writer.line("}");
    }

    #[allow(clippy::too_many_arguments)]
    fn append_class(
        &self,
        graph: &TypeGraph,
        id: NodeId,
        class: &ClassNode,
        current_module: &str,
        mode: OutputMode,
        context: &mut RenderContext,
        writer: &mut IndentWriter,
    ) {
        if !context.emitted.insert(id) {
            return;
        }

        let mut header = String::new();
        if (self.visibility)(class) {
            header.push_str("export ");
        }
        header.push_str("interface ");
        header.push_str(&class.name);
        if !class.generic_params.is_empty() {
            header.push('<');
            header.push_str(&self.refs_text(graph, &class.generic_params, current_module, context));
            header.push('>');
        }
        if let Some(base) = &class.base {
            if !matches!(base, TypeRef::Any) {
                header.push_str(" extends ");
                header.push_str(&self.type_text(graph, base, current_module, context));
                if !class.base_generic_args.is_empty() {
                    header.push('<');
                    header.push_str(&self.refs_text(
                        graph,
                        &class.base_generic_args,
                        current_module,
                        context,
                    ));
                    header.push('>');
                }
            }
        }
        header.push_str(" {");
        writer.line(&header);
        writer.indent();

        if mode.contains(OutputMode::PROPERTIES) {
            self.append_members(graph, &class.properties, current_module, context, writer);
        }
        if mode.contains(OutputMode::FIELDS) {
            self.append_members(graph, &class.fields, current_module, context, writer);
        }

        writer.dedent();
        writer.line("}");
    }

    fn append_members(
        &self,
        graph: &TypeGraph,
        members: &[Property],
        current_module: &str,
        context: &RenderContext,
        writer: &mut IndentWriter,
    ) {
        for member in members {
            if member.ignored {
                continue;
            }
            let name = (self.member_formatter)(member);
            let optional = if member.optional { "?" } else { "" };
            let ty = self.member_type_text(graph, member, current_module, context);
            writer.line(&format!("{name}{optional}: {ty};"));
        }
    }

    fn append_constants(
        &self,
        graph: &TypeGraph,
        class: &ClassNode,
        current_module: &str,
        context: &RenderContext,
        writer: &mut IndentWriter,
    ) {
        let constants: Vec<&Property> = class
            .constants
            .iter()
            .filter(|member| !member.ignored && member.constant.is_some())
            .collect();
        if constants.is_empty() {
            return;
        }

        writer.line(&format!("export module {} {{", class.name));
        writer.indent();
        for member in constants {
            let Some(literal) = &member.constant else {
                continue;
            };
            let name = (self.member_formatter)(member);
            let ty = self.member_type_text(graph, member, current_module, context);
            writer.line(&format!(
                "export var {name}: {ty} = {};",
                Self::literal_text(literal)
            ));
        }
        writer.dedent();
        writer.line("}");
    }

    fn literal_text(literal: &Literal) -> String {
        match literal {
            Literal::String(text) => format!("\"{text}\""),
            Literal::Bool(value) => value.to_string(),
            Literal::Integer(value) => value.to_string(),
            Literal::Number(value) => value.to_string(),
        }
    }

    /// Renders a member type, appending generic arguments unless they are
    /// already absorbed by a collection wrapper's element position.
    fn member_type_text(
        &self,
        graph: &TypeGraph,
        member: &Property,
        current_module: &str,
        context: &RenderContext,
    ) -> String {
        if member.generic_args.is_empty() {
            return self.type_text(graph, &member.ty, current_module, context);
        }

        let args = self.refs_text(graph, &member.generic_args, current_module, context);
        match &member.ty {
            TypeRef::Collection(collection) => {
                let element = self.type_text(graph, &collection.items, current_module, context);
                let brackets = "[]".repeat(collection.dimension as usize);
                format!("{element}<{args}>{brackets}")
            }
            ty => {
                let base = self.type_text(graph, ty, current_module, context);
                format!("{base}<{args}>")
            }
        }
    }

    fn refs_text(
        &self,
        graph: &TypeGraph,
        references: &[TypeRef],
        current_module: &str,
        context: &RenderContext,
    ) -> String {
        references
            .iter()
            .map(|reference| self.type_text(graph, reference, current_module, context))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Renders the qualified name of a type reference.
    ///
    /// A registered literal conversion wins over structural qualification;
    /// module-owned nodes are prefixed with their formatted module name
    /// unless the module is empty or is the referencing module; generic
    /// parameters are never qualified.
    fn type_text(
        &self,
        graph: &TypeGraph,
        reference: &TypeRef,
        current_module: &str,
        context: &RenderContext,
    ) -> String {
        match reference {
            TypeRef::System(kind) => kind.ts_name().to_string(),
            TypeRef::GenericParam(name) => name.clone(),
            TypeRef::Collection(collection) => {
                let element = self.type_text(graph, &collection.items, current_module, context);
                format!("{element}{}", "[]".repeat(collection.dimension as usize))
            }
            TypeRef::Node(id) => {
                let node = graph.node(*id);
                if let Some(text) = self.converters.convert(node.key()) {
                    return text;
                }
                let module = node.module();
                if module.is_empty() || module == current_module {
                    node.name().to_string()
                } else {
                    let formatted = context
                        .module_names
                        .get(module)
                        .map(String::as_str)
                        .unwrap_or(module);
                    format!("{formatted}.{}", node.name())
                }
            }
            TypeRef::Any | TypeRef::Unresolved(_) => "any".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tsdecl_model::{
        DescriptorSet, EnumValueDescriptor, PrimitiveKind, PropertyDescriptor, Resolver,
        TypeDescriptor, TypeGraphBuilder, TypeKey, TypeShape,
    };

    fn primitive(key: &str, kind: PrimitiveKind) -> TypeDescriptor {
        TypeDescriptor::new(key, key, TypeShape::Primitive { primitive: kind })
    }

    fn class_in(
        key: &str,
        name: &str,
        namespace: &str,
        properties: Vec<PropertyDescriptor>,
    ) -> TypeDescriptor {
        let mut descriptor = TypeDescriptor::new(
            key,
            name,
            TypeShape::Class {
                base: None,
                base_generic_args: Vec::new(),
                generic_params: Vec::new(),
                properties,
            },
        );
        descriptor.namespace = namespace.to_string();
        descriptor
    }

    fn collection(key: &str, element: &str) -> TypeDescriptor {
        TypeDescriptor::new(
            key,
            key,
            TypeShape::Collection {
                element: Some(TypeKey::from(element)),
            },
        )
    }

    fn model_for(set: &DescriptorSet, roots: &[&str]) -> TypeModel {
        let mut builder = TypeGraphBuilder::new(set);
        for root in roots {
            builder.add(&TypeKey::from(*root)).unwrap();
        }
        let mut graph = builder.build();
        Resolver::new(set).resolve(&mut graph);
        TypeModel::new(graph)
    }

    fn shop_descriptors() -> DescriptorSet {
        let mut set = DescriptorSet::new();
        set.insert(primitive("string", PrimitiveKind::Str));
        set.insert(class_in(
            "Shop.Product",
            "Product",
            "Shop",
            vec![PropertyDescriptor::new("Name", "string")],
        ));
        set.insert(collection("Shop.Product[]", "Shop.Product"));
        set.insert(class_in(
            "Shop.Order",
            "Order",
            "Shop",
            vec![PropertyDescriptor::new("Products", "Shop.Product[]")],
        ));
        set
    }

    #[test]
    fn test_shop_scenario() {
        let set = shop_descriptors();
        let model = model_for(&set, &["Shop.Order"]);
        let script = DeclarationGenerator::new().generate(&model).unwrap();

        assert!(script.contains("declare module Shop {"));
        assert!(script.contains("interface Order {"));
        assert!(script.contains("Products: Product[];"));
        assert!(script.contains("interface Product {"));
        assert!(script.contains("Name: string;"));
        assert!(!script.contains("Shop.Product[]"));
    }

    #[test]
    fn test_cross_module_references_are_qualified() {
        let mut set = DescriptorSet::new();
        set.insert(primitive("string", PrimitiveKind::Str));
        set.insert(class_in(
            "Geo.Address",
            "Address",
            "Geo",
            vec![PropertyDescriptor::new("Street", "string")],
        ));
        set.insert(class_in(
            "Shop.Customer",
            "Customer",
            "Shop",
            vec![PropertyDescriptor::new("Home", "Geo.Address")],
        ));

        let model = model_for(&set, &["Shop.Customer"]);
        let script = DeclarationGenerator::new().generate(&model).unwrap();

        assert!(script.contains("Home: Geo.Address;"));
    }

    #[test]
    fn test_optional_marker() {
        let mut set = DescriptorSet::new();
        set.insert(primitive("string", PrimitiveKind::Str));
        let mut optional = PropertyDescriptor::new("Nickname", "string");
        optional.optional = true;
        set.insert(class_in(
            "Shop.Customer",
            "Customer",
            "Shop",
            vec![PropertyDescriptor::new("Name", "string"), optional],
        ));

        let model = model_for(&set, &["Shop.Customer"]);
        let script = DeclarationGenerator::new().generate(&model).unwrap();

        assert!(script.contains("Name: string;"));
        assert!(script.contains("Nickname?: string;"));
        assert!(!script.contains("Name?:"));
    }

    #[test]
    fn test_nested_collection_rendering() {
        let mut set = DescriptorSet::new();
        set.insert(primitive("string", PrimitiveKind::Str));
        set.insert(collection("string[]", "string"));
        set.insert(collection("string[][]", "string[]"));
        set.insert(class_in(
            "Docs.Page",
            "Page",
            "Docs",
            vec![PropertyDescriptor::new("Lines", "string[][]")],
        ));

        let model = model_for(&set, &["Docs.Page"]);
        let script = DeclarationGenerator::new().generate(&model).unwrap();

        assert!(script.contains("Lines: string[][];"));
    }

    fn enum_in(key: &str, name: &str, namespace: &str, values: Vec<EnumValueDescriptor>) -> TypeDescriptor {
        let mut descriptor = TypeDescriptor::new(key, name, TypeShape::Enum { values });
        descriptor.namespace = namespace.to_string();
        descriptor
    }

    #[test]
    fn test_enum_literal_fidelity() {
        let mut set = DescriptorSet::new();
        set.insert(enum_in(
            "Shop.Status",
            "Status",
            "Shop",
            vec![
                EnumValueDescriptor::new("A", 1),
                EnumValueDescriptor::new("B", 5),
            ],
        ));
        set.insert(class_in(
            "Shop.Ticket",
            "Ticket",
            "Shop",
            vec![PropertyDescriptor::new("State", "Shop.Status")],
        ));

        let model = model_for(&set, &["Shop.Ticket"]);
        let script = DeclarationGenerator::new().generate(&model).unwrap();

        assert!(script.contains("A = 1,"));
        assert!(script.contains("B = 5"));
        assert!(!script.contains("B = 2"));
        assert!(!script.contains("B = 5,"));
    }

    #[test]
    fn test_conflicting_modes_emit_nothing() {
        let set = shop_descriptors();
        let model = model_for(&set, &["Shop.Order"]);
        let generator = DeclarationGenerator::new();

        let err = generator
            .generate_with(&model, OutputMode::CONSTANTS | OutputMode::PROPERTIES)
            .unwrap_err();
        assert!(matches!(err, CodegenError::ConflictingOutput));

        let err = generator
            .generate_with(&model, OutputMode::CONSTANTS | OutputMode::FIELDS)
            .unwrap_err();
        assert!(matches!(err, CodegenError::ConflictingOutput));
    }

    #[test]
    fn test_enums_only_output_is_not_ambient() {
        let mut set = shop_descriptors();
        set.insert(enum_in(
            "Shop.Status",
            "Status",
            "Shop",
            vec![EnumValueDescriptor::new("Open", 0)],
        ));
        set.insert(class_in(
            "Shop.Ticket",
            "Ticket",
            "Shop",
            vec![PropertyDescriptor::new("State", "Shop.Status")],
        ));

        let model = model_for(&set, &["Shop.Ticket"]);
        let generator = DeclarationGenerator::new();

        let enums_only = generator
            .generate_with(&model, OutputMode::ENUMS)
            .unwrap();
        assert!(!enums_only.contains("declare"));
        assert!(enums_only.contains("module Shop {"));
        assert!(enums_only.contains("export enum Status {"));
        assert!(!enums_only.contains("interface"));

        let properties = generator
            .generate_with(&model, OutputMode::PROPERTIES)
            .unwrap();
        assert!(properties.contains("declare module Shop {"));
    }

    #[test]
    fn test_ignored_nodes_and_members_are_skipped() {
        let mut set = shop_descriptors();
        let mut ignored_class = class_in(
            "Shop.Internal",
            "Internal",
            "Shop",
            vec![PropertyDescriptor::new("Name", "string")],
        );
        ignored_class.overrides.ignore = true;
        set.insert(ignored_class);
        let mut ignored_member = PropertyDescriptor::new("Secret", "string");
        ignored_member.ignored = true;
        set.insert(class_in(
            "Shop.Account",
            "Account",
            "Shop",
            vec![PropertyDescriptor::new("Login", "string"), ignored_member],
        ));

        let model = model_for(&set, &["Shop.Internal", "Shop.Account"]);
        let script = DeclarationGenerator::new().generate(&model).unwrap();

        assert!(!script.contains("Internal"));
        assert!(script.contains("Login: string;"));
        assert!(!script.contains("Secret"));
    }

    #[test]
    fn test_module_without_contribution_is_skipped() {
        let mut set = DescriptorSet::new();
        let mut hidden = class_in("Empty.Hidden", "Hidden", "Empty", Vec::new());
        hidden.overrides.ignore = true;
        set.insert(hidden);
        set.insert(class_in("Shop.Order", "Order", "Shop", Vec::new()));

        let model = model_for(&set, &["Empty.Hidden", "Shop.Order"]);
        let script = DeclarationGenerator::new().generate(&model).unwrap();

        assert!(!script.contains("module Empty"));
        assert!(script.contains("declare module Shop {"));
    }

    #[test]
    fn test_constants_render_with_literals() {
        let mut set = DescriptorSet::new();
        set.insert(primitive("string", PrimitiveKind::Str));
        set.insert(primitive("i32", PrimitiveKind::I32));
        let mut max = PropertyDescriptor::new("MaxItems", "i32");
        max.constant = Some(Literal::Integer(50));
        let mut label = PropertyDescriptor::new("Label", "string");
        label.constant = Some(Literal::String("basket".to_string()));
        set.insert(class_in(
            "Shop.Basket",
            "Basket",
            "Shop",
            vec![max, label],
        ));

        let model = model_for(&set, &["Shop.Basket"]);
        let script = DeclarationGenerator::new()
            .generate_with(&model, OutputMode::CONSTANTS)
            .unwrap();

        assert!(script.contains("module Shop {"));
        assert!(!script.contains("declare"));
        assert!(script.contains("export module Basket {"));
        assert!(script.contains("export var MaxItems: number = 50;"));
        assert!(script.contains("export var Label: string = \"basket\";"));
    }

    #[test]
    fn test_constants_do_not_appear_in_property_output() {
        let mut set = DescriptorSet::new();
        set.insert(primitive("i32", PrimitiveKind::I32));
        let mut max = PropertyDescriptor::new("MaxItems", "i32");
        max.constant = Some(Literal::Integer(50));
        set.insert(class_in(
            "Shop.Basket",
            "Basket",
            "Shop",
            vec![PropertyDescriptor::new("Count", "i32"), max],
        ));

        let model = model_for(&set, &["Shop.Basket"]);
        let script = DeclarationGenerator::new().generate(&model).unwrap();

        assert!(script.contains("Count: number;"));
        assert!(!script.contains("MaxItems"));
    }

    #[test]
    fn test_reference_directives_precede_modules() {
        let set = shop_descriptors();
        let mut model = model_for(&set, &["Shop.Order"]);
        model.add_reference("knockout.d.ts");

        let generator = DeclarationGenerator::new();
        let script = generator.generate(&model).unwrap();
        assert!(script.starts_with("/// <reference path=\"knockout.d.ts\" />"));

        // Reference directives belong to class output only.
        let enums_only = generator
            .generate_with(&model, OutputMode::ENUMS)
            .unwrap();
        assert!(!enums_only.contains("reference path"));
    }

    #[test]
    fn test_converter_override_wins_over_qualification() {
        let mut set = shop_descriptors();
        set.insert(class_in(
            "Shop.Payload",
            "Payload",
            "Shop",
            vec![PropertyDescriptor::new("Product", "Shop.Product")],
        ));

        let model = model_for(&set, &["Shop.Payload"]);
        let mut generator = DeclarationGenerator::new();
        generator.register_converter("Shop.Product", |_| "ProductView".to_string());
        let script = generator.generate(&model).unwrap();

        assert!(script.contains("Product: ProductView;"));
    }

    #[test]
    fn test_visibility_predicate_marks_exports() {
        let set = shop_descriptors();
        let model = model_for(&set, &["Shop.Order"]);
        let mut generator = DeclarationGenerator::new();
        generator.set_visibility(|class| class.name == "Order");
        let script = generator.generate(&model).unwrap();

        assert!(script.contains("export interface Order {"));
        assert!(script.contains("interface Product {"));
        assert!(!script.contains("export interface Product"));
    }

    #[test]
    fn test_member_formatter_is_applied() {
        let set = shop_descriptors();
        let model = model_for(&set, &["Shop.Order"]);
        let mut generator = DeclarationGenerator::new();
        generator.set_member_formatter(|member| {
            let mut name = member.name.clone();
            if let Some(first) = name.get_mut(0..1) {
                first.make_ascii_lowercase();
            }
            name
        });
        let script = generator.generate(&model).unwrap();

        assert!(script.contains("products: Product[];"));
        assert!(script.contains("name: string;"));
    }

    #[test]
    fn test_module_formatter_renames_header_and_qualification() {
        let mut set = DescriptorSet::new();
        set.insert(class_in("Geo.Address", "Address", "Geo", Vec::new()));
        set.insert(class_in(
            "Shop.Customer",
            "Customer",
            "Shop",
            vec![PropertyDescriptor::new("Home", "Geo.Address")],
        ));

        let model = model_for(&set, &["Shop.Customer"]);
        let mut generator = DeclarationGenerator::new();
        generator.set_module_formatter(|name| name.to_lowercase());
        let script = generator.generate(&model).unwrap();

        assert!(script.contains("declare module shop {"));
        assert!(script.contains("declare module geo {"));
        assert!(script.contains("Home: geo.Address;"));
    }

    #[test]
    fn test_generic_interface_with_extends() {
        let mut set = DescriptorSet::new();
        set.insert(primitive("string", PrimitiveKind::Str));
        set.insert(primitive("i32", PrimitiveKind::I32));
        set.insert(TypeDescriptor::new(
            "T",
            "T",
            TypeShape::GenericParam {
                name: "T".to_string(),
            },
        ));
        let mut entity = TypeDescriptor::new(
            "Data.Entity`1",
            "Entity",
            TypeShape::Class {
                base: None,
                base_generic_args: Vec::new(),
                generic_params: vec!["T".to_string()],
                properties: vec![PropertyDescriptor::new("Value", "T")],
            },
        );
        entity.namespace = "Data".to_string();
        set.insert(entity);
        let mut record = TypeDescriptor::new(
            "Data.Record",
            "Record",
            TypeShape::Class {
                base: Some(TypeKey::from("Data.Entity`1")),
                base_generic_args: vec![TypeKey::from("i32")],
                generic_params: Vec::new(),
                properties: vec![PropertyDescriptor::new("Name", "string")],
            },
        );
        record.namespace = "Data".to_string();
        set.insert(record);

        let model = model_for(&set, &["Data.Record"]);
        let script = DeclarationGenerator::new().generate(&model).unwrap();

        assert!(script.contains("interface Entity<T> {"));
        assert!(script.contains("Value: T;"));
        assert!(script.contains("interface Record extends Entity<number> {"));
    }

    #[test]
    fn test_generic_property_arguments_are_decorated() {
        let mut set = DescriptorSet::new();
        set.insert(primitive("string", PrimitiveKind::Str));
        set.insert(primitive("i32", PrimitiveKind::I32));
        set.insert(TypeDescriptor::new(
            "TKey",
            "TKey",
            TypeShape::GenericParam {
                name: "TKey".to_string(),
            },
        ));
        set.insert(TypeDescriptor::new(
            "TValue",
            "TValue",
            TypeShape::GenericParam {
                name: "TValue".to_string(),
            },
        ));
        let mut pair = TypeDescriptor::new(
            "Data.Pair`2",
            "Pair",
            TypeShape::Class {
                base: None,
                base_generic_args: Vec::new(),
                generic_params: vec!["TKey".to_string(), "TValue".to_string()],
                properties: vec![
                    PropertyDescriptor::new("Key", "TKey"),
                    PropertyDescriptor::new("Value", "TValue"),
                ],
            },
        );
        pair.namespace = "Data".to_string();
        set.insert(pair);
        set.insert(collection("Data.Pair`2[]", "Data.Pair`2"));
        let mut string_to_int = PropertyDescriptor::new("StringToInt", "Data.Pair`2");
        string_to_int.generic_args = vec![TypeKey::from("string"), TypeKey::from("i32")];
        let mut list_of_pairs = PropertyDescriptor::new("Pairs", "Data.Pair`2[]");
        list_of_pairs.generic_args = vec![TypeKey::from("i32"), TypeKey::from("string")];
        let mut holder = TypeDescriptor::new(
            "App.Holder",
            "Holder",
            TypeShape::Class {
                base: None,
                base_generic_args: Vec::new(),
                generic_params: Vec::new(),
                properties: vec![string_to_int, list_of_pairs],
            },
        );
        holder.namespace = "App".to_string();
        set.insert(holder);

        let model = model_for(&set, &["App.Holder"]);
        let script = DeclarationGenerator::new().generate(&model).unwrap();

        assert!(script.contains("StringToInt: Data.Pair<string, number>;"));
        assert!(script.contains("Pairs: Data.Pair<number, string>[];"));
    }

    #[test]
    fn test_duplicate_emission_is_prevented_within_one_call() {
        let set = shop_descriptors();
        let model = model_for(&set, &["Shop.Order", "Shop.Product"]);
        let script = DeclarationGenerator::new().generate(&model).unwrap();

        assert_eq!(script.matches("interface Product {").count(), 1);
    }

    #[test]
    fn test_empty_module_name_renders_without_wrapper() {
        let mut set = DescriptorSet::new();
        set.insert(primitive("string", PrimitiveKind::Str));
        set.insert(class_in(
            "Global",
            "Global",
            "",
            vec![PropertyDescriptor::new("Name", "string")],
        ));

        let model = model_for(&set, &["Global"]);
        let script = DeclarationGenerator::new().generate(&model).unwrap();

        assert!(script.contains("interface Global {"));
        assert!(!script.contains("module"));
    }
}
