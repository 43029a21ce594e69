//! Fluent configuration wrapper around the builder/resolver/generator
//! pipeline.

use tsdecl_codegen::{CodegenError, DeclarationGenerator, OutputMode};
use tsdecl_model::{
    ClassNode, DescriptorSet, ModelError, Property, Resolver, TypeGraphBuilder, TypeKey,
    TypeModel,
};

/// Creates a fluent definition builder over a descriptor set.
#[must_use]
pub fn definitions(descriptors: &DescriptorSet) -> Definitions<'_> {
    Definitions::new(descriptors)
}

/// Combines the graph builder, resolver and generator behind a chainable
/// configuration surface.
///
/// Roots are recorded up front; the graph is built, resolved and rendered
/// when [`Definitions::generate`] is called, so configuration errors
/// surface at one place.
pub struct Definitions<'a> {
    descriptors: &'a DescriptorSet,
    roots: Vec<TypeKey>,
    enum_roots: Vec<TypeKey>,
    references: Vec<String>,
    generator: DeclarationGenerator,
}

impl<'a> Definitions<'a> {
    /// Creates a definition builder with the default generation policies.
    #[must_use]
    pub fn new(descriptors: &'a DescriptorSet) -> Self {
        Self {
            descriptors,
            roots: Vec::new(),
            enum_roots: Vec::new(),
            references: Vec::new(),
            generator: DeclarationGenerator::new(),
        }
    }

    /// Adds a root class, with all referenced composite types.
    #[must_use]
    pub fn for_type(mut self, key: impl Into<TypeKey>) -> Self {
        self.roots.push(key.into());
        self
    }

    /// Adds a standalone enumeration.
    #[must_use]
    pub fn for_enum(mut self, key: impl Into<TypeKey>) -> Self {
        self.enum_roots.push(key.into());
        self
    }

    /// Adds an external-reference directive to the generated document.
    #[must_use]
    pub fn with_reference(mut self, path: impl Into<String>) -> Self {
        self.references.push(path.into());
        self
    }

    /// Registers a member name formatter.
    #[must_use]
    pub fn with_member_formatter(
        mut self,
        formatter: impl Fn(&Property) -> String + 'static,
    ) -> Self {
        self.generator.set_member_formatter(formatter);
        self
    }

    /// Registers a module name formatter.
    #[must_use]
    pub fn with_module_formatter(mut self, formatter: impl Fn(&str) -> String + 'static) -> Self {
        self.generator.set_module_formatter(formatter);
        self
    }

    /// Registers a class visibility predicate.
    #[must_use]
    pub fn with_visibility(mut self, predicate: impl Fn(&ClassNode) -> bool + 'static) -> Self {
        self.generator.set_visibility(predicate);
        self
    }

    /// Registers a literal-conversion override for one identity.
    #[must_use]
    pub fn with_converter(
        mut self,
        key: impl Into<TypeKey>,
        converter: impl Fn(&TypeKey) -> String + 'static,
    ) -> Self {
        self.generator.register_converter(key.into(), converter);
        self
    }

    /// Builds and resolves the type model for the recorded roots.
    ///
    /// # Errors
    /// Returns `ModelError` if a root is unknown or not a composite type.
    pub fn build_model(&self) -> Result<TypeModel, ModelError> {
        let mut builder = TypeGraphBuilder::new(self.descriptors);
        for root in &self.roots {
            builder.add(root)?;
        }
        for root in &self.enum_roots {
            builder.add_enum(root)?;
        }

        let mut graph = builder.build();
        Resolver::new(self.descriptors).resolve(&mut graph);

        let mut model = TypeModel::new(graph);
        for reference in &self.references {
            model.add_reference(reference.clone());
        }
        Ok(model)
    }

    /// Generates declarations with the default output mode.
    ///
    /// # Errors
    /// Returns `CodegenError` if model construction or generation fails.
    pub fn generate(&self) -> Result<String, CodegenError> {
        self.generate_with(OutputMode::DEFAULT)
    }

    /// Generates declarations for the requested output mode.
    ///
    /// # Errors
    /// Returns `CodegenError` if model construction or generation fails.
    pub fn generate_with(&self, mode: OutputMode) -> Result<String, CodegenError> {
        tracing::debug!(
            "generating declarations for {} root types",
            self.roots.len() + self.enum_roots.len()
        );
        let model = self.build_model()?;
        self.generator.generate_with(&model, mode)
    }
}
