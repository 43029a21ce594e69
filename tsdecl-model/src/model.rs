//! The resolved type model handed to declaration emitters.

use crate::graph::TypeGraph;

/// A resolved, module-grouped type graph plus document-level metadata.
///
/// The model is the read-only input of declaration generation; emitters
/// never mutate it.
#[derive(Debug, Clone, Default)]
pub struct TypeModel {
    graph: TypeGraph,
    references: Vec<String>,
}

impl TypeModel {
    /// Creates a model around a resolved graph.
    #[must_use]
    pub fn new(graph: TypeGraph) -> Self {
        Self {
            graph,
            references: Vec::new(),
        }
    }

    /// Returns the underlying graph.
    #[must_use]
    pub fn graph(&self) -> &TypeGraph {
        &self.graph
    }

    /// Returns the underlying graph mutably, for post-build adjustments
    /// such as ignore flags or module reassignment.
    pub fn graph_mut(&mut self) -> &mut TypeGraph {
        &mut self.graph
    }

    /// Adds an external-reference directive emitted ahead of all modules.
    pub fn add_reference(&mut self, path: impl Into<String>) {
        self.references.push(path.into());
    }

    /// Reference directives in registration order.
    #[must_use]
    pub fn references(&self) -> &[String] {
        &self.references
    }
}
