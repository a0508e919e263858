//! Depth-first tree construction.

use std::sync::Arc;

use sitenav_graph::{NavGraph, NodeId};
use sitenav_source::{NavDocument, NodeElement};

use crate::dynamic::{DynamicNodeBuilder, ProviderRegistry};
use crate::error::BuildError;
use crate::mapper::NodeMapper;

/// Walks the declarative document and registers the navigation tree.
///
/// Each child element is processed exactly once as a child of its mapped
/// parent. A template element (one naming a dynamic node provider) is
/// expanded instead of registered, and its static children are replayed
/// once per synthesized sibling.
pub struct TreeBuilder {
    mapper: NodeMapper,
    dynamic: Arc<dyn DynamicNodeBuilder>,
}

impl std::fmt::Debug for TreeBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TreeBuilder")
            .field("mapper", &self.mapper)
            .finish_non_exhaustive()
    }
}

impl TreeBuilder {
    /// Create a builder with an empty provider registry.
    #[must_use]
    pub fn new(mapper: NodeMapper) -> Self {
        Self {
            mapper,
            dynamic: Arc::new(ProviderRegistry::new()),
        }
    }

    /// Replace the dynamic node builder.
    #[must_use]
    pub fn with_dynamic_node_builder(mut self, dynamic: Arc<dyn DynamicNodeBuilder>) -> Self {
        self.dynamic = dynamic;
        self
    }

    /// Build the whole tree into `graph` and return the root handle.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError`] for unknown element types, mapping failures,
    /// or graph invariant violations. The graph may hold a partial tree on
    /// error; the coordinator discards it unpublished.
    pub fn build(&self, graph: &mut NavGraph, document: &NavDocument) -> Result<NodeId, BuildError> {
        graph.set_localization_enabled(document.enable_localization());

        let root = self.mapper.map(graph, None, document.root())?;
        let root_id = graph.add_node(root, None)?;
        self.process_children(graph, root_id, document.root())?;

        tracing::debug!(nodes = graph.len(), "navigation tree built");
        Ok(root_id)
    }

    /// Process the declaration's child elements under `parent`, in
    /// document order.
    fn process_children(
        &self,
        graph: &mut NavGraph,
        parent: NodeId,
        element: &NodeElement,
    ) -> Result<(), BuildError> {
        for child in element.children() {
            if !child.is_nav_node() {
                return Err(BuildError::UnexpectedElement {
                    name: child.name().to_owned(),
                });
            }

            let node = self.mapper.map(graph, Some(parent), child)?;
            if node.has_dynamic_node_provider() {
                // Expand the template into siblings, then replay its
                // static children under every synthesized node.
                let created = self.dynamic.build_dynamic_nodes(graph, &node, parent)?;
                for id in created {
                    self.process_children(graph, id, child)?;
                }
            } else {
                let id = graph.add_node(node, Some(parent))?;
                self.process_children(graph, id, child)?;
            }
        }
        Ok(())
    }
}
