//! Node instantiation hook.

use sitenav_graph::{NavGraph, NavNode};

/// Creates fresh, unpopulated node instances for the mapper.
///
/// The graph reference lets factories consult graph-wide settings when
/// choosing how to instantiate; the default ignores it.
pub trait NodeFactory: Send + Sync {
    /// Create an unpopulated node with the given identity.
    fn create(&self, graph: &NavGraph, key: String, implicit_resource_key: Option<String>)
    -> NavNode;
}

/// Default factory: a plain [`NavNode`] value.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultNodeFactory;

impl NodeFactory for DefaultNodeFactory {
    fn create(
        &self,
        _graph: &NavGraph,
        key: String,
        implicit_resource_key: Option<String>,
    ) -> NavNode {
        NavNode::new(key, implicit_resource_key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_factory_creates_unpopulated_node() {
        let graph = NavGraph::new();

        let node = DefaultNodeFactory.create(&graph, "home".to_owned(), Some("Nav".to_owned()));

        assert_eq!(node.key, "home");
        assert_eq!(node.resource_key.as_deref(), Some("Nav"));
        assert!(node.title.is_none());
        assert!(node.attributes.is_empty());
    }
}
