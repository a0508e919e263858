//! Navigation graph with key-unique registration.
//!
//! # Architecture
//!
//! Nodes are stored in a flat `Vec<NavNode>` with parent/children
//! relationships tracked by indices. This provides:
//! - O(1) key lookups via the `key_index` `HashMap`
//! - O(d) breadcrumb trails where d is the node depth
//!
//! The graph is mutable only through [`NavGraph::add_node`]; readers get
//! shared references, so a published graph never changes shape.

use std::collections::HashMap;

use crate::node::NavNode;

/// Opaque handle to a node registered in a [`NavGraph`].
///
/// Handles are only meaningful for the graph that issued them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in document order.
    #[must_use]
    pub fn index(self) -> usize {
        self.0
    }
}

/// Structural invariant violation during node registration.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum GraphError {
    /// A node with this key is already registered.
    #[error("duplicate node key: {key:?}")]
    DuplicateKey {
        /// The colliding key.
        key: String,
    },

    /// A second root registration was attempted.
    #[error("graph root is already set")]
    RootAlreadySet,
}

/// The navigation tree plus graph-level settings.
///
/// Holds at most one root. Registration enforces global key uniqueness and
/// fixes each node's parent permanently. Child order is insertion order,
/// which the builder guarantees to be document order.
#[derive(Debug, Default)]
pub struct NavGraph {
    nodes: Vec<NavNode>,
    children: Vec<Vec<NodeId>>,
    parents: Vec<Option<NodeId>>,
    root: Option<NodeId>,
    key_index: HashMap<String, NodeId>,
    localization_enabled: bool,
}

impl NavGraph {
    /// Create an empty graph with localization disabled.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether display values may be rewritten into resource references.
    #[must_use]
    pub fn localization_enabled(&self) -> bool {
        self.localization_enabled
    }

    /// Toggle graph-wide localization.
    pub fn set_localization_enabled(&mut self, enabled: bool) {
        self.localization_enabled = enabled;
    }

    /// Register a node under `parent`, or as the root when `parent` is
    /// `None`.
    ///
    /// The parent link is set here and never changes afterwards.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::DuplicateKey`] if a node with the same key is
    /// already registered, and [`GraphError::RootAlreadySet`] for a second
    /// root registration.
    pub fn add_node(
        &mut self,
        node: NavNode,
        parent: Option<NodeId>,
    ) -> Result<NodeId, GraphError> {
        if self.key_index.contains_key(&node.key) {
            return Err(GraphError::DuplicateKey {
                key: node.key.clone(),
            });
        }
        if parent.is_none() && self.root.is_some() {
            return Err(GraphError::RootAlreadySet);
        }

        let id = NodeId(self.nodes.len());
        self.key_index.insert(node.key.clone(), id);
        self.nodes.push(node);
        self.children.push(Vec::new());
        self.parents.push(parent);

        if let Some(parent) = parent {
            self.children[parent.0].push(id);
        } else {
            self.root = Some(id);
        }

        Ok(id)
    }

    /// The root node handle, if a build has registered one.
    #[must_use]
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// The root node, if a build has registered one.
    #[must_use]
    pub fn root_node(&self) -> Option<&NavNode> {
        self.root.map(|id| &self.nodes[id.0])
    }

    /// Node for a handle issued by this graph.
    ///
    /// # Panics
    ///
    /// Panics if `id` came from a different graph and is out of range.
    #[must_use]
    pub fn node(&self, id: NodeId) -> &NavNode {
        &self.nodes[id.0]
    }

    /// Look a node up by key.
    #[must_use]
    pub fn find_by_key(&self, key: &str) -> Option<NodeId> {
        self.key_index.get(key).copied()
    }

    /// Children of a node, in document order.
    #[must_use]
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.children[id.0]
    }

    /// Parent of a node. `None` for the root.
    #[must_use]
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.parents[id.0]
    }

    /// Walk the parent chain and return it root-first, ending at `id`.
    ///
    /// This is the ancestor trail a breadcrumb renderer consumes.
    #[must_use]
    pub fn breadcrumb_trail(&self, id: NodeId) -> Vec<NodeId> {
        let mut trail = Vec::new();
        let mut current = Some(id);
        while let Some(node) = current {
            trail.push(node);
            current = self.parents[node.0];
        }
        trail.reverse();
        trail
    }

    /// All nodes with their handles, in registration (document) order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &NavNode)> {
        self.nodes.iter().enumerate().map(|(i, n)| (NodeId(i), n))
    }

    /// Number of registered nodes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// True when no node has been registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn node(key: &str) -> NavNode {
        NavNode::new(key, None)
    }

    #[test]
    fn test_add_node_sets_root() {
        let mut graph = NavGraph::new();

        let root = graph.add_node(node("home"), None).unwrap();

        assert_eq!(graph.root(), Some(root));
        assert_eq!(graph.root_node().unwrap().key, "home");
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn test_add_node_links_parent_and_child() {
        let mut graph = NavGraph::new();
        let root = graph.add_node(node("home"), None).unwrap();

        let child = graph.add_node(node("about"), Some(root)).unwrap();

        assert_eq!(graph.parent(child), Some(root));
        assert_eq!(graph.children(root), vec![child]);
        assert_eq!(graph.parent(root), None);
    }

    #[test]
    fn test_add_node_rejects_duplicate_key() {
        let mut graph = NavGraph::new();
        let root = graph.add_node(node("home"), None).unwrap();
        graph.add_node(node("about"), Some(root)).unwrap();

        let err = graph.add_node(node("about"), Some(root)).unwrap_err();

        assert!(matches!(err, GraphError::DuplicateKey { key } if key == "about"));
        assert_eq!(graph.len(), 2);
    }

    #[test]
    fn test_add_node_rejects_second_root() {
        let mut graph = NavGraph::new();
        graph.add_node(node("home"), None).unwrap();

        let err = graph.add_node(node("other"), None).unwrap_err();

        assert!(matches!(err, GraphError::RootAlreadySet));
    }

    #[test]
    fn test_children_preserve_insertion_order() {
        let mut graph = NavGraph::new();
        let root = graph.add_node(node("home"), None).unwrap();
        let a = graph.add_node(node("a"), Some(root)).unwrap();
        let b = graph.add_node(node("b"), Some(root)).unwrap();
        let c = graph.add_node(node("c"), Some(root)).unwrap();

        assert_eq!(graph.children(root), vec![a, b, c]);
    }

    #[test]
    fn test_find_by_key() {
        let mut graph = NavGraph::new();
        let root = graph.add_node(node("home"), None).unwrap();
        let about = graph.add_node(node("about"), Some(root)).unwrap();

        assert_eq!(graph.find_by_key("about"), Some(about));
        assert_eq!(graph.find_by_key("missing"), None);
    }

    #[test]
    fn test_breadcrumb_trail_is_root_first() {
        let mut graph = NavGraph::new();
        let root = graph.add_node(node("home"), None).unwrap();
        let section = graph.add_node(node("docs"), Some(root)).unwrap();
        let leaf = graph.add_node(node("docs-intro"), Some(section)).unwrap();

        assert_eq!(graph.breadcrumb_trail(leaf), vec![root, section, leaf]);
        assert_eq!(graph.breadcrumb_trail(root), vec![root]);
    }

    #[test]
    fn test_nodes_iterates_in_document_order() {
        let mut graph = NavGraph::new();
        let root = graph.add_node(node("home"), None).unwrap();
        graph.add_node(node("a"), Some(root)).unwrap();
        graph.add_node(node("b"), Some(root)).unwrap();

        let keys: Vec<_> = graph.nodes().map(|(_, n)| n.key.as_str()).collect();

        assert_eq!(keys, vec!["home", "a", "b"]);
    }

    #[test]
    fn test_localization_flag_defaults_off() {
        let mut graph = NavGraph::new();

        assert!(!graph.localization_enabled());

        graph.set_localization_enabled(true);
        assert!(graph.localization_enabled());
    }
}
