//! Dynamic node expansion.
//!
//! A declaration carrying a `dynamicNodeProvider` attribute is a template:
//! it is never registered itself. The named provider yields any number of
//! [`DynamicNode`] override records, each merged over the template and
//! registered as a sibling under the template's parent. The tree builder
//! then replays the template's static children once per synthesized node.

use std::collections::HashMap;
use std::sync::Arc;

use sitenav_graph::{NavGraph, NavNode, NodeId};

use crate::error::BuildError;

/// Per-instance overrides a provider applies to its template.
#[derive(Clone, Debug, Default)]
pub struct DynamicNode {
    /// Identity for the synthesized node. Derived from the template key
    /// and the instance position when absent.
    pub key: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    /// Route values layered over the template's (instance value wins).
    pub route_values: HashMap<String, String>,
    /// Attribute-bag entries layered over the template's.
    pub attributes: HashMap<String, String>,
}

impl DynamicNode {
    /// Create an override record with no overrides.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the synthesized node's key.
    #[must_use]
    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Set the synthesized node's title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Add a route value for the synthesized node.
    #[must_use]
    pub fn with_route_value(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.route_values.insert(name.into(), value.into());
        self
    }
}

/// Application hook producing the instances a template expands into.
pub trait DynamicNodeProvider: Send + Sync {
    /// Yield the override records for one template, in output order.
    fn dynamic_nodes(&self, template: &NavNode) -> Vec<DynamicNode>;
}

/// Expands a template into registered sibling nodes.
pub trait DynamicNodeBuilder: Send + Sync {
    /// Register the template's instances under `parent` and return their
    /// handles in order.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError`] when the template names an unknown provider
    /// or a synthesized key collides with a registered node.
    fn build_dynamic_nodes(
        &self,
        graph: &mut NavGraph,
        template: &NavNode,
        parent: NodeId,
    ) -> Result<Vec<NodeId>, BuildError>;
}

/// Default [`DynamicNodeBuilder`]: providers registered by the name the
/// `dynamicNodeProvider` attribute uses.
#[derive(Clone, Default)]
pub struct ProviderRegistry {
    providers: HashMap<String, Arc<dyn DynamicNodeProvider>>,
}

impl ProviderRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a provider under the given name.
    #[must_use]
    pub fn with_provider(
        mut self,
        name: impl Into<String>,
        provider: Arc<dyn DynamicNodeProvider>,
    ) -> Self {
        self.providers.insert(name.into(), provider);
        self
    }
}

impl std::fmt::Debug for ProviderRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderRegistry")
            .field("providers", &self.providers.keys())
            .finish()
    }
}

impl DynamicNodeBuilder for ProviderRegistry {
    fn build_dynamic_nodes(
        &self,
        graph: &mut NavGraph,
        template: &NavNode,
        parent: NodeId,
    ) -> Result<Vec<NodeId>, BuildError> {
        let name = template.dynamic_node_provider.as_deref().unwrap_or_default();
        let provider =
            self.providers
                .get(name)
                .ok_or_else(|| BuildError::UnknownDynamicNodeProvider {
                    name: name.to_owned(),
                })?;

        let instances = provider.dynamic_nodes(template);
        tracing::debug!(provider = name, count = instances.len(), "expanding template node");

        let mut created = Vec::with_capacity(instances.len());
        for (position, instance) in instances.into_iter().enumerate() {
            let node = materialize(template, instance, position);
            created.push(graph.add_node(node, Some(parent))?);
        }
        Ok(created)
    }
}

/// Merge one override record over the template.
fn materialize(template: &NavNode, instance: DynamicNode, position: usize) -> NavNode {
    let mut node = template.clone();
    // Synthesized nodes are real nodes, not templates.
    node.dynamic_node_provider = None;
    node.key = instance
        .key
        .unwrap_or_else(|| format!("{}_{position}", template.key));
    if instance.title.is_some() {
        node.title = instance.title;
    }
    if instance.description.is_some() {
        node.description = instance.description;
    }
    node.route_values.extend(instance.route_values);
    node.attributes.extend(instance.attributes);
    node
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    struct FixedProvider(Vec<DynamicNode>);

    impl DynamicNodeProvider for FixedProvider {
        fn dynamic_nodes(&self, _template: &NavNode) -> Vec<DynamicNode> {
            self.0.clone()
        }
    }

    fn template(provider: &str) -> NavNode {
        let mut node = NavNode::new("product-template", None);
        node.title = Some("Product".to_owned());
        node.dynamic_node_provider = Some(provider.to_owned());
        node.route_values
            .insert("category".to_owned(), "tools".to_owned());
        node
    }

    #[test]
    fn test_unknown_provider_is_fatal() {
        let registry = ProviderRegistry::new();
        let mut graph = NavGraph::new();
        let root = graph.add_node(NavNode::new("root", None), None).unwrap();

        let err = registry
            .build_dynamic_nodes(&mut graph, &template("missing"), root)
            .unwrap_err();

        assert!(matches!(
            err,
            BuildError::UnknownDynamicNodeProvider { name } if name == "missing"
        ));
    }

    #[test]
    fn test_expansion_registers_instances_in_order() {
        let registry = ProviderRegistry::new().with_provider(
            "products",
            Arc::new(FixedProvider(vec![
                DynamicNode::new().with_key("p-1").with_title("Hammer"),
                DynamicNode::new().with_key("p-2").with_title("Saw"),
            ])),
        );
        let mut graph = NavGraph::new();
        let root = graph.add_node(NavNode::new("root", None), None).unwrap();

        let created = registry
            .build_dynamic_nodes(&mut graph, &template("products"), root)
            .unwrap();

        assert_eq!(created.len(), 2);
        assert_eq!(graph.children(root), created.as_slice());
        assert_eq!(graph.node(created[0]).title.as_deref(), Some("Hammer"));
        assert_eq!(graph.node(created[1]).title.as_deref(), Some("Saw"));
        // The template itself was never registered.
        assert!(graph.find_by_key("product-template").is_none());
    }

    #[test]
    fn test_instances_inherit_template_fields() {
        let registry = ProviderRegistry::new().with_provider(
            "products",
            Arc::new(FixedProvider(vec![
                DynamicNode::new()
                    .with_key("p-1")
                    .with_route_value("id", "1"),
            ])),
        );
        let mut graph = NavGraph::new();
        let root = graph.add_node(NavNode::new("root", None), None).unwrap();

        let created = registry
            .build_dynamic_nodes(&mut graph, &template("products"), root)
            .unwrap();

        let node = graph.node(created[0]);
        // Template values survive; instance values layer on top.
        assert_eq!(node.title.as_deref(), Some("Product"));
        assert_eq!(node.route_values.get("category").map(String::as_str), Some("tools"));
        assert_eq!(node.route_values.get("id").map(String::as_str), Some("1"));
        assert!(!node.has_dynamic_node_provider());
    }

    #[test]
    fn test_missing_instance_key_derives_from_template() {
        let registry = ProviderRegistry::new().with_provider(
            "products",
            Arc::new(FixedProvider(vec![DynamicNode::new(), DynamicNode::new()])),
        );
        let mut graph = NavGraph::new();
        let root = graph.add_node(NavNode::new("root", None), None).unwrap();

        let created = registry
            .build_dynamic_nodes(&mut graph, &template("products"), root)
            .unwrap();

        assert_eq!(graph.node(created[0]).key, "product-template_0");
        assert_eq!(graph.node(created[1]).key, "product-template_1");
    }

    #[test]
    fn test_duplicate_synthesized_key_is_fatal() {
        let registry = ProviderRegistry::new().with_provider(
            "products",
            Arc::new(FixedProvider(vec![
                DynamicNode::new().with_key("dup"),
                DynamicNode::new().with_key("dup"),
            ])),
        );
        let mut graph = NavGraph::new();
        let root = graph.add_node(NavNode::new("root", None), None).unwrap();

        let err = registry
            .build_dynamic_nodes(&mut graph, &template("products"), root)
            .unwrap_err();

        assert!(matches!(err, BuildError::Graph(_)));
    }
}
