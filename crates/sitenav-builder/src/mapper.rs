//! Declaration-to-node mapping.
//!
//! [`NodeMapper::map`] turns one node declaration plus its resolved parent
//! into a fully populated [`NavNode`]. Step order matters: identity is
//! computed from pre-default attribute values, display text passes through
//! localization before the implicit resource key can discard it, and the
//! routing/MVC blocks read the parent's *resolved* values, not its
//! declaration.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use sitenav_graph::{ChangeFrequency, NavGraph, NavNode, NodeId, UpdatePriority};
use sitenav_source::NodeElement;

use crate::attributes::AttributeClassifier;
use crate::error::BuildError;
use crate::factory::{DefaultNodeFactory, NodeFactory};
use crate::key::{DefaultKeyGenerator, KeyGenerator, KeyRequest};
use crate::localize::{NodeLocalizer, ResourceResolution, ResourceStringLocalizer};

/// Maps node declarations onto populated navigation nodes.
pub struct NodeMapper {
    classifier: AttributeClassifier,
    keys: Arc<dyn KeyGenerator>,
    localizer: Arc<dyn NodeLocalizer>,
    factory: Arc<dyn NodeFactory>,
}

impl NodeMapper {
    /// Create a mapper with the default key generator, localizer, and node
    /// factory.
    #[must_use]
    pub fn new(classifier: AttributeClassifier) -> Self {
        Self {
            classifier,
            keys: Arc::new(DefaultKeyGenerator),
            localizer: Arc::new(ResourceStringLocalizer),
            factory: Arc::new(DefaultNodeFactory),
        }
    }

    /// Replace the key generator.
    #[must_use]
    pub fn with_key_generator(mut self, keys: Arc<dyn KeyGenerator>) -> Self {
        self.keys = keys;
        self
    }

    /// Replace the localizer.
    #[must_use]
    pub fn with_localizer(mut self, localizer: Arc<dyn NodeLocalizer>) -> Self {
        self.localizer = localizer;
        self
    }

    /// Replace the node factory.
    #[must_use]
    pub fn with_factory(mut self, factory: Arc<dyn NodeFactory>) -> Self {
        self.factory = factory;
        self
    }

    /// Map one declaration against its resolved parent.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError`] for malformed boolean, enumerated, or
    /// timestamp attribute values.
    pub fn map(
        &self,
        graph: &NavGraph,
        parent: Option<NodeId>,
        element: &NodeElement,
    ) -> Result<NavNode, BuildError> {
        let parent_node = parent.map(|id| graph.node(id));

        // Structural routing identity, raw from the declaration.
        let area = non_empty(element.attribute("area"));
        let controller = non_empty(element.attribute("controller"));
        let action = non_empty(element.attribute("action"));
        let route = non_empty(element.attribute("route"));

        // Identity key, from pre-default attribute values: absence of an
        // explicit "false" counts as clickable here.
        let http_method = element.attribute_or("httpMethod", "*").to_uppercase();
        let key = self.keys.generate(&KeyRequest {
            parent_key: parent_node.map_or("", |p| p.key.as_str()),
            explicit_key: element.attribute_or("key", ""),
            url: element.attribute_or("url", ""),
            title: element.attribute_or("title", ""),
            area: area.unwrap_or(""),
            controller: controller.unwrap_or(""),
            action: action.unwrap_or(""),
            http_method: &http_method,
            clickable: element.attribute("clickable") != Some("false"),
        });

        // Display text. Description falls back to the literal title before
        // either passes through localization.
        let literal_title = element.attribute("title");
        let literal_description = element.attribute("description").or(literal_title);
        let mut explicit_resource_keys = HashMap::new();
        let (mut title, mut description) = if graph.localization_enabled() {
            let mut resolve = |field: &'static str, value: Option<&str>| {
                let resolution = self.localizer.resolve(field, value);
                if let Some(resource_key) = resolution.resource_key {
                    explicit_resource_keys.insert(field.to_owned(), resource_key);
                }
                resolution.value
            };
            (
                resolve("title", literal_title),
                resolve("description", literal_description),
            )
        } else {
            let literal = |value: Option<&str>| ResourceResolution::literal(value).value;
            (literal(literal_title), literal(literal_description))
        };

        // An implicit resource key takes precedence over literal text and
        // any per-field key from the step above.
        let implicit_resource_key = non_empty(element.attribute("resourceKey")).map(ToOwned::to_owned);
        if implicit_resource_key.is_some() {
            title = None;
            description = None;
        }

        let mut node = self.factory.create(graph, key, implicit_resource_key);

        node.title = title;
        node.description = description;
        node.explicit_resource_keys = explicit_resource_keys;
        node.attributes = self.classifier.acquire_attributes(element);
        node.roles = split_list(element.attribute_or("roles", ""));
        node.clickable = parse_bool("clickable", element.attribute_or("clickable", "true"))?;
        node.visibility_provider =
            non_empty(element.attribute("visibilityProvider")).map(ToOwned::to_owned);
        node.image_url = non_empty(element.attribute("imageUrl")).map(ToOwned::to_owned);
        node.target_frame = non_empty(element.attribute("targetFrame")).map(ToOwned::to_owned);
        node.http_method = http_method;
        node.dynamic_node_provider =
            non_empty(element.attribute("dynamicNodeProvider")).map(ToOwned::to_owned);

        // A non-clickable node carries no navigable URL, whatever was
        // declared.
        node.url = if node.clickable {
            element.attribute_or("url", "").to_owned()
        } else {
            String::new()
        };

        node.change_frequency = match non_empty(element.attribute("changeFrequency")) {
            Some(token) => token.parse()?,
            None => ChangeFrequency::Undefined,
        };
        node.update_priority = match non_empty(element.attribute("updatePriority")) {
            Some(token) => token.parse()?,
            None => UpdatePriority::Undefined,
        };
        node.last_modified = match non_empty(element.attribute("lastModifiedDate")) {
            Some(value) => parse_timestamp(value)?,
            None => DateTime::<Utc>::MIN_UTC,
        };

        // Routing block. Route-based and literal-URL addressing are
        // mutually exclusive.
        node.route = route.map(ToOwned::to_owned);
        node.route_values = self.classifier.acquire_route_values(element);
        node.preserved_route_parameters =
            split_list(element.attribute_or("preservedRouteParameters", ""));
        node.url_resolver = non_empty(element.attribute("urlResolver")).map(ToOwned::to_owned);
        if node.route.is_some() {
            node.url = String::new();
        }

        node.inherited_route_parameters =
            split_list(element.attribute_or("inheritedRouteParameters", ""));
        if let Some(parent_node) = parent_node {
            for name in &node.inherited_route_parameters {
                // Parameters the parent does not carry are skipped; the
                // node's own declared value wins over an inherited one.
                if let Some(value) = parent_node.route_values.get(name) {
                    node.route_values
                        .entry(name.clone())
                        .or_insert_with(|| value.clone());
                }
            }
        }

        // MVC block: unspecified area/controller copy the parent's
        // resolved value. Action is never inherited.
        node.area = area
            .map(ToOwned::to_owned)
            .or_else(|| parent_node.and_then(|p| p.area.clone()));
        node.controller = controller
            .map(ToOwned::to_owned)
            .or_else(|| parent_node.and_then(|p| p.controller.clone()));
        node.action = action.map(ToOwned::to_owned);

        // The implicit "area" routing parameter is always present.
        node.route_values.entry("area".to_owned()).or_default();

        Ok(node)
    }
}

impl std::fmt::Debug for NodeMapper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NodeMapper")
            .field("classifier", &self.classifier)
            .finish_non_exhaustive()
    }
}

/// Treat a declared-empty attribute the same as an absent one.
fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Split a `,`/`;`-separated list, trimming entries and dropping empties.
fn split_list(value: &str) -> Vec<String> {
    value
        .split([',', ';'])
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(ToOwned::to_owned)
        .collect()
}

fn parse_bool(field: &'static str, value: &str) -> Result<bool, BuildError> {
    match value {
        "true" => Ok(true),
        "false" => Ok(false),
        other => Err(BuildError::InvalidBool {
            field,
            value: other.to_owned(),
        }),
    }
}

/// Parse `lastModifiedDate`: RFC 3339, then a bare local datetime, then a
/// bare date at midnight.
fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, BuildError> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(value) {
        return Ok(instant.with_timezone(&Utc));
    }
    if let Ok(naive) = NaiveDateTime::parse_from_str(value, "%Y-%m-%dT%H:%M:%S") {
        return Ok(naive.and_utc());
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }
    Err(BuildError::InvalidTimestamp {
        value: value.to_owned(),
    })
}
