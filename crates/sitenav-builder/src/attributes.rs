//! Attribute classification for node declarations.
//!
//! Every declared attribute is sorted into up to two buckets:
//! - the *regular* bucket, copied verbatim into the node's attribute bag
//! - the *route* bucket, copied into the node's routing-parameter map
//!
//! The buckets are independent: a plain custom attribute lands in both.
//! `title` and `description` land in neither. Structural names consumed by
//! the mapper itself, caller-ignored names, and `data-`-prefixed names are
//! kept out of the route bucket only.

use std::collections::HashMap;

use sitenav_source::NodeElement;

/// Structural attribute names consumed by the mapper. Never routing
/// parameters.
pub const RESERVED_ATTRIBUTES: &[&str] = &[
    "title",
    "description",
    "resourceKey",
    "key",
    "roles",
    "route",
    "url",
    "clickable",
    "httpMethod",
    "urlResolver",
    "visibilityProvider",
    "lastModifiedDate",
    "changeFrequency",
    "updatePriority",
    "targetFrame",
    "imageUrl",
    "inheritedRouteParameters",
    "preservedRouteParameters",
    "dynamicNodeProvider",
];

/// Prefix marking presentation-only attributes, excluded from routing.
pub const DATA_ATTRIBUTE_PREFIX: &str = "data-";

/// Sorts declared attributes into the regular and route buckets.
#[derive(Clone, Debug, Default)]
pub struct AttributeClassifier {
    ignore: Vec<String>,
}

impl AttributeClassifier {
    /// Create a classifier with a caller-supplied ignore list extending the
    /// route exclusion set.
    #[must_use]
    pub fn new(ignore: impl IntoIterator<Item = String>) -> Self {
        Self {
            ignore: ignore.into_iter().collect(),
        }
    }

    /// True if the attribute belongs in the node's free-form attribute bag.
    #[must_use]
    pub fn is_regular(&self, name: &str) -> bool {
        name != "title" && name != "description"
    }

    /// True if the attribute is a routing-parameter candidate.
    #[must_use]
    pub fn is_route(&self, name: &str) -> bool {
        !RESERVED_ATTRIBUTES.contains(&name)
            && !self.ignore.iter().any(|ignored| ignored == name)
            && !name.starts_with(DATA_ATTRIBUTE_PREFIX)
    }

    /// Collect the regular bucket from a declaration.
    #[must_use]
    pub fn acquire_attributes(&self, element: &NodeElement) -> HashMap<String, String> {
        element
            .attributes()
            .filter(|(name, _)| self.is_regular(name))
            .map(|(name, value)| (name.to_owned(), value.to_owned()))
            .collect()
    }

    /// Collect the route bucket from a declaration.
    #[must_use]
    pub fn acquire_route_values(&self, element: &NodeElement) -> HashMap<String, String> {
        element
            .attributes()
            .filter(|(name, _)| self.is_route(name))
            .map(|(name, value)| (name.to_owned(), value.to_owned()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use sitenav_source::NAV_NODE_ELEMENT;

    use super::*;

    fn element() -> NodeElement {
        NodeElement::new(NAV_NODE_ELEMENT)
            .with_attribute("title", "Products")
            .with_attribute("key", "products")
            .with_attribute("id", "5")
            .with_attribute("data-icon", "cart")
            .with_attribute("tracking", "off")
    }

    #[test]
    fn test_regular_bucket_excludes_only_display_text() {
        let classifier = AttributeClassifier::default();

        let attributes = classifier.acquire_attributes(&element());

        assert!(!attributes.contains_key("title"));
        assert!(!attributes.contains_key("description"));
        // Structural and data- names still land in the bag.
        assert_eq!(attributes.get("key").map(String::as_str), Some("products"));
        assert_eq!(
            attributes.get("data-icon").map(String::as_str),
            Some("cart")
        );
        assert_eq!(attributes.get("id").map(String::as_str), Some("5"));
    }

    #[test]
    fn test_route_bucket_excludes_reserved_ignored_and_data_names() {
        let classifier = AttributeClassifier::new(["tracking".to_owned()]);

        let route_values = classifier.acquire_route_values(&element());

        assert_eq!(route_values.get("id").map(String::as_str), Some("5"));
        assert!(!route_values.contains_key("title"));
        assert!(!route_values.contains_key("key"));
        assert!(!route_values.contains_key("data-icon"));
        assert!(!route_values.contains_key("tracking"));
    }

    #[test]
    fn test_custom_attribute_lands_in_both_buckets() {
        let classifier = AttributeClassifier::default();
        let element = NodeElement::new(NAV_NODE_ELEMENT).with_attribute("id", "7");

        assert!(classifier.is_regular("id"));
        assert!(classifier.is_route("id"));
        assert_eq!(
            classifier.acquire_attributes(&element).get("id"),
            classifier.acquire_route_values(&element).get("id")
        );
    }

    #[test]
    fn test_mvc_identity_names_are_route_candidates() {
        // area/controller/action are not reserved; declared values flow
        // into the route map.
        let classifier = AttributeClassifier::default();

        assert!(classifier.is_route("area"));
        assert!(classifier.is_route("controller"));
        assert!(classifier.is_route("action"));
    }

    #[test]
    fn test_dynamic_node_provider_is_reserved() {
        let classifier = AttributeClassifier::default();

        assert!(!classifier.is_route("dynamicNodeProvider"));
        assert!(classifier.is_regular("dynamicNodeProvider"));
    }
}
