//! Parsed declarative document model.

use serde::{Deserialize, Serialize};

/// Local name of the document wrapper element.
pub const SITE_NAV_ELEMENT: &str = "siteNav";

/// Local name of the node element type the tree builder recognizes.
pub const NAV_NODE_ELEMENT: &str = "navNode";

/// One element of the declarative document.
///
/// Attributes and children keep document order. Element names are local
/// names; any namespace prefix is stripped during parsing, so matching is
/// namespace-insensitive.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NodeElement {
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<NodeElement>,
}

impl NodeElement {
    /// Create an element with the given local name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Add an attribute, keeping declaration order. Builder-style, used by
    /// parsers and tests.
    #[must_use]
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Append a child element, keeping document order.
    #[must_use]
    pub fn with_child(mut self, child: NodeElement) -> Self {
        self.children.push(child);
        self
    }

    /// Local element name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// True if this element is the recognized node element type.
    #[must_use]
    pub fn is_nav_node(&self) -> bool {
        self.name == NAV_NODE_ELEMENT
    }

    /// Attribute value by name. Distinguishes absent (`None`) from
    /// declared-empty (`Some("")`).
    #[must_use]
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Attribute value with a fallback default for absent attributes.
    #[must_use]
    pub fn attribute_or<'a>(&'a self, name: &str, default: &'a str) -> &'a str {
        self.attribute(name).unwrap_or(default)
    }

    /// All attributes in declaration order.
    pub fn attributes(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attributes.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Child elements in document order.
    #[must_use]
    pub fn children(&self) -> &[NodeElement] {
        &self.children
    }
}

/// The parsed declarative document: wrapper settings plus the single
/// top-level node element.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavDocument {
    enable_localization: bool,
    root: NodeElement,
}

impl NavDocument {
    /// Create a document from its parts.
    #[must_use]
    pub fn new(enable_localization: bool, root: NodeElement) -> Self {
        Self {
            enable_localization,
            root,
        }
    }

    /// Graph-wide localization toggle from the wrapper element.
    #[must_use]
    pub fn enable_localization(&self) -> bool {
        self.enable_localization
    }

    /// The top-level node element.
    #[must_use]
    pub fn root(&self) -> &NodeElement {
        &self.root
    }
}
