//! Navigation node and its enumerated metadata.

use std::collections::HashMap;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Error parsing an enumerated attribute token.
#[derive(Debug, thiserror::Error)]
#[error("unrecognized {field} value: {token:?}")]
pub struct ParseEnumError {
    /// Attribute the token came from.
    pub field: &'static str,
    /// The rejected token.
    pub token: String,
}

/// Expected change frequency of a node's target, for sitemap consumers.
///
/// `Undefined` is used whenever the declaration leaves the attribute out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChangeFrequency {
    /// Not specified in the declaration.
    #[default]
    Undefined,
    Always,
    Hourly,
    Daily,
    Weekly,
    Monthly,
    Yearly,
    Never,
}

impl FromStr for ChangeFrequency {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Undefined" => Ok(Self::Undefined),
            "Always" => Ok(Self::Always),
            "Hourly" => Ok(Self::Hourly),
            "Daily" => Ok(Self::Daily),
            "Weekly" => Ok(Self::Weekly),
            "Monthly" => Ok(Self::Monthly),
            "Yearly" => Ok(Self::Yearly),
            "Never" => Ok(Self::Never),
            _ => Err(ParseEnumError {
                field: "changeFrequency",
                token: s.to_owned(),
            }),
        }
    }
}

/// Update priority of a node's target, for sitemap consumers.
///
/// `Undefined` is used whenever the declaration leaves the attribute out.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum UpdatePriority {
    /// Not specified in the declaration.
    #[default]
    Undefined,
    Automatic,
    Low,
    Normal,
    High,
    Critical,
}

impl FromStr for UpdatePriority {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Undefined" => Ok(Self::Undefined),
            "Automatic" => Ok(Self::Automatic),
            "Low" => Ok(Self::Low),
            "Normal" => Ok(Self::Normal),
            "High" => Ok(Self::High),
            "Critical" => Ok(Self::Critical),
            _ => Err(ParseEnumError {
                field: "updatePriority",
                token: s.to_owned(),
            }),
        }
    }
}

/// One node of the navigation tree.
///
/// A `NavNode` is a plain value until it is registered into a
/// [`NavGraph`](crate::NavGraph); the graph only hands out shared
/// references afterwards, so registered nodes are effectively immutable.
///
/// All routing fields are fully populated by the mapper regardless of
/// whether the node is addressed by literal URL, by route, or not at all.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NavNode {
    /// Unique identity within the graph. Generated when the declaration
    /// carries no explicit `key` attribute.
    pub key: String,
    /// Display title. `None` when an implicit resource key takes over.
    pub title: Option<String>,
    /// Display description. Defaults to the literal title when absent.
    pub description: Option<String>,
    /// Implicit resource key (`resourceKey` attribute).
    pub resource_key: Option<String>,
    /// Explicit resource keys recorded per display field by the localizer.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub explicit_resource_keys: HashMap<String, String>,
    /// Free-form metadata bag.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub attributes: HashMap<String, String>,
    /// Access-control role tags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub roles: Vec<String>,
    /// False for grouping nodes that carry no navigable URL.
    pub clickable: bool,
    /// Literal target URL. Forced empty when not clickable or when `route`
    /// addressing is used.
    pub url: String,
    /// Named route, mutually exclusive with a literal `url`.
    pub route: Option<String>,
    /// Routing parameters, including values inherited from the parent.
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub route_values: HashMap<String, String>,
    /// Request parameters preserved when generating URLs.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub preserved_route_parameters: Vec<String>,
    /// Parent route-value names this node asked to inherit.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub inherited_route_parameters: Vec<String>,
    /// Named URL resolver override.
    pub url_resolver: Option<String>,
    /// MVC area; inherits the parent's resolved value when unspecified.
    pub area: Option<String>,
    /// MVC controller; inherits the parent's resolved value when
    /// unspecified.
    pub controller: Option<String>,
    /// MVC action. Never inherited.
    pub action: Option<String>,
    /// Named visibility provider override.
    pub visibility_provider: Option<String>,
    pub image_url: Option<String>,
    pub target_frame: Option<String>,
    /// Expected change frequency for sitemap output.
    pub change_frequency: ChangeFrequency,
    /// Update priority for sitemap output.
    pub update_priority: UpdatePriority,
    /// Last modification timestamp; the minimum representable instant when
    /// unspecified.
    pub last_modified: DateTime<Utc>,
    /// Accepted HTTP method, upper-cased; `"*"` when unspecified.
    pub http_method: String,
    /// Names the dynamic node provider that expands this node. A node with
    /// a provider is a template and is never registered itself.
    pub dynamic_node_provider: Option<String>,
}

impl NavNode {
    /// Create a fresh, unpopulated node with the given identity.
    #[must_use]
    pub fn new(key: impl Into<String>, resource_key: Option<String>) -> Self {
        Self {
            key: key.into(),
            title: None,
            description: None,
            resource_key,
            explicit_resource_keys: HashMap::new(),
            attributes: HashMap::new(),
            roles: Vec::new(),
            clickable: true,
            url: String::new(),
            route: None,
            route_values: HashMap::new(),
            preserved_route_parameters: Vec::new(),
            inherited_route_parameters: Vec::new(),
            url_resolver: None,
            area: None,
            controller: None,
            action: None,
            visibility_provider: None,
            image_url: None,
            target_frame: None,
            change_frequency: ChangeFrequency::Undefined,
            update_priority: UpdatePriority::Undefined,
            last_modified: DateTime::<Utc>::MIN_UTC,
            http_method: "*".to_owned(),
            dynamic_node_provider: None,
        }
    }

    /// True if this node is a template expanded by a dynamic node provider.
    #[must_use]
    pub fn has_dynamic_node_provider(&self) -> bool {
        self.dynamic_node_provider
            .as_deref()
            .is_some_and(|p| !p.is_empty())
    }
}
