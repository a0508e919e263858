//! Node identity generation.

/// Identity fields handed to a [`KeyGenerator`].
///
/// `clickable` is derived from the literal `clickable` attribute before
/// defaulting: anything but an explicit `"false"` counts as clickable.
#[derive(Clone, Copy, Debug)]
pub struct KeyRequest<'a> {
    /// Resolved key of the parent node, `""` at the root.
    pub parent_key: &'a str,
    /// Author-assigned `key` attribute, `""` when absent.
    pub explicit_key: &'a str,
    pub url: &'a str,
    pub title: &'a str,
    pub area: &'a str,
    pub controller: &'a str,
    pub action: &'a str,
    /// Upper-cased HTTP method.
    pub http_method: &'a str,
    pub clickable: bool,
}

/// Generates the unique identity key for a node.
///
/// Must be deterministic and distinct for meaningfully different requests
/// within one graph; the graph rejects collisions at registration.
pub trait KeyGenerator: Send + Sync {
    /// Produce the key for one node declaration.
    fn generate(&self, request: &KeyRequest<'_>) -> String;
}

/// Default generator: an author-assigned key verbatim, otherwise a
/// composite of the identity fields.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultKeyGenerator;

impl KeyGenerator for DefaultKeyGenerator {
    fn generate(&self, request: &KeyRequest<'_>) -> String {
        if !request.explicit_key.is_empty() {
            return request.explicit_key.to_owned();
        }
        [
            request.parent_key,
            request.url,
            request.title,
            request.area,
            request.controller,
            request.action,
            request.http_method,
            if request.clickable { "true" } else { "false" },
        ]
        .join("|")
    }
}
