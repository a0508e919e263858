//! Display-text localization hooks.

/// Outcome of resolving one display attribute.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResourceResolution {
    /// The value to store on the node. `None` clears the field, deferring
    /// entirely to resource lookup.
    pub value: Option<String>,
    /// Explicit resource key recorded for the field, if the value named
    /// one.
    pub resource_key: Option<String>,
}

impl ResourceResolution {
    /// A literal value, untouched by localization.
    #[must_use]
    pub fn literal(value: Option<&str>) -> Self {
        Self {
            value: value.map(ToOwned::to_owned),
            resource_key: None,
        }
    }
}

/// Rewrites display attributes into deferred-resolution resource
/// references.
///
/// Implementations never fail: a value they do not recognize passes
/// through literally.
pub trait NodeLocalizer: Send + Sync {
    /// Resolve one display attribute (`"title"` or `"description"`).
    fn resolve(&self, attribute: &str, value: Option<&str>) -> ResourceResolution;
}

/// Marker prefix for explicit resource references.
const RESOURCE_PREFIX: &str = "$resources:";

/// Default localizer handling the `$resources:Class,Key[,Default]` form.
///
/// The class/key pair is recorded as the field's explicit resource key;
/// the stored value becomes the optional default, or is cleared so the
/// consumer falls back to resource lookup.
#[derive(Clone, Copy, Debug, Default)]
pub struct ResourceStringLocalizer;

impl NodeLocalizer for ResourceStringLocalizer {
    fn resolve(&self, _attribute: &str, value: Option<&str>) -> ResourceResolution {
        let Some(raw) = value else {
            return ResourceResolution::literal(None);
        };
        let Some(reference) = raw.strip_prefix(RESOURCE_PREFIX) else {
            return ResourceResolution::literal(Some(raw));
        };

        let mut parts = reference.splitn(3, ',');
        let class = parts.next().map(str::trim).unwrap_or_default();
        let key = parts.next().map(str::trim).unwrap_or_default();
        if class.is_empty() || key.is_empty() {
            // Not a well-formed reference; keep the literal text.
            return ResourceResolution::literal(Some(raw));
        }

        ResourceResolution {
            value: parts.next().map(ToOwned::to_owned),
            resource_key: Some(format!("{class},{key}")),
        }
    }
}
