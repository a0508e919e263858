//! Error types for navigation graph construction.

use sitenav_graph::{GraphError, ParseEnumError};
use sitenav_source::SourceError;

/// Fatal error during a build pass.
///
/// Any of these aborts the in-progress build; the coordinator publishes
/// nothing, so partial graphs are never observable.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum BuildError {
    /// Graph invariant violation (duplicate key, second root).
    #[error("graph registration failed")]
    Graph(#[from] GraphError),

    /// Document loading or parsing failed.
    #[error("sitemap document error")]
    Source(#[from] SourceError),

    /// A child element is not the recognized node element type.
    #[error("unexpected element {name:?} in sitemap document")]
    UnexpectedElement {
        /// Local name of the offending element.
        name: String,
    },

    /// Malformed `changeFrequency` or `updatePriority` token.
    #[error("invalid enumerated attribute")]
    InvalidEnum(#[from] ParseEnumError),

    /// Malformed boolean attribute token.
    #[error("invalid {field} value: {value:?}")]
    InvalidBool {
        /// Attribute name.
        field: &'static str,
        /// The rejected token.
        value: String,
    },

    /// Malformed `lastModifiedDate` value.
    #[error("invalid lastModifiedDate value: {value:?}")]
    InvalidTimestamp {
        /// The rejected value.
        value: String,
    },

    /// A template names a dynamic node provider that is not registered.
    #[error("unknown dynamic node provider: {name:?}")]
    UnknownDynamicNodeProvider {
        /// The unregistered provider name.
        name: String,
    },
}
