//! Document source trait and error type.

use std::path::PathBuf;

use crate::element::NavDocument;

/// Error loading or parsing a sitemap document.
///
/// An absent document is not an error; sources signal it with `Ok(None)`.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum SourceError {
    /// XML parsing error.
    #[error("XML parse error")]
    XmlParse(#[from] quick_xml::Error),

    /// XML attribute error.
    #[error("XML attribute error")]
    XmlAttr(#[from] quick_xml::events::attributes::AttrError),

    /// I/O error reading the document.
    #[error("I/O error reading {}", path.display())]
    Io {
        /// Path of the document being read.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The wrapper element is missing.
    #[error("document has no {expected:?} wrapper element")]
    MissingWrapper {
        /// Expected wrapper local name.
        expected: &'static str,
    },

    /// The wrapper contains no top-level node element.
    #[error("wrapper contains no {expected:?} element")]
    MissingRootNode {
        /// Expected node-element local name.
        expected: &'static str,
    },

    /// The wrapper contains more than one top-level node element.
    #[error("wrapper contains more than one top-level {expected:?} element")]
    MultipleRootNodes {
        /// Expected node-element local name.
        expected: &'static str,
    },

    /// A wrapper attribute holds a malformed value.
    #[error("invalid wrapper attribute {name}: {value:?}")]
    InvalidWrapperAttribute {
        /// Attribute name.
        name: &'static str,
        /// The rejected value.
        value: String,
    },
}

/// Source of the declarative sitemap document.
///
/// Implementations own the physical format and location; consumers only
/// see the parsed [`NavDocument`].
pub trait DocumentSource: Send + Sync {
    /// Load and parse the document.
    ///
    /// Returns `Ok(None)` when the document does not exist. The build
    /// coordinator treats that as the fallback path, not a failure.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError`] when the document exists but cannot be read
    /// or parsed.
    fn load(&self) -> Result<Option<NavDocument>, SourceError>;
}
