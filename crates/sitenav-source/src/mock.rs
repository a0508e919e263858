//! Mock document source for testing.
//!
//! Provides [`MockDocumentSource`] for unit testing without filesystem
//! access, including a load counter for at-most-once assertions.

use std::sync::atomic::{AtomicUsize, Ordering};

use crate::element::NavDocument;
use crate::source::{DocumentSource, SourceError};

/// Mock source serving an in-memory document.
///
/// Starts absent; use [`with_document`](Self::with_document) to configure
/// the served document. Every [`DocumentSource::load`] call is counted.
#[derive(Debug, Default)]
pub struct MockDocumentSource {
    document: Option<NavDocument>,
    loads: AtomicUsize,
}

impl MockDocumentSource {
    /// Create a source with no document (the absent case).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Serve the given document on load.
    #[must_use]
    pub fn with_document(mut self, document: NavDocument) -> Self {
        self.document = Some(document);
        self
    }

    /// Number of times `load` has been called.
    #[must_use]
    pub fn load_count(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

impl DocumentSource for MockDocumentSource {
    fn load(&self) -> Result<Option<NavDocument>, SourceError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        Ok(self.document.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::element::{NAV_NODE_ELEMENT, NodeElement};

    #[test]
    fn test_empty_mock_is_absent() {
        let source = MockDocumentSource::new();

        assert!(source.load().unwrap().is_none());
        assert_eq!(source.load_count(), 1);
    }

    #[test]
    fn test_mock_serves_configured_document() {
        let root = NodeElement::new(NAV_NODE_ELEMENT).with_attribute("title", "Home");
        let source = MockDocumentSource::new().with_document(NavDocument::new(false, root));

        let doc = source.load().unwrap().unwrap();

        assert_eq!(doc.root().attribute("title"), Some("Home"));
    }

    #[test]
    fn test_mock_counts_loads() {
        let source = MockDocumentSource::new();

        let _ = source.load();
        let _ = source.load();

        assert_eq!(source.load_count(), 2);
    }
}
