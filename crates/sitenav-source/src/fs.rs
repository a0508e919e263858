//! Filesystem document source.

use std::path::PathBuf;

use crate::element::NavDocument;
use crate::source::{DocumentSource, SourceError};
use crate::xml::parse_document;

/// Document source reading the sitemap XML from a file.
///
/// A missing file yields `Ok(None)`; every later load attempt checks the
/// filesystem again, so a file created after the first attempt is picked
/// up by the next build.
#[derive(Debug)]
pub struct FsDocumentSource {
    path: PathBuf,
}

impl FsDocumentSource {
    /// Create a source for the given sitemap file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path this source reads from.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl DocumentSource for FsDocumentSource {
    fn load(&self) -> Result<Option<NavDocument>, SourceError> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "sitemap file absent");
            return Ok(None);
        }

        let text = std::fs::read_to_string(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;
        let document = parse_document(&text)?;
        tracing::debug!(path = %self.path.display(), "loaded sitemap document");
        Ok(Some(document))
    }
}
