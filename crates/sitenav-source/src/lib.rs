//! Declarative sitemap document model and sources for sitenav.
//!
//! This crate provides:
//! - [`NodeElement`]/[`NavDocument`]: the parsed declarative document,
//!   independent of where it came from
//! - [`DocumentSource`] trait for abstracting document loading, enabling
//!   unit testing without touching the filesystem
//! - [`FsDocumentSource`]: filesystem implementation backed by quick-xml
//! - [`MockDocumentSource`] for testing (behind the `mock` feature flag)
//!
//! An absent document is a defined condition, not an error: sources return
//! `Ok(None)` and the build coordinator keeps its fallback graph.

mod element;
mod fs;
#[cfg(feature = "mock")]
mod mock;
mod source;
mod xml;

pub use element::{NAV_NODE_ELEMENT, NavDocument, NodeElement, SITE_NAV_ELEMENT};
pub use fs::FsDocumentSource;
#[cfg(feature = "mock")]
pub use mock::MockDocumentSource;
pub use source::{DocumentSource, SourceError};
pub use xml::parse_document;
