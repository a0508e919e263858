//! Navigation graph construction from declarative sitemap documents.
//!
//! This crate turns a parsed sitemap document into a
//! [`NavGraph`](sitenav_graph::NavGraph):
//! - [`AttributeClassifier`]: sorts declared attributes into the node's
//!   attribute bag and routing-parameter map
//! - [`NodeMapper`]: maps one declaration plus its resolved parent into a
//!   populated node (identity, display, routing, inheritance)
//! - [`TreeBuilder`]: depth-first walk with dynamic template expansion
//! - [`SiteNav`]: at-most-once build coordination with a lock-free fast
//!   path
//!
//! # Quick Start
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use std::sync::Arc;
//! use sitenav_builder::{AttributeClassifier, NodeMapper, SiteNav, TreeBuilder};
//! use sitenav_source::FsDocumentSource;
//!
//! let source = Arc::new(FsDocumentSource::new("sitemap.xml"));
//! let builder = TreeBuilder::new(NodeMapper::new(AttributeClassifier::default()));
//! let nav = SiteNav::new(source, builder);
//!
//! let graph = nav.build()?;
//! if let Some(root) = graph.root_node() {
//!     println!("{:?}", root.title);
//! }
//! # Ok(())
//! # }
//! ```

mod attributes;
mod builder;
mod config;
mod coordinator;
mod dynamic;
mod error;
mod factory;
mod key;
mod localize;
mod mapper;

pub use attributes::{AttributeClassifier, DATA_ATTRIBUTE_PREFIX, RESERVED_ATTRIBUTES};
pub use builder::TreeBuilder;
pub use config::{ConfigError, SiteNavConfig, SitemapConfig};
pub use coordinator::SiteNav;
pub use dynamic::{DynamicNode, DynamicNodeBuilder, DynamicNodeProvider, ProviderRegistry};
pub use error::BuildError;
pub use factory::{DefaultNodeFactory, NodeFactory};
pub use key::{DefaultKeyGenerator, KeyGenerator, KeyRequest};
pub use localize::{NodeLocalizer, ResourceResolution, ResourceStringLocalizer};
pub use mapper::NodeMapper;
