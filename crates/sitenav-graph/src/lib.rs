//! Navigation graph model for sitenav.
//!
//! This crate provides the pure data representation of a site's navigation
//! tree:
//! - [`NavNode`]: one node with identity, display, routing, and sitemap
//!   metadata
//! - [`NavGraph`]: the full tree with key-unique registration and
//!   parent/child traversal
//!
//! Construction logic (mapping declarative documents onto the graph) lives
//! in `sitenav-builder`; this crate only enforces the structural
//! invariants: one root, one parent per node, globally unique keys.

mod graph;
mod node;

pub use graph::{GraphError, NavGraph, NodeId};
pub use node::{ChangeFrequency, NavNode, ParseEnumError, UpdatePriority};
