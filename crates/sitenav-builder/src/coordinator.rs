//! At-most-once build coordination.
//!
//! # Thread Safety
//!
//! `SiteNav` is designed for concurrent access:
//! - `graph()` returns `Arc<NavGraph>` with minimal locking (just an Arc
//!   clone)
//! - `build()` uses double-checked locking: a lock-free fast path once the
//!   graph is published, a serialized slow path before that
//!
//! Publication happens only inside the build lock and flips the `built`
//! flag with Release ordering; the fast path reads it with Acquire, so a
//! caller that sees the flag also sees the fully built snapshot. Partial
//! trees are never published: a failed build leaves the previous (fallback)
//! snapshot in place and the map unbuilt.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, RwLock};

use sitenav_graph::NavGraph;
use sitenav_source::DocumentSource;

use crate::builder::TreeBuilder;
use crate::error::BuildError;

/// Lazily-built navigation map.
///
/// Owns the document source and tree builder, and guarantees the source
/// document is read at most once for a successful build. Callers arriving
/// while a build runs block until it finishes; callers arriving afterwards
/// take the read-only fast path.
pub struct SiteNav {
    source: Arc<dyn DocumentSource>,
    builder: TreeBuilder,
    /// Mutex for serializing build attempts.
    build_lock: Mutex<()>,
    /// Current graph snapshot (atomically swappable).
    state: RwLock<Arc<NavGraph>>,
    /// Set once a built graph has been published.
    built: AtomicBool,
}

impl SiteNav {
    /// Create an unbuilt map over the given source and builder.
    ///
    /// The initial snapshot is an empty graph; it doubles as the fallback
    /// returned when the source document is absent.
    #[must_use]
    pub fn new(source: Arc<dyn DocumentSource>, builder: TreeBuilder) -> Self {
        Self {
            source,
            builder,
            build_lock: Mutex::new(()),
            state: RwLock::new(Arc::new(NavGraph::new())),
            built: AtomicBool::new(false),
        }
    }

    /// Current graph snapshot, built or not.
    ///
    /// # Panics
    ///
    /// Panics if the internal `RwLock` is poisoned.
    #[must_use]
    pub fn graph(&self) -> Arc<NavGraph> {
        Arc::clone(&self.state.read().unwrap())
    }

    /// True once a built graph has been published.
    #[must_use]
    pub fn is_built(&self) -> bool {
        self.built.load(Ordering::Acquire)
    }

    /// Build the navigation graph if it has not been built yet.
    ///
    /// - Already built: returns the published snapshot without locking.
    /// - Absent document: returns the fallback snapshot unchanged; the map
    ///   stays unbuilt and a later call tries the source again.
    /// - Present document: runs the tree builder and publishes the result.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError`] when loading, parsing, or mapping fails.
    /// Nothing is published in that case and the map remains eligible for
    /// a future build attempt.
    ///
    /// # Panics
    ///
    /// Panics if internal locks are poisoned.
    pub fn build(&self) -> Result<Arc<NavGraph>, BuildError> {
        // Fast path: already built
        if self.built.load(Ordering::Acquire) {
            return Ok(self.graph());
        }

        // Slow path: acquire build lock
        let _guard = self.build_lock.lock().unwrap();

        // Double-check after acquiring lock
        if self.built.load(Ordering::Acquire) {
            return Ok(self.graph());
        }

        let Some(document) = self.source.load()? else {
            tracing::debug!("sitemap document absent, keeping fallback graph");
            return Ok(self.graph());
        };

        let mut graph = NavGraph::new();
        self.builder.build(&mut graph, &document)?;
        let graph = Arc::new(graph);

        *self.state.write().unwrap() = Arc::clone(&graph);
        self.built.store(true, Ordering::Release);
        Ok(graph)
    }
}

impl std::fmt::Debug for SiteNav {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SiteNav")
            .field("built", &self.is_built())
            .finish_non_exhaustive()
    }
}
