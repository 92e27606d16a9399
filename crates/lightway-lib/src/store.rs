//! Shared, swappable handle to the current streetlight index.
//!
//! The index itself is immutable. A [`StreetlightStore`] lets a long-running
//! process publish a freshly built index without disturbing requests that are
//! still scoring against the previous one.

use std::path::Path;
use std::sync::{Arc, PoisonError, RwLock};

use tracing::info;

use crate::dataset::load_streetlights;
use crate::spatial::StreetlightIndex;

/// Cheaply cloneable handle to the active [`StreetlightIndex`].
#[derive(Debug, Clone, Default)]
pub struct StreetlightStore {
    current: Arc<RwLock<Arc<StreetlightIndex>>>,
}

impl StreetlightStore {
    pub fn new(index: StreetlightIndex) -> Self {
        Self {
            current: Arc::new(RwLock::new(Arc::new(index))),
        }
    }

    /// Load the dataset at `path`, degrading to an empty index on failure.
    pub fn load(path: &Path) -> Self {
        Self::new(load_streetlights(path))
    }

    /// The index in effect right now. Holding the snapshot keeps it alive
    /// across later reloads.
    pub fn snapshot(&self) -> Arc<StreetlightIndex> {
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&*guard)
    }

    /// Publish `index` and return the one it replaced.
    pub fn replace(&self, index: StreetlightIndex) -> Arc<StreetlightIndex> {
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, Arc::new(index))
    }

    /// Rebuild from `path` and publish the result. Returns the new light count.
    pub fn reload(&self, path: &Path) -> usize {
        let index = load_streetlights(path);
        let lights = index.len();
        let previous = self.replace(index);
        info!(
            path = %path.display(),
            lights,
            previous = previous.len(),
            "reloaded streetlight index"
        );
        lights
    }
}
