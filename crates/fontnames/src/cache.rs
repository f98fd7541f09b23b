//! Shared cache of parsed font programs.
//!
//! The cache is an explicit service handed to each resolver, so independent
//! resolvers (or tests) never share hidden state. It tolerates concurrent
//! readers and writers; two callers racing to fill the same key both do the
//! extraction work and the first insert is kept.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use fontnames_core::{CacheKey, FontProgram};
use parking_lot::RwLock;

/// Concurrency-safe map from [`CacheKey`] to a parsed [`FontProgram`].
#[derive(Default)]
pub struct FontCache {
    entries: RwLock<HashMap<CacheKey, Arc<dyn FontProgram>>>,
}

impl FontCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a program by key.
    pub fn get(&self, key: &CacheKey) -> Option<Arc<dyn FontProgram>> {
        self.entries.read().get(key).cloned()
    }

    /// Insert a program unless the key is already present.
    ///
    /// Returns the program now stored under `key`: the existing one if another
    /// writer got there first, otherwise `program`.
    pub fn insert(&self, key: CacheKey, program: Arc<dyn FontProgram>) -> Arc<dyn FontProgram> {
        self.entries.write().entry(key).or_insert(program).clone()
    }

    /// Returns true if `key` has a cached program.
    pub fn contains(&self, key: &CacheKey) -> bool {
        self.entries.read().contains_key(key)
    }

    /// Number of cached programs.
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Returns true if nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }

    /// Drop every cached program.
    pub fn clear(&self) {
        self.entries.write().clear();
    }
}

impl fmt::Debug for FontCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontCache")
            .field("entries", &self.len())
            .finish()
    }
}
