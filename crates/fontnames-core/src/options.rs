//! Resolver configuration.

/// Default cap on raw font input: 64 MiB.
pub const DEFAULT_MAX_INPUT_BYTES: usize = 64 * 1024 * 1024;

/// Options controlling how a resolver consults its cache and bounds its input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolverOptions {
    /// Write successfully extracted names back into the cache (default: false).
    ///
    /// When disabled the resolver only reads the cache; population is left to
    /// whoever owns the cache. When enabled, concurrent writers race and the
    /// first inserted program is kept.
    pub populate_cache: bool,
    /// Maximum raw font input size in bytes (default: 64 MiB, `None` = no limit).
    ///
    /// Byte buffers above the limit resolve to "not found" without any
    /// extractor running. File-backed extractors apply the same limit when
    /// reading from disk.
    pub max_input_bytes: Option<usize>,
}

impl Default for ResolverOptions {
    fn default() -> Self {
        Self {
            populate_cache: false,
            max_input_bytes: Some(DEFAULT_MAX_INPUT_BYTES),
        }
    }
}

impl ResolverOptions {
    /// Options that write every successful extraction back into the cache.
    pub fn caching() -> Self {
        Self {
            populate_cache: true,
            ..Self::default()
        }
    }

    /// Returns true if `len` bytes fit within the configured input limit.
    pub fn allows_input(&self, len: usize) -> bool {
        self.max_input_bytes.is_none_or(|max| len <= max)
    }
}
