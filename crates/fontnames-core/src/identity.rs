//! Font identities and the cache keys derived from them.
//!
//! A [`FontIdentity`] is what a caller hands to the resolver: either a name
//! specifier (file path, catalog name, or `<file>.ttc,<index>`) or a raw
//! byte buffer. Identities are immutable after construction, so the derived
//! [`CacheKey`] can be computed before any parsing happens.

use std::sync::Arc;

use sha2::{Digest, Sha256};

/// Style qualifiers stripped from the end of a specifier, longest first.
const STYLE_QUALIFIERS: [&str; 3] = [",BoldItalic", ",Italic", ",Bold"];

/// Strip one trailing style qualifier (`,Bold`, `,Italic`, `,BoldItalic`).
///
/// Casing of the remainder is preserved. Collection suffixes such as
/// `,2` are left alone.
pub fn base_name(name: &str) -> &str {
    STYLE_QUALIFIERS
        .iter()
        .find_map(|q| name.strip_suffix(q))
        .unwrap_or(name)
}

/// A font name specifier with its base name computed once.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NameSpecifier {
    raw: String,
    base: String,
    base_lower: String,
}

impl NameSpecifier {
    /// Wrap a specifier string.
    pub fn new(raw: impl Into<String>) -> Self {
        let raw = raw.into();
        let base = base_name(&raw).to_string();
        let base_lower = base.to_ascii_lowercase();
        Self {
            raw,
            base,
            base_lower,
        }
    }

    /// The specifier exactly as supplied. Catalog membership is checked
    /// against this value.
    pub fn raw(&self) -> &str {
        &self.raw
    }

    /// The specifier with any trailing style qualifier removed.
    pub fn base_name(&self) -> &str {
        &self.base
    }

    /// ASCII-lowercased base name, used for extension checks. Byte offsets
    /// match [`base_name`](Self::base_name).
    pub fn base_name_lower(&self) -> &str {
        &self.base_lower
    }

    /// Returns true if `ext` (without the dot, lowercase) is the base name's
    /// extension.
    pub fn has_extension(&self, ext: &str) -> bool {
        self.base_lower
            .rsplit_once('.')
            .is_some_and(|(stem, found)| !stem.is_empty() && found == ext)
    }
}

/// Input to font name resolution.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FontIdentity {
    /// A file name, path, catalog name, or collection specifier.
    Name(NameSpecifier),
    /// An in-memory font program or metrics file.
    Bytes(Arc<[u8]>),
}

impl FontIdentity {
    /// Identity for a name specifier.
    pub fn from_name(name: impl Into<String>) -> Self {
        FontIdentity::Name(NameSpecifier::new(name))
    }

    /// Identity for a byte buffer.
    pub fn from_bytes(bytes: impl Into<Arc<[u8]>>) -> Self {
        FontIdentity::Bytes(bytes.into())
    }

    /// Returns true for an empty specifier or an empty buffer.
    pub fn is_empty(&self) -> bool {
        match self {
            FontIdentity::Name(spec) => spec.raw().is_empty(),
            FontIdentity::Bytes(bytes) => bytes.is_empty(),
        }
    }

    /// Derive the cache key for this identity.
    pub fn cache_key(&self) -> CacheKey {
        match self {
            FontIdentity::Name(spec) => CacheKey::for_name(spec.raw()),
            FontIdentity::Bytes(bytes) => CacheKey::for_bytes(bytes),
        }
    }
}

/// Cache key derived deterministically from a [`FontIdentity`].
///
/// Name keys use the raw specifier verbatim, so `"Arial.ttf"` and
/// `"Arial.ttf,Bold"` are distinct entries. Byte keys combine the buffer
/// length with its SHA-256 digest.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum CacheKey {
    /// Key for a name specifier.
    Name(String),
    /// Key for a byte buffer.
    Bytes {
        /// Buffer length in bytes.
        len: usize,
        /// SHA-256 digest of the buffer.
        digest: [u8; 32],
    },
}

impl CacheKey {
    /// Key for a name specifier.
    pub fn for_name(name: &str) -> Self {
        CacheKey::Name(name.to_string())
    }

    /// Key for a byte buffer, without copying the buffer.
    pub fn for_bytes(bytes: &[u8]) -> Self {
        CacheKey::Bytes {
            len: bytes.len(),
            digest: Sha256::digest(bytes).into(),
        }
    }
}
