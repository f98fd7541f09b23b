//! Error types for font name resolution.
//!
//! Provides [`ResolveError`], the only failure that crosses the resolver
//! boundary. Everything else (unreadable files, corrupt tables, unknown
//! formats) is reported as "not found" rather than as an error.

use std::fmt;

/// Error returned when a font specifier itself is malformed.
///
/// These errors indicate a defect in how the caller built the specifier,
/// not a problem with any font data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    /// The specifier uses collection syntax (`<path>.ttc,<index>`) but the
    /// index segment is not a non-negative base-10 integer.
    MalformedCollectionIndex {
        /// The full specifier as supplied by the caller.
        specifier: String,
        /// The text found after the collection delimiter.
        index: String,
    },
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::MalformedCollectionIndex { specifier, index } => write!(
                f,
                "malformed collection index {index:?} in font specifier {specifier:?}"
            ),
        }
    }
}

impl std::error::Error for ResolveError {}
