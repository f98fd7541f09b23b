//! Error type for extractor operations.
//!
//! Uses [`thiserror`] for ergonomic error derivation. A [`ParseFailure`]
//! never leaves the resolver: it is logged and turned into "not found".

use thiserror::Error;

/// Error raised by an extractor while reading or parsing font data.
#[derive(Debug, Error)]
pub enum ParseFailure {
    /// Error reading font data from disk.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The data has the right shape for a format but its structure is broken.
    #[error("malformed font data: {0}")]
    Malformed(String),

    /// The data is not in a format this extractor handles.
    #[error("unsupported font format: {0}")]
    UnsupportedFormat(String),

    /// A collection index does not address a face in the file.
    #[error("face index {index} out of range (file holds {count} face(s))")]
    FaceIndexOutOfRange {
        /// Requested face index.
        index: u32,
        /// Number of faces in the file.
        count: u32,
    },

    /// A name does not belong to the catalog or registry being queried.
    #[error("unknown font: {0}")]
    UnknownFont(String),

    /// The font parsed but carries no usable name.
    #[error("font has no family, full, or PostScript name")]
    MissingNames,

    /// The input is larger than the configured limit.
    #[error("input of {actual} bytes exceeds limit of {limit} bytes")]
    InputTooLarge {
        /// Configured limit in bytes.
        limit: usize,
        /// Actual input size in bytes.
        actual: usize,
    },
}

impl From<ttf_parser::FaceParsingError> for ParseFailure {
    fn from(err: ttf_parser::FaceParsingError) -> Self {
        ParseFailure::Malformed(err.to_string())
    }
}
