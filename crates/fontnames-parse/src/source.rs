//! Scoped reading of font files.
//!
//! Every file-backed extractor goes through [`read_font_file`]: the file
//! handle lives only inside that call, so nothing stays open while parsing
//! or when the resolver moves on to a fallback extractor.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::error::ParseFailure;

/// Read a whole font file into memory, refusing files above `max_bytes`.
pub fn read_font_file(path: &Path, max_bytes: Option<usize>) -> Result<Vec<u8>, ParseFailure> {
    let mut file = File::open(path)?;
    let len = usize::try_from(file.metadata()?.len()).unwrap_or(usize::MAX);
    check_size(len, max_bytes)?;

    let mut data = Vec::with_capacity(len);
    // Bound the read as well in case the file grows after the metadata check.
    let cap = max_bytes
        .and_then(|max| u64::try_from(max).ok())
        .map_or(u64::MAX, |max| max.saturating_add(1));
    file.by_ref().take(cap).read_to_end(&mut data)?;
    check_size(data.len(), max_bytes)?;
    #[cfg(feature = "tracing")]
    tracing::trace!(path = %path.display(), len = data.len(), "read font file");
    Ok(data)
}

/// Fail with [`ParseFailure::InputTooLarge`] if `len` exceeds `max_bytes`.
pub fn check_size(len: usize, max_bytes: Option<usize>) -> Result<(), ParseFailure> {
    match max_bytes {
        Some(limit) if len > limit => Err(ParseFailure::InputTooLarge { limit, actual: len }),
        _ => Ok(()),
    }
}
