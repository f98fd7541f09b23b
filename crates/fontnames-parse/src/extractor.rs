//! Extractor and membership contracts, with their default implementations.
//!
//! The resolver only talks to these traits. Default implementations:
//!
//! - [`OpenTypeNames`]: sfnt fonts and collections, from a path or bytes.
//! - [`Type1Names`]: standard-14 catalog names, `.afm` and `.pfm` files, and
//!   raw AFM/PFM bytes.
//! - [`CidFontNames`]: predefined CID fonts.
//! - [`StandardFonts`] / [`PredefinedCidFonts`]: catalog membership tests.

use std::path::Path;

use fontnames_core::{DEFAULT_MAX_INPUT_BYTES, FontNames};

use crate::error::ParseFailure;
use crate::source::{check_size, read_font_file};
use crate::{afm, cid_fonts, opentype, pfm, standard_fonts};

/// Where an sfnt font's bytes come from.
#[derive(Debug, Clone, Copy)]
pub enum FontSource<'a> {
    /// A file on disk, read and released within one extractor call.
    Path(&'a Path),
    /// An in-memory buffer.
    Bytes(&'a [u8]),
}

/// Extracts names from OpenType/TrueType fonts and font collections.
pub trait OpenTypeExtractor: Send + Sync {
    /// Extract names for the face at `collection_index` (face 0 when `None`).
    ///
    /// # Errors
    ///
    /// Returns [`ParseFailure`] if the data cannot be read or parsed, or if the
    /// index does not address a face.
    fn extract(
        &self,
        source: FontSource<'_>,
        collection_index: Option<u32>,
    ) -> Result<FontNames, ParseFailure>;
}

/// Extracts names from Type1 catalog fonts and metrics files.
pub trait CatalogExtractor: Send + Sync {
    /// Extract names from a catalog name or metrics file path, or from raw
    /// metrics bytes. When both are given the bytes win.
    ///
    /// # Errors
    ///
    /// Returns [`ParseFailure`] if neither input yields names.
    fn extract(
        &self,
        name: Option<&str>,
        metrics: Option<&[u8]>,
    ) -> Result<FontNames, ParseFailure>;
}

/// Extracts names for predefined CID-keyed fonts.
pub trait IdentifierFontExtractor: Send + Sync {
    /// Extract names for the font registered under `base_name`.
    ///
    /// # Errors
    ///
    /// Returns [`ParseFailure::UnknownFont`] if the name is not registered.
    fn extract(&self, base_name: &str) -> Result<FontNames, ParseFailure>;
}

/// Exact-name membership test for the standard font catalog.
pub trait StandardCatalog: Send + Sync {
    /// Returns true if `specifier` is a catalog name, compared verbatim.
    fn contains(&self, specifier: &str) -> bool;
}

/// Membership test for predefined CID-keyed fonts.
pub trait PredefinedIdentifierFonts: Send + Sync {
    /// Returns true if `base_name` names a predefined CID font.
    fn contains(&self, base_name: &str) -> bool;
}

/// Default [`OpenTypeExtractor`] backed by `ttf-parser`.
#[derive(Debug, Clone)]
pub struct OpenTypeNames {
    max_input_bytes: Option<usize>,
}

impl OpenTypeNames {
    /// Extractor refusing inputs larger than `max_input_bytes`.
    pub fn new(max_input_bytes: Option<usize>) -> Self {
        Self { max_input_bytes }
    }
}

impl Default for OpenTypeNames {
    fn default() -> Self {
        Self::new(Some(DEFAULT_MAX_INPUT_BYTES))
    }
}

impl OpenTypeExtractor for OpenTypeNames {
    fn extract(
        &self,
        source: FontSource<'_>,
        collection_index: Option<u32>,
    ) -> Result<FontNames, ParseFailure> {
        match source {
            FontSource::Path(path) => {
                let data = read_font_file(path, self.max_input_bytes)?;
                opentype::names_from_data(&data, collection_index)
            }
            FontSource::Bytes(data) => {
                check_size(data.len(), self.max_input_bytes)?;
                opentype::names_from_data(data, collection_index)
            }
        }
    }
}

/// Default [`CatalogExtractor`] for Type1 fonts.
#[derive(Debug, Clone)]
pub struct Type1Names {
    max_input_bytes: Option<usize>,
}

impl Type1Names {
    /// Extractor refusing metrics files larger than `max_input_bytes`.
    pub fn new(max_input_bytes: Option<usize>) -> Self {
        Self { max_input_bytes }
    }

    fn names_from_metrics(&self, data: &[u8]) -> Result<FontNames, ParseFailure> {
        check_size(data.len(), self.max_input_bytes)?;
        let is_afm = afm::is_afm(data);
        #[cfg(feature = "tracing")]
        tracing::trace!(len = data.len(), is_afm, "sniffed raw Type1 metrics");
        if is_afm {
            afm::parse_afm(data).map(|header| header.to_font_names())
        } else {
            pfm::parse_pfm(data).map(|header| header.to_font_names())
        }
    }

    fn names_from_name(&self, name: &str) -> Result<FontNames, ParseFailure> {
        if let Some(info) = standard_fonts::lookup(name) {
            return Ok(info.to_font_names());
        }
        let path = Path::new(name);
        let ext = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("afm") => {
                let data = read_font_file(path, self.max_input_bytes)?;
                afm::parse_afm(&data).map(|header| header.to_font_names())
            }
            Some("pfm") => {
                let data = read_font_file(path, self.max_input_bytes)?;
                pfm::parse_pfm(&data).map(|header| header.to_font_names())
            }
            _ => Err(ParseFailure::UnknownFont(name.to_string())),
        }
    }
}

impl Default for Type1Names {
    fn default() -> Self {
        Self::new(Some(DEFAULT_MAX_INPUT_BYTES))
    }
}

impl CatalogExtractor for Type1Names {
    fn extract(
        &self,
        name: Option<&str>,
        metrics: Option<&[u8]>,
    ) -> Result<FontNames, ParseFailure> {
        match (name, metrics) {
            (_, Some(data)) => self.names_from_metrics(data),
            (Some(name), None) => self.names_from_name(name),
            (None, None) => Err(ParseFailure::UnsupportedFormat(
                "no catalog name or metrics data".to_string(),
            )),
        }
    }
}

/// Default [`IdentifierFontExtractor`] over the built-in CID font registry.
#[derive(Debug, Clone, Copy, Default)]
pub struct CidFontNames;

impl IdentifierFontExtractor for CidFontNames {
    fn extract(&self, base_name: &str) -> Result<FontNames, ParseFailure> {
        cid_fonts::lookup(base_name)
            .map(|font| font.to_font_names())
            .ok_or_else(|| ParseFailure::UnknownFont(base_name.to_string()))
    }
}

/// The 14 standard Type1 fonts as a [`StandardCatalog`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardFonts;

impl StandardCatalog for StandardFonts {
    fn contains(&self, specifier: &str) -> bool {
        standard_fonts::is_standard_font(specifier)
    }
}

/// The built-in CID font registry as a [`PredefinedIdentifierFonts`].
#[derive(Debug, Clone, Copy, Default)]
pub struct PredefinedCidFonts;

impl PredefinedIdentifierFonts for PredefinedCidFonts {
    fn contains(&self, base_name: &str) -> bool {
        cid_fonts::is_predefined_cid_font(base_name)
    }
}
