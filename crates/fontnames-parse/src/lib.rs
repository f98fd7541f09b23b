//! fontnames-parse: font format extractors.
//!
//! This crate defines the collaborator contracts the resolver consumes
//! ([`OpenTypeExtractor`], [`CatalogExtractor`], [`IdentifierFontExtractor`],
//! [`StandardCatalog`], [`PredefinedIdentifierFonts`]) and ships default
//! implementations backed by `ttf-parser` and small hand-written Type1
//! metrics readers. It depends on fontnames-core for shared data types.

pub mod afm;
pub mod cid_fonts;
pub mod error;
pub mod extractor;
pub mod opentype;
pub mod pfm;
pub mod source;
pub mod standard_fonts;

#[cfg(any(test, feature = "test-fonts"))]
pub mod test_fonts;

pub use error::ParseFailure;
pub use extractor::{
    CatalogExtractor, CidFontNames, FontSource, IdentifierFontExtractor, OpenTypeExtractor,
    OpenTypeNames, PredefinedCidFonts, PredefinedIdentifierFonts, StandardCatalog, StandardFonts,
    Type1Names,
};
pub use fontnames_core;
