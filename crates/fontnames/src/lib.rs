//! fontnames: resolve font names and identity metadata.
//!
//! This is the public API facade crate for fontnames-rs. It re-exports types
//! from fontnames-core and uses fontnames-parse for reading font data.
//!
//! # Architecture
//!
//! - **fontnames-core**: Data types shared by every layer, no I/O
//! - **fontnames-parse**: Extractor contracts and the OpenType/Type1/CID readers
//! - **fontnames** (this crate): Classification, caching, and the [`FontResolver`]
//!
//! # Example
//!
//! ```
//! use fontnames::{FontResolver, ResolveError};
//!
//! let resolver = FontResolver::new();
//!
//! let names = resolver.resolve_name("Courier-Oblique").unwrap().unwrap();
//! assert_eq!(names.style_name, "Oblique");
//!
//! // Unknown fonts are not an error.
//! assert_eq!(resolver.resolve_name("NoSuchFont"), Ok(None));
//!
//! // A malformed collection index is.
//! assert!(matches!(
//!     resolver.resolve_name("Fonts.ttc,first"),
//!     Err(ResolveError::MalformedCollectionIndex { .. })
//! ));
//! ```

pub mod cache;
pub mod classify;
pub mod resolver;

pub use cache::FontCache;
pub use classify::{CollectionSpecifier, Membership, Route, classify, parse_collection_specifier};
pub use fontnames_core::{
    CacheKey, FontFormat, FontIdentity, FontNames, FontProgram, NameSpecifier, ResolveError,
    ResolverOptions,
};
pub use fontnames_parse::{
    CatalogExtractor, FontSource, IdentifierFontExtractor, OpenTypeExtractor, ParseFailure,
    PredefinedIdentifierFonts, StandardCatalog,
};
pub use resolver::{FontResolver, FontResolverBuilder};

pub use fontnames_core;
pub use fontnames_parse;
