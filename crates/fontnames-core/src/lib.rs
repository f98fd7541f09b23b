//! fontnames-core: Backend-independent data types for font name resolution.
//!
//! This crate provides the identity types ([`FontIdentity`], [`NameSpecifier`],
//! [`CacheKey`]), the canonical [`FontNames`] result, the [`FontProgram`] cache
//! payload contract, and the [`ResolveError`] / [`ResolverOptions`] pair used by
//! the resolver. It performs no I/O.

pub mod error;
pub mod identity;
pub mod names;
pub mod options;
pub mod program;

pub use error::ResolveError;
pub use identity::{CacheKey, FontIdentity, NameSpecifier, base_name};
pub use names::{
    FontFormat, FontNames, WEIGHT_BOLD, WEIGHT_NORMAL, WIDTH_NORMAL, style_name,
    weight_from_keyword,
};
pub use options::{DEFAULT_MAX_INPUT_BYTES, ResolverOptions};
pub use program::FontProgram;
