//! Opaque cached font programs.

use std::fmt;

use crate::names::FontNames;

/// A parsed font program held in the resolver cache.
///
/// The resolver never inspects a program beyond its [`FontNames`] view, so
/// any parsed representation can be cached as long as it can report names.
pub trait FontProgram: fmt::Debug + Send + Sync {
    /// Naming metadata for this program.
    fn font_names(&self) -> &FontNames;
}

impl FontProgram for FontNames {
    fn font_names(&self) -> &FontNames {
        self
    }
}
