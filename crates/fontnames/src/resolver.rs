//! The font name resolver: cache lookup, classification, dispatch.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use fontnames_core::{
    CacheKey, FontIdentity, FontNames, NameSpecifier, ResolveError, ResolverOptions,
};
use fontnames_parse::{
    CatalogExtractor, CidFontNames, FontSource, IdentifierFontExtractor, OpenTypeExtractor,
    OpenTypeNames, ParseFailure, PredefinedCidFonts, PredefinedIdentifierFonts, StandardCatalog,
    StandardFonts, Type1Names,
};

use crate::cache::FontCache;
use crate::classify::{self, Membership, Route};

/// Resolves font identities to [`FontNames`].
///
/// A resolver is cheap to clone and safe to share between threads. All
/// collaborators are injected through [`FontResolverBuilder`]; the cache is
/// the only shared mutable state.
///
/// Extractor failures never escape: a font that cannot be read or parsed
/// resolves to `None`. The only error is
/// [`ResolveError::MalformedCollectionIndex`], raised for a specifier such as
/// `"Foo.ttc,x"`.
///
/// # Example
///
/// ```
/// use fontnames::FontResolver;
///
/// let resolver = FontResolver::new();
/// let names = resolver.resolve_name("Helvetica-Bold").unwrap().unwrap();
/// assert_eq!(names.family_name, "Helvetica");
/// assert!(names.bold);
/// ```
#[derive(Clone)]
pub struct FontResolver {
    cache: Arc<FontCache>,
    catalog: Arc<dyn StandardCatalog>,
    predefined: Arc<dyn PredefinedIdentifierFonts>,
    open_type: Arc<dyn OpenTypeExtractor>,
    type1: Arc<dyn CatalogExtractor>,
    cid: Arc<dyn IdentifierFontExtractor>,
    options: ResolverOptions,
}

impl FontResolver {
    /// Resolver with the built-in extractors, default options, and a fresh
    /// private cache.
    pub fn new() -> Self {
        Self::builder().build()
    }

    /// Start configuring a resolver.
    pub fn builder() -> FontResolverBuilder {
        FontResolverBuilder::default()
    }

    /// The cache this resolver reads (and, if enabled, populates).
    pub fn cache(&self) -> &Arc<FontCache> {
        &self.cache
    }

    /// The options this resolver was built with.
    pub fn options(&self) -> &ResolverOptions {
        &self.options
    }

    /// Resolve an identity.
    ///
    /// Returns `Ok(None)` when the identity is empty, unclassifiable, or its
    /// font cannot be extracted.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::MalformedCollectionIndex`] if a collection
    /// specifier's index is not a non-negative integer.
    pub fn resolve(&self, identity: &FontIdentity) -> Result<Option<FontNames>, ResolveError> {
        match identity {
            FontIdentity::Name(spec) => self.resolve_specifier(spec),
            FontIdentity::Bytes(bytes) => Ok(self.resolve_bytes(bytes)),
        }
    }

    /// Resolve a name specifier: a catalog name, a file path, or
    /// `<collection>.ttc,<index>`.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::MalformedCollectionIndex`] if a collection
    /// specifier's index is not a non-negative integer.
    pub fn resolve_name(&self, specifier: &str) -> Result<Option<FontNames>, ResolveError> {
        if specifier.is_empty() {
            return Ok(None);
        }
        self.resolve_specifier(&NameSpecifier::new(specifier))
    }

    /// Resolve an in-memory font program or metrics file.
    ///
    /// OpenType is tried first, then Type1 metrics (AFM or PFM).
    pub fn resolve_bytes(&self, bytes: &[u8]) -> Option<FontNames> {
        if bytes.is_empty() {
            return None;
        }

        let key = CacheKey::for_bytes(bytes);
        if let Some(names) = self.cached(&key) {
            return Some(names);
        }

        if !self.options.allows_input(bytes.len()) {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                len = bytes.len(),
                limit = ?self.options.max_input_bytes,
                "raw font input exceeds size limit"
            );
            return None;
        }

        let result = match self.open_type.extract(FontSource::Bytes(bytes), None) {
            Ok(names) => Ok(names),
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(error = %_err, "not OpenType, retrying as Type1 metrics");
                self.type1.extract(None, Some(bytes))
            }
        };
        self.finish(key, result)
    }

    /// Resolve many specifiers in parallel, one result per input in order.
    #[cfg(feature = "parallel")]
    pub fn resolve_all(
        &self,
        specifiers: &[&str],
    ) -> Vec<Result<Option<FontNames>, ResolveError>> {
        use rayon::prelude::*;

        specifiers
            .par_iter()
            .map(|specifier| self.resolve_name(specifier))
            .collect()
    }

    /// Catalog membership of a specifier as seen by this resolver.
    ///
    /// The standard catalog is checked against the raw specifier; the
    /// predefined registry against the base name, and only when the standard
    /// check fails.
    pub fn membership(&self, spec: &NameSpecifier) -> Membership {
        let standard = self.catalog.contains(spec.raw());
        let predefined = !standard && self.predefined.contains(spec.base_name());
        Membership {
            standard,
            predefined,
        }
    }

    /// Choose the extraction route for a specifier without extracting.
    ///
    /// # Errors
    ///
    /// Returns [`ResolveError::MalformedCollectionIndex`] if a collection
    /// specifier's index is not a non-negative integer.
    pub fn classify(&self, spec: &NameSpecifier) -> Result<Option<Route>, ResolveError> {
        classify::classify(spec, self.membership(spec))
    }

    fn resolve_specifier(&self, spec: &NameSpecifier) -> Result<Option<FontNames>, ResolveError> {
        if spec.raw().is_empty() {
            return Ok(None);
        }

        let key = CacheKey::for_name(spec.raw());
        if let Some(names) = self.cached(&key) {
            return Ok(Some(names));
        }

        let Some(route) = self.classify(spec)? else {
            #[cfg(feature = "tracing")]
            tracing::debug!(specifier = spec.raw(), "no route for font specifier");
            return Ok(None);
        };
        #[cfg(feature = "tracing")]
        tracing::debug!(specifier = spec.raw(), route = route.label(), "selected route");

        let result = self.extract(spec, &route);
        Ok(self.finish(key, result))
    }

    fn extract(&self, spec: &NameSpecifier, route: &Route) -> Result<FontNames, ParseFailure> {
        match route {
            Route::CatalogStandard => self.type1.extract(Some(spec.raw()), None),
            Route::CatalogMetrics => self.type1.extract(Some(spec.base_name()), None),
            Route::PredefinedIdentifierFont => self.cid.extract(spec.base_name()),
            Route::OpenTypeSingle => self
                .open_type
                .extract(FontSource::Path(Path::new(spec.base_name())), None),
            Route::OpenTypeCollection(collection) => self.open_type.extract(
                FontSource::Path(Path::new(&collection.container)),
                Some(collection.index),
            ),
        }
    }

    fn cached(&self, key: &CacheKey) -> Option<FontNames> {
        let program = self.cache.get(key)?;
        #[cfg(feature = "tracing")]
        tracing::debug!(?key, "font cache hit");
        Some(program.font_names().clone())
    }

    fn finish(
        &self,
        key: CacheKey,
        result: Result<FontNames, ParseFailure>,
    ) -> Option<FontNames> {
        match result {
            Ok(names) if self.options.populate_cache => {
                let kept = self.cache.insert(key, Arc::new(names));
                Some(kept.font_names().clone())
            }
            Ok(names) => Some(names),
            Err(_err) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(?key, error = %_err, "font extraction failed");
                None
            }
        }
    }
}

impl Default for FontResolver {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FontResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontResolver")
            .field("cache", &self.cache)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

/// Builder for [`FontResolver`].
///
/// Anything not set falls back to the built-in implementation. Default
/// file-backed extractors honour the builder's `max_input_bytes`.
#[derive(Default)]
pub struct FontResolverBuilder {
    cache: Option<Arc<FontCache>>,
    catalog: Option<Arc<dyn StandardCatalog>>,
    predefined: Option<Arc<dyn PredefinedIdentifierFonts>>,
    open_type: Option<Arc<dyn OpenTypeExtractor>>,
    type1: Option<Arc<dyn CatalogExtractor>>,
    cid: Option<Arc<dyn IdentifierFontExtractor>>,
    options: ResolverOptions,
}

impl FontResolverBuilder {
    /// Share an existing cache.
    pub fn cache(mut self, cache: Arc<FontCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Replace the standard font catalog.
    pub fn standard_catalog(mut self, catalog: Arc<dyn StandardCatalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Replace the predefined CID font registry.
    pub fn predefined_fonts(mut self, predefined: Arc<dyn PredefinedIdentifierFonts>) -> Self {
        self.predefined = Some(predefined);
        self
    }

    /// Replace the OpenType extractor.
    pub fn open_type_extractor(mut self, extractor: Arc<dyn OpenTypeExtractor>) -> Self {
        self.open_type = Some(extractor);
        self
    }

    /// Replace the Type1 catalog/metrics extractor.
    pub fn catalog_extractor(mut self, extractor: Arc<dyn CatalogExtractor>) -> Self {
        self.type1 = Some(extractor);
        self
    }

    /// Replace the predefined CID font extractor.
    pub fn identifier_font_extractor(
        mut self,
        extractor: Arc<dyn IdentifierFontExtractor>,
    ) -> Self {
        self.cid = Some(extractor);
        self
    }

    /// Set resolver options.
    pub fn options(mut self, options: ResolverOptions) -> Self {
        self.options = options;
        self
    }

    /// Build the resolver.
    pub fn build(self) -> FontResolver {
        let limit = self.options.max_input_bytes;
        FontResolver {
            cache: self.cache.unwrap_or_default(),
            catalog: self.catalog.unwrap_or_else(|| Arc::new(StandardFonts)),
            predefined: self.predefined.unwrap_or_else(|| Arc::new(PredefinedCidFonts)),
            open_type: self
                .open_type
                .unwrap_or_else(|| Arc::new(OpenTypeNames::new(limit))),
            type1: self.type1.unwrap_or_else(|| Arc::new(Type1Names::new(limit))),
            cid: self.cid.unwrap_or_else(|| Arc::new(CidFontNames)),
            options: self.options,
        }
    }
}

impl fmt::Debug for FontResolverBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FontResolverBuilder")
            .field("cache", &self.cache)
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}
