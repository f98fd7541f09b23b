//! Shared helpers for resolver integration tests.
//!
//! Re-exports the in-memory sfnt/collection builders from fontnames-parse and
//! adds AFM text fixtures and call-counting extractor doubles for checking
//! which collaborators ran.

#![allow(dead_code)]

use std::io::Write;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use fontnames::{
    CatalogExtractor, FontFormat, FontNames, FontResolver, FontSource, IdentifierFontExtractor,
    OpenTypeExtractor, ParseFailure,
};

// ─── Fixtures ───────────────────────────────────────────────────────────────

pub use fontnames_parse::test_fonts::{FaceSpec, collection, font};

/// A minimal AFM file for `postscript_name`.
pub fn afm(postscript_name: &str, family: &str, weight: &str, italic_angle: f64) -> Vec<u8> {
    format!(
        "StartFontMetrics 4.1\n\
         FontName {postscript_name}\n\
         FamilyName {family}\n\
         Weight {weight}\n\
         ItalicAngle {italic_angle}\n\
         IsFixedPitch false\n\
         StartCharMetrics 0\n\
         EndCharMetrics\n\
         EndFontMetrics\n"
    )
    .into_bytes()
}

/// Write `data` to a temp file with the given suffix (e.g. ".ttc").
pub fn temp_font(suffix: &str, data: &[u8]) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .prefix("fontnames-")
        .suffix(suffix)
        .tempfile()
        .unwrap();
    file.write_all(data).unwrap();
    file.flush().unwrap();
    file
}

// ─── Extractor doubles ──────────────────────────────────────────────────────

/// An OpenType extractor that records its calls and returns a fixed outcome.
#[derive(Default)]
pub struct CountingOpenType {
    pub calls: AtomicUsize,
    pub seen: Mutex<Vec<(String, Option<u32>)>>,
    pub fail: bool,
}

impl CountingOpenType {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn seen(&self) -> Vec<(String, Option<u32>)> {
        self.seen.lock().unwrap().clone()
    }
}

impl OpenTypeExtractor for CountingOpenType {
    fn extract(
        &self,
        source: FontSource<'_>,
        collection_index: Option<u32>,
    ) -> Result<FontNames, ParseFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let label = match source {
            FontSource::Path(path) => path.display().to_string(),
            FontSource::Bytes(bytes) => format!("<{} bytes>", bytes.len()),
        };
        self.seen.lock().unwrap().push((label, collection_index));
        if self.fail {
            return Err(ParseFailure::Malformed("counting double".to_string()));
        }
        Ok(FontNames::new("OpenType-Double", FontFormat::OpenType))
    }
}

/// A catalog extractor that records its calls and returns a fixed outcome.
#[derive(Default)]
pub struct CountingCatalog {
    pub calls: AtomicUsize,
    pub seen_names: Mutex<Vec<Option<String>>>,
    pub fail: bool,
}

impl CountingCatalog {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn seen_names(&self) -> Vec<Option<String>> {
        self.seen_names.lock().unwrap().clone()
    }
}

impl CatalogExtractor for CountingCatalog {
    fn extract(
        &self,
        name: Option<&str>,
        _metrics: Option<&[u8]>,
    ) -> Result<FontNames, ParseFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.seen_names
            .lock()
            .unwrap()
            .push(name.map(str::to_string));
        if self.fail {
            return Err(ParseFailure::UnknownFont("counting double".to_string()));
        }
        Ok(FontNames::new("Catalog-Double", FontFormat::Type1))
    }
}

/// An identifier-font extractor that records its calls.
#[derive(Default)]
pub struct CountingCid {
    pub calls: AtomicUsize,
}

impl CountingCid {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl IdentifierFontExtractor for CountingCid {
    fn extract(&self, base_name: &str) -> Result<FontNames, ParseFailure> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(FontNames::new(base_name, FontFormat::CidKeyed))
    }
}

/// A resolver wired to counting doubles, plus handles to inspect them.
pub struct Instrumented {
    pub resolver: FontResolver,
    pub open_type: Arc<CountingOpenType>,
    pub catalog: Arc<CountingCatalog>,
    pub cid: Arc<CountingCid>,
}

impl Instrumented {
    pub fn new(open_type: CountingOpenType, catalog: CountingCatalog) -> Self {
        Self::with_options(open_type, catalog, fontnames::ResolverOptions::default())
    }

    pub fn with_options(
        open_type: CountingOpenType,
        catalog: CountingCatalog,
        options: fontnames::ResolverOptions,
    ) -> Self {
        let open_type = Arc::new(open_type);
        let catalog = Arc::new(catalog);
        let cid = Arc::new(CountingCid::default());
        let resolver = FontResolver::builder()
            .open_type_extractor(open_type.clone())
            .catalog_extractor(catalog.clone())
            .identifier_font_extractor(cid.clone())
            .options(options)
            .build();
        Self {
            resolver,
            open_type,
            catalog,
            cid,
        }
    }

    /// Total extractor invocations across all three doubles.
    pub fn total_calls(&self) -> usize {
        self.open_type.calls() + self.catalog.calls() + self.cid.calls()
    }
}
