//! Route selection for name specifiers.
//!
//! Classification is an ordered list of rules; the first rule that returns
//! a route wins. Catalog and registry membership come first so that a
//! catalog name is never reinterpreted by its extension.

use fontnames_core::{NameSpecifier, ResolveError};

/// Extensions of Type1 metrics files.
pub const METRICS_EXTENSIONS: [&str; 2] = ["afm", "pfm"];

/// Extensions of standalone sfnt fonts.
pub const SINGLE_FONT_EXTENSIONS: [&str; 2] = ["ttf", "otf"];

/// Delimiters that introduce a face index inside a collection specifier.
const COLLECTION_DELIMITERS: [&str; 2] = [".ttc,", ".otc,"];

/// Length of `.xxx` in a collection delimiter.
const COLLECTION_EXT_LEN: usize = 4;

/// A face inside a font collection, parsed from `<container>.ttc,<index>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CollectionSpecifier {
    /// Path of the collection file, including its extension.
    pub container: String,
    /// 0-based face index.
    pub index: u32,
}

/// Extraction route chosen for an identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// Exact standard-catalog name.
    CatalogStandard,
    /// Type1 metrics file (`.afm`, `.pfm`).
    CatalogMetrics,
    /// Predefined CID-keyed font.
    PredefinedIdentifierFont,
    /// Standalone sfnt font (`.ttf`, `.otf`).
    OpenTypeSingle,
    /// One face of an sfnt collection.
    OpenTypeCollection(CollectionSpecifier),
}

impl Route {
    /// Short name for logs.
    pub fn label(&self) -> &'static str {
        match self {
            Route::CatalogStandard => "catalog-standard",
            Route::CatalogMetrics => "catalog-metrics",
            Route::PredefinedIdentifierFont => "predefined-cid",
            Route::OpenTypeSingle => "opentype",
            Route::OpenTypeCollection(_) => "opentype-collection",
        }
    }
}

/// Catalog membership of a specifier, computed by the resolver's collaborators.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Membership {
    /// The raw specifier is a standard-catalog name.
    pub standard: bool,
    /// The base name is a predefined CID font (and not a standard name).
    pub predefined: bool,
}

/// A single classification rule.
pub type Rule = fn(&NameSpecifier, Membership) -> Result<Option<Route>, ResolveError>;

/// Classification rules in priority order.
pub const RULES: [Rule; 5] = [
    standard_catalog,
    metrics_file,
    predefined_font,
    single_font,
    collection_face,
];

/// Choose the extraction route for `spec`.
///
/// Returns `Ok(None)` when no rule applies, which the resolver reports as
/// "not found".
///
/// # Errors
///
/// Returns [`ResolveError::MalformedCollectionIndex`] when the specifier has
/// collection syntax with an unparsable index.
pub fn classify(
    spec: &NameSpecifier,
    membership: Membership,
) -> Result<Option<Route>, ResolveError> {
    for rule in RULES {
        if let Some(route) = rule(spec, membership)? {
            return Ok(Some(route));
        }
    }
    Ok(None)
}

/// Rule 1: the raw specifier is a standard-catalog name.
pub fn standard_catalog(
    _spec: &NameSpecifier,
    membership: Membership,
) -> Result<Option<Route>, ResolveError> {
    Ok(membership.standard.then_some(Route::CatalogStandard))
}

/// Rule 2: the base name ends in a metrics-file extension.
pub fn metrics_file(
    spec: &NameSpecifier,
    _membership: Membership,
) -> Result<Option<Route>, ResolveError> {
    let is_metrics = METRICS_EXTENSIONS.iter().any(|ext| spec.has_extension(ext));
    Ok(is_metrics.then_some(Route::CatalogMetrics))
}

/// Rule 3: the base name is a predefined CID font.
pub fn predefined_font(
    _spec: &NameSpecifier,
    membership: Membership,
) -> Result<Option<Route>, ResolveError> {
    let matched = membership.predefined && !membership.standard;
    Ok(matched.then_some(Route::PredefinedIdentifierFont))
}

/// Rule 4: the base name ends in a standalone font extension.
pub fn single_font(
    spec: &NameSpecifier,
    _membership: Membership,
) -> Result<Option<Route>, ResolveError> {
    let is_single = SINGLE_FONT_EXTENSIONS.iter().any(|ext| spec.has_extension(ext));
    Ok(is_single.then_some(Route::OpenTypeSingle))
}

/// Rule 5: the base name addresses a face inside a collection.
pub fn collection_face(
    spec: &NameSpecifier,
    _membership: Membership,
) -> Result<Option<Route>, ResolveError> {
    Ok(parse_collection_specifier(spec)?.map(Route::OpenTypeCollection))
}

/// Parse `<container>.ttc,<index>` (or `.otc`) out of a specifier's base name.
///
/// The first delimiter wins, matched without regard to case. A delimiter at
/// the very start of the name (no container stem) is not a match.
///
/// # Errors
///
/// Returns [`ResolveError::MalformedCollectionIndex`] if the text after the
/// delimiter is not a non-negative base-10 integer that fits in `u32`.
pub fn parse_collection_specifier(
    spec: &NameSpecifier,
) -> Result<Option<CollectionSpecifier>, ResolveError> {
    let lower = spec.base_name_lower();
    let Some(split) = COLLECTION_DELIMITERS
        .iter()
        .filter_map(|delim| lower.find(delim))
        .min()
    else {
        return Ok(None);
    };
    if split == 0 {
        return Ok(None);
    }

    let base = spec.base_name();
    let container = &base[..split + COLLECTION_EXT_LEN];
    let index_text = &base[split + COLLECTION_EXT_LEN + 1..];
    let malformed = || ResolveError::MalformedCollectionIndex {
        specifier: spec.raw().to_string(),
        index: index_text.to_string(),
    };

    let digits = index_text.trim_ascii();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(malformed());
    }
    let index = digits.parse::<u32>().map_err(|_| malformed())?;
    Ok(Some(CollectionSpecifier {
        container: container.to_string(),
        index,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(name: &str) -> NameSpecifier {
        NameSpecifier::new(name)
    }

    const NONE: Membership = Membership {
        standard: false,
        predefined: false,
    };

    const STANDARD: Membership = Membership {
        standard: true,
        predefined: false,
    };

    const PREDEFINED: Membership = Membership {
        standard: false,
        predefined: true,
    };

    #[test]
    fn standard_name_wins_over_extension() {
        let route = classify(&spec("Odd.ttf"), STANDARD).unwrap();
        assert_eq!(route, Some(Route::CatalogStandard));
        let route = classify(&spec("Odd.afm"), STANDARD).unwrap();
        assert_eq!(route, Some(Route::CatalogStandard));
    }

    #[test]
    fn metrics_extensions() {
        assert_eq!(
            classify(&spec("fonts/Foo.AFM"), NONE).unwrap(),
            Some(Route::CatalogMetrics)
        );
        assert_eq!(
            classify(&spec("Foo.pfm,Bold"), NONE).unwrap(),
            Some(Route::CatalogMetrics)
        );
    }

    #[test]
    fn metrics_extension_beats_predefined_membership() {
        let route = classify(&spec("HeiseiMin-W3.afm"), PREDEFINED).unwrap();
        assert_eq!(route, Some(Route::CatalogMetrics));
    }

    #[test]
    fn predefined_font_route() {
        let route = classify(&spec("HeiseiMin-W3"), PREDEFINED).unwrap();
        assert_eq!(route, Some(Route::PredefinedIdentifierFont));
    }

    #[test]
    fn predefined_rule_defers_to_standard() {
        let both = Membership {
            standard: true,
            predefined: true,
        };
        assert_eq!(predefined_font(&spec("X"), both).unwrap(), None);
        assert_eq!(
            classify(&spec("X"), both).unwrap(),
            Some(Route::CatalogStandard)
        );
    }

    #[test]
    fn predefined_beats_single_font_extension() {
        let route = classify(&spec("Weird.ttf"), PREDEFINED).unwrap();
        assert_eq!(route, Some(Route::PredefinedIdentifierFont));
    }

    #[test]
    fn single_font_extensions() {
        assert_eq!(
            classify(&spec("/usr/share/fonts/DejaVuSans.ttf"), NONE).unwrap(),
            Some(Route::OpenTypeSingle)
        );
        assert_eq!(
            classify(&spec("Source.OTF,Italic"), NONE).unwrap(),
            Some(Route::OpenTypeSingle)
        );
    }

    #[test]
    fn collection_with_index() {
        let route = classify(&spec("Foo.ttc,2"), NONE).unwrap();
        assert_eq!(
            route,
            Some(Route::OpenTypeCollection(CollectionSpecifier {
                container: "Foo.ttc".to_string(),
                index: 2,
            }))
        );
    }

    #[test]
    fn collection_preserves_container_casing() {
        let parsed = parse_collection_specifier(&spec("Fonts/MSGothic.TTC,1"))
            .unwrap()
            .unwrap();
        assert_eq!(parsed.container, "Fonts/MSGothic.TTC");
        assert_eq!(parsed.index, 1);
    }

    #[test]
    fn otc_collections() {
        let parsed = parse_collection_specifier(&spec("Noto.otc,0"))
            .unwrap()
            .unwrap();
        assert_eq!(parsed.container, "Noto.otc");
        assert_eq!(parsed.index, 0);
    }

    #[test]
    fn collection_with_style_qualifier() {
        let parsed = parse_collection_specifier(&spec("Foo.ttc,3,Bold"))
            .unwrap()
            .unwrap();
        assert_eq!(parsed.index, 3);
    }

    #[test]
    fn first_delimiter_wins() {
        let err = parse_collection_specifier(&spec("a.ttc,b.otc,1")).unwrap_err();
        assert_eq!(
            err,
            ResolveError::MalformedCollectionIndex {
                specifier: "a.ttc,b.otc,1".to_string(),
                index: "b.otc,1".to_string(),
            }
        );
    }

    #[test]
    fn malformed_index() {
        let err = classify(&spec("Foo.ttc,x"), NONE).unwrap_err();
        assert_eq!(
            err,
            ResolveError::MalformedCollectionIndex {
                specifier: "Foo.ttc,x".to_string(),
                index: "x".to_string(),
            }
        );
    }

    #[test]
    fn negative_signed_and_empty_indexes_are_malformed() {
        for name in [
            "Foo.ttc,-1",
            "Foo.ttc,+1",
            "Foo.ttc,",
            "Foo.ttc,1.5",
            "Foo.ttc,99999999999",
        ] {
            assert!(
                parse_collection_specifier(&spec(name)).is_err(),
                "{name} should be malformed"
            );
        }
    }

    #[test]
    fn index_whitespace_is_trimmed() {
        let parsed = parse_collection_specifier(&spec("Foo.ttc, 4 "))
            .unwrap()
            .unwrap();
        assert_eq!(parsed.index, 4);
    }

    #[test]
    fn no_delimiter_is_a_miss() {
        assert_eq!(classify(&spec("Foo.ttc"), NONE).unwrap(), None);
        assert_eq!(classify(&spec("Arial"), NONE).unwrap(), None);
        assert_eq!(classify(&spec("Foo.woff"), NONE).unwrap(), None);
    }

    #[test]
    fn delimiter_at_start_is_a_miss() {
        assert_eq!(parse_collection_specifier(&spec(".ttc,1")).unwrap(), None);
    }

    #[test]
    fn rule_order_is_fixed() {
        let labels: Vec<&str> = [
            ("Helvetica", STANDARD),
            ("x.afm", NONE),
            ("HeiseiMin-W3", PREDEFINED),
            ("x.ttf", NONE),
            ("x.ttc,0", NONE),
        ]
        .iter()
        .map(|(name, membership)| {
            RULES
                .iter()
                .position(|rule| rule(&spec(name), *membership).unwrap().is_some())
                .unwrap()
        })
        .map(|i| ["standard", "metrics", "predefined", "single", "collection"][i])
        .collect();
        assert_eq!(
            labels,
            ["standard", "metrics", "predefined", "single", "collection"]
        );
    }

    #[test]
    fn labels() {
        assert_eq!(Route::CatalogStandard.label(), "catalog-standard");
        assert_eq!(
            Route::OpenTypeCollection(CollectionSpecifier {
                container: "a.ttc".to_string(),
                index: 0
            })
            .label(),
            "opentype-collection"
        );
    }
}
