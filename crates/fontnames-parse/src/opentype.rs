//! Name extraction from sfnt fonts and font collections.
//!
//! Covers TrueType and CFF-flavoured OpenType files and `ttcf` collections
//! (`.ttc`, `.otc`). Table walking is delegated to `ttf-parser`; this module
//! only picks the best name records and reads the OS/2 style bits.

use encoding_rs::MACINTOSH;
use fontnames_core::{FontFormat, FontNames};
use ttf_parser::{Face, PlatformId, name::Name, name_id};

use crate::error::ParseFailure;

/// Windows language ID for US English.
const LANGUAGE_ENGLISH_US: u16 = 0x0409;

/// Macintosh encoding ID for Roman.
const MAC_ENCODING_ROMAN: u16 = 0;

/// Number of faces addressable in `data`: the collection size for a
/// `ttcf` file, otherwise 1.
pub fn face_count(data: &[u8]) -> u32 {
    ttf_parser::fonts_in_collection(data).unwrap_or(1)
}

/// Extract names from an sfnt font or collection.
///
/// `index` selects a face inside a collection; `None` means face 0. An index
/// beyond the last face fails with [`ParseFailure::FaceIndexOutOfRange`].
pub fn names_from_data(data: &[u8], index: Option<u32>) -> Result<FontNames, ParseFailure> {
    let index = index.unwrap_or(0);
    let count = face_count(data);
    if index >= count {
        return Err(ParseFailure::FaceIndexOutOfRange { index, count });
    }
    let face = Face::parse(data, index)?;
    names_from_face(&face)
}

/// Build [`FontNames`] from a parsed face.
pub fn names_from_face(face: &Face<'_>) -> Result<FontNames, ParseFailure> {
    let family = best_name(face, name_id::TYPOGRAPHIC_FAMILY)
        .or_else(|| best_name(face, name_id::FAMILY));
    let style = best_name(face, name_id::TYPOGRAPHIC_SUBFAMILY)
        .or_else(|| best_name(face, name_id::SUBFAMILY));
    let full = best_name(face, name_id::FULL_NAME);
    let postscript = best_name(face, name_id::POST_SCRIPT_NAME);
    let unique = best_name(face, name_id::UNIQUE_ID);

    let Some(primary) = postscript
        .clone()
        .or_else(|| full.clone())
        .or_else(|| family.clone())
    else {
        return Err(ParseFailure::MissingNames);
    };

    let mut names = FontNames::new(primary, FontFormat::OpenType);
    if let Some(family) = family {
        names.family_name = family;
    }
    if let Some(style) = style {
        names.style_name = style;
    }
    if let Some(full) = full {
        names.full_name = full;
    }
    if let Some(unique) = unique {
        names.unique_id = unique;
    }
    names.bold = face.is_bold();
    names.italic = face.is_italic() || face.is_oblique();
    names.weight = face.weight().to_number();
    names.width = face.width().to_number();
    names.fixed_pitch = face.is_monospaced();
    Ok(names)
}

/// Best non-empty value for a name ID.
///
/// Preference: Windows Unicode US English, then any Unicode record, then
/// Macintosh Roman.
fn best_name(face: &Face<'_>, id: u16) -> Option<String> {
    face.names()
        .into_iter()
        .filter(|name| name.name_id == id)
        .filter_map(|name| {
            let rank = record_rank(&name)?;
            let value = decode_name(&name)?;
            let value = value.trim();
            (!value.is_empty()).then(|| (rank, value.to_string()))
        })
        .min_by_key(|(rank, _)| *rank)
        .map(|(_, value)| value)
}

fn record_rank(name: &Name<'_>) -> Option<u8> {
    if name.is_unicode() {
        if name.platform_id == PlatformId::Windows && name.language_id == LANGUAGE_ENGLISH_US {
            Some(0)
        } else {
            Some(1)
        }
    } else if name.platform_id == PlatformId::Macintosh && name.encoding_id == MAC_ENCODING_ROMAN {
        Some(2)
    } else {
        None
    }
}

fn decode_name(name: &Name<'_>) -> Option<String> {
    if name.is_unicode() {
        name.to_string()
    } else {
        let (text, _) = MACINTOSH.decode_without_bom_handling(name.name);
        Some(text.into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fonts::{FaceSpec, collection, font};

    #[test]
    fn regular_font_names() {
        let data = font(&FaceSpec::new("Test Sans", "Regular"));
        let names = names_from_data(&data, None).unwrap();
        assert_eq!(names.family_name, "Test Sans");
        assert_eq!(names.style_name, "Regular");
        assert_eq!(names.full_name, "Test Sans Regular");
        assert_eq!(names.postscript_name, "TestSans-Regular");
        assert_eq!(names.format, FontFormat::OpenType);
        assert!(!names.bold);
        assert!(!names.italic);
        assert_eq!(names.weight, 400);
        assert_eq!(names.width, 5);
    }

    #[test]
    fn unique_id_falls_back_to_postscript_name() {
        let data = font(&FaceSpec::new("Test Sans", "Regular"));
        let names = names_from_data(&data, None).unwrap();
        assert_eq!(names.unique_id, "TestSans-Regular");

        let data = font(&FaceSpec::new("Test Sans", "Regular").with_name(3, "Vendor: Test Sans"));
        let names = names_from_data(&data, None).unwrap();
        assert_eq!(names.unique_id, "Vendor: Test Sans");
    }

    #[test]
    fn bold_italic_from_os2() {
        let data = font(&FaceSpec::new("Test Serif", "Bold Italic").bold().italic());
        let names = names_from_data(&data, None).unwrap();
        assert!(names.bold);
        assert!(names.italic);
        assert_eq!(names.weight, 700);
    }

    #[test]
    fn width_class_from_os2() {
        let data = font(&FaceSpec::new("Test Narrow", "Regular").width(3));
        let names = names_from_data(&data, None).unwrap();
        assert_eq!(names.width, 3);
    }

    #[test]
    fn fixed_pitch_from_post() {
        let data = font(&FaceSpec::new("Test Mono", "Regular").monospaced());
        assert!(names_from_data(&data, None).unwrap().fixed_pitch);
        let data = font(&FaceSpec::new("Test Sans", "Regular"));
        assert!(!names_from_data(&data, None).unwrap().fixed_pitch);
    }

    #[test]
    fn typographic_family_wins() {
        let data = font(
            &FaceSpec::new("Test Sans Light", "Regular")
                .with_name(16, "Test Sans")
                .with_name(17, "Light"),
        );
        let names = names_from_data(&data, None).unwrap();
        assert_eq!(names.family_name, "Test Sans");
        assert_eq!(names.style_name, "Light");
    }

    #[test]
    fn mac_roman_names_are_decoded() {
        let data = font(
            &FaceSpec::nameless()
                .with_mac_name(1, b"Caf\x8E")
                .with_mac_name(6, b"Cafe"),
        );
        let names = names_from_data(&data, None).unwrap();
        assert_eq!(names.family_name, "Caf\u{e9}");
        assert_eq!(names.postscript_name, "Cafe");
    }

    #[test]
    fn windows_names_beat_mac_names() {
        let data =
            font(&FaceSpec::new("Windows Family", "Regular").with_mac_name(1, b"Mac Family"));
        let names = names_from_data(&data, None).unwrap();
        assert_eq!(names.family_name, "Windows Family");
    }

    #[test]
    fn nameless_font_is_missing_names() {
        let data = font(&FaceSpec::nameless());
        let err = names_from_data(&data, None).unwrap_err();
        assert!(matches!(err, ParseFailure::MissingNames));
    }

    #[test]
    fn collection_face_by_index() {
        let data = collection(&[
            FaceSpec::new("First", "Regular"),
            FaceSpec::new("Second", "Bold").bold(),
            FaceSpec::new("Third", "Italic").italic(),
        ]);
        assert_eq!(face_count(&data), 3);
        assert_eq!(names_from_data(&data, Some(1)).unwrap().family_name, "Second");
        assert_eq!(names_from_data(&data, Some(2)).unwrap().family_name, "Third");
    }

    #[test]
    fn collection_without_index_uses_first_face() {
        let data = collection(&[
            FaceSpec::new("First", "Regular"),
            FaceSpec::new("Second", "Regular"),
        ]);
        assert_eq!(names_from_data(&data, None).unwrap().family_name, "First");
    }

    #[test]
    fn collection_index_out_of_range() {
        let data = collection(&[FaceSpec::new("Only", "Regular")]);
        let err = names_from_data(&data, Some(1)).unwrap_err();
        assert!(matches!(err, ParseFailure::FaceIndexOutOfRange { index: 1, count: 1 }));
    }

    #[test]
    fn single_font_rejects_nonzero_index() {
        let data = font(&FaceSpec::new("Single", "Regular"));
        assert_eq!(face_count(&data), 1);
        assert_eq!(names_from_data(&data, Some(0)).unwrap().family_name, "Single");
        let err = names_from_data(&data, Some(2)).unwrap_err();
        assert!(matches!(err, ParseFailure::FaceIndexOutOfRange { index: 2, count: 1 }));
    }

    #[test]
    fn garbage_is_malformed() {
        let err = names_from_data(b"definitely not a font", None).unwrap_err();
        assert!(matches!(err, ParseFailure::Malformed(_)));
    }

    #[test]
    fn truncated_font_is_malformed() {
        let data = font(&FaceSpec::new("Cut", "Regular"));
        let err = names_from_data(&data[..40], None).unwrap_err();
        assert!(matches!(err, ParseFailure::Malformed(_)));
    }
}
