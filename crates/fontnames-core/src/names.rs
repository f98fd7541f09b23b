//! Canonical naming metadata produced by every extractor.

/// Weight class of a regular (normal) face.
pub const WEIGHT_NORMAL: u16 = 400;

/// Weight class of a bold face.
pub const WEIGHT_BOLD: u16 = 700;

/// Width class of a normal (not condensed or expanded) face, on the 1-9 scale.
pub const WIDTH_NORMAL: u16 = 5;

/// Binary encoding family a set of names was extracted from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FontFormat {
    /// An sfnt font (TrueType or CFF outlines), standalone or inside a collection.
    OpenType,
    /// A Type1 font described by a metrics file or the standard catalog.
    Type1,
    /// A predefined CID-keyed font referenced by its registry name.
    CidKeyed,
}

/// Naming and identity metadata for a single font.
///
/// Immutable once produced; freely cloned and shared across threads.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontNames {
    /// Family name (e.g., "Helvetica").
    pub family_name: String,
    /// Subfamily or style name (e.g., "Bold Oblique").
    pub style_name: String,
    /// Human-readable full name (e.g., "Helvetica Bold Oblique").
    pub full_name: String,
    /// PostScript name (e.g., "Helvetica-BoldOblique").
    pub postscript_name: String,
    /// Unique font identifier. Falls back to the PostScript name when the
    /// format has no dedicated field.
    pub unique_id: String,
    /// Whether the face is bold.
    pub bold: bool,
    /// Whether the face is italic or oblique.
    pub italic: bool,
    /// Weight class, 1-1000 (400 = normal, 700 = bold).
    pub weight: u16,
    /// Width class, 1-9 (5 = normal).
    pub width: u16,
    /// Whether every glyph has the same advance width.
    pub fixed_pitch: bool,
    /// Encoding family the names came from.
    pub format: FontFormat,
}

impl FontNames {
    /// Create names for a regular-weight, normal-width face.
    ///
    /// Every name field starts as `postscript_name`; callers overwrite the
    /// fields their format provides.
    pub fn new(postscript_name: impl Into<String>, format: FontFormat) -> Self {
        let postscript_name = postscript_name.into();
        Self {
            family_name: postscript_name.clone(),
            style_name: "Regular".to_string(),
            full_name: postscript_name.clone(),
            unique_id: postscript_name.clone(),
            postscript_name,
            bold: false,
            italic: false,
            weight: WEIGHT_NORMAL,
            width: WIDTH_NORMAL,
            fixed_pitch: false,
            format,
        }
    }
}

/// Map a weight keyword from a metrics file (e.g., "Bold", "Light", "W3")
/// to a numeric weight class.
///
/// Unknown keywords map to [`WEIGHT_NORMAL`].
pub fn weight_from_keyword(keyword: &str) -> u16 {
    let key: String = keyword
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .flat_map(char::to_lowercase)
        .collect();
    match key.as_str() {
        "thin" | "hairline" | "w1" => 100,
        "extralight" | "ultralight" | "w2" => 200,
        "light" | "w3" => 300,
        "regular" | "roman" | "normal" | "book" | "plain" | "w4" => WEIGHT_NORMAL,
        "medium" | "w5" => 500,
        "semibold" | "demibold" | "demi" | "w6" => 600,
        "bold" | "w7" => WEIGHT_BOLD,
        "extrabold" | "ultrabold" | "heavy" | "w8" => 800,
        "black" | "ultra" | "w9" => 900,
        _ => WEIGHT_NORMAL,
    }
}

/// Compose a style name from a weight class and slant.
///
/// A regular-weight slanted face is just "Italic" or "Oblique"; an upright
/// regular face is "Regular".
pub fn style_name(weight: u16, italic: bool, oblique: bool) -> String {
    let weight_word = match weight {
        0..=149 => "Thin",
        150..=249 => "ExtraLight",
        250..=349 => "Light",
        350..=449 => "",
        450..=549 => "Medium",
        550..=649 => "SemiBold",
        650..=749 => "Bold",
        750..=849 => "ExtraBold",
        _ => "Black",
    };
    let slant = match (italic, oblique) {
        (_, true) => "Oblique",
        (true, false) => "Italic",
        (false, false) => "",
    };
    match (weight_word, slant) {
        ("", "") => "Regular".to_string(),
        (w, "") => w.to_string(),
        ("", s) => s.to_string(),
        (w, s) => format!("{w} {s}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_fills_defaults() {
        let names = FontNames::new("Foo-Bold", FontFormat::Type1);
        assert_eq!(names.family_name, "Foo-Bold");
        assert_eq!(names.style_name, "Regular");
        assert_eq!(names.full_name, "Foo-Bold");
        assert_eq!(names.unique_id, "Foo-Bold");
        assert_eq!(names.weight, WEIGHT_NORMAL);
        assert_eq!(names.width, WIDTH_NORMAL);
        assert!(!names.bold);
        assert!(!names.italic);
        assert!(!names.fixed_pitch);
    }

    #[test]
    fn weight_keywords() {
        assert_eq!(weight_from_keyword("Bold"), 700);
        assert_eq!(weight_from_keyword("Semi Bold"), 600);
        assert_eq!(weight_from_keyword("Extra-Light"), 200);
        assert_eq!(weight_from_keyword("Medium"), 500);
        assert_eq!(weight_from_keyword("W3"), 300);
        assert_eq!(weight_from_keyword("Roman"), 400);
        assert_eq!(weight_from_keyword("Black"), 900);
    }

    #[test]
    fn unknown_weight_keyword_is_normal() {
        assert_eq!(weight_from_keyword("Squiggly"), WEIGHT_NORMAL);
    }

    #[test]
    fn style_names() {
        assert_eq!(style_name(400, false, false), "Regular");
        assert_eq!(style_name(700, false, false), "Bold");
        assert_eq!(style_name(400, true, false), "Italic");
        assert_eq!(style_name(700, true, true), "Bold Oblique");
        assert_eq!(style_name(300, false, false), "Light");
        assert_eq!(style_name(950, true, false), "Black Italic");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serializes_to_json() {
        let names = FontNames::new("Foo", FontFormat::OpenType);
        let json = serde_json::to_value(&names).unwrap();
        assert_eq!(json["family_name"], "Foo");
        assert_eq!(json["format"], "OpenType");
        let back: FontNames = serde_json::from_value(json).unwrap();
        assert_eq!(back, names);
    }
}
