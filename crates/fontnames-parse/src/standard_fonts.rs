//! The 14 standard Type1 fonts.
//!
//! Every conforming PDF consumer knows these fonts by name, so their naming
//! metadata is built in rather than read from a metrics file. Values come
//! from the global sections of the Adobe core AFM files.

use fontnames_core::{FontFormat, FontNames, WEIGHT_BOLD, WEIGHT_NORMAL, style_name};

/// Naming facts for one standard font.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardFontInfo {
    /// PostScript name, which is also the catalog name.
    pub name: &'static str,
    /// `FamilyName`.
    pub family: &'static str,
    /// `FullName`.
    pub full_name: &'static str,
    /// Weight class.
    pub weight: u16,
    /// `ItalicAngle` in degrees.
    pub italic_angle: f64,
    /// `IsFixedPitch`.
    pub fixed_pitch: bool,
}

impl StandardFontInfo {
    /// Convert into canonical [`FontNames`].
    pub fn to_font_names(&self) -> FontNames {
        let mut names = FontNames::new(self.name, FontFormat::Type1);
        names.family_name = self.family.to_string();
        names.full_name = self.full_name.to_string();
        names.weight = self.weight;
        names.bold = self.weight >= WEIGHT_BOLD;
        names.italic = self.italic_angle != 0.0;
        names.fixed_pitch = self.fixed_pitch;
        names.style_name = style_name(
            self.weight,
            names.italic,
            names.italic && self.name.contains("Oblique"),
        );
        names
    }
}

const fn font(
    name: &'static str,
    family: &'static str,
    full_name: &'static str,
    weight: u16,
    italic_angle: f64,
    fixed_pitch: bool,
) -> StandardFontInfo {
    StandardFontInfo {
        name,
        family,
        full_name,
        weight,
        italic_angle,
        fixed_pitch,
    }
}

// =============================================================================
// Courier
// =============================================================================
static COURIER: StandardFontInfo = font("Courier", "Courier", "Courier", WEIGHT_NORMAL, 0.0, true);
static COURIER_BOLD: StandardFontInfo =
    font("Courier-Bold", "Courier", "Courier Bold", WEIGHT_BOLD, 0.0, true);
static COURIER_OBLIQUE: StandardFontInfo = font(
    "Courier-Oblique",
    "Courier",
    "Courier Oblique",
    WEIGHT_NORMAL,
    -12.0,
    true,
);
static COURIER_BOLD_OBLIQUE: StandardFontInfo = font(
    "Courier-BoldOblique",
    "Courier",
    "Courier Bold Oblique",
    WEIGHT_BOLD,
    -12.0,
    true,
);

// =============================================================================
// Helvetica
// =============================================================================
static HELVETICA: StandardFontInfo =
    font("Helvetica", "Helvetica", "Helvetica", WEIGHT_NORMAL, 0.0, false);
static HELVETICA_BOLD: StandardFontInfo = font(
    "Helvetica-Bold",
    "Helvetica",
    "Helvetica Bold",
    WEIGHT_BOLD,
    0.0,
    false,
);
static HELVETICA_OBLIQUE: StandardFontInfo = font(
    "Helvetica-Oblique",
    "Helvetica",
    "Helvetica Oblique",
    WEIGHT_NORMAL,
    -12.0,
    false,
);
static HELVETICA_BOLD_OBLIQUE: StandardFontInfo = font(
    "Helvetica-BoldOblique",
    "Helvetica",
    "Helvetica Bold Oblique",
    WEIGHT_BOLD,
    -12.0,
    false,
);

// =============================================================================
// Times
// =============================================================================
static TIMES_ROMAN: StandardFontInfo =
    font("Times-Roman", "Times", "Times Roman", WEIGHT_NORMAL, 0.0, false);
static TIMES_BOLD: StandardFontInfo =
    font("Times-Bold", "Times", "Times Bold", WEIGHT_BOLD, 0.0, false);
static TIMES_ITALIC: StandardFontInfo =
    font("Times-Italic", "Times", "Times Italic", WEIGHT_NORMAL, -15.5, false);
static TIMES_BOLD_ITALIC: StandardFontInfo = font(
    "Times-BoldItalic",
    "Times",
    "Times Bold Italic",
    WEIGHT_BOLD,
    -15.0,
    false,
);

// =============================================================================
// Symbolic
// =============================================================================
static SYMBOL: StandardFontInfo = font("Symbol", "Symbol", "Symbol", WEIGHT_NORMAL, 0.0, false);
static ZAPF_DINGBATS: StandardFontInfo = font(
    "ZapfDingbats",
    "ZapfDingbats",
    "ITC Zapf Dingbats",
    WEIGHT_NORMAL,
    0.0,
    false,
);

/// Look up a standard font by its exact (case-sensitive) name.
///
/// Returns `Some` for any of the 14 standard Type1 font names:
/// Courier (4 variants), Helvetica (4 variants), Times (4 variants),
/// Symbol, ZapfDingbats.
///
/// Returns `None` for unknown font names, including differently cased ones.
pub fn lookup(name: &str) -> Option<&'static StandardFontInfo> {
    match name {
        "Courier" => Some(&COURIER),
        "Courier-Bold" => Some(&COURIER_BOLD),
        "Courier-Oblique" => Some(&COURIER_OBLIQUE),
        "Courier-BoldOblique" => Some(&COURIER_BOLD_OBLIQUE),
        "Helvetica" => Some(&HELVETICA),
        "Helvetica-Bold" => Some(&HELVETICA_BOLD),
        "Helvetica-Oblique" => Some(&HELVETICA_OBLIQUE),
        "Helvetica-BoldOblique" => Some(&HELVETICA_BOLD_OBLIQUE),
        "Times-Roman" => Some(&TIMES_ROMAN),
        "Times-Bold" => Some(&TIMES_BOLD),
        "Times-Italic" => Some(&TIMES_ITALIC),
        "Times-BoldItalic" => Some(&TIMES_BOLD_ITALIC),
        "Symbol" => Some(&SYMBOL),
        "ZapfDingbats" => Some(&ZAPF_DINGBATS),
        _ => None,
    }
}

/// Returns true if `name` is exactly one of the 14 standard font names.
pub fn is_standard_font(name: &str) -> bool {
    lookup(name).is_some()
}
