//! Adobe Font Metrics (AFM) header parsing.
//!
//! Only the global section before `StartCharMetrics` is read; character
//! metrics and kerning data are not needed for naming.

use encoding_rs::WINDOWS_1252;
use fontnames_core::{FontFormat, FontNames, WEIGHT_BOLD, style_name, weight_from_keyword};

use crate::error::ParseFailure;

/// First keyword of every AFM file.
const AFM_MAGIC: &[u8] = b"StartFontMetrics";

/// Global header fields of an AFM file.
#[derive(Debug, Clone, PartialEq)]
pub struct AfmHeader {
    /// `FontName` (the PostScript name). Required.
    pub font_name: String,
    /// `FullName`, if present.
    pub full_name: Option<String>,
    /// `FamilyName`, if present.
    pub family_name: Option<String>,
    /// `Weight` keyword (e.g., "Bold", "Medium"), if present.
    pub weight: Option<String>,
    /// `ItalicAngle` in degrees; negative for right-leaning faces.
    pub italic_angle: f64,
    /// `IsFixedPitch`.
    pub is_fixed_pitch: bool,
}

/// Returns true if `data` looks like an AFM file.
pub fn is_afm(data: &[u8]) -> bool {
    let data = data.strip_prefix(b"\xEF\xBB\xBF").unwrap_or(data);
    data.trim_ascii_start().starts_with(AFM_MAGIC)
}

/// Parse the global header of an AFM file.
pub fn parse_afm(data: &[u8]) -> Result<AfmHeader, ParseFailure> {
    if !is_afm(data) {
        return Err(ParseFailure::UnsupportedFormat(
            "missing StartFontMetrics".to_string(),
        ));
    }
    let (text, _, _) = WINDOWS_1252.decode(data);

    let mut font_name = None;
    let mut full_name = None;
    let mut family_name = None;
    let mut weight = None;
    let mut italic_angle = 0.0;
    let mut is_fixed_pitch = false;

    for line in text.lines() {
        let line = line.trim();
        let (key, value) = match line.split_once(char::is_whitespace) {
            Some((key, value)) => (key, value.trim()),
            None => (line, ""),
        };
        match key {
            "StartCharMetrics" | "EndFontMetrics" => break,
            "FontName" => font_name = non_empty(value),
            "FullName" => full_name = non_empty(value),
            "FamilyName" => family_name = non_empty(value),
            "Weight" => weight = non_empty(value),
            "ItalicAngle" => {
                italic_angle = value.parse().map_err(|_| {
                    ParseFailure::Malformed(format!("invalid ItalicAngle {value:?}"))
                })?;
            }
            "IsFixedPitch" => is_fixed_pitch = value.eq_ignore_ascii_case("true"),
            _ => {}
        }
    }

    let font_name =
        font_name.ok_or_else(|| ParseFailure::Malformed("AFM has no FontName".to_string()))?;
    Ok(AfmHeader {
        font_name,
        full_name,
        family_name,
        weight,
        italic_angle,
        is_fixed_pitch,
    })
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

impl AfmHeader {
    /// Convert the header into canonical [`FontNames`].
    pub fn to_font_names(&self) -> FontNames {
        let mut names = FontNames::new(self.font_name.clone(), FontFormat::Type1);
        names.weight = self
            .weight
            .as_deref()
            .map(weight_from_keyword)
            .unwrap_or(names.weight);
        names.bold = names.weight >= WEIGHT_BOLD;
        names.italic = self.italic_angle != 0.0;
        names.fixed_pitch = self.is_fixed_pitch;
        let oblique = names.italic && self.font_name.contains("Oblique");
        names.style_name = style_name(names.weight, names.italic, oblique);
        names.family_name = self
            .family_name
            .clone()
            .unwrap_or_else(|| family_from_postscript(&self.font_name));
        if let Some(full) = &self.full_name {
            names.full_name = full.clone();
        }
        names
    }
}

/// Family part of a PostScript name: everything before the first hyphen.
pub(crate) fn family_from_postscript(name: &str) -> String {
    name.split_once('-')
        .map_or(name, |(family, _)| family)
        .to_string()
}
