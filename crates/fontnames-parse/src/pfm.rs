//! Printer Font Metrics (PFM) header parsing.
//!
//! PFM files are the Windows metrics companion of a Type1 `.pfb`. All
//! integers are little-endian. Only the fixed header and the two name
//! strings it points at are read.

use encoding_rs::WINDOWS_1252;
use fontnames_core::{FontFormat, FontNames, WEIGHT_BOLD, style_name};

use crate::error::ParseFailure;

/// `dfVersion` of every PFM file in circulation.
const PFM_VERSION: u16 = 0x0100;

/// Length of the fixed header through `dfReserved`.
const HEADER_LEN: usize = 147;

/// Low bit of `dfPitchAndFamily`, set for variable-pitch fonts.
const VARIABLE_PITCH: u8 = 0x01;

const OFFSET_VERSION: usize = 0;
const OFFSET_SIZE: usize = 2;
const OFFSET_ITALIC: usize = 80;
const OFFSET_WEIGHT: usize = 83;
const OFFSET_PITCH_AND_FAMILY: usize = 90;
const OFFSET_FACE: usize = 105;
const OFFSET_DRIVER_INFO: usize = 139;

/// Header fields of a PFM file relevant to naming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PfmHeader {
    /// Windows face name (`dfFace`), used as the family name.
    pub face_name: String,
    /// PostScript font name (`dfDriverInfo`).
    pub postscript_name: String,
    /// Weight class (`dfWeight`).
    pub weight: u16,
    /// `dfItalic` flag.
    pub italic: bool,
    /// Clear variable-pitch bit in `dfPitchAndFamily`.
    pub fixed_pitch: bool,
}

/// Parse the header of a PFM file.
pub fn parse_pfm(data: &[u8]) -> Result<PfmHeader, ParseFailure> {
    if data.len() < HEADER_LEN {
        return Err(ParseFailure::UnsupportedFormat(format!(
            "{} bytes is too short for a PFM header",
            data.len()
        )));
    }
    let version = read_u16(data, OFFSET_VERSION);
    if version != PFM_VERSION {
        return Err(ParseFailure::UnsupportedFormat(format!(
            "unknown PFM version {version:#06x}"
        )));
    }
    let declared = read_u32(data, OFFSET_SIZE) as usize;
    if declared > data.len() {
        return Err(ParseFailure::Malformed(format!(
            "PFM declares {declared} bytes but only {} are present",
            data.len()
        )));
    }

    let face_name = read_string(data, read_u32(data, OFFSET_FACE) as usize, "dfFace")?;
    let postscript_name = read_string(
        data,
        read_u32(data, OFFSET_DRIVER_INFO) as usize,
        "dfDriverInfo",
    )?;
    if postscript_name.is_empty() {
        return Err(ParseFailure::MissingNames);
    }

    Ok(PfmHeader {
        face_name,
        postscript_name,
        weight: read_u16(data, OFFSET_WEIGHT),
        italic: data[OFFSET_ITALIC] != 0,
        fixed_pitch: data[OFFSET_PITCH_AND_FAMILY] & VARIABLE_PITCH == 0,
    })
}

impl PfmHeader {
    /// Convert the header into canonical [`FontNames`].
    pub fn to_font_names(&self) -> FontNames {
        let mut names = FontNames::new(self.postscript_name.clone(), FontFormat::Type1);
        if self.weight > 0 {
            names.weight = self.weight;
        }
        names.bold = names.weight >= WEIGHT_BOLD;
        names.italic = self.italic;
        names.fixed_pitch = self.fixed_pitch;
        let oblique = self.italic && self.postscript_name.contains("Oblique");
        names.style_name = style_name(names.weight, names.italic, oblique);
        if !self.face_name.is_empty() {
            names.family_name = self.face_name.clone();
        }
        names.full_name = if names.style_name == "Regular" {
            names.family_name.clone()
        } else {
            format!("{} {}", names.family_name, names.style_name)
        };
        names
    }
}

fn read_u16(data: &[u8], at: usize) -> u16 {
    u16::from_le_bytes([data[at], data[at + 1]])
}

fn read_u32(data: &[u8], at: usize) -> u32 {
    u32::from_le_bytes([data[at], data[at + 1], data[at + 2], data[at + 3]])
}

/// Read a NUL-terminated Windows-1252 string starting at `offset`.
fn read_string(data: &[u8], offset: usize, field: &str) -> Result<String, ParseFailure> {
    let tail = data.get(offset..).filter(|t| !t.is_empty()).ok_or_else(|| {
        ParseFailure::Malformed(format!("{field} offset {offset} is past end of file"))
    })?;
    let end = tail.iter().position(|&b| b == 0).unwrap_or(tail.len());
    let (text, _) = WINDOWS_1252.decode_without_bom_handling(&tail[..end]);
    Ok(text.trim().to_string())
}

/// Build a minimal PFM file for tests.
#[cfg(test)]
pub(crate) fn build_pfm(face: &[u8], postscript: &[u8], weight: u16, italic: bool) -> Vec<u8> {
    let mut data = vec![0u8; HEADER_LEN];
    data[OFFSET_VERSION..OFFSET_VERSION + 2].copy_from_slice(&PFM_VERSION.to_le_bytes());
    data[OFFSET_ITALIC] = u8::from(italic);
    data[OFFSET_WEIGHT..OFFSET_WEIGHT + 2].copy_from_slice(&weight.to_le_bytes());
    // FF_ROMAN, variable pitch.
    data[OFFSET_PITCH_AND_FAMILY] = 0x10 | VARIABLE_PITCH;

    let face_offset = data.len() as u32;
    data.extend_from_slice(face);
    data.push(0);
    let driver_offset = data.len() as u32;
    data.extend_from_slice(postscript);
    data.push(0);

    data[OFFSET_FACE..OFFSET_FACE + 4].copy_from_slice(&face_offset.to_le_bytes());
    data[OFFSET_DRIVER_INFO..OFFSET_DRIVER_INFO + 4].copy_from_slice(&driver_offset.to_le_bytes());
    let size = data.len() as u32;
    data[OFFSET_SIZE..OFFSET_SIZE + 4].copy_from_slice(&size.to_le_bytes());
    data
}
