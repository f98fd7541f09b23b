//! Predefined CID-keyed fonts.
//!
//! These CJK fonts are referenced by name and character collection only;
//! consumers are expected to supply outlines themselves. Resolving one never
//! touches the filesystem.

use fontnames_core::{FontFormat, FontNames, WEIGHT_BOLD, style_name, weight_from_keyword};

/// Character collection a CID font is keyed by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CidSystemInfo {
    /// Registry (e.g., "Adobe").
    pub registry: &'static str,
    /// Ordering (e.g., "Japan1", "GB1", "CNS1", "Korea1").
    pub ordering: &'static str,
    /// Supplement number.
    pub supplement: u16,
}

impl CidSystemInfo {
    /// Registry-ordering-supplement string (e.g., "Adobe-Japan1-2").
    pub fn collection_name(&self) -> String {
        format!("{}-{}-{}", self.registry, self.ordering, self.supplement)
    }
}

/// A predefined CID font entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PredefinedCidFont {
    /// Canonical font name (e.g., "HeiseiMin-W3").
    pub name: &'static str,
    /// Character collection.
    pub system_info: CidSystemInfo,
}

impl PredefinedCidFont {
    /// Convert into canonical [`FontNames`].
    ///
    /// The part of the name after the last hyphen is the weight keyword
    /// ("W3", "Light", "Medium", "Regular").
    pub fn to_font_names(&self) -> FontNames {
        let (family, keyword) = self.name.rsplit_once('-').unwrap_or((self.name, ""));
        let mut names = FontNames::new(self.name, FontFormat::CidKeyed);
        names.family_name = family.to_string();
        names.weight = weight_from_keyword(keyword);
        names.bold = names.weight >= WEIGHT_BOLD;
        names.style_name = style_name(names.weight, false, false);
        names.full_name = format!("{family} {keyword}").trim().to_string();
        names.unique_id = format!("{}:{}", self.system_info.collection_name(), self.name);
        names
    }
}

const JAPAN1: CidSystemInfo = CidSystemInfo {
    registry: "Adobe",
    ordering: "Japan1",
    supplement: 2,
};
const JAPAN1_4: CidSystemInfo = CidSystemInfo {
    supplement: 4,
    ..JAPAN1
};
const GB1: CidSystemInfo = CidSystemInfo {
    registry: "Adobe",
    ordering: "GB1",
    supplement: 4,
};
const CNS1: CidSystemInfo = CidSystemInfo {
    registry: "Adobe",
    ordering: "CNS1",
    supplement: 3,
};
const CNS1_4: CidSystemInfo = CidSystemInfo {
    supplement: 4,
    ..CNS1
};
const KOREA1: CidSystemInfo = CidSystemInfo {
    registry: "Adobe",
    ordering: "Korea1",
    supplement: 1,
};

/// All predefined CID fonts.
#[rustfmt::skip]
pub static PREDEFINED_CID_FONTS: [PredefinedCidFont; 11] = [
    PredefinedCidFont { name: "HeiseiMin-W3", system_info: JAPAN1 },
    PredefinedCidFont { name: "HeiseiKakuGo-W5", system_info: JAPAN1 },
    PredefinedCidFont { name: "KozMinPro-Regular", system_info: JAPAN1_4 },
    PredefinedCidFont { name: "STSong-Light", system_info: GB1 },
    PredefinedCidFont { name: "STSongStd-Light", system_info: GB1 },
    PredefinedCidFont { name: "MHei-Medium", system_info: CNS1 },
    PredefinedCidFont { name: "MSung-Light", system_info: CNS1 },
    PredefinedCidFont { name: "MSungStd-Light", system_info: CNS1_4 },
    PredefinedCidFont { name: "HYGoThic-Medium", system_info: KOREA1 },
    PredefinedCidFont { name: "HYSMyeongJo-Medium", system_info: KOREA1 },
    PredefinedCidFont { name: "HYSMyeongJoStd-Medium", system_info: KOREA1 },
];

/// Look up a predefined CID font, ignoring ASCII case.
pub fn lookup(name: &str) -> Option<&'static PredefinedCidFont> {
    PREDEFINED_CID_FONTS
        .iter()
        .find(|font| font.name.eq_ignore_ascii_case(name))
}

/// Returns true if `name` names a predefined CID font, ignoring ASCII case.
pub fn is_predefined_cid_font(name: &str) -> bool {
    lookup(name).is_some()
}
