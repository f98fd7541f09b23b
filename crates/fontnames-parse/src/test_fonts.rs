//! In-memory sfnt builders for tests.
//!
//! Produces the smallest fonts `ttf-parser` accepts: `head`, `hhea`, `maxp`,
//! plus `OS/2`, `name` and `post` so there is something to extract. Built for
//! this crate's unit tests and, behind the `test-fonts` feature, for the
//! integration tests of dependent crates.

/// Description of one synthesized face.
pub struct FaceSpec {
    pub names: Vec<(u16, String)>,
    pub mac_names: Vec<(u16, Vec<u8>)>,
    pub weight: u16,
    pub width: u16,
    pub fs_selection: u16,
    pub monospaced: bool,
}

impl FaceSpec {
    /// A face with family (1), style (2), full name (4), and PostScript name (6).
    pub fn new(family: &str, style: &str) -> Self {
        let ps = format!("{}-{}", family.replace(' ', ""), style.replace(' ', ""));
        Self {
            names: vec![
                (1, family.to_string()),
                (2, style.to_string()),
                (4, format!("{family} {style}")),
                (6, ps),
            ],
            mac_names: Vec::new(),
            weight: 400,
            width: 5,
            fs_selection: 0x40,
            monospaced: false,
        }
    }

    /// A face with no name records at all.
    pub fn nameless() -> Self {
        Self {
            names: Vec::new(),
            mac_names: Vec::new(),
            weight: 400,
            width: 5,
            fs_selection: 0,
            monospaced: false,
        }
    }

    pub fn with_name(mut self, id: u16, value: &str) -> Self {
        self.names.push((id, value.to_string()));
        self
    }

    pub fn with_mac_name(mut self, id: u16, bytes: &[u8]) -> Self {
        self.mac_names.push((id, bytes.to_vec()));
        self
    }

    pub fn bold(mut self) -> Self {
        self.weight = 700;
        self.fs_selection = (self.fs_selection & !0x40) | 0x20;
        self
    }

    pub fn italic(mut self) -> Self {
        self.fs_selection = (self.fs_selection & !0x40) | 0x01;
        self
    }

    pub fn width(mut self, width: u16) -> Self {
        self.width = width;
        self
    }

    pub fn monospaced(mut self) -> Self {
        self.monospaced = true;
        self
    }

    fn tables(&self) -> Vec<([u8; 4], Vec<u8>)> {
        // Sorted by tag: uppercase before lowercase.
        vec![
            (*b"OS/2", self.os2()),
            (*b"head", head()),
            (*b"hhea", hhea()),
            (*b"maxp", maxp()),
            (*b"name", self.name()),
            (*b"post", self.post()),
        ]
    }

    fn os2(&self) -> Vec<u8> {
        let mut t = vec![0u8; 96];
        t[0..2].copy_from_slice(&4u16.to_be_bytes());
        t[4..6].copy_from_slice(&self.weight.to_be_bytes());
        t[6..8].copy_from_slice(&self.width.to_be_bytes());
        t[62..64].copy_from_slice(&self.fs_selection.to_be_bytes());
        t
    }

    fn post(&self) -> Vec<u8> {
        let mut t = vec![0u8; 32];
        t[0..4].copy_from_slice(&0x0003_0000u32.to_be_bytes());
        t[12..16].copy_from_slice(&u32::from(self.monospaced).to_be_bytes());
        t
    }

    fn name(&self) -> Vec<u8> {
        let mut records: Vec<(u16, u16, u16, u16, Vec<u8>)> = self
            .names
            .iter()
            .map(|(id, value)| {
                let utf16: Vec<u8> = value.encode_utf16().flat_map(u16::to_be_bytes).collect();
                (3, 1, 0x0409, *id, utf16)
            })
            .collect();
        records.extend(
            self.mac_names
                .iter()
                .map(|(id, bytes)| (1, 0, 0, *id, bytes.clone())),
        );

        let count = records.len() as u16;
        let storage_offset = 6 + 12 * count;
        let mut t = Vec::new();
        t.extend_from_slice(&0u16.to_be_bytes());
        t.extend_from_slice(&count.to_be_bytes());
        t.extend_from_slice(&storage_offset.to_be_bytes());
        let mut storage = Vec::new();
        for (platform, encoding, language, id, bytes) in &records {
            for v in [*platform, *encoding, *language, *id, bytes.len() as u16] {
                t.extend_from_slice(&v.to_be_bytes());
            }
            t.extend_from_slice(&(storage.len() as u16).to_be_bytes());
            storage.extend_from_slice(bytes);
        }
        t.extend_from_slice(&storage);
        t
    }

    /// Encode this face as an sfnt whose table offsets start at `base`.
    fn encode(&self, base: u32) -> Vec<u8> {
        let tables = self.tables();
        let num_tables = tables.len() as u16;
        let dir_len = 12 + 16 * tables.len();

        let mut out = Vec::new();
        out.extend_from_slice(&0x0001_0000u32.to_be_bytes());
        out.extend_from_slice(&num_tables.to_be_bytes());
        out.extend_from_slice(&[0u8; 6]);

        let mut body = Vec::new();
        for (tag, data) in &tables {
            let offset = base + (dir_len + body.len()) as u32;
            out.extend_from_slice(tag);
            out.extend_from_slice(&0u32.to_be_bytes());
            out.extend_from_slice(&offset.to_be_bytes());
            out.extend_from_slice(&(data.len() as u32).to_be_bytes());
            body.extend_from_slice(data);
            while body.len() % 4 != 0 {
                body.push(0);
            }
        }
        out.extend_from_slice(&body);
        out
    }
}

fn head() -> Vec<u8> {
    let mut t = vec![0u8; 54];
    t[0..4].copy_from_slice(&0x0001_0000u32.to_be_bytes());
    t[12..16].copy_from_slice(&0x5F0F_3CF5u32.to_be_bytes());
    t[18..20].copy_from_slice(&1000u16.to_be_bytes());
    t
}

fn hhea() -> Vec<u8> {
    let mut t = vec![0u8; 36];
    t[0..4].copy_from_slice(&0x0001_0000u32.to_be_bytes());
    t[34..36].copy_from_slice(&1u16.to_be_bytes());
    t
}

fn maxp() -> Vec<u8> {
    let mut t = Vec::new();
    t.extend_from_slice(&0x0000_5000u32.to_be_bytes());
    t.extend_from_slice(&1u16.to_be_bytes());
    t
}

/// A standalone sfnt font.
pub fn font(spec: &FaceSpec) -> Vec<u8> {
    spec.encode(0)
}

/// A `ttcf` collection holding `specs` in order.
pub fn collection(specs: &[FaceSpec]) -> Vec<u8> {
    let header_len = 12 + 4 * specs.len();
    let mut offsets = Vec::new();
    let mut body = Vec::new();
    for spec in specs {
        let offset = (header_len + body.len()) as u32;
        offsets.push(offset);
        body.extend_from_slice(&spec.encode(offset));
    }

    let mut out = Vec::new();
    out.extend_from_slice(b"ttcf");
    out.extend_from_slice(&0x0001_0000u32.to_be_bytes());
    out.extend_from_slice(&(specs.len() as u32).to_be_bytes());
    for offset in offsets {
        out.extend_from_slice(&offset.to_be_bytes());
    }
    out.extend_from_slice(&body);
    out
}
