//! In-memory TrueType builder for tests
//!
//! Writes the smallest sfnt the parser accepts: head, hhea, maxp, hmtx,
//! cmap (format 12), loca (long), glyf with simple on-curve glyphs, name,
//! and an optional version 4 OS/2 table.

#![allow(dead_code)]

use fontguard::font::SAMPLE_CHARS;

pub const FAMILY: u16 = 1;
pub const FULL_NAME: u16 = 4;
pub const POST_SCRIPT_NAME: u16 = 6;
pub const COPYRIGHT: u16 = 0;
pub const VERSION: u16 = 5;
pub const TRADEMARK: u16 = 7;
pub const MANUFACTURER: u16 = 8;
pub const DESIGNER: u16 = 9;
pub const DESCRIPTION: u16 = 10;
pub const VENDOR_URL: u16 = 11;
pub const DESIGNER_URL: u16 = 12;
pub const LICENSE: u16 = 13;
pub const LICENSE_URL: u16 = 14;
pub const SAMPLE_TEXT: u16 = 19;

pub const ENGLISH_US: u16 = 0x0409;
pub const FRENCH: u16 = 0x040C;

pub const OFL: &str = "This Font Software is licensed under the SIL Open Font License, Version 1.1.";

/// A closed polygon of on-curve points
pub type Contour = Vec<(i16, i16)>;

#[derive(Clone)]
pub struct FontBuilder {
    names: Vec<(u16, u16, String)>,
    fs_type: Option<u16>,
    glyphs: Vec<(char, Vec<Contour>)>,
}

impl FontBuilder {
    /// A font with the standard sample glyphs, installable embedding and no names
    pub fn new() -> Self {
        Self {
            names: Vec::new(),
            fs_type: Some(0),
            glyphs: sample_glyphs(),
        }
    }

    /// Set family, full and PostScript names the way font editors do
    pub fn family(self, family: &str) -> Self {
        let post_script = format!("{}-Regular", family.replace(' ', ""));
        self.name(FAMILY, family)
            .name(FULL_NAME, &format!("{} Regular", family))
            .name(POST_SCRIPT_NAME, &post_script)
    }

    /// Add an English (United States) name record
    pub fn name(self, name_id: u16, value: &str) -> Self {
        self.localized_name(name_id, ENGLISH_US, value)
    }

    pub fn localized_name(mut self, name_id: u16, language_id: u16, value: &str) -> Self {
        self.names.push((name_id, language_id, value.to_string()));
        self
    }

    pub fn license(self, text: &str) -> Self {
        self.name(LICENSE, text)
    }

    pub fn copyright(self, text: &str) -> Self {
        self.name(COPYRIGHT, text)
    }

    pub fn fs_type(mut self, flags: u16) -> Self {
        self.fs_type = Some(flags);
        self
    }

    pub fn without_os2(mut self) -> Self {
        self.fs_type = None;
        self
    }

    pub fn glyphs(mut self, glyphs: Vec<(char, Vec<Contour>)>) -> Self {
        self.glyphs = glyphs;
        self
    }

    /// Replace the outline of one character
    pub fn glyph(mut self, ch: char, contours: Vec<Contour>) -> Self {
        self.glyphs.retain(|(c, _)| *c != ch);
        self.glyphs.push((ch, contours));
        self
    }

    pub fn build(&self) -> Vec<u8> {
        let mut glyphs = self.glyphs.clone();
        glyphs.sort_by_key(|(ch, _)| *ch);
        // Glyph 0 is an empty .notdef
        let num_glyphs = glyphs.len() as u16 + 1;

        let (glyf, loca) = glyf_and_loca(&glyphs);

        let mut tables: Vec<([u8; 4], Vec<u8>)> = vec![
            (*b"cmap", cmap(&glyphs)),
            (*b"glyf", glyf),
            (*b"head", head()),
            (*b"hhea", hhea(num_glyphs)),
            (*b"hmtx", hmtx(num_glyphs)),
            (*b"loca", loca),
            (*b"maxp", maxp(num_glyphs)),
            (*b"name", name(&self.names)),
        ];
        if let Some(fs_type) = self.fs_type {
            tables.push((*b"OS/2", os2(fs_type)));
        }
        tables.sort_by(|a, b| a.0.cmp(&b.0));

        sfnt(&tables)
    }
}

/// Distinct triangles for every sample character
pub fn sample_glyphs() -> Vec<(char, Vec<Contour>)> {
    SAMPLE_CHARS
        .chars()
        .enumerate()
        .map(|(i, ch)| {
            let step = i as i16 * 40;
            (ch, vec![vec![(0, 0), (400 + step, 0), (200, 600 + step)]])
        })
        .collect()
}

fn sfnt(tables: &[([u8; 4], Vec<u8>)]) -> Vec<u8> {
    let num_tables = tables.len() as u16;
    let entry_selector = 15 - num_tables.leading_zeros() as u16;
    let search_range = (1u16 << entry_selector) * 16;

    let mut out = Vec::new();
    push_u32(&mut out, 0x0001_0000);
    push_u16(&mut out, num_tables);
    push_u16(&mut out, search_range);
    push_u16(&mut out, entry_selector);
    push_u16(&mut out, num_tables * 16 - search_range);

    let mut offset = 12 + 16 * tables.len();
    for (tag, data) in tables {
        out.extend_from_slice(tag);
        push_u32(&mut out, 0);
        push_u32(&mut out, offset as u32);
        push_u32(&mut out, data.len() as u32);
        offset += padded_len(data.len());
    }

    for (_, data) in tables {
        out.extend_from_slice(data);
        out.resize(out.len() + padded_len(data.len()) - data.len(), 0);
    }

    out
}

fn padded_len(len: usize) -> usize {
    (len + 3) & !3
}

fn head() -> Vec<u8> {
    let mut t = Vec::new();
    push_u32(&mut t, 0x0001_0000); // version
    push_u32(&mut t, 0x0001_0000); // font revision
    push_u32(&mut t, 0); // checksum adjustment
    push_u32(&mut t, 0x5F0F_3CF5); // magic
    push_u16(&mut t, 0); // flags
    push_u16(&mut t, 1000); // units per em
    t.extend_from_slice(&[0; 16]); // created, modified
    push_i16(&mut t, 0);
    push_i16(&mut t, 0);
    push_i16(&mut t, 1000);
    push_i16(&mut t, 1200);
    push_u16(&mut t, 0); // mac style
    push_u16(&mut t, 8); // lowest rec ppem
    push_i16(&mut t, 2); // direction hint
    push_i16(&mut t, 1); // long loca
    push_i16(&mut t, 0); // glyph data format
    assert_eq!(t.len(), 54);
    t
}

fn hhea(num_glyphs: u16) -> Vec<u8> {
    let mut t = Vec::new();
    push_u32(&mut t, 0x0001_0000);
    push_i16(&mut t, 800); // ascender
    push_i16(&mut t, -200); // descender
    push_i16(&mut t, 0); // line gap
    push_u16(&mut t, 1000); // advance width max
    push_i16(&mut t, 0);
    push_i16(&mut t, 0);
    push_i16(&mut t, 1000);
    push_i16(&mut t, 1); // caret slope rise
    push_i16(&mut t, 0);
    push_i16(&mut t, 0);
    t.extend_from_slice(&[0; 8]); // reserved
    push_i16(&mut t, 0); // metric data format
    push_u16(&mut t, num_glyphs);
    assert_eq!(t.len(), 36);
    t
}

fn hmtx(num_glyphs: u16) -> Vec<u8> {
    let mut t = Vec::new();
    for _ in 0..num_glyphs {
        push_u16(&mut t, 1000);
        push_i16(&mut t, 0);
    }
    t
}

fn maxp(num_glyphs: u16) -> Vec<u8> {
    let mut t = Vec::new();
    push_u32(&mut t, 0x0000_5000);
    push_u16(&mut t, num_glyphs);
    t
}

fn os2(fs_type: u16) -> Vec<u8> {
    let mut t = Vec::new();
    push_u16(&mut t, 4); // version
    push_i16(&mut t, 500); // average char width
    push_u16(&mut t, 400); // weight class
    push_u16(&mut t, 5); // width class
    push_u16(&mut t, fs_type);
    t.resize(96, 0);
    t
}

fn cmap(glyphs: &[(char, Vec<Contour>)]) -> Vec<u8> {
    let mut t = Vec::new();
    push_u16(&mut t, 0); // version
    push_u16(&mut t, 1); // one encoding record
    push_u16(&mut t, 3); // Windows
    push_u16(&mut t, 10); // Unicode full repertoire
    push_u32(&mut t, 12);

    push_u16(&mut t, 12); // format
    push_u16(&mut t, 0);
    push_u32(&mut t, 16 + 12 * glyphs.len() as u32);
    push_u32(&mut t, 0); // language
    push_u32(&mut t, glyphs.len() as u32);
    for (i, (ch, _)) in glyphs.iter().enumerate() {
        push_u32(&mut t, *ch as u32);
        push_u32(&mut t, *ch as u32);
        push_u32(&mut t, i as u32 + 1);
    }
    t
}

fn glyf_and_loca(glyphs: &[(char, Vec<Contour>)]) -> (Vec<u8>, Vec<u8>) {
    let mut glyf = Vec::new();
    let mut loca = Vec::new();

    // Empty .notdef: start and end at offset 0
    push_u32(&mut loca, 0);
    push_u32(&mut loca, 0);

    for (_, contours) in glyphs {
        if !contours.is_empty() {
            glyf.extend_from_slice(&simple_glyph(contours));
            glyf.resize(padded_len(glyf.len()), 0);
        }
        push_u32(&mut loca, glyf.len() as u32);
    }

    // Keep the table non-empty even when every glyph is blank
    if glyf.is_empty() {
        glyf.extend_from_slice(&[0; 4]);
    }

    (glyf, loca)
}

fn simple_glyph(contours: &[Contour]) -> Vec<u8> {
    let points: Vec<(i16, i16)> = contours.iter().flatten().copied().collect();
    let x_min = points.iter().map(|p| p.0).min().unwrap_or(0);
    let y_min = points.iter().map(|p| p.1).min().unwrap_or(0);
    let x_max = points.iter().map(|p| p.0).max().unwrap_or(0);
    let y_max = points.iter().map(|p| p.1).max().unwrap_or(0);

    let mut g = Vec::new();
    push_i16(&mut g, contours.len() as i16);
    push_i16(&mut g, x_min);
    push_i16(&mut g, y_min);
    push_i16(&mut g, x_max);
    push_i16(&mut g, y_max);

    let mut end = 0u16;
    for contour in contours {
        end += contour.len() as u16;
        push_u16(&mut g, end - 1);
    }
    push_u16(&mut g, 0); // no instructions

    // On-curve, full 16-bit deltas
    g.extend(points.iter().map(|_| 0x01u8));

    let (mut last_x, mut last_y) = (0i16, 0i16);
    for (x, _) in &points {
        push_i16(&mut g, x - last_x);
        last_x = *x;
    }
    for (_, y) in &points {
        push_i16(&mut g, y - last_y);
        last_y = *y;
    }
    g
}

fn name(records: &[(u16, u16, String)]) -> Vec<u8> {
    let mut storage = Vec::new();
    let mut entries = Vec::new();
    for (name_id, language_id, value) in records {
        let offset = storage.len() as u16;
        for unit in value.encode_utf16() {
            push_u16(&mut storage, unit);
        }
        entries.push((*name_id, *language_id, storage.len() as u16 - offset, offset));
    }

    let mut t = Vec::new();
    push_u16(&mut t, 0); // format
    push_u16(&mut t, entries.len() as u16);
    push_u16(&mut t, 6 + 12 * entries.len() as u16);
    for (name_id, language_id, length, offset) in entries {
        push_u16(&mut t, 3); // Windows
        push_u16(&mut t, 1); // Unicode BMP
        push_u16(&mut t, language_id);
        push_u16(&mut t, name_id);
        push_u16(&mut t, length);
        push_u16(&mut t, offset);
    }
    t.extend_from_slice(&storage);
    t
}

fn push_u16(out: &mut Vec<u8>, value: u16) {
    out.extend_from_slice(&value.to_be_bytes());
}

fn push_i16(out: &mut Vec<u8>, value: i16) {
    out.extend_from_slice(&value.to_be_bytes());
}

fn push_u32(out: &mut Vec<u8>, value: u32) {
    out.extend_from_slice(&value.to_be_bytes());
}
