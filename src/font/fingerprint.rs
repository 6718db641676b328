//! Glyph outline fingerprinting
//!
//! The fingerprint is a coarse similarity signal, not a security measure.
//! It folds quantized outlines of a few sample glyphs through a 31-multiplier
//! rolling hash into 32 bits. Collisions are cheap to produce on purpose-built
//! input; what it does guarantee is that renaming a font or rewriting its
//! metadata leaves the value unchanged, while moving an outline point by a
//! quantization step or more changes the serialized input.

use log::debug;
use serde::Serialize;
use ttf_parser::{Face, GlyphId, OutlineBuilder};

/// Characters whose outlines feed the fingerprint, in hashing order
pub const SAMPLE_CHARS: &str = "AaBbGgKkQqRr038";

/// Coordinates are floored to multiples of this many font units
const QUANTUM: f32 = 10.0;

const GLYPH_SEPARATOR: char = '|';

/// One quantized outline command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum PathCommand {
    #[serde(rename = "M")]
    MoveTo { x: i32, y: i32 },
    #[serde(rename = "L")]
    LineTo { x: i32, y: i32 },
    #[serde(rename = "Q")]
    QuadTo { x1: i32, y1: i32, x: i32, y: i32 },
    #[serde(rename = "C")]
    CurveTo { x1: i32, y1: i32, x2: i32, y2: i32, x: i32, y: i32 },
    #[serde(rename = "Z")]
    Close,
}

/// Collects quantized commands from the parser's outline callbacks
#[derive(Default)]
struct OutlineCollector {
    commands: Vec<PathCommand>,
}

fn quantize(value: f32) -> i32 {
    (value / QUANTUM).floor() as i32
}

impl OutlineBuilder for OutlineCollector {
    fn move_to(&mut self, x: f32, y: f32) {
        self.commands.push(PathCommand::MoveTo { x: quantize(x), y: quantize(y) });
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.commands.push(PathCommand::LineTo { x: quantize(x), y: quantize(y) });
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.commands.push(PathCommand::QuadTo {
            x1: quantize(x1),
            y1: quantize(y1),
            x: quantize(x),
            y: quantize(y),
        });
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.commands.push(PathCommand::CurveTo {
            x1: quantize(x1),
            y1: quantize(y1),
            x2: quantize(x2),
            y2: quantize(y2),
            x: quantize(x),
            y: quantize(y),
        });
    }

    fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }
}

/// Quantized outline of `ch`, or `None` when the font does not map it
///
/// A mapped glyph without contours (a blank glyph) yields an empty list.
pub fn glyph_commands(face: &Face, ch: char) -> Option<Vec<PathCommand>> {
    let glyph_id = face.glyph_index(ch).filter(|id| *id != GlyphId(0))?;
    let mut collector = OutlineCollector::default();
    face.outline_glyph(glyph_id, &mut collector);
    Some(collector.commands)
}

/// Concatenate the compact JSON form of each command
pub fn serialize_commands(commands: &[PathCommand]) -> String {
    commands
        .iter()
        .filter_map(|command| serde_json::to_string(command).ok())
        .collect()
}

/// Rolling `h * 31 + unit` over the UTF-16 code units of `input`, wrapping at 32 bits
pub fn rolling_hash(input: &str) -> u32 {
    input
        .encode_utf16()
        .fold(0u32, |hash, unit| hash.wrapping_mul(31).wrapping_add(u32::from(unit)))
}

/// Render the hash of `input` as eight zero-padded lowercase hex digits
pub fn fingerprint_from_serialized(input: &str) -> String {
    format!("{:08x}", rolling_hash(input))
}

/// Fingerprint the sample glyphs of a parsed font
pub fn generate_fingerprint(face: &Face) -> String {
    let mut segments = Vec::with_capacity(SAMPLE_CHARS.len());

    for ch in SAMPLE_CHARS.chars() {
        match glyph_commands(face, ch) {
            Some(commands) => segments.push(serialize_commands(&commands)),
            None => debug!("Sample glyph '{}' not present, skipping", ch),
        }
    }

    let joined = segments.join(&GLYPH_SEPARATOR.to_string());
    let fingerprint = fingerprint_from_serialized(&joined);
    debug!("Fingerprint {} from {} sample glyphs", fingerprint, segments.len());
    fingerprint
}
