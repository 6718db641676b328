use log::debug;
use ttf_parser::name::Name;
use ttf_parser::{name_id, Face, PlatformId};
use crate::error::Result;
use crate::models::ExtractedMetadata;

/// Parse a font binary, the only fallible step of a validation
pub fn parse_face(data: &[u8]) -> Result<Face<'_>> {
    let face = Face::parse(data, 0)?;
    debug!(
        "Parsed font: {} glyphs, {} name records",
        face.number_of_glyphs(),
        face.names().len()
    );
    Ok(face)
}

/// Extract the human-readable name table fields from a parsed font
pub fn extract_metadata(face: &Face) -> ExtractedMetadata {
    let metadata = ExtractedMetadata {
        family_name: find_name(face, name_id::FAMILY),
        full_name: find_name(face, name_id::FULL_NAME),
        post_script_name: find_name(face, name_id::POST_SCRIPT_NAME),
        version: find_name(face, name_id::VERSION),
        copyright: find_name(face, name_id::COPYRIGHT_NOTICE),
        trademark: find_name(face, name_id::TRADEMARK),
        manufacturer: find_name(face, name_id::MANUFACTURER),
        designer: find_name(face, name_id::DESIGNER),
        description: find_name(face, name_id::DESCRIPTION),
        vendor_url: find_name(face, name_id::VENDOR_URL),
        designer_url: find_name(face, name_id::DESIGNER_URL),
        license: find_name(face, name_id::LICENSE),
        license_url: find_name(face, name_id::LICENSE_URL),
        sample_text: find_name(face, name_id::SAMPLE_TEXT),
    };

    debug!(
        "Metadata extracted - Family: {:?}, Full: {:?}, PostScript: {:?}, License: {:?}",
        metadata.family_name, metadata.full_name, metadata.post_script_name, metadata.license
    );

    metadata
}

/// Look up one name record, preferring English over the first decodable entry
fn find_name(face: &Face, id: u16) -> Option<String> {
    let mut fallback = None;

    for name in face.names() {
        if name.name_id != id {
            continue;
        }

        let Some(value) = name.to_string() else {
            continue;
        };

        if is_english(&name) {
            return Some(value);
        }

        if fallback.is_none() {
            fallback = Some(value);
        }
    }

    fallback
}

/// Windows records with primary language English, or Macintosh English
fn is_english(name: &Name) -> bool {
    match name.platform_id {
        PlatformId::Windows => name.language_id & 0x03FF == 0x0009,
        PlatformId::Macintosh => name.language_id == 0,
        _ => false,
    }
}
