use log::debug;
use ttf_parser::{Face, Tag};
use crate::models::EmbeddingPermissions;

const OS2_TAG: Tag = Tag::from_bytes(b"OS/2");

/// Byte offset of `fsType` inside the OS/2 table
const FS_TYPE_OFFSET: usize = 8;

/// Restricted license embedding
pub const RESTRICTED: u16 = 0x0002;
/// Preview & print embedding
pub const PREVIEW_AND_PRINT: u16 = 0x0004;
/// Editable embedding
pub const EDITABLE: u16 = 0x0008;
/// No subsetting
pub const NO_SUBSETTING: u16 = 0x0100;

/// Read the raw `fsType` word, `None` when the OS/2 table is missing or truncated
pub fn read_fs_type(face: &Face) -> Option<u16> {
    let table = face.raw_face().table(OS2_TAG)?;
    let bytes = table.get(FS_TYPE_OFFSET..FS_TYPE_OFFSET + 2)?;
    Some(u16::from_be_bytes([bytes[0], bytes[1]]))
}

/// Decode the embedding permissions of a parsed font
///
/// A font without an OS/2 table is treated as installable (`fsType` 0).
pub fn extract_embedding(face: &Face) -> EmbeddingPermissions {
    let raw_flags = match read_fs_type(face) {
        Some(flags) => flags,
        None => {
            debug!("No usable OS/2 table, assuming installable embedding");
            0
        }
    };

    decode_permissions(raw_flags)
}

/// Split an `fsType` word into independent permission flags
pub fn decode_permissions(raw_flags: u16) -> EmbeddingPermissions {
    EmbeddingPermissions {
        raw_flags,
        is_installable: raw_flags == 0,
        is_restricted: raw_flags & RESTRICTED != 0,
        is_preview_print_only: raw_flags & PREVIEW_AND_PRINT != 0,
        is_editable: raw_flags & EDITABLE != 0,
        allows_subsetting: raw_flags & NO_SUBSETTING == 0,
    }
}
