use serde::{Deserialize, Serialize};

/// Human-readable metadata extracted from a font's name table
///
/// Every field is optional: a font that omits a record is not an error.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedMetadata {
    /// Font family name (name ID 1)
    pub family_name: Option<String>,
    /// Full font name (name ID 4)
    pub full_name: Option<String>,
    /// PostScript name (name ID 6)
    pub post_script_name: Option<String>,
    /// Version string (name ID 5)
    pub version: Option<String>,
    /// Copyright notice (name ID 0)
    pub copyright: Option<String>,
    /// Trademark notice (name ID 7)
    pub trademark: Option<String>,
    /// Manufacturer / foundry (name ID 8)
    pub manufacturer: Option<String>,
    /// Designer (name ID 9)
    pub designer: Option<String>,
    /// Description (name ID 10)
    pub description: Option<String>,
    /// Vendor URL (name ID 11)
    pub vendor_url: Option<String>,
    /// Designer URL (name ID 12)
    pub designer_url: Option<String>,
    /// License description (name ID 13)
    pub license: Option<String>,
    /// License info URL (name ID 14)
    pub license_url: Option<String>,
    /// Sample text (name ID 19)
    pub sample_text: Option<String>,
}

impl ExtractedMetadata {
    /// The family, full and PostScript names, in that order
    pub fn identity_names(&self) -> [Option<&str>; 3] {
        [
            self.family_name.as_deref(),
            self.full_name.as_deref(),
            self.post_script_name.as_deref(),
        ]
    }

    /// License text, if present and not blank
    pub fn license_text(&self) -> Option<&str> {
        non_blank(self.license.as_deref())
    }

    /// Copyright text, if present and not blank
    pub fn copyright_text(&self) -> Option<&str> {
        non_blank(self.copyright.as_deref())
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Embedding permissions decoded from the OS/2 `fsType` word
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmbeddingPermissions {
    /// The raw `fsType` value, 0 when the OS/2 table is missing
    pub raw_flags: u16,
    /// No restriction bit set at all
    pub is_installable: bool,
    /// Restricted license embedding (0x0002)
    pub is_restricted: bool,
    /// Preview & print embedding (0x0004)
    pub is_preview_print_only: bool,
    /// Editable embedding (0x0008)
    pub is_editable: bool,
    /// No-subsetting bit (0x0100) is clear
    pub allows_subsetting: bool,
}
