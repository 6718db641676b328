use serde::{Deserialize, Serialize};
use super::font::{EmbeddingPermissions, ExtractedMetadata};

/// Named outcomes of the individual checks
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationChecks {
    /// A family, full or PostScript name matched the commercial registry
    pub is_known_commercial: bool,
    /// The font carries non-blank license text
    pub has_license_metadata: bool,
    /// The restricted-license embedding bit is set
    pub has_restrictive_embedding: bool,
    /// Filled in by the caller's Google Fonts lookup, false until then
    pub is_google_font: bool,
    /// The license text matched a known open-source license
    pub has_open_source_license: bool,
}

/// The complete result of validating one font
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationVerdict {
    /// No blocking error was found
    pub is_valid: bool,
    /// Whether publication may go ahead; currently always equal to `is_valid`
    pub can_proceed: bool,
    /// Blocking problems, in check order
    pub errors: Vec<String>,
    /// Advisory problems, in check order
    pub warnings: Vec<String>,
    pub metadata: ExtractedMetadata,
    pub embedding: EmbeddingPermissions,
    pub checks: ValidationChecks,
    /// Eight lowercase hex digits derived from sampled glyph outlines
    pub fingerprint: String,
}

impl ValidationVerdict {
    /// Record the result of an external Google Fonts cross-check
    pub fn with_google_font(mut self, is_google_font: bool) -> Self {
        self.checks.is_google_font = is_google_font;
        self
    }

    /// Family name for reports, "Unknown" when the font has none
    pub fn display_name(&self) -> &str {
        self.metadata
            .family_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or("Unknown")
    }
}
