//! License and provenance validation of a single font binary
//!
//! Validation is a pure function of the input bytes. The only shared state
//! is the static registry and pattern tables, so any number of validations
//! can run in parallel without coordination.

use std::fs;
use std::io::Read;
use std::path::Path;
use log::{debug, info};
use crate::error::Result;
use crate::font::{extract_embedding, extract_metadata, generate_fingerprint, parse_face};
use crate::license::{classify_license, copyright_warning, find_commercial_indicator, is_known_commercial};
use crate::models::{EmbeddingPermissions, ExtractedMetadata, ValidationChecks, ValidationVerdict};
use crate::utils::truncate_for_display;

const LICENSE_ECHO_CHARS: usize = 80;

/// Validate a font binary held in memory
///
/// Fails only when the bytes cannot be parsed as a font. Licensing problems
/// are reported in the returned verdict.
pub fn validate_font(data: &[u8]) -> Result<ValidationVerdict> {
    let face = parse_face(data)?;

    let metadata = extract_metadata(&face);
    let embedding = extract_embedding(&face);
    let fingerprint = generate_fingerprint(&face);

    Ok(compose_verdict(metadata, embedding, fingerprint))
}

/// Read a font from any byte source and validate it
pub fn validate_font_from_source<R: Read>(mut source: R) -> Result<ValidationVerdict> {
    let mut data = Vec::new();
    source.read_to_end(&mut data)?;
    debug!("Read {} bytes from font source", data.len());
    validate_font(&data)
}

/// Read a font file from disk and validate it
pub fn validate_font_file(path: &Path) -> Result<ValidationVerdict> {
    debug!("Validating {}", path.display());
    let data = fs::read(path)?;
    validate_font(&data)
}

/// Combine the individual check results into a verdict
///
/// Every check runs regardless of the others. Errors block publication,
/// warnings are advisory.
pub fn compose_verdict(
    metadata: ExtractedMetadata,
    embedding: EmbeddingPermissions,
    fingerprint: String,
) -> ValidationVerdict {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    let is_known_commercial = is_known_commercial(&metadata);
    if is_known_commercial {
        let family = metadata.family_name.as_deref().unwrap_or("Unknown");
        errors.push(format!(
            "\"{}\" matches a known commercial or system font and cannot be inscribed",
            family
        ));
    }

    let has_restrictive_embedding = embedding.is_restricted;
    if has_restrictive_embedding {
        errors.push(format!(
            "Font embedding is restricted (fsType 0x{:04X}); the foundry does not permit redistribution",
            embedding.raw_flags
        ));
    }

    let license = metadata.license_text();
    let has_license_metadata = license.is_some();
    let classification = classify_license(license);
    let has_open_source_license = classification.is_some();

    match (license, classification) {
        (None, _) => warnings.push(
            "No license information found in the font; confirm you hold the rights to publish it"
                .to_string(),
        ),
        (Some(text), None) => warnings.push(format!(
            "License is not a recognized open-source license: \"{}\"",
            truncate_for_display(text, LICENSE_ECHO_CHARS)
        )),
        (Some(_), Some(_)) => {}
    }

    if let Some(copyright) = metadata.copyright_text() {
        if let Some(indicator) = find_commercial_indicator(Some(copyright)) {
            warnings.push(copyright_warning(copyright, indicator));
        }
    }

    let is_valid = errors.is_empty();

    info!(
        "Validated '{}': {} errors, {} warnings, fingerprint {}",
        metadata.family_name.as_deref().unwrap_or("Unknown"),
        errors.len(),
        warnings.len(),
        fingerprint
    );

    ValidationVerdict {
        is_valid,
        can_proceed: is_valid,
        errors,
        warnings,
        metadata,
        embedding,
        checks: ValidationChecks {
            is_known_commercial,
            has_license_metadata,
            has_restrictive_embedding,
            is_google_font: false,
            has_open_source_license,
        },
        fingerprint,
    }
}
