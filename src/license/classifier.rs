use log::debug;
use super::patterns::{COMMERCIAL_INDICATORS, LICENSE_PATTERNS};
use crate::utils::truncate_for_display;

/// How much of a copyright notice is echoed back in a warning
pub const COPYRIGHT_ECHO_CHARS: usize = 80;

/// A recognized open-source license
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LicenseClassification {
    pub label: &'static str,
}

/// Match license text against the open-source license table
///
/// Missing or blank text never matches.
pub fn classify_license(license: Option<&str>) -> Option<LicenseClassification> {
    let text = license.filter(|text| !text.trim().is_empty())?;
    let entry = LICENSE_PATTERNS.first_match(text)?;
    debug!("License text recognized as {}", entry.label);
    Some(LicenseClassification { label: entry.label })
}

/// Label of the first commercial indicator found in a copyright notice
pub fn find_commercial_indicator(copyright: Option<&str>) -> Option<&'static str> {
    let text = copyright.filter(|text| !text.trim().is_empty())?;
    let entry = COMMERCIAL_INDICATORS.first_match(text)?;
    debug!("Copyright notice matches commercial indicator {}", entry.label);
    Some(entry.label)
}

/// Warning for a copyright notice that looks commercial, quoting its start
pub fn copyright_warning(copyright: &str, indicator: &str) -> String {
    format!(
        "Copyright notice suggests a commercial font ({}): \"{}\"",
        indicator,
        truncate_for_display(copyright, COPYRIGHT_ECHO_CHARS)
    )
}
