//! Commercial name registry and license text classification

pub mod classifier;
pub mod patterns;
pub mod registry;

pub use classifier::{classify_license, copyright_warning, find_commercial_indicator, LicenseClassification};
pub use patterns::{PatternEntry, PatternTable, COMMERCIAL_INDICATORS, LICENSE_PATTERNS};
pub use registry::{find_commercial_match, is_known_commercial, COMMERCIAL_FONTS, COMMERCIAL_FONT_NAMES};
