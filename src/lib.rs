//! FontGuard decides whether a font may be published to a permanent,
//! public store.
//!
//! A font is parsed once; its name table, embedding permissions and a
//! fingerprint of sampled glyph outlines are checked against a commercial
//! name registry and ordered license pattern tables. The result is a
//! [`ValidationVerdict`] whose `errors` block publication and whose
//! `warnings` are advisory.
//!
//! ```no_run
//! let data = std::fs::read("MyFont.ttf")?;
//! let verdict = fontguard::validate_font(&data)?;
//! if !verdict.is_valid {
//!     for error in &verdict.errors {
//!         eprintln!("{}", error);
//!     }
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

pub mod cli;
pub mod error;
pub mod font;
pub mod license;
pub mod models;
pub mod scan;
pub mod utils;
pub mod validator;

pub use error::{Error, Result};
pub use license::{COMMERCIAL_FONTS, COMMERCIAL_FONT_NAMES};
pub use models::{EmbeddingPermissions, ExtractedMetadata, ValidationChecks, ValidationVerdict};
pub use validator::{compose_verdict, validate_font, validate_font_file, validate_font_from_source};
