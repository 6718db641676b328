//! Data types shared across the validator

pub mod config;
pub mod font;
pub mod verdict;

pub use config::{Config, OutputFormat};
pub use font::{EmbeddingPermissions, ExtractedMetadata};
pub use verdict::{ValidationChecks, ValidationVerdict};
