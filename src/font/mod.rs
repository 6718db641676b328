//! Font parsing, metadata extraction and outline fingerprinting

pub mod embedding;
pub mod fingerprint;
pub mod metadata;

pub use embedding::{decode_permissions, extract_embedding, read_fs_type};
pub use fingerprint::{generate_fingerprint, rolling_hash, PathCommand, SAMPLE_CHARS};
pub use metadata::{extract_metadata, parse_face};
