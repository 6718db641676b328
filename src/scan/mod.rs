//! Validation of many font files at once

pub mod batch;
pub mod processor;

pub use batch::read_batch_file;
pub use processor::{validate_paths, BatchSummary, FileOutcome, FileReport};
