use std::path::{Path, PathBuf};
use log::{info, warn};
use rayon::prelude::*;
use serde::Serialize;
use crate::models::ValidationVerdict;
use crate::validator::validate_font_file;

/// Result of validating one file
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FileReport {
    pub path: PathBuf,
    #[serde(flatten)]
    pub outcome: FileOutcome,
}

/// Either a verdict or the reason the file could not be validated at all
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum FileOutcome {
    Verdict(Box<ValidationVerdict>),
    Error(String),
}

impl FileReport {
    pub fn verdict(&self) -> Option<&ValidationVerdict> {
        match &self.outcome {
            FileOutcome::Verdict(verdict) => Some(verdict),
            FileOutcome::Error(_) => None,
        }
    }
}

/// Counts for the closing line of a report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchSummary {
    pub total: usize,
    pub passed: usize,
    pub blocked: usize,
    pub failed: usize,
}

impl BatchSummary {
    pub fn from_reports(reports: &[FileReport]) -> Self {
        reports.iter().fold(Self::default(), |mut summary, report| {
            summary.total += 1;
            match report.verdict() {
                Some(verdict) if verdict.is_valid => summary.passed += 1,
                Some(_) => summary.blocked += 1,
                None => summary.failed += 1,
            }
            summary
        })
    }

    /// Every file parsed and none was blocked
    pub fn all_passed(&self) -> bool {
        self.blocked == 0 && self.failed == 0
    }
}

fn validate_one(path: &Path) -> FileReport {
    let outcome = match validate_font_file(path) {
        Ok(verdict) => FileOutcome::Verdict(Box::new(verdict)),
        Err(e) => {
            warn!("Could not validate {}: {}", path.display(), e);
            FileOutcome::Error(e.to_string())
        }
    };

    FileReport {
        path: path.to_path_buf(),
        outcome,
    }
}

/// Validate many files in parallel, keeping the input order
///
/// A file that fails to parse is reported, never fatal for the rest.
pub fn validate_paths(paths: &[PathBuf]) -> Vec<FileReport> {
    let reports: Vec<FileReport> = paths.par_iter().map(|path| validate_one(path)).collect();

    let summary = BatchSummary::from_reports(&reports);
    info!(
        "Validated {} files: {} passed, {} blocked, {} failed",
        summary.total, summary.passed, summary.blocked, summary.failed
    );

    reports
}
