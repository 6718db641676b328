use std::fmt;
use crate::license::classify_license;
use crate::scan::{BatchSummary, FileOutcome, FileReport};

/// Status word for one report
fn status(report: &FileReport) -> &'static str {
    match report.verdict() {
        Some(verdict) if !verdict.is_valid => "BLOCKED",
        Some(verdict) if !verdict.warnings.is_empty() => "PASS with warnings",
        Some(_) => "PASS",
        None => "ERROR",
    }
}

/// Human-readable report over a batch of results
struct TextReport<'a>(&'a [FileReport]);

impl fmt::Display for TextReport<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for report in self.0 {
            writeln!(f, "{}: {}", report.path.display(), status(report))?;

            match &report.outcome {
                FileOutcome::Verdict(verdict) => {
                    let license = classify_license(verdict.metadata.license_text())
                        .map(|c| c.label)
                        .unwrap_or("none recognized");
                    writeln!(f, "  family:      {}", verdict.display_name())?;
                    writeln!(f, "  license:     {}", license)?;
                    writeln!(f, "  fsType:      0x{:04X}", verdict.embedding.raw_flags)?;
                    writeln!(f, "  fingerprint: {}", verdict.fingerprint)?;
                    for error in &verdict.errors {
                        writeln!(f, "  error:   {}", error)?;
                    }
                    for warning in &verdict.warnings {
                        writeln!(f, "  warning: {}", warning)?;
                    }
                }
                FileOutcome::Error(message) => writeln!(f, "  {}", message)?,
            }
        }

        let summary = BatchSummary::from_reports(self.0);
        writeln!(
            f,
            "\n{} fonts checked: {} passed, {} blocked, {} could not be read",
            summary.total, summary.passed, summary.blocked, summary.failed
        )
    }
}

/// Render reports as a human-readable text report
pub fn render_text(reports: &[FileReport]) -> String {
    TextReport(reports).to_string()
}

/// Render reports as a pretty-printed JSON array
pub fn render_json(reports: &[FileReport]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(reports)
}
