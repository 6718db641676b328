use std::fs;
use std::path::{Path, PathBuf};
use log::info;
use crate::error::{Error, Result};

/// Read the font paths listed in a batch file
///
/// One path per line; blank lines and lines starting with `#` are skipped.
pub fn read_batch_file(batch_file: &Path) -> Result<Vec<PathBuf>> {
    info!("Reading batch file {}", batch_file.display());

    let content = fs::read_to_string(batch_file)?;
    let paths: Vec<PathBuf> = content
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(PathBuf::from)
        .collect();

    if paths.is_empty() {
        return Err(Error::Batch(format!(
            "no paths listed in {}",
            batch_file.display()
        )));
    }

    info!("Found {} entries to validate", paths.len());
    Ok(paths)
}
