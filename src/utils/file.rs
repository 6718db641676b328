use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use log::debug;
use crate::error::{Error, Result};

const FONT_EXTENSIONS: [&str; 2] = ["ttf", "otf"];

/// sfnt version tags accepted as font files
const FONT_MAGIC: [[u8; 4]; 3] = [
    [0x00, 0x01, 0x00, 0x00], // TrueType
    *b"OTTO",                 // CFF
    *b"true",                 // Apple TrueType
];

/// Check if a file looks like a font: known extension and sfnt header
pub fn is_font_file(path: &Path) -> bool {
    let has_font_extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| FONT_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false);

    if !has_font_extension {
        return false;
    }

    let mut header = [0u8; 4];
    let is_font = fs::File::open(path)
        .and_then(|mut file| file.read_exact(&mut header))
        .map(|_| FONT_MAGIC.contains(&header))
        .unwrap_or(false);

    if !is_font {
        debug!("Skipping non-font file: {}", path.display());
    }
    is_font
}

/// Recursively collect font files under `dir`, sorted by path
pub fn find_font_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut font_files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let path = entry?.path();

        if path.is_dir() {
            font_files.append(&mut find_font_files(&path)?);
        } else if path.is_file() && is_font_file(&path) {
            font_files.push(path);
        }
    }

    font_files.sort();
    Ok(font_files)
}

/// Expand command-line paths into the list of files to validate
///
/// Files are taken as given, so a corrupt upload still gets a parse error
/// instead of being silently skipped. Directories are searched for fonts.
pub fn collect_font_paths(paths: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_file() {
            files.push(path.clone());
        } else if path.is_dir() {
            let found = find_font_files(path)?;
            debug!("Found {} font files in {}", found.len(), path.display());
            files.extend(found);
        } else {
            return Err(Error::InvalidPath(path.clone()));
        }
    }

    Ok(files)
}
