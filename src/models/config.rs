use std::fmt;
use std::path::PathBuf;

/// Configuration for a validation run
#[derive(Debug, Clone)]
pub struct Config {
    /// Enable debug output
    pub debug_mode: bool,
    /// How results are printed
    pub output_format: OutputFormat,
    /// File listing one font or folder path per line
    pub batch_file: Option<PathBuf>,
    /// Font files or folders given on the command line
    pub paths: Vec<PathBuf>,
}

/// Report formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable report
    Text,
    /// Verdicts as a JSON array
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl Config {
    /// Create a new configuration with default settings
    pub fn new(debug_mode: bool, output_format: OutputFormat) -> Self {
        Self {
            debug_mode,
            output_format,
            batch_file: None,
            paths: Vec::new(),
        }
    }

    /// True when nothing to validate was given on the command line
    pub fn needs_input(&self) -> bool {
        self.paths.is_empty() && self.batch_file.is_none()
    }
}
