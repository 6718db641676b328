use std::path::PathBuf;
use clap::Parser;
use crate::models::{Config, OutputFormat};

/// Check fonts for licensing problems before permanent publication
#[derive(Debug, Parser)]
#[command(name = "fontguard", version, about)]
pub struct Args {
    /// Font files or folders to validate
    pub paths: Vec<PathBuf>,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// Print verdicts as JSON instead of a text report
    #[arg(long)]
    pub json: bool,

    /// File listing one font or folder path per line
    #[arg(long, value_name = "FILE")]
    pub batch: Option<PathBuf>,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let output_format = if args.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };

        let mut config = Config::new(args.debug, output_format);
        config.batch_file = args.batch;
        config.paths = args.paths;
        config
    }
}

/// Parse command line arguments into a configuration
pub fn parse_args() -> Config {
    Args::parse().into()
}
