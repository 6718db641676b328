use std::process::ExitCode;
use log::error;
use fontguard::cli::{get_user_input, parse_args, render_json, render_text};
use fontguard::error::{Error, Result};
use fontguard::models::{Config, OutputFormat};
use fontguard::scan::{read_batch_file, validate_paths, BatchSummary};
use fontguard::utils::{collect_font_paths, init_logging};

fn main() -> ExitCode {
    let config = parse_args();
    init_logging(&config);

    match run(config) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::from(2)
        }
    }
}

/// Validate everything the configuration names; `Ok(false)` when any font failed
fn run(mut config: Config) -> Result<bool> {
    if let Some(batch_file) = &config.batch_file {
        let listed = read_batch_file(batch_file)?;
        config.paths.extend(listed);
    }

    if config.needs_input() {
        config.paths.push(get_user_input()?);
    }

    let files = collect_font_paths(&config.paths)?;
    if files.is_empty() {
        return Err(Error::Config("no font files found".to_string()));
    }

    let reports = validate_paths(&files);

    match config.output_format {
        OutputFormat::Text => print!("{}", render_text(&reports)),
        OutputFormat::Json => println!("{}", render_json(&reports)?),
    }

    Ok(BatchSummary::from_reports(&reports).all_passed())
}
