use crate::models::Config;

/// Install the process-wide logger
///
/// Debug mode lowers the default filter to `debug`; `RUST_LOG` still wins.
pub fn init_logging(config: &Config) {
    let default_filter = if config.debug_mode { "debug" } else { "warn" };

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();

    log::debug!("Debug mode enabled, output format: {}", config.output_format);
}
