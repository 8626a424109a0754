//! Tracing subscriber setup for the command line front end.

use crate::config::LoggingConfig;
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` takes precedence over the configured level. `verbose` forces
/// `debug` for this crate. Logs go to stderr so command output stays clean.
pub fn init(config: &LoggingConfig, verbose: bool) {
    let default_directive = if verbose {
        format!("{},cuaca=debug", config.level)
    } else {
        config.level.clone()
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&default_directive));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    // a subscriber may already be installed by the embedding application
    let _ = if config.format == "json" {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
}
