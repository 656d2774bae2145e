//! Logger setup for binaries and tests.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes the global logger.
///
/// `RUST_LOG` takes precedence. Otherwise debug messages are shown when
/// `verbose` is `true`, and info and above when it is not.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let env = Env::default().default_filter_or(level.to_string());

    // A second init (tests, embedding hosts) keeps the first logger.
    let _ = Builder::from_env(env).format_timestamp_millis().try_init();
}
