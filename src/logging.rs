//! Logging setup

use log::LevelFilter;

/// Pick the log level for the verbosity flags. `--quiet` wins over `--verbose`.
pub fn level_for(verbose: bool, quiet: bool) -> LevelFilter {
    if quiet {
        LevelFilter::Error
    } else if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

/// Initialize logging based on verbosity flags.
///
/// `RUST_LOG` is read first; the flags then set the global level.
pub fn init_logger(verbose: bool, quiet: bool) {
    env_logger::Builder::from_default_env()
        .filter_level(level_for(verbose, quiet))
        .format_timestamp(None)
        .init();
}
