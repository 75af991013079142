//! Terminal logging for the wordhist CLI.
//!
//! Log records go to stderr so they never mix with a report written to
//! stdout.

use log::LevelFilter;
use simplelog::{ColorChoice, Config, ConfigBuilder, TermLogger, TerminalMode};

/// Map `-q` / `-v` flags to a level. Warnings show by default.
pub fn level_from_flags(verbose: u8, quiet: bool) -> LevelFilter {
    if quiet {
        return LevelFilter::Off;
    }
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global stderr logger. Warns on stderr if a logger is already set.
pub fn initialize(level: LevelFilter) {
    if level == LevelFilter::Off {
        return;
    }
    let config = build_config();
    if let Err(err) = TermLogger::init(level, config, TerminalMode::Stderr, ColorChoice::Auto) {
        eprintln!("Warning: could not initialize logging: {}", err);
    }
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_from_flags() {
        assert_eq!(level_from_flags(0, false), LevelFilter::Warn);
        assert_eq!(level_from_flags(1, false), LevelFilter::Info);
        assert_eq!(level_from_flags(2, false), LevelFilter::Debug);
        assert_eq!(level_from_flags(5, false), LevelFilter::Trace);
        assert_eq!(level_from_flags(3, true), LevelFilter::Off);
    }

    #[test]
    fn test_initialize_twice_keeps_running() {
        initialize(LevelFilter::Warn);
        initialize(LevelFilter::Warn);
        initialize(LevelFilter::Off);
        log::warn!("still logging");
    }
}
