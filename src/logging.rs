#![cfg(feature = "std")]

use std::env;
use log::{self, LevelFilter, Metadata, Record};

/// Environment variable holding the log level (`error`, `warn`, `info`, `debug`, `trace`, `off`).
pub const LOG_ENV: &str = "BROADSIDE_LOG";

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("{} [{}] {}", record.level(), record.target(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

/// Parse a level name, falling back to `default` when absent or invalid.
pub fn level_from(value: Option<&str>, default: LevelFilter) -> LevelFilter {
    value.and_then(|lvl| lvl.parse().ok()).unwrap_or(default)
}

/// Initialize logging with a level taken from the `BROADSIDE_LOG` environment variable.
/// Defaults to `warn` so log lines do not interleave with the game narration.
pub fn init_logging() {
    let level = level_from(env::var(LOG_ENV).ok().as_deref(), LevelFilter::Warn);
    let _ = log::set_logger(&LOGGER).map(|()| log::set_max_level(level));
}
