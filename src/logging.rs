//! Stderr backend for the `log` facade
//!
//! The library only emits through `log::*!` macros; the binary calls
//! [`init`] once to see them.

use log::{LevelFilter, Log, Metadata, Record};
use std::sync::OnceLock;

static LOGGER: OnceLock<StderrLogger> = OnceLock::new();

/// Writes `[LEVEL] target message` lines to stderr
#[derive(Debug)]
pub struct StderrLogger {
    level: LevelFilter,
}

impl StderrLogger {
    pub fn new(level: LevelFilter) -> Self {
        Self { level }
    }

    pub fn format(record: &Record<'_>) -> String {
        format!(
            "[{:<5}] {:<28} {}",
            record.level(),
            record.target(),
            record.args()
        )
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata<'_>) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record<'_>) {
        if self.enabled(record.metadata()) {
            eprintln!("{}", Self::format(record));
        }
    }

    fn flush(&self) {}
}

/// Install the stderr logger. Later calls keep the first logger and only
/// adjust the global max level.
pub fn init(level: LevelFilter) {
    let logger = LOGGER.get_or_init(|| StderrLogger::new(level));
    if log::set_logger(logger).is_err() {
        log::debug!("logger already installed");
    }
    log::set_max_level(level.min(logger.level));
}
