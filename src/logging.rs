use std::{
    io::{self, Write as _},
    sync::{OnceLock, RwLock},
};

use colored::{ColoredString, Colorize as _};
use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

static LOGGER: OnceLock<StderrLogger> = OnceLock::new();

pub fn get_logger() -> &'static StderrLogger {
    LOGGER.get_or_init(|| StderrLogger::new(LevelFilter::Warn))
}

/// Installs the logger. Can only succeed once per process.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    let logger = get_logger();
    logger.set_level(level);
    log::set_logger(logger)?;
    log::set_max_level(LevelFilter::Trace);
    Ok(())
}

pub struct StderrLogger {
    min_level: RwLock<LevelFilter>,
}

impl StderrLogger {
    fn new(min_level: LevelFilter) -> Self {
        Self {
            min_level: RwLock::new(min_level),
        }
    }

    pub fn min_level(&self) -> LevelFilter {
        *self.min_level.read().unwrap_or_else(|e| e.into_inner())
    }

    pub fn set_level(&self, level: LevelFilter) {
        *self.min_level.write().unwrap_or_else(|e| e.into_inner()) = level;
    }

    fn level_tag(level: log::Level) -> ColoredString {
        let tag = format!("{:<5}", level);
        match level {
            log::Level::Error => tag.red(),
            log::Level::Warn => tag.yellow(),
            log::Level::Info => tag.white(),
            log::Level::Debug => tag.blue(),
            log::Level::Trace => tag.dimmed(),
        }
    }

    pub fn format(record: &Record) -> String {
        let source = record.module_path().unwrap_or("unknown");
        format!(
            "{} {} -> {}",
            Self::level_tag(record.level()),
            source.dimmed(),
            record.args()
        )
    }
}

impl Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.min_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            let _ = writeln!(io::stderr(), "{}", Self::format(record));
        }
    }

    fn flush(&self) {
        let _ = io::stderr().flush();
    }
}
