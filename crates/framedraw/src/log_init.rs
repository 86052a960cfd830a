//! File logging for `theme-viewer`.
//!
//! The viewer draws to stdout, so theme warnings (unparseable expressions,
//! missing textures, nesting cut off) go to a log file next to it instead.
//! Per-op `trace!` output from the painter is filtered out.

use log::{Level, LevelFilter, Metadata, Record, SetLoggerError};
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

struct ThemeLogger {
    path: PathBuf,
}

impl log::Log for ThemeLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= Level::Debug
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        if let Ok(mut file) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(
                file,
                "[{}] {}: {}",
                record.level(),
                record.target(),
                record.args()
            );
        }
    }

    fn flush(&self) {}
}

/// Append theme loading and painting logs to `path`. Fails if a logger is
/// already installed.
pub fn init_logger(path: impl AsRef<Path>) -> Result<(), SetLoggerError> {
    let logger = ThemeLogger {
        path: path.as_ref().to_path_buf(),
    };
    log::set_boxed_logger(Box::new(logger))?;
    log::set_max_level(LevelFilter::Debug);
    Ok(())
}
