//! File logging.
//!
//! The logger starts before the config is read, at full verbosity, so the
//! config loader's own warnings are kept. Once the level is resolved,
//! `apply_level` narrows it.

use log::LevelFilter;
use simplelog::{ConfigBuilder, WriteLogger};
use std::fs::File;
use std::path::Path;

/// Send log records to `log_file`. A file that can't be created disables
/// logging; the terminal is never used as a fallback.
pub fn init(log_file: &Path) {
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(file) = File::create(log_file) {
        let _ = WriteLogger::init(LevelFilter::Trace, log_config, file);
    }
}

pub fn apply_level(level: LevelFilter) {
    log::set_max_level(level);
}
