//! # System Info Provider
//!
//! Answers the two questions the menu can ask: how full is a filesystem, and
//! what does the battery report. Each query is a fresh one-shot read with no
//! caching; the user re-triggers it from the menu when they want new numbers.
//!
//! ```text
//! SystemInfoProvider
//! ├── fs: Box<dyn StatFs>          // statvfs(3) in production
//! ├── text: Box<dyn TextSource>    // sysfs file reads in production
//! └── battery: BatteryPaths        // capacity + status sources
//! ```
//!
//! The raw collaborators sit behind traits so tests can feed in exact block
//! counts and file contents without touching the host.

mod battery;
mod disk;

pub use battery::{BatteryField, BatteryInfo, BatteryPaths, DEFAULT_READ_LIMIT, SysfsReader};
pub use disk::{DiskUsage, FsStats, GIB, NixStatFs};

use log::{debug, warn};
use std::fmt;
use std::io;
use std::path::{Path, PathBuf};

/// Filesystem stat collaborator.
pub trait StatFs {
    fn stat_for_path(&self, path: &Path) -> io::Result<FsStats>;
}

/// Text file collaborator. Returns at most `limit` bytes of content.
pub trait TextSource {
    fn read_text(&self, path: &Path, limit: usize) -> io::Result<String>;
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum SysInfoError {
    /// The filesystem stat call failed (missing path, not mounted, ...).
    Stat { path: PathBuf, source: io::Error },
    /// A battery text source could not be opened or read.
    SourceUnavailable {
        field: BatteryField,
        path: PathBuf,
        source: io::Error,
    },
}

impl fmt::Display for SysInfoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SysInfoError::Stat { path, source } => {
                write!(f, "cannot stat {}: {source}", path.display())
            }
            SysInfoError::SourceUnavailable {
                field,
                path,
                source,
            } => write!(f, "{field} unavailable ({}): {source}", path.display()),
        }
    }
}

impl std::error::Error for SysInfoError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SysInfoError::Stat { source, .. } => Some(source),
            SysInfoError::SourceUnavailable { source, .. } => Some(source),
        }
    }
}

// ============================================================================
// Provider
// ============================================================================

pub struct SystemInfoProvider {
    fs: Box<dyn StatFs>,
    text: Box<dyn TextSource>,
    battery: BatteryPaths,
    read_limit: usize,
}

impl SystemInfoProvider {
    pub fn new(
        fs: Box<dyn StatFs>,
        text: Box<dyn TextSource>,
        battery: BatteryPaths,
        read_limit: usize,
    ) -> Self {
        Self {
            fs,
            text,
            battery,
            read_limit,
        }
    }

    /// Provider backed by `statvfs(3)` and real sysfs reads.
    pub fn linux(battery: BatteryPaths, read_limit: usize) -> Self {
        Self::new(Box::new(NixStatFs), Box::new(SysfsReader), battery, read_limit)
    }

    /// Capacity statistics for the filesystem containing `path`.
    pub fn query_disk_usage(&self, path: &Path) -> Result<DiskUsage, SysInfoError> {
        let stats = self
            .fs
            .stat_for_path(path)
            .map_err(|source| SysInfoError::Stat {
                path: path.to_path_buf(),
                source,
            })?;
        debug!("statvfs {}: {:?}", path.display(), stats);
        Ok(DiskUsage::from_stats(&stats))
    }

    /// Capacity and charging status of the configured battery.
    ///
    /// A field whose source cannot be read is left empty and its failure is
    /// recorded; the other field is still read.
    pub fn query_battery_info(&self) -> BatteryInfo {
        let mut info = BatteryInfo::default();
        for field in [BatteryField::Capacity, BatteryField::Status] {
            let path = self.battery.path_for(field);
            match self.text.read_text(path, self.read_limit) {
                Ok(raw) => *info.field_mut(field) = battery::first_line(&raw).to_string(),
                Err(source) => {
                    let err = SysInfoError::SourceUnavailable {
                        field,
                        path: path.to_path_buf(),
                        source,
                    };
                    warn!("Battery read failed: {}", err);
                    info.failures.push(err);
                }
            }
        }
        info
    }
}
