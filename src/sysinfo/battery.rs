//! Battery readings from the Linux power-supply sysfs interface.
//!
//! Both fields are kept as raw text. Capacity is not parsed to an integer;
//! whatever the kernel (or a fake) exposes is shown as-is.

use std::fmt;
use std::fs::File;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use super::{SysInfoError, TextSource};

/// Bytes kept per field: a 20-byte buffer minus its terminator.
pub const DEFAULT_READ_LIMIT: usize = 19;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BatteryField {
    Capacity,
    Status,
}

impl fmt::Display for BatteryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BatteryField::Capacity => write!(f, "capacity"),
            BatteryField::Status => write!(f, "status"),
        }
    }
}

/// Where the two battery sources live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatteryPaths {
    pub capacity: PathBuf,
    pub status: PathBuf,
}

impl BatteryPaths {
    /// `<dir>/capacity` and `<dir>/status`, the sysfs power-supply layout.
    pub fn from_device_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            capacity: dir.join("capacity"),
            status: dir.join("status"),
        }
    }

    pub fn path_for(&self, field: BatteryField) -> &Path {
        match field {
            BatteryField::Capacity => &self.capacity,
            BatteryField::Status => &self.status,
        }
    }
}

#[derive(Debug, Default)]
pub struct BatteryInfo {
    pub capacity: String,
    pub status: String,
    /// Fields that could not be read this time, in read order.
    pub failures: Vec<SysInfoError>,
}

impl BatteryInfo {
    pub(super) fn field_mut(&mut self, field: BatteryField) -> &mut String {
        match field {
            BatteryField::Capacity => &mut self.capacity,
            BatteryField::Status => &mut self.status,
        }
    }

    /// The `Battery: 87% (Charging)` line. The `%` is appended regardless of
    /// what the capacity text contains.
    pub fn summary(&self) -> String {
        format!("Battery: {}% ({})", self.capacity, self.status)
    }
}

/// Everything before the first newline.
pub(super) fn first_line(raw: &str) -> &str {
    raw.split('\n').next().unwrap_or_default()
}

/// Reads sysfs-style files straight from disk.
pub struct SysfsReader;

impl TextSource for SysfsReader {
    fn read_text(&self, path: &Path, limit: usize) -> io::Result<String> {
        let mut buf = Vec::new();
        File::open(path)?.take(limit as u64).read_to_end(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}
