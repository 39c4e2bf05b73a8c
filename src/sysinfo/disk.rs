//! Filesystem capacity from `statvfs(3)`.

use std::io;
use std::path::Path;

use nix::sys::statvfs::statvfs;

use super::StatFs;

/// Bytes per binary gigabyte.
pub const GIB: u64 = 1024 * 1024 * 1024;

/// Raw block counts as reported by the stat call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FsStats {
    pub block_size: u64,
    pub total_blocks: u64,
    /// All unused blocks, including the superuser reserve.
    pub free_blocks: u64,
    /// Unused blocks an unprivileged user may claim.
    pub available_blocks: u64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DiskUsage {
    pub total_bytes: u64,
    pub free_bytes: u64,
    pub available_bytes: u64,
    /// `total - free`. Reserved blocks count as free here, so
    /// `used + available` can fall short of `total`.
    pub used_bytes: u64,
    /// `used / total * 100`, or 0 for an empty filesystem. Not clamped.
    pub used_percent: f64,
}

impl DiskUsage {
    pub fn from_stats(stats: &FsStats) -> Self {
        let total_bytes = stats.total_blocks.saturating_mul(stats.block_size);
        let free_bytes = stats.free_blocks.saturating_mul(stats.block_size);
        let available_bytes = stats.available_blocks.saturating_mul(stats.block_size);
        let used_bytes = total_bytes.saturating_sub(free_bytes);

        let used_percent = if total_bytes == 0 {
            0.0
        } else {
            used_bytes as f64 / total_bytes as f64 * 100.0
        };

        Self {
            total_bytes,
            free_bytes,
            available_bytes,
            used_bytes,
            used_percent,
        }
    }

    pub fn total_gb(&self) -> f64 {
        to_gb(self.total_bytes)
    }

    pub fn free_gb(&self) -> f64 {
        to_gb(self.free_bytes)
    }

    pub fn available_gb(&self) -> f64 {
        to_gb(self.available_bytes)
    }

    pub fn used_gb(&self) -> f64 {
        to_gb(self.used_bytes)
    }
}

fn to_gb(bytes: u64) -> f64 {
    bytes as f64 / GIB as f64
}

/// `statvfs(3)` through nix. Block counts are in units of the fragment size.
pub struct NixStatFs;

impl StatFs for NixStatFs {
    fn stat_for_path(&self, path: &Path) -> io::Result<FsStats> {
        let vfs = statvfs(path).map_err(io::Error::from)?;
        Ok(FsStats {
            block_size: u64::from(vfs.fragment_size()),
            total_blocks: u64::from(vfs.blocks()),
            free_blocks: u64::from(vfs.blocks_free()),
            available_blocks: u64::from(vfs.blocks_available()),
        })
    }
}
