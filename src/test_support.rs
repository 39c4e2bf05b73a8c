//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::core::menu::MenuState;
use crate::core::state::App;
use crate::sysinfo::{
    BatteryPaths, DEFAULT_READ_LIMIT, FsStats, StatFs, SystemInfoProvider, TextSource,
};

/// A stat collaborator that returns fixed numbers, or fails every call.
pub struct FakeStatFs(Option<FsStats>);

impl FakeStatFs {
    pub fn ok(stats: FsStats) -> Self {
        Self(Some(stats))
    }

    pub fn failing() -> Self {
        Self(None)
    }
}

impl StatFs for FakeStatFs {
    fn stat_for_path(&self, _path: &Path) -> io::Result<FsStats> {
        self.0
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
    }
}

/// In-memory files. Paths not registered fail with `NotFound`.
#[derive(Default)]
pub struct FakeText(HashMap<PathBuf, String>);

impl FakeText {
    pub fn with(mut self, path: &str, contents: &str) -> Self {
        self.0.insert(PathBuf::from(path), contents.to_string());
        self
    }
}

impl TextSource for FakeText {
    fn read_text(&self, path: &Path, limit: usize) -> io::Result<String> {
        let contents = self
            .0
            .get(path)
            .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))?;
        let bytes: Vec<u8> = contents.bytes().take(limit).collect();
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Provider over fakes with the battery device at `/bat`.
pub fn test_provider(fs: FakeStatFs, text: FakeText) -> SystemInfoProvider {
    SystemInfoProvider::new(
        Box::new(fs),
        Box::new(text),
        BatteryPaths::from_device_dir("/bat"),
        DEFAULT_READ_LIMIT,
    )
}

/// App with the default three-entry menu looking at `/`.
pub fn test_app() -> App {
    App::new(MenuState::default_menu(&[]), PathBuf::from("/"))
}
