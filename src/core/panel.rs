//! # Result Panel
//!
//! The text shown after a menu selection, built from a query outcome.
//! Failures become ordinary panel lines; nothing here can abort the app.

use std::path::Path;

use crate::sysinfo::{BatteryInfo, DiskUsage, SysInfoError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultPanel {
    pub title: String,
    pub lines: Vec<String>,
    pub is_error: bool,
}

impl ResultPanel {
    pub fn disk(path: &Path, result: &Result<DiskUsage, SysInfoError>) -> Self {
        let title = format!("Disk usage: {}", path.display());
        match result {
            Ok(usage) => Self {
                title,
                lines: vec![
                    format!("Total:     {:.2} GB", usage.total_gb()),
                    format!(
                        "Used:      {:.2} GB ({:.1}%)",
                        usage.used_gb(),
                        usage.used_percent
                    ),
                    format!("Available: {:.2} GB", usage.available_gb()),
                ],
                is_error: false,
            },
            Err(e) => Self {
                title,
                lines: vec![format!("Disk query failed: {e}")],
                is_error: true,
            },
        }
    }

    /// The summary line always shows, even with empty fields; each failed
    /// field adds a line naming it.
    pub fn battery(info: &BatteryInfo) -> Self {
        let mut lines = vec![info.summary()];
        lines.extend(info.failures.iter().map(|e| e.to_string()));
        Self {
            title: "Battery".to_string(),
            lines,
            is_error: !info.failures.is_empty(),
        }
    }

    pub fn selection(label: &str) -> Self {
        Self {
            title: label.to_string(),
            lines: vec![format!("You selected: {label}")],
            is_error: false,
        }
    }
}
