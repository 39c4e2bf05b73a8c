//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.sutility/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::sysinfo::DEFAULT_READ_LIMIT;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct SutilityConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub disk: DiskConfig,
    #[serde(default)]
    pub battery: BatteryConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub log_level: Option<String>,
    /// Labels for extra menu entries that only echo their selection.
    pub extra_items: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct DiskConfig {
    pub path: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BatteryConfig {
    pub device_dir: Option<PathBuf>,
    pub read_limit: Option<usize>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_DISK_PATH: &str = "/";
pub const DEFAULT_BATTERY_DIR: &str = "/sys/class/power_supply/BAT0";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;
/// Upper bound for `battery.read_limit`. Sysfs values are a handful of bytes.
pub const MAX_READ_LIMIT: usize = 4096;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub disk_path: PathBuf,
    pub battery_dir: PathBuf,
    pub read_limit: usize,
    pub log_level: LevelFilter,
    pub extra_items: Vec<String>,
}

/// Values taken from command-line flags (None = not specified).
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub disk_path: Option<PathBuf>,
    pub battery_dir: Option<PathBuf>,
    pub verbose: bool,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.sutility/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".sutility").join("config.toml"))
}

/// Load config from `~/.sutility/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `SutilityConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<SutilityConfig, ConfigError> {
    match config_path() {
        Some(path) => load_config_from(&path),
        None => {
            warn!("Could not determine home directory, using default config");
            Ok(SutilityConfig::default())
        }
    }
}

pub fn load_config_from(path: &Path) -> Result<SutilityConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(SutilityConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: SutilityConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# sutility configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_level = "info"                 # "off", "error", "warn", "info", "debug", "trace"
# extra_items = ["Start"]            # Extra menu entries, listed before Quit.
#                                    # None by default; add "Start" for the
#                                    # classic Start / Battery info / Quit layout.

# [disk]
# path = "/"                         # Or set SUTILITY_DISK_PATH

# [battery]
# device_dir = "/sys/class/power_supply/BAT0"   # Or set SUTILITY_BATTERY_DIR
# read_limit = 19                    # Bytes kept from each battery file (max 4096)
"#;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &SutilityConfig, cli: &CliOverrides) -> ResolvedConfig {
    resolve_with_env(config, cli, |key| std::env::var(key).ok())
}

fn resolve_with_env(
    config: &SutilityConfig,
    cli: &CliOverrides,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Disk path: CLI → env → config → default
    let disk_path = cli
        .disk_path
        .clone()
        .or_else(|| env("SUTILITY_DISK_PATH").map(PathBuf::from))
        .or_else(|| config.disk.path.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DISK_PATH));

    // Battery directory: CLI → env → config → default
    let battery_dir = cli
        .battery_dir
        .clone()
        .or_else(|| env("SUTILITY_BATTERY_DIR").map(PathBuf::from))
        .or_else(|| config.battery.device_dir.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_BATTERY_DIR));

    let read_limit = match config.battery.read_limit {
        Some(0) => {
            warn!("battery.read_limit must be positive, using {}", DEFAULT_READ_LIMIT);
            DEFAULT_READ_LIMIT
        }
        Some(limit) if limit > MAX_READ_LIMIT => {
            warn!("battery.read_limit {} is too large, using {}", limit, MAX_READ_LIMIT);
            MAX_READ_LIMIT
        }
        Some(limit) => limit,
        None => DEFAULT_READ_LIMIT,
    };

    let log_level = if cli.verbose {
        LevelFilter::Debug
    } else {
        config
            .general
            .log_level
            .as_deref()
            .map(parse_log_level)
            .unwrap_or(DEFAULT_LOG_LEVEL)
    };

    ResolvedConfig {
        disk_path,
        battery_dir,
        read_limit,
        log_level,
        extra_items: config.general.extra_items.clone().unwrap_or_default(),
    }
}

fn parse_log_level(level: &str) -> LevelFilter {
    level.parse().unwrap_or_else(|_| {
        warn!("Unknown log level '{}', using {}", level, DEFAULT_LOG_LEVEL);
        DEFAULT_LOG_LEVEL
    })
}
