//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.roomdesk/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::route::Fallback;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct RoomdeskConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub router: RouterConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    pub start_path: Option<String>,
    /// JSON catalog of rooms and bookings. Relative paths are relative to
    /// `~/.roomdesk/`.
    pub data_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct RouterConfig {
    pub fallback: Option<Fallback>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_START_PATH: &str = "/";

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedConfig {
    pub start_path: String,
    pub fallback: Fallback,
    pub data_file: Option<PathBuf>,
    /// Problem met while loading the config file, shown once at startup.
    pub notice: Option<String>,
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

/// Returns `~/.roomdesk/`.
pub fn config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".roomdesk"))
}

/// Returns the path to `~/.roomdesk/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|d| d.join("config.toml"))
}

/// Load config from `~/.roomdesk/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `RoomdeskConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<RoomdeskConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(RoomdeskConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(RoomdeskConfig::default());
    }

    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<RoomdeskConfig, ConfigError> {
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: RoomdeskConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    let default_content = r#"# Roomdesk Configuration
# All settings are optional; defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# start_path = "/"                   # Or set ROOMDESK_START_PATH, or --path
# data_file = "rooms.json"           # Relative to ~/.roomdesk/. Or ROOMDESK_DATA_FILE, or --data

# [router]
# fallback = "not-found"             # Show a not-found page for unknown paths
# fallback = { redirect = "/" }      # Or send unknown paths somewhere else
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

pub const ENV_START_PATH: &str = "ROOMDESK_START_PATH";
pub const ENV_DATA_FILE: &str = "ROOMDESK_DATA_FILE";

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
///
/// `cli_start_path` and `cli_data_file` are from CLI flags (None = not specified).
pub fn resolve(
    config: &RoomdeskConfig,
    cli_start_path: Option<&str>,
    cli_data_file: Option<&Path>,
) -> ResolvedConfig {
    resolve_with_env(config, cli_start_path, cli_data_file, |key| {
        std::env::var(key).ok()
    })
}

/// [`resolve`] with the environment supplied by `env`.
pub fn resolve_with_env(
    config: &RoomdeskConfig,
    cli_start_path: Option<&str>,
    cli_data_file: Option<&Path>,
    env: impl Fn(&str) -> Option<String>,
) -> ResolvedConfig {
    // Start path: CLI → env → config → default
    let start_path = cli_start_path
        .map(|s| s.to_string())
        .or_else(|| env(ENV_START_PATH))
        .or_else(|| config.general.start_path.clone())
        .unwrap_or_else(|| DEFAULT_START_PATH.to_string());

    // Data file: CLI (as given) → env (as given) → config (relative to ~/.roomdesk/)
    let data_file = cli_data_file
        .map(Path::to_path_buf)
        .or_else(|| env(ENV_DATA_FILE).map(PathBuf::from))
        .or_else(|| config.general.data_file.as_deref().map(config_relative));

    ResolvedConfig {
        start_path,
        fallback: config.router.fallback.clone().unwrap_or_default(),
        data_file,
        notice: None,
    }
}

fn config_relative(file: &str) -> PathBuf {
    let path = PathBuf::from(file);
    if path.is_absolute() {
        return path;
    }
    match config_dir() {
        Some(dir) => dir.join(path),
        None => path,
    }
}
