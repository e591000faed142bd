//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.xolak/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::core::state::DEFAULT_GREETING;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct XolakConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub chat: ChatConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct BackendConfig {
    pub base_url: Option<String>,
    pub request_timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct ChatConfig {
    pub greeting: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

/// Development origin of the recommendation backend.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8080";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 60;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub base_url: String,
    pub request_timeout: Duration,
    pub greeting: String,
}

/// Values taken from command-line flags (None = not specified).
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub base_url: Option<String>,
    pub timeout_secs: Option<u64>,
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

/// Returns the path to `~/.xolak/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".xolak").join("config.toml"))
}

/// Load config from `~/.xolak/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `XolakConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<XolakConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(XolakConfig::default());
        }
    };
    load_config_from(&path)
}

pub fn load_config_from(path: &Path) -> Result<XolakConfig, ConfigError> {
    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(path);
        return Ok(XolakConfig::default());
    }

    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: XolakConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

const DEFAULT_CONFIG_TEMPLATE: &str = r#"# Xolak Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [backend]
# base_url = "http://localhost:8080"   # Or set XOLAK_BASE_URL
# request_timeout_secs = 60            # Or set XOLAK_TIMEOUT_SECS

# [chat]
# greeting = "Hi! What kind of project are you looking for?"
"#;

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &Path) {
    if let Some(parent) = path.parent()
        && let Err(e) = fs::create_dir_all(parent)
    {
        warn!("Failed to create config directory: {}", e);
        return;
    }
    if let Err(e) = fs::write(path, DEFAULT_CONFIG_TEMPLATE) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &XolakConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Base URL: CLI → env → config → default
    let base_url = cli
        .base_url
        .clone()
        .or_else(|| std::env::var("XOLAK_BASE_URL").ok())
        .or_else(|| config.backend.base_url.clone())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    // Timeout: CLI → env → config → default
    let timeout_secs = cli
        .timeout_secs
        .or_else(|| {
            std::env::var("XOLAK_TIMEOUT_SECS").ok().and_then(|raw| match raw.parse() {
                Ok(secs) => Some(secs),
                Err(_) => {
                    warn!("Ignoring non-numeric XOLAK_TIMEOUT_SECS={:?}", raw);
                    None
                }
            })
        })
        .or(config.backend.request_timeout_secs)
        .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS)
        .max(1);

    let greeting = config
        .chat
        .greeting
        .as_deref()
        .map(str::trim)
        .filter(|g| !g.is_empty())
        .unwrap_or(DEFAULT_GREETING)
        .to_string();

    ResolvedConfig {
        base_url,
        request_timeout: Duration::from_secs(timeout_secs),
        greeting,
    }
}
