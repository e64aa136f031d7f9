//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.halaman/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.

use log::{LevelFilter, debug, info, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct HalamanConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Log verbosity: "off", "error", "warn", "info", "debug" or "trace".
    pub log_level: Option<String>,
    pub log_file: Option<String>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct UiConfig {
    pub show_thumbnails: Option<bool>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Info;
pub const DEFAULT_LOG_FILE: &str = "halaman.log";
pub const DEFAULT_SHOW_THUMBNAILS: bool = true;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub log_level: LevelFilter,
    pub log_file: PathBuf,
    pub show_thumbnails: bool,
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

/// Returns the path to `~/.halaman/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".halaman").join("config.toml"))
}

/// Load config from `~/.halaman/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `HalamanConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<HalamanConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(HalamanConfig::default());
        }
    };

    if !path.exists() {
        info!("No config file found, generating default at {}", path.display());
        generate_default_config(&path);
        return Ok(HalamanConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config: HalamanConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("Loaded config from {}", path.display());
    debug!("Config: {:?}", config);
    Ok(config)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r#"# Halaman Configuration
# All settings are optional — defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [general]
# log_level = "info"            # "off", "error", "warn", "info", "debug", "trace"
# log_file = "halaman.log"      # Relative to the working directory

# [ui]
# show_thumbnails = true        # Draw ASCII thumbnails on the item cards
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
///
/// `cli_log_level` comes from the CLI flag (None = not specified).
pub fn resolve(config: &HalamanConfig, cli_log_level: Option<LevelFilter>) -> ResolvedConfig {
    let env_log_level = std::env::var("HALAMAN_LOG_LEVEL")
        .ok()
        .and_then(|v| parse_level("HALAMAN_LOG_LEVEL env var", &v));
    resolve_with(config, env_log_level, cli_log_level)
}

/// The environment read is split out of [`resolve`] so the precedence
/// chain can be tested without mutating process-global state.
fn resolve_with(
    config: &HalamanConfig,
    env_log_level: Option<LevelFilter>,
    cli_log_level: Option<LevelFilter>,
) -> ResolvedConfig {
    // Log level: CLI → env → config → default
    let log_level = cli_log_level
        .or(env_log_level)
        .or_else(|| {
            config
                .general
                .log_level
                .as_deref()
                .and_then(|v| parse_level("config file", v))
        })
        .unwrap_or(DEFAULT_LOG_LEVEL);

    // Log file: config → default (in the working directory)
    let log_file = config
        .general
        .log_file
        .clone()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE));

    ResolvedConfig {
        log_level,
        log_file,
        show_thumbnails: config.ui.show_thumbnails.unwrap_or(DEFAULT_SHOW_THUMBNAILS),
    }
}

/// Parses a log level name, warning (and yielding None) on unknown values.
fn parse_level(source: &str, value: &str) -> Option<LevelFilter> {
    match value.parse() {
        Ok(level) => Some(level),
        Err(_) => {
            warn!("Ignoring unknown log level {:?} from {}", value, source);
            None
        }
    }
}
