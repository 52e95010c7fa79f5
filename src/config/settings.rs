//! Alert engine settings loaded from config.toml
//!
//! The engine exposes exactly two tunables: the generation interval and the
//! startup warm-up delay. Both come from an optional `[engine]` table in
//! config.toml; a missing file or missing keys fall back to defaults.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

const DEFAULT_INTERVAL_MINUTES: u64 = 60;
const DEFAULT_WARMUP_SECONDS: u64 = 30;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    #[serde(default)]
    engine: EngineSettings,
}

/// Tunable parameters of the alert generation engine
#[derive(Debug, Clone, Deserialize)]
pub struct EngineSettings {
    /// Minutes between generation cycles
    #[serde(default = "default_interval_minutes")]
    pub interval_minutes: u64,
    /// Seconds to wait after startup before the first cycle
    #[serde(default = "default_warmup_seconds")]
    pub warmup_seconds: u64,
}

const fn default_interval_minutes() -> u64 {
    DEFAULT_INTERVAL_MINUTES
}

const fn default_warmup_seconds() -> u64 {
    DEFAULT_WARMUP_SECONDS
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            interval_minutes: DEFAULT_INTERVAL_MINUTES,
            warmup_seconds: DEFAULT_WARMUP_SECONDS,
        }
    }
}

/// Loads engine settings from a TOML file.
///
/// # Errors
/// Returns an error if the file exists but cannot be read or parsed.
pub fn load_settings<P: AsRef<Path>>(path: P) -> Result<EngineSettings> {
    if !path.as_ref().exists() {
        return Ok(EngineSettings::default());
    }

    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })?;

    Ok(config.engine)
}

/// Loads engine settings from the default location (./config.toml)
pub fn load_default_settings() -> Result<EngineSettings> {
    load_settings("config.toml")
}
