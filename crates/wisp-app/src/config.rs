//! TOML configuration for the demo host.
//!
//! All sections use `serde(default)` so partial configs work. A missing
//! file yields defaults; a file that fails to parse or validate logs a
//! warning and falls back to defaults rather than aborting.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use wisp_common::ConfigError;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WispConfig {
    pub backend: BackendSection,
    pub reveal: RevealSection,
    pub widget: WidgetSection,
}

impl Default for WispConfig {
    fn default() -> Self {
        Self {
            backend: BackendSection::default(),
            reveal: RevealSection::default(),
            widget: WidgetSection::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BackendSection {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for BackendSection {
    fn default() -> Self {
        Self {
            base_url: wisp_backend::LOCAL_DEV_BASE.into(),
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RevealSection {
    pub cadence_ms: u64,
}

impl Default for RevealSection {
    fn default() -> Self {
        Self { cadence_ms: 20 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetSection {
    pub open_on_start: bool,
}

impl Default for WidgetSection {
    fn default() -> Self {
        Self {
            open_on_start: true,
        }
    }
}

pub fn validate(config: &WispConfig) -> Result<(), ConfigError> {
    if config.backend.base_url.is_empty() {
        return Err(ConfigError::ValidationError(
            "backend.base_url must not be empty".into(),
        ));
    }
    if !config.backend.base_url.starts_with("http") {
        return Err(ConfigError::ValidationError(format!(
            "backend.base_url must be an http(s) URL, got {}",
            config.backend.base_url
        )));
    }
    if config.backend.timeout_secs == 0 {
        return Err(ConfigError::ValidationError(
            "backend.timeout_secs must be positive".into(),
        ));
    }
    if config.reveal.cadence_ms == 0 {
        return Err(ConfigError::ValidationError(
            "reveal.cadence_ms must be positive".into(),
        ));
    }
    Ok(())
}

/// Load config from a specific TOML file path.
pub fn load_from_path(path: &Path) -> Result<WispConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        ConfigError::ParseError(format!("failed to read {}: {e}", path.display()))
    })?;

    let config: WispConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validate(&config) {
        warn!("config validation warning: {e}");
        warn!("falling back to default config");
        return Ok(WispConfig::default());
    }

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Platform default config path (`<config dir>/wisp/config.toml`).
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("wisp").join("config.toml"))
}

/// Load from an explicit override path, or the platform default.
/// A missing file is not an error; defaults are used.
pub fn load(override_path: Option<&str>) -> Result<WispConfig, ConfigError> {
    if let Some(path) = override_path {
        return load_from_path(Path::new(path));
    }

    match default_config_path() {
        Some(path) if path.exists() => load_from_path(&path),
        _ => {
            info!("no config file, using defaults");
            Ok(WispConfig::default())
        }
    }
}
