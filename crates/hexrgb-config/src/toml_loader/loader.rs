//! Core TOML config loading: read from path or platform default.

use crate::schema::HexrgbConfig;
use crate::validation;
use hexrgb_common::ConfigError;
use std::io::ErrorKind;
use std::path::Path;
use tracing::{debug, info};

use super::paths::default_config_path;

/// Load config from a specific TOML file path.
///
/// Missing fields take their serde defaults. The parsed config must pass
/// [`validation::validate`].
pub fn load_from_path(path: &Path) -> Result<HexrgbConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::ParseError(format!("failed to read {}: {e}", path.display())),
    })?;

    let config: HexrgbConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    validation::validate(&config)?;

    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load config from `path`, treating a missing file as the default config.
///
/// Nothing is written to disk.
pub(crate) fn load_or_default(path: &Path) -> Result<HexrgbConfig, ConfigError> {
    match load_from_path(path) {
        Ok(config) => Ok(config),
        Err(ConfigError::FileNotFound(_)) => {
            debug!("no config at {}, using defaults", path.display());
            Ok(HexrgbConfig::default())
        }
        Err(e) => Err(e),
    }
}

/// Load config from the platform-specific default path.
///
/// On macOS: `~/Library/Application Support/hexrgb/config.toml`
/// On Linux: `~/.config/hexrgb/config.toml`
///
/// A missing file means defaults.
pub fn load_default() -> Result<HexrgbConfig, ConfigError> {
    load_or_default(&default_config_path()?)
}
