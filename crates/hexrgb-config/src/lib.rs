//! hexrgb configuration system.
//!
//! TOML-based configuration with validation. All sections use defaults so
//! partial configs, or no config file at all, work out of the box.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use hexrgb_config::{config_to_toml, load_config};
//!
//! let config = load_config(None).expect("failed to load config");
//! println!("{}", config_to_toml(&config).expect("serializable config"));
//! ```

pub mod schema;
pub mod toml_loader;
pub mod toml_writer;
pub mod validation;

pub use schema::{HexrgbConfig, LogLevel, OutputFormat};
pub use toml_loader::{default_config_path, default_config_toml, load_default, load_from_path};
pub use toml_writer::config_to_toml;
pub use validation::validate;

use hexrgb_common::ConfigError;
use std::path::Path;

/// Load config from an explicit path, or from the platform default.
///
/// An explicit path must exist; the platform default may be absent.
pub fn load_config(path: Option<&Path>) -> Result<HexrgbConfig, ConfigError> {
    match path {
        Some(path) => load_from_path(path),
        None => load_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_config_with_missing_explicit_path_fails() {
        let err = load_config(Some(Path::new("/tmp/hexrgb_missing_override.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::FileNotFound(_)));
    }

    #[test]
    fn load_config_with_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        std::fs::write(&path, "[encode]\nstrict = true\n").unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert!(config.encode.strict);
    }
}
