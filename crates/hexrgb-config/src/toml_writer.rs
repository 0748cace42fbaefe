//! Render a config back to TOML.

use hexrgb_common::ConfigError;

use crate::schema::HexrgbConfig;

/// Serialize the effective config as pretty-printed TOML.
pub fn config_to_toml(config: &HexrgbConfig) -> Result<String, ConfigError> {
    toml::to_string_pretty(config)
        .map_err(|e| ConfigError::ParseError(format!("failed to serialize config to TOML: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::OutputFormat;

    #[test]
    fn config_to_toml_contains_all_sections() {
        let toml_str = config_to_toml(&HexrgbConfig::default()).unwrap();
        assert!(toml_str.contains("[logging]"));
        assert!(toml_str.contains("[output]"));
        assert!(toml_str.contains("[encode]"));
        assert!(toml_str.contains("[demo]"));
        assert!(toml_str.contains("level = \"WARNING\""));
    }

    #[test]
    fn config_round_trips_through_toml() {
        let mut config = HexrgbConfig::default();
        config.output.format = OutputFormat::Json;
        config.encode.strict = true;
        config.demo.hex = "#000".into();

        let toml_str = config_to_toml(&config).unwrap();
        let parsed: HexrgbConfig = toml::from_str(&toml_str).unwrap();
        assert_eq!(parsed, config);
    }
}
