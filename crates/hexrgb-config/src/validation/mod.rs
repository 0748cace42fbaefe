//! Full configuration validation.
//!
//! Serde already rejects unknown enum values and wrong types, so these
//! checks cover the values that deserialize fine but cannot be used.

mod demo;
mod helpers;


use crate::schema::HexrgbConfig;
use hexrgb_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &HexrgbConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    demo::validate_demo(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
