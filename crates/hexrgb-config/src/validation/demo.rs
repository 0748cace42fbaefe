use hexrgb_common::{parse_hex, Channel};

use super::helpers::validate_range;
use crate::schema::HexrgbConfig;

/// Validate demo inputs: channels in range and a decodable hex code.
pub(crate) fn validate_demo(errors: &mut Vec<String>, config: &HexrgbConfig) {
    for (channel, &value) in Channel::ALL.iter().zip(&config.demo.rgb) {
        validate_range(errors, &format!("demo.rgb.{channel}"), value, 0, 255);
    }

    if let Err(e) = parse_hex(&config.demo.hex) {
        errors.push(format!("demo.hex: {e}"));
    }
}
