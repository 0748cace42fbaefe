pub mod codec;
pub mod errors;
pub mod types;

pub use codec::{
    clamp_channel, hex_to_rgb, normalize_hex, parse_hex, rgb_to_hex, rgb_to_hex_strict,
};
pub use errors::{ColorError, ConfigError, HexrgbError};
pub use types::{Channel, Rgb};

pub type Result<T> = std::result::Result<T, HexrgbError>;
