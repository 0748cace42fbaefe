use std::path::PathBuf;

use crate::types::Channel;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("invalid hex color: {0:?}")]
    InvalidHexFormat(String),

    #[error("{channel} channel {value} is out of range [0, 255]")]
    ChannelOutOfRange { channel: Channel, value: i64 },
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

#[derive(Debug, thiserror::Error)]
pub enum HexrgbError {
    #[error(transparent)]
    Color(#[from] ColorError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
