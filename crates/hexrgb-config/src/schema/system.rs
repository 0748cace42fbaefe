//! Logging configuration types.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
#[derive(Default)]
pub enum LogLevel {
    Debug,
    Info,
    #[default]
    Warning,
    Error,
}

impl LogLevel {
    /// `tracing` filter directive covering every hexrgb crate.
    pub fn as_directive(self) -> &'static str {
        match self {
            LogLevel::Debug => "hexrgb=debug",
            LogLevel::Info => "hexrgb=info",
            LogLevel::Warning => "hexrgb=warn",
            LogLevel::Error => "hexrgb=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
