//! Output and encoding behavior.

use serde::{Deserialize, Serialize};

/// How conversion results are printed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// Encoder settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct EncodeConfig {
    /// Reject out-of-range channels instead of clamping them.
    pub strict: bool,
}
