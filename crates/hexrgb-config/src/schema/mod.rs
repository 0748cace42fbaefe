//! Configuration schema types for hexrgb.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod demo;
mod output;
mod system;

pub use demo::*;
pub use output::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Root configuration for hexrgb.
///
/// Every option has a default, so an empty file is a valid config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct HexrgbConfig {
    pub logging: LoggingConfig,
    pub output: OutputConfig,
    pub encode: EncodeConfig,
    pub demo: DemoConfig,
}
