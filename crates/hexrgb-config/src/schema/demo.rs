use serde::{Deserialize, Serialize};

/// Inputs for the demo run when no subcommand is given.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    pub rgb: [i64; 3],
    pub hex: String,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            rgb: [255, 100, 50],
            hex: "#FF6432".into(),
        }
    }
}
