//! TOML config file loading.

mod loader;
mod paths;
mod template;


pub use loader::{load_default, load_from_path};
pub use paths::default_config_path;
pub use template::default_config_toml;
