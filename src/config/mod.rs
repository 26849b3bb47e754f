//! Configuration module for Armory
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (ARMORY_*)
//! 3. Project config (armory.toml)
//! 4. User config (~/.config/armory/config.toml)
//! 5. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    default_config_toml, user_config_path, with_overrides_from, ConfigWarning, CONFIG_FILE_NAME,
};
pub use types::{AssetsConfig, Config, OutputConfig, Verbosity};
