//! Configuration type definitions

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{LogicalPath, SEPARATOR};
use crate::error::ArmoryResult;

use super::loader::{self, ConfigWarning};

/// Asset layout configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetsConfig {
    /// Root container; never created by path materialization
    #[serde(default = "default_root")]
    pub root: String,

    /// Directory the wizard creates weapon folders in
    #[serde(default = "default_prefabs_dir")]
    pub prefabs_dir: String,

    /// Shader assigned to new materials
    #[serde(default = "default_shader")]
    pub shader: String,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            prefabs_dir: default_prefabs_dir(),
            shader: default_shader(),
        }
    }
}

impl AssetsConfig {
    /// Normalize `root` and `prefabs_dir` and check the layout.
    ///
    /// Trailing separators are dropped. Both values must be logical paths,
    /// and `prefabs_dir` must be `root` or lie below it.
    pub fn validated(mut self) -> Result<Self, String> {
        self.root = self.root.trim().trim_end_matches(SEPARATOR).to_string();
        self.prefabs_dir = self
            .prefabs_dir
            .trim()
            .trim_end_matches(SEPARATOR)
            .to_string();

        LogicalPath::parse(&self.root).map_err(|e| format!("assets.root: {}", e))?;
        LogicalPath::parse(&self.prefabs_dir).map_err(|e| format!("assets.prefabs_dir: {}", e))?;

        let inside_root = self
            .prefabs_dir
            .strip_prefix(self.root.as_str())
            .is_some_and(|rest| rest.is_empty() || rest.starts_with(SEPARATOR));
        if !inside_root {
            return Err(format!(
                "assets.prefabs_dir '{}' is not inside assets.root '{}'",
                self.prefabs_dir, self.root
            ));
        }
        Ok(self)
    }
}

fn default_root() -> String {
    "Assets".to_string()
}

fn default_prefabs_dir() -> String {
    "Assets/Prefabs".to_string()
}

fn default_shader() -> String {
    "Specular".to_string()
}

/// Output configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct OutputConfig {
    #[serde(default)]
    pub verbosity: Verbosity,
}

/// Verbosity level
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
    Debug,
}

impl Verbosity {
    /// Parse a verbosity name, case-insensitively
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "quiet" => Some(Verbosity::Quiet),
            "normal" => Some(Verbosity::Normal),
            "verbose" => Some(Verbosity::Verbose),
            "debug" => Some(Verbosity::Debug),
            _ => None,
        }
    }

    /// Raise verbosity by `-v` count, saturating at `Debug`
    pub fn raised_by(self, count: u8) -> Self {
        (0..count).fold(self, |level, _| match level {
            Verbosity::Quiet => Verbosity::Normal,
            Verbosity::Normal => Verbosity::Verbose,
            Verbosity::Verbose | Verbosity::Debug => Verbosity::Debug,
        })
    }
}

/// Main configuration structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub assets: AssetsConfig,

    #[serde(default)]
    pub output: OutputConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> ArmoryResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load configuration and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> ArmoryResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Load from project config, user config, or defaults, then apply env
    pub fn load_or_default(project_root: &Path) -> ArmoryResult<(Self, Vec<ConfigWarning>)> {
        loader::load_or_default(project_root)
    }

    /// Apply environment variable overrides (ARMORY_* prefix)
    pub fn with_env_overrides(self) -> Self {
        loader::with_env_overrides(self)
    }
}
