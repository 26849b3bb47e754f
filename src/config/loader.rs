//! Configuration loading and persistence

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ArmoryError, ArmoryResult};

use super::types::{Config, Verbosity};

/// Project config file name
pub const CONFIG_FILE_NAME: &str = "armory.toml";

/// Non-fatal configuration warning surfaced to CLI users.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigWarning {
    pub key: String,
    pub file: PathBuf,
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ArmoryResult<(Config, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path)?;

    let mut unknown_paths: Vec<String> = Vec::new();
    let deserializer = toml::de::Deserializer::new(&content);

    let config: Config = serde_ignored::deserialize(deserializer, |p| {
        unknown_paths.push(p.to_string());
    })
    .map_err(|e| ArmoryError::InvalidConfig {
        file: path.to_path_buf(),
        message: e.to_string(),
    })?;

    let warnings = unknown_paths
        .into_iter()
        .map(|path_str| {
            let key = path_str
                .split('.')
                .next_back()
                .unwrap_or(path_str.as_str())
                .to_string();
            ConfigWarning {
                key: key.clone(),
                file: path.to_path_buf(),
                line: find_line_number(&content, &key),
                suggestion: suggest_key(&key),
            }
        })
        .collect();

    let config = checked(config, path)?;
    Ok((config, warnings))
}

/// Validate the asset layout, blaming `origin` on failure
fn checked(mut config: Config, origin: &Path) -> ArmoryResult<Config> {
    config.assets = config
        .assets
        .validated()
        .map_err(|message| ArmoryError::InvalidConfig {
            file: origin.to_path_buf(),
            message,
        })?;
    Ok(config)
}

/// Path of the user-level config file
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("armory").join("config.toml"))
}

/// Load from project config, user config, or defaults
///
/// A config file that exists but does not parse is an error; a missing one
/// falls through to the next level.
pub fn load_or_default(project_root: &Path) -> ArmoryResult<(Config, Vec<ConfigWarning>)> {
    let project_config = project_root.join(CONFIG_FILE_NAME);
    if project_config.exists() {
        let (config, warnings) = load_with_warnings(&project_config)?;
        return Ok((checked(with_env_overrides(config), &project_config)?, warnings));
    }

    if let Some(user_config) = user_config_path() {
        if user_config.exists() {
            let (config, warnings) = load_with_warnings(&user_config)?;
            return Ok((checked(with_env_overrides(config), &user_config)?, warnings));
        }
    }

    let config = checked(
        with_env_overrides(Config::default()),
        Path::new("environment (ARMORY_*)"),
    )?;
    Ok((config, Vec::new()))
}

/// Apply environment variable overrides (ARMORY_* prefix)
pub fn with_env_overrides(config: Config) -> Config {
    with_overrides_from(config, |key| std::env::var(key).ok())
}

/// Apply overrides from an arbitrary variable lookup
pub fn with_overrides_from(mut config: Config, lookup: impl Fn(&str) -> Option<String>) -> Config {
    // ARMORY_PREFABS_DIR
    if let Some(dir) = lookup("ARMORY_PREFABS_DIR").filter(|v| !v.trim().is_empty()) {
        config.assets.prefabs_dir = dir.trim().to_string();
    }

    // ARMORY_SHADER
    if let Some(shader) = lookup("ARMORY_SHADER").filter(|v| !v.trim().is_empty()) {
        config.assets.shader = shader.trim().to_string();
    }

    // ARMORY_VERBOSITY
    if let Some(verbosity) = lookup("ARMORY_VERBOSITY").and_then(|v| Verbosity::parse(&v)) {
        config.output.verbosity = verbosity;
    }

    config
}

/// Default project config written by `armory init`
pub fn default_config_toml(config: &Config) -> ArmoryResult<String> {
    Ok(toml::to_string_pretty(config)?)
}

fn find_line_number(content: &str, needle: &str) -> Option<usize> {
    content
        .lines()
        .position(|line| line.contains(needle))
        .map(|i| i + 1)
}

/// Keys `armory.toml` understands, section names included
const KNOWN_KEYS: &[&str] = &["assets", "root", "prefabs_dir", "shader", "output", "verbosity"];

/// Closest known key within two edits
fn suggest_key(unknown: &str) -> Option<String> {
    KNOWN_KEYS
        .iter()
        .map(|known| (edit_distance(unknown, known), *known))
        .filter(|(distance, _)| *distance <= 2)
        .min_by_key(|(distance, _)| *distance)
        .map(|(_, known)| known.to_string())
}

/// Levenshtein distance over chars, one row at a time
fn edit_distance(a: &str, b: &str) -> usize {
    let b: Vec<char> = b.chars().collect();
    let mut row: Vec<usize> = (0..=b.len()).collect();

    for (i, ca) in a.chars().enumerate() {
        let mut diagonal = row[0];
        row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = diagonal + usize::from(ca != *cb);
            diagonal = row[j + 1];
            row[j + 1] = substitution.min(row[j] + 1).min(diagonal + 1);
        }
    }

    row[b.len()]
}
