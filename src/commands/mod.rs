//! Command handlers for the armory binary

pub mod create;
pub mod ensure;
pub mod init;
pub mod names;
mod project_root;

use std::path::PathBuf;

use anyhow::{bail, Result};

use armory::config::{Config, ConfigWarning, Verbosity};
use armory::domain::ports::{ContainerOracle, WizardEventSink};
use armory::infrastructure::fs::{LocalAssetDatabase, NamespaceLock};
use armory::infrastructure::{ConsoleEventSink, JsonEventSink};
use armory::presentation::json;
use armory::presentation::Cli;

/// Settings shared by every command
pub struct CommandContext {
    pub project: PathBuf,
    pub config: Config,
    pub verbosity: Verbosity,
    pub json: bool,
}

impl CommandContext {
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let project = match &cli.project {
            Some(path) => path.clone(),
            None => project_root::discover_project_root(&std::env::current_dir()?),
        };

        let (config, warnings) = Config::load_or_default(&project)?;
        let verbosity = if cli.quiet {
            Verbosity::Quiet
        } else {
            config.output.verbosity.raised_by(cli.verbose)
        };

        let ctx = Self {
            project,
            config,
            verbosity,
            json: cli.json,
        };
        ctx.report_warnings(&warnings)?;
        Ok(ctx)
    }

    pub fn db(&self) -> LocalAssetDatabase {
        LocalAssetDatabase::new(&self.project).with_asset_root(self.config.assets.root.as_str())
    }

    /// Event sink matching the output mode
    pub fn sink(&self, command: &'static str) -> Box<dyn WizardEventSink> {
        if self.json {
            Box::new(JsonEventSink::stdout(command))
        } else {
            Box::new(ConsoleEventSink::stdout(self.verbosity))
        }
    }

    /// Take the namespace lock for the rest of the command
    pub fn lock(&self) -> Result<NamespaceLock> {
        Ok(NamespaceLock::acquire(&self.project)?)
    }

    /// Fail early when the root container is missing
    pub fn require_root(&self, db: &LocalAssetDatabase) -> Result<()> {
        let root = &self.config.assets.root;
        if !db.container_exists(root) {
            bail!(
                "root container '{}' not found in {}; run 'armory init' first",
                root,
                self.project.display()
            );
        }
        Ok(())
    }

    fn report_warnings(&self, warnings: &[ConfigWarning]) -> Result<()> {
        for warning in warnings {
            if self.json {
                json::emit(serde_json::json!({
                    "event": "warning",
                    "kind": "unknown_config_key",
                    "key": warning.key,
                    "file": warning.file.display().to_string(),
                    "line": warning.line,
                    "suggestion": warning.suggestion,
                }))?;
                continue;
            }

            let location = match warning.line {
                Some(line) => format!("{}:{}", warning.file.display(), line),
                None => warning.file.display().to_string(),
            };
            match &warning.suggestion {
                Some(suggestion) => eprintln!(
                    "warning: unknown config key '{}' in {} (did you mean '{}'?)",
                    warning.key, location, suggestion
                ),
                None => eprintln!(
                    "warning: unknown config key '{}' in {}",
                    warning.key, location
                ),
            }
        }
        Ok(())
    }
}
