//! Init command - create the asset root and a default armory.toml

use std::fs;

use anyhow::{Context, Result};

use armory::config::{default_config_toml, CONFIG_FILE_NAME};
use armory::presentation::json;

use super::CommandContext;

pub fn cmd_init(ctx: &CommandContext, force: bool) -> Result<()> {
    fs::create_dir_all(&ctx.project)
        .with_context(|| format!("cannot create {}", ctx.project.display()))?;
    let _lock = ctx.lock()?;

    let db = ctx.db();
    let root_dir = db.resolve(&ctx.config.assets.root);
    let root_created = !root_dir.is_dir();
    fs::create_dir_all(&root_dir)
        .with_context(|| format!("cannot create root container {}", root_dir.display()))?;

    let config_path = ctx.project.join(CONFIG_FILE_NAME);
    let write_config = force || !config_path.exists();
    if write_config {
        fs::write(&config_path, default_config_toml(&ctx.config)?)
            .with_context(|| format!("cannot write {}", config_path.display()))?;
    }

    if ctx.json {
        json::emit(serde_json::json!({
            "event": "complete",
            "command": "init",
            "status": "success",
            "root": ctx.config.assets.root,
            "root_created": root_created,
            "config_written": write_config,
        }))?;
        return Ok(());
    }

    if root_created {
        println!("✓ Created root container '{}'", ctx.config.assets.root);
    } else {
        println!("○ Root container '{}' already exists", ctx.config.assets.root);
    }
    if write_config {
        println!("✓ Wrote {}", config_path.display());
    } else {
        println!("○ Kept existing {} (use --force to overwrite)", CONFIG_FILE_NAME);
    }
    Ok(())
}
