//! Ensure and resolve commands - path materialization from the shell

use anyhow::Result;

use armory::domain::services::PathMaterializer;
use armory::presentation::json;

use super::CommandContext;

pub fn cmd_ensure(ctx: &CommandContext, path: &str) -> Result<()> {
    let db = ctx.db();
    let _lock = ctx.lock()?;

    let report = PathMaterializer::new(&db).ensure_path(path)?;

    if ctx.json {
        json::emit(serde_json::json!({
            "event": "complete",
            "command": "ensure",
            "status": "success",
            "path": path,
            "created": report.created,
        }))?;
        return Ok(());
    }

    if report.is_noop() {
        println!("○ {} already exists", path);
    } else {
        for created in &report.created {
            println!("+ {}/", created);
        }
        println!("✓ Created {} folder(s)", report.created.len());
    }
    Ok(())
}

pub fn cmd_resolve(
    ctx: &CommandContext,
    directory: &str,
    name: &str,
    extension: &str,
) -> Result<()> {
    let db = ctx.db();
    let _lock = ctx.lock()?;

    let path = PathMaterializer::new(&db).resolve_unique_asset_path(directory, name, extension)?;

    if ctx.json {
        json::emit(serde_json::json!({
            "event": "complete",
            "command": "resolve",
            "status": "success",
            "path": path.as_string(),
        }))?;
    } else {
        println!("{}", path);
    }
    Ok(())
}
