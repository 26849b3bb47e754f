//! Name availability and listing of weapon records

use std::fs;

use anyhow::Result;

use armory::application::{find_records, ENTER_NAME_HELP, NAME_NOT_AVAILABLE_HELP};
use armory::config::Verbosity;
use armory::domain::entities::{RecordKind, WeaponData};
use armory::domain::services::is_name_available;
use armory::presentation::json;

use super::CommandContext;

pub fn cmd_check_name(ctx: &CommandContext, name: &str) -> Result<()> {
    let db = ctx.db();
    let existing = find_records(&db, RecordKind::WeaponData)?;
    let available = is_name_available(name, &existing);

    if ctx.json {
        json::emit(serde_json::json!({
            "event": "complete",
            "command": "check-name",
            "name": name,
            "available": available,
        }))?;
    } else if available {
        println!("✓ '{}' is available", name);
    } else if name.trim().is_empty() {
        println!("✗ {}", ENTER_NAME_HELP);
    } else {
        println!("✗ {}", NAME_NOT_AVAILABLE_HELP);
    }

    if !available {
        std::process::exit(1);
    }
    Ok(())
}

pub fn cmd_list(ctx: &CommandContext) -> Result<()> {
    let db = ctx.db();
    let records = find_records(&db, RecordKind::WeaponData)?;

    // Full records are only needed for property output.
    let load = |path: &str| -> Option<WeaponData> {
        let content = fs::read_to_string(db.resolve(path)).ok()?;
        toml::from_str(&content).ok()
    };

    if ctx.json {
        let weapons: Vec<serde_json::Value> = records
            .iter()
            .map(|record| {
                let properties = load(&record.path).map(|w| w.properties).unwrap_or_default();
                serde_json::json!({
                    "name": record.name,
                    "path": record.path,
                    "properties": properties,
                })
            })
            .collect();
        json::emit(serde_json::json!({
            "event": "data",
            "command": "list",
            "total": weapons.len(),
            "weapons": weapons,
        }))?;
        return Ok(());
    }

    if records.is_empty() {
        println!("No weapons found.");
        return Ok(());
    }

    for record in &records {
        println!("{}  {}", record.name, record.path);
        if ctx.verbosity >= Verbosity::Verbose {
            if let Some(weapon) = load(&record.path) {
                for (key, value) in &weapon.properties {
                    println!("    {} = {}", key, value);
                }
            }
        }
    }
    if ctx.verbosity > Verbosity::Quiet {
        println!("\n{} weapon(s)", records.len());
    }
    Ok(())
}
