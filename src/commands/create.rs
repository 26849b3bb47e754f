//! Create command - run the weapon wizard non-interactively

use anyhow::{bail, Result};
use dialoguer::Input;
use is_terminal::IsTerminal;

use armory::application::{WeaponSummary, WeaponWizard, WizardSettings, WizardTab};
use armory::config::Verbosity;
use armory::domain::ports::AssetDatabase;
use armory::presentation::json;

use super::CommandContext;

/// Values collected from the command line
#[derive(Debug, Default)]
pub struct CreateArgs {
    pub name: Option<String>,
    pub mesh: Option<String>,
    pub texture: Option<String>,
    pub properties: Vec<(String, String)>,
}

pub fn cmd_create(ctx: &CommandContext, args: CreateArgs) -> Result<()> {
    let db = ctx.db();
    let _lock = ctx.lock()?;
    ctx.require_root(&db)?;

    let sink = ctx.sink("create");
    let mut wizard = WeaponWizard::new(
        &db,
        WizardSettings::from(&ctx.config.assets),
        sink.as_ref(),
    );

    let name = match args.name {
        Some(name) => name,
        None if !ctx.json && std::io::stdin().is_terminal() => prompt_for_name(&mut wizard)?,
        None => bail!("a weapon name is required (pass it as an argument)"),
    };

    wizard.create_weapon(&name)?;

    for (key, value) in &args.properties {
        wizard.set_property(key, value)?;
    }
    if let Some(mesh) = args.mesh.as_deref() {
        wizard.select_tab(WizardTab::Geometry)?;
        wizard.set_mesh(Some(mesh))?;
    }
    if let Some(texture) = args.texture.as_deref() {
        wizard.select_tab(WizardTab::Skin)?;
        wizard.set_texture(Some(texture))?;
    }

    let (summary, saved) = if wizard.can_save() {
        (wizard.save()?, true)
    } else {
        match wizard.summary() {
            Some(summary) => (summary, false),
            None => bail!("weapon '{}' was not created", name),
        }
    };

    if ctx.json {
        json::emit(serde_json::json!({
            "event": "data",
            "command": "create",
            "weapon": summary,
            "saved": saved,
        }))?;
        return Ok(());
    }

    print_summary(&summary, saved, ctx.verbosity);
    Ok(())
}

/// Ask until the user enters a free name
fn prompt_for_name<D>(wizard: &mut WeaponWizard<'_, D>) -> Result<String>
where
    D: AssetDatabase + ?Sized,
{
    loop {
        let name: String = Input::new()
            .with_prompt(wizard.help_message())
            .allow_empty(true)
            .interact_text()?;
        if wizard.check_name(&name)? {
            return Ok(name);
        }
    }
}

fn print_summary(summary: &WeaponSummary, saved: bool, verbosity: Verbosity) {
    if verbosity == Verbosity::Quiet {
        return;
    }
    println!();
    println!("Weapon '{}' in {}/", summary.name, summary.directory);
    println!("  data:     {}", summary.data);
    println!("  prefab:   {}", summary.prefab);
    println!("  material: {}", summary.material);
    if let Some(mesh) = &summary.mesh {
        println!("  mesh:     {}", mesh);
    }
    if let Some(texture) = &summary.texture {
        println!("  texture:  {}", texture);
    }
    for (key, value) in &summary.properties {
        println!("  {} = {}", key, value);
    }
    if !saved {
        println!("○ Draft kept; assign --mesh and --texture to save");
    }
}
