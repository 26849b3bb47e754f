//! Armory CLI - weapon asset authoring toolkit
//!
//! Usage: armory <COMMAND>
//!
//! Commands:
//!   init        Create the root container and a default armory.toml
//!   ensure      Create every missing folder of a path
//!   resolve     Print a collision-free asset path
//!   check-name  Check whether a weapon name is free
//!   create      Create a weapon (data record, prefab, material)
//!   list        List weapon data records

mod commands;

use anyhow::Result;
use clap::Parser;

use armory::presentation::{Cli, Commands};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let ctx = commands::CommandContext::from_cli(&cli)?;

    match cli.command {
        Commands::Init { force } => commands::init::cmd_init(&ctx, force),
        Commands::Ensure { path } => commands::ensure::cmd_ensure(&ctx, &path),
        Commands::Resolve {
            directory,
            name,
            extension,
        } => commands::ensure::cmd_resolve(&ctx, &directory, &name, &extension),
        Commands::CheckName { name } => commands::names::cmd_check_name(&ctx, &name),
        Commands::Create {
            name,
            mesh,
            texture,
            properties,
        } => commands::create::cmd_create(
            &ctx,
            commands::create::CreateArgs {
                name,
                mesh,
                texture,
                properties,
            },
        ),
        Commands::List => commands::names::cmd_list(&ctx),
    }
}
