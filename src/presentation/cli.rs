//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - Global flags (--project, --json, --verbose, --quiet) are inherited by all subcommands
//! - `create` prompts for a name only when stdin is a terminal

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Armory - weapon asset authoring toolkit
#[derive(Parser, Debug)]
#[command(name = "armory")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Run 'armory init' in a new project to create the asset root.")]
pub struct Cli {
    /// Project directory (default: nearest ancestor with armory.toml, else the current directory)
    #[arg(short = 'C', long, global = true)]
    pub project: Option<PathBuf>,

    /// Output NDJSON events instead of text
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print outcomes and errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Create the root container and a default armory.toml
    Init {
        /// Overwrite an existing armory.toml
        #[arg(short, long)]
        force: bool,
    },

    /// Create every missing folder of a slash-delimited path
    Ensure {
        /// Logical path, e.g. Assets/Prefabs/Rifle
        path: String,
    },

    /// Print a collision-free path for a new asset (creates the directory)
    Resolve {
        /// Directory the asset goes in
        directory: String,

        /// Asset base name
        name: String,

        /// File extension (with or without leading dot)
        extension: String,
    },

    /// Check whether a weapon name is free (exit code 1 when taken)
    CheckName {
        /// Candidate weapon name
        name: String,
    },

    /// Create a weapon: data record, prefab and material
    Create {
        /// Weapon name (prompted for when omitted in a terminal)
        name: Option<String>,

        /// Mesh to assign on the geometry tab
        #[arg(long)]
        mesh: Option<String>,

        /// Texture to assign on the skin tab (requires --mesh)
        #[arg(long, requires = "mesh")]
        texture: Option<String>,

        /// Weapon property as key=value (repeatable)
        #[arg(long = "set", value_name = "KEY=VALUE", value_parser = parse_key_val)]
        properties: Vec<(String, String)>,
    },

    /// List weapon data records
    List,
}

/// Parse a `key=value` pair
pub fn parse_key_val(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{}'", raw))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("missing key in '{}'", raw));
    }
    Ok((key.to_string(), value.trim().to_string()))
}
