//! Presentation Layer
//!
//! CLI definition and NDJSON output helpers.

pub mod cli;
pub mod json;

pub use cli::{Cli, Commands};
