//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod asset_path;
mod hash;
mod logical_path;
mod wizard_tab;

pub use asset_path::{AssetPath, ASSET_EXTENSION, MATERIAL_EXTENSION, PREFAB_EXTENSION};
pub(crate) use asset_path::file_name;
pub use hash::ContentHash;
pub use logical_path::{Descend, InvalidPathError, LogicalPath, Step, SEPARATOR};
pub use wizard_tab::WizardTab;
