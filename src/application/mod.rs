//! Application Layer
//!
//! Use cases built on the domain services:
//!
//! - `assets` - create prefabs and assets inside materialized directories
//! - `wizard` - the weapon authoring session

pub mod assets;
pub mod wizard;

pub use assets::{
    create_asset_at_path, create_prefab_at_directory, find_records, update_artifact, Created,
};
pub use wizard::{
    WeaponSummary, WeaponWizard, WizardError, WizardSettings, ENTER_NAME_HELP,
    NAME_NOT_AVAILABLE_HELP,
};

pub use crate::domain::value_objects::WizardTab;
