//! Armory - weapon asset authoring toolkit
//!
//! Armory keeps a project's asset tree in shape while weapons are authored:
//! it materializes folder paths one segment at a time, picks collision-free
//! asset paths, checks weapon names for uniqueness, and drives the weapon
//! wizard (data record, geometry prefab, material) against any host that
//! implements the asset database ports.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{
    create_asset_at_path, create_prefab_at_directory, WeaponWizard, WizardError, WizardSettings,
};
pub use config::{Config, Verbosity};
pub use domain::entities::{NamedRecord, RecordKind};
pub use domain::ports::{AssetDatabase, CreationError, WizardEvent, WizardEventSink};
pub use domain::services::{is_name_available, EnsureReport, MaterializeError, PathMaterializer};
pub use domain::value_objects::{AssetPath, InvalidPathError, LogicalPath, WizardTab};
pub use error::{ArmoryError, ArmoryResult};
pub use infrastructure::{InMemoryAssetDatabase, LocalAssetDatabase};
