//! Domain Entities
//!
//! Records persisted as artifacts in the asset namespace.

mod record;
mod weapon;

pub use record::{parse_header, NamedRecord, RecordKind};
pub use weapon::{Material, Prefab, WeaponData, PREFAB_COMPONENTS};
