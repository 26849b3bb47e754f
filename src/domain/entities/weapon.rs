//! Weapon entities
//!
//! The three records a weapon is made of: its data record, the geometry
//! prefab and the material used to skin it.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::record::RecordKind;

/// Components every weapon prefab carries
pub const PREFAB_COMPONENTS: [&str; 2] = ["MeshFilter", "MeshRenderer"];

/// Weapon data record (`<name>.asset`)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeaponData {
    kind: RecordKind,
    pub name: String,
    /// Path of the geometry prefab
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub geometry: Option<String>,
    /// Path of the material
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
}

impl WeaponData {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            kind: RecordKind::WeaponData,
            name: name.into(),
            geometry: None,
            material: None,
            created_at: Utc::now(),
            properties: BTreeMap::new(),
        }
    }

    /// Fields the data tab shows but never lets the user edit
    pub fn is_read_only(key: &str) -> bool {
        matches!(key, "name" | "geometry" | "material" | "kind" | "created_at")
    }
}

/// Geometry prefab (`<name>.prefab`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prefab {
    kind: RecordKind,
    pub name: String,
    pub components: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mesh: Option<String>,
    /// Shared material of the renderer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub material: Option<String>,
}

impl Prefab {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            kind: RecordKind::Prefab,
            name: name.into(),
            components: PREFAB_COMPONENTS.iter().map(|c| c.to_string()).collect(),
            mesh: None,
            material: None,
        }
    }
}

/// Material (`<name>.mat`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Material {
    kind: RecordKind,
    pub name: String,
    pub shader: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_tex: Option<String>,
}

impl Material {
    pub fn new(name: impl Into<String>, shader: impl Into<String>) -> Self {
        Self {
            kind: RecordKind::Material,
            name: name.into(),
            shader: shader.into(),
            main_tex: None,
        }
    }
}
