//! Record fixtures shared by tests.

/// Weapon data record as written by the wizard
pub fn weapon_record(name: &str) -> String {
    format!(
        "kind = \"WeaponData\"\nname = \"{}\"\ncreated_at = \"2026-01-01T00:00:00Z\"\n\n[properties]\n",
        name
    )
}

/// Minimal prefab record
pub fn prefab_record(name: &str) -> String {
    format!(
        "kind = \"Prefab\"\nname = \"{}\"\ncomponents = [\"MeshFilter\", \"MeshRenderer\"]\n",
        name
    )
}

/// Project config pointing the wizard at `Assets/Weapons`
pub const WEAPONS_CONFIG: &str = r#"[assets]
root = "Assets"
prefabs_dir = "Assets/Weapons"
shader = "Standard"
"#;
