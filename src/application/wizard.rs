//! Weapon wizard
//!
//! Headless form of the weapon authoring wizard. A session starts at the
//! naming step; once a free name is accepted it writes the weapon's prefab,
//! material and data record, then moves to the Data/Geometry/Skin tabs.
//! Every change is persisted as soon as it is made. `save` is only allowed
//! from the Skin tab once both a mesh and a texture are assigned.

use serde::Serialize;
use thiserror::Error;

use crate::config::AssetsConfig;
use crate::domain::entities::{Material, Prefab, RecordKind, WeaponData};
use crate::domain::ports::{AssetDatabase, WizardEvent, WizardEventSink};
use crate::domain::services::is_name_available;
use crate::domain::value_objects::{
    AssetPath, InvalidPathError, WizardTab, ASSET_EXTENSION, MATERIAL_EXTENSION,
    PREFAB_EXTENSION, SEPARATOR,
};
use crate::error::ArmoryResult;

use super::assets::{create_asset_at_path, create_prefab_at_directory, update_artifact};

/// Help shown while waiting for a name
pub const ENTER_NAME_HELP: &str = "Please enter weapon name";
/// Help shown after a name was refused
pub const NAME_NOT_AVAILABLE_HELP: &str = "This name is already in use, please enter another one";

/// A wizard step that is not allowed in the current state
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WizardError {
    #[error("weapon name must not be empty")]
    EmptyName,

    #[error("weapon name '{0}' is already in use")]
    NameTaken(String),

    #[error("no weapon has been created yet")]
    NoActiveWeapon,

    #[error("weapon '{0}' was already created in this session")]
    WeaponAlreadyCreated(String),

    #[error("this step needs the {expected} tab (current tab: {current})")]
    WrongTab {
        expected: WizardTab,
        current: WizardTab,
    },

    #[error("property '{0}' is read-only")]
    ReadOnlyProperty(String),

    #[error("select a mesh before assigning a texture")]
    TextureRequiresMesh,

    #[error("weapon cannot be saved yet: {0}")]
    SaveNotReady(String),
}

/// Where the wizard writes and what new materials use
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WizardSettings {
    pub prefabs_dir: String,
    pub shader: String,
}

impl From<&AssetsConfig> for WizardSettings {
    fn from(config: &AssetsConfig) -> Self {
        Self {
            prefabs_dir: config.prefabs_dir.clone(),
            shader: config.shader.clone(),
        }
    }
}

impl Default for WizardSettings {
    fn default() -> Self {
        Self::from(&AssetsConfig::default())
    }
}

/// Snapshot of the weapon being authored
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeaponSummary {
    pub name: String,
    pub directory: String,
    pub data: String,
    pub prefab: String,
    pub material: String,
    pub mesh: Option<String>,
    pub texture: Option<String>,
    pub properties: std::collections::BTreeMap<String, String>,
}

#[derive(Debug)]
struct Draft {
    directory: String,
    weapon: WeaponData,
    weapon_path: AssetPath,
    prefab: Prefab,
    prefab_path: AssetPath,
    material: Material,
    material_path: AssetPath,
    tab: WizardTab,
}

impl Draft {
    fn summary(&self) -> WeaponSummary {
        WeaponSummary {
            name: self.weapon.name.clone(),
            directory: self.directory.clone(),
            data: self.weapon_path.as_string(),
            prefab: self.prefab_path.as_string(),
            material: self.material_path.as_string(),
            mesh: self.prefab.mesh.clone(),
            texture: self.material.main_tex.clone(),
            properties: self.weapon.properties.clone(),
        }
    }

    fn require_tab(&self, expected: WizardTab) -> Result<(), WizardError> {
        if self.tab == expected {
            Ok(())
        } else {
            Err(WizardError::WrongTab {
                expected,
                current: self.tab,
            })
        }
    }
}

/// One authoring session
pub struct WeaponWizard<'a, D: ?Sized> {
    db: &'a D,
    sink: &'a dyn WizardEventSink,
    settings: WizardSettings,
    help: &'static str,
    draft: Option<Draft>,
}

impl<'a, D> WeaponWizard<'a, D>
where
    D: AssetDatabase + ?Sized,
{
    pub fn new(db: &'a D, settings: WizardSettings, sink: &'a dyn WizardEventSink) -> Self {
        Self {
            db,
            sink,
            settings,
            help: ENTER_NAME_HELP,
            draft: None,
        }
    }

    /// Message for the naming step
    pub fn help_message(&self) -> &'static str {
        self.help
    }

    /// Active tab, once a weapon exists
    pub fn current_tab(&self) -> Option<WizardTab> {
        self.draft.as_ref().map(|d| d.tab)
    }

    /// Current state of the weapon, once it exists
    pub fn summary(&self) -> Option<WeaponSummary> {
        self.draft.as_ref().map(Draft::summary)
    }

    /// Check `name` against existing weapon records, updating the help message
    pub fn check_name(&mut self, name: &str) -> ArmoryResult<bool> {
        let existing = self.db.list_records_of_kind(RecordKind::WeaponData)?;
        let available = is_name_available(name, &existing);
        self.help = if available {
            ENTER_NAME_HELP
        } else {
            NAME_NOT_AVAILABLE_HELP
        };
        Ok(available)
    }

    /// Accept `name` and create the weapon's prefab, material and data record
    pub fn create_weapon(&mut self, name: &str) -> ArmoryResult<WeaponSummary> {
        if let Some(draft) = &self.draft {
            return Err(WizardError::WeaponAlreadyCreated(draft.weapon.name.clone()).into());
        }
        if name.contains(SEPARATOR) {
            return Err(InvalidPathError::InvalidName {
                name: name.to_string(),
            }
            .into());
        }

        if !self.check_name(name)? {
            let (error, reason) = if name.trim().is_empty() {
                (WizardError::EmptyName, "name is empty")
            } else {
                (WizardError::NameTaken(name.to_string()), "name is already in use")
            };
            self.sink.on_event(WizardEvent::NameRejected {
                name: name.to_string(),
                reason: reason.to_string(),
            });
            return Err(error.into());
        }

        let directory = format!("{}{}{}", self.settings.prefabs_dir, SEPARATOR, name);

        let prefab = Prefab::new(name);
        let prefab_created = create_prefab_at_directory(self.db, &prefab, &directory)?;
        prefab_created.emit(self.sink);

        // The material follows the saved prefab's name, which may carry a suffix.
        let material_name = prefab_created
            .path
            .file_name()
            .strip_suffix(&format!(".{}", PREFAB_EXTENSION))
            .unwrap_or(name)
            .to_string();
        let material = Material::new(material_name.as_str(), self.settings.shader.as_str());
        let material_created = create_asset_at_path(
            self.db,
            &material,
            &format!("{}.{}", material_name, MATERIAL_EXTENSION),
            &directory,
        )?;
        material_created.emit(self.sink);

        let mut weapon = WeaponData::new(name);
        weapon.geometry = Some(prefab_created.path.as_string());
        weapon.material = Some(material_created.path.as_string());
        let weapon_created = create_asset_at_path(
            self.db,
            &weapon,
            &format!("{}.{}", name, ASSET_EXTENSION),
            &directory,
        )?;
        weapon_created.emit(self.sink);

        self.sink.on_event(WizardEvent::WeaponCreated {
            name: name.to_string(),
            directory: directory.clone(),
        });

        let draft = Draft {
            directory,
            weapon,
            weapon_path: weapon_created.path,
            prefab,
            prefab_path: prefab_created.path,
            material,
            material_path: material_created.path,
            tab: WizardTab::Data,
        };
        let summary = draft.summary();
        self.draft = Some(draft);
        Ok(summary)
    }

    /// Switch tabs
    pub fn select_tab(&mut self, tab: WizardTab) -> ArmoryResult<()> {
        let draft = self.draft.as_mut().ok_or(WizardError::NoActiveWeapon)?;
        if draft.tab != tab {
            draft.tab = tab;
            self.sink.on_event(WizardEvent::TabChanged { tab });
        }
        Ok(())
    }

    /// Data tab: set a free-form weapon property
    pub fn set_property(&mut self, key: &str, value: &str) -> ArmoryResult<()> {
        let draft = self.draft.as_mut().ok_or(WizardError::NoActiveWeapon)?;
        draft.require_tab(WizardTab::Data)?;
        if WeaponData::is_read_only(key) {
            return Err(WizardError::ReadOnlyProperty(key.to_string()).into());
        }

        draft
            .weapon
            .properties
            .insert(key.to_string(), value.to_string());
        let hash = update_artifact(self.db, &draft.weapon_path, &draft.weapon)?;
        emit_written(self.sink, &draft.weapon_path, &hash.to_string());
        Ok(())
    }

    /// Geometry tab: assign or clear the mesh
    pub fn set_mesh(&mut self, mesh: Option<&str>) -> ArmoryResult<()> {
        let draft = self.draft.as_mut().ok_or(WizardError::NoActiveWeapon)?;
        draft.require_tab(WizardTab::Geometry)?;

        draft.prefab.mesh = mesh.map(str::to_string);
        let hash = update_artifact(self.db, &draft.prefab_path, &draft.prefab)?;
        emit_written(self.sink, &draft.prefab_path, &hash.to_string());
        Ok(())
    }

    /// Skin tab: assign or clear the texture; needs a mesh first
    pub fn set_texture(&mut self, texture: Option<&str>) -> ArmoryResult<()> {
        let draft = self.draft.as_mut().ok_or(WizardError::NoActiveWeapon)?;
        draft.require_tab(WizardTab::Skin)?;
        if draft.prefab.mesh.is_none() {
            return Err(WizardError::TextureRequiresMesh.into());
        }

        draft.material.main_tex = texture.map(str::to_string);
        let hash = update_artifact(self.db, &draft.material_path, &draft.material)?;
        emit_written(self.sink, &draft.material_path, &hash.to_string());

        draft.prefab.material = Some(draft.material_path.as_string());
        let hash = update_artifact(self.db, &draft.prefab_path, &draft.prefab)?;
        emit_written(self.sink, &draft.prefab_path, &hash.to_string());
        Ok(())
    }

    /// Whether `save` would succeed
    pub fn can_save(&self) -> bool {
        self.save_blocker().is_none()
    }

    fn save_blocker(&self) -> Option<&'static str> {
        let Some(draft) = &self.draft else {
            return Some("no weapon has been created");
        };
        if draft.tab != WizardTab::Skin {
            return Some("saving happens from the skin tab");
        }
        if draft.prefab.mesh.is_none() {
            return Some("no mesh selected");
        }
        if draft.material.main_tex.is_none() {
            return Some("no texture selected");
        }
        None
    }

    /// Persist the final weapon record and finish the session
    pub fn save(self) -> ArmoryResult<WeaponSummary> {
        if let Some(reason) = self.save_blocker() {
            return Err(WizardError::SaveNotReady(reason.to_string()).into());
        }
        let draft = self.draft.ok_or(WizardError::NoActiveWeapon)?;

        let hash = update_artifact(self.db, &draft.weapon_path, &draft.weapon)?;
        emit_written(self.sink, &draft.weapon_path, &hash.to_string());
        self.sink.on_event(WizardEvent::Saved {
            name: draft.weapon.name.clone(),
        });
        Ok(draft.summary())
    }
}

fn emit_written(sink: &dyn WizardEventSink, path: &AssetPath, hash: &str) {
    if sink.wants_detailed_events() {
        sink.on_event(WizardEvent::ArtifactWritten {
            path: path.as_string(),
            hash: hash.to_string(),
        });
    }
}
