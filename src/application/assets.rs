//! Asset utilities
//!
//! Materialize a directory, then write a record into it. Prefabs get a
//! collision-free name; plain assets are written at the exact path given
//! and replace what was there.

use serde::Serialize;

use crate::domain::entities::{NamedRecord, Prefab, RecordKind};
use crate::domain::ports::{AssetDatabase, WizardEvent, WizardEventSink};
use crate::domain::services::PathMaterializer;
use crate::domain::value_objects::{AssetPath, ContentHash, LogicalPath, PREFAB_EXTENSION};
use crate::error::ArmoryResult;

/// Outcome of writing a new artifact
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Created {
    pub path: AssetPath,
    /// Containers materialized on the way, parent first
    pub created_containers: Vec<String>,
    pub hash: ContentHash,
}

impl Created {
    /// Report this outcome to an event sink
    pub fn emit(&self, sink: &dyn WizardEventSink) {
        for container in &self.created_containers {
            sink.on_event(WizardEvent::ContainerCreated {
                path: container.clone(),
            });
        }
        if sink.wants_detailed_events() {
            sink.on_event(WizardEvent::ArtifactWritten {
                path: self.path.as_string(),
                hash: self.hash.to_string(),
            });
        }
    }
}

/// Save `prefab` as `<directory>/<prefab.name>.prefab`, suffixing the name
/// when that path is taken.
pub fn create_prefab_at_directory<D>(
    db: &D,
    prefab: &Prefab,
    directory: &str,
) -> ArmoryResult<Created>
where
    D: AssetDatabase + ?Sized,
{
    let directory = LogicalPath::parse(directory)?;
    AssetPath::new(&directory, &prefab.name, PREFAB_EXTENSION)?;

    let materializer = PathMaterializer::new(db);
    let report = materializer.ensure(&directory)?;
    let path = materializer.unique_asset_path(&directory, &prefab.name, PREFAB_EXTENSION)?;
    let hash = update_artifact(db, &path, prefab)?;

    Ok(Created {
        path,
        created_containers: report.created,
        hash,
    })
}

/// Save `record` as `<folder>/<file_name>`, replacing any existing artifact.
pub fn create_asset_at_path<D, T>(
    db: &D,
    record: &T,
    file_name: &str,
    folder: &str,
) -> ArmoryResult<Created>
where
    D: AssetDatabase + ?Sized,
    T: Serialize,
{
    let folder = LogicalPath::parse(folder)?;
    let path = AssetPath::with_file_name(&folder, file_name)?;

    let report = PathMaterializer::new(db).ensure(&folder)?;
    let hash = update_artifact(db, &path, record)?;

    Ok(Created {
        path,
        created_containers: report.created,
        hash,
    })
}

/// Rewrite an artifact whose container already exists
pub fn update_artifact<D, T>(db: &D, path: &AssetPath, record: &T) -> ArmoryResult<ContentHash>
where
    D: AssetDatabase + ?Sized,
    T: Serialize,
{
    let content = toml::to_string_pretty(record)?;
    db.write_artifact(&path.as_string(), &content)?;
    Ok(ContentHash::from_content(&content))
}

/// Every record of `kind` in the namespace
pub fn find_records<D>(db: &D, kind: RecordKind) -> ArmoryResult<Vec<NamedRecord>>
where
    D: AssetDatabase + ?Sized,
{
    Ok(db.list_records_of_kind(kind)?)
}
