//! Local File System Asset Database
//!
//! Implements the asset database ports on disk: containers are directories
//! and artifacts are files, both addressed by logical paths relative to a
//! project root. Record listing is limited to the asset root when one is
//! set, and sees every file below it, hidden or ignored.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::domain::entities::{parse_header, NamedRecord, RecordKind};
use crate::domain::ports::{
    ArtifactIndex, ArtifactWriter, ContainerCreator, ContainerOracle, CreationError, QueryError,
};
use crate::domain::value_objects::{
    ASSET_EXTENSION, MATERIAL_EXTENSION, PREFAB_EXTENSION, SEPARATOR,
};

/// Asset database rooted at a project directory
#[derive(Debug, Clone)]
pub struct LocalAssetDatabase {
    root: PathBuf,
    asset_root: Option<String>,
}

impl LocalAssetDatabase {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            asset_root: None,
        }
    }

    /// Only list records below the logical container `asset_root`
    pub fn with_asset_root(mut self, asset_root: impl Into<String>) -> Self {
        self.asset_root = Some(asset_root.into());
        self
    }

    /// Project root all logical paths are relative to
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a logical path onto the file system
    pub fn resolve(&self, logical: &str) -> PathBuf {
        logical
            .split(SEPARATOR)
            .filter(|segment| !segment.is_empty())
            .fold(self.root.clone(), |path, segment| path.join(segment))
    }

    fn to_logical(&self, path: &Path) -> Option<String> {
        let relative = path.strip_prefix(&self.root).ok()?;
        let segments: Vec<String> = relative
            .components()
            .map(|c| c.as_os_str().to_string_lossy().into_owned())
            .collect();
        Some(segments.join("/"))
    }
}

fn host_error(path: &str, err: impl ToString) -> CreationError {
    CreationError::Host {
        path: path.to_string(),
        message: err.to_string(),
    }
}

fn is_record_file(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some(ASSET_EXTENSION) | Some(PREFAB_EXTENSION) | Some(MATERIAL_EXTENSION)
    )
}

impl ContainerOracle for LocalAssetDatabase {
    fn container_exists(&self, path: &str) -> bool {
        self.resolve(path).is_dir()
    }
}

impl ContainerCreator for LocalAssetDatabase {
    fn create_container(&self, parent: &str, name: &str) -> Result<(), CreationError> {
        let parent_dir = self.resolve(parent);
        if !parent_dir.is_dir() {
            return Err(CreationError::MissingParent {
                parent: parent.to_string(),
            });
        }

        let logical = format!("{}{}{}", parent, SEPARATOR, name);
        // Single level only: the parent was checked above.
        match fs::create_dir(parent_dir.join(name)) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => {
                Err(CreationError::AlreadyExists { path: logical })
            }
            Err(e) => Err(host_error(&logical, e)),
        }
    }
}

impl ArtifactIndex for LocalAssetDatabase {
    fn artifact_exists(&self, path: &str) -> bool {
        self.resolve(path).exists()
    }

    fn list_records_of_kind(&self, kind: RecordKind) -> Result<Vec<NamedRecord>, QueryError> {
        let mut records = Vec::new();
        let scan_dir = match &self.asset_root {
            Some(asset_root) => self.resolve(asset_root),
            None => self.root.clone(),
        };
        if !scan_dir.is_dir() {
            return Ok(records);
        }

        // Hidden and ignored files are still records.
        let walker = ignore::WalkBuilder::new(&scan_dir)
            .standard_filters(false)
            .build();
        for entry in walker {
            let entry = entry.map_err(|e| QueryError {
                message: e.to_string(),
            })?;
            let path = entry.path();
            if !entry.file_type().is_some_and(|t| t.is_file()) || !is_record_file(path) {
                continue;
            }

            // Unreadable or foreign files are not records.
            let Ok(content) = fs::read_to_string(path) else {
                continue;
            };
            let Some((found, name)) = parse_header(&content) else {
                continue;
            };
            if found != kind {
                continue;
            }
            if let Some(logical) = self.to_logical(path) {
                records.push(NamedRecord::new(kind, name, logical));
            }
        }

        records.sort_by(|a, b| a.path.cmp(&b.path));
        Ok(records)
    }
}

impl ArtifactWriter for LocalAssetDatabase {
    fn write_artifact(&self, path: &str, content: &str) -> Result<(), CreationError> {
        let target = self.resolve(path);
        let parent = target
            .parent()
            .ok_or_else(|| host_error(path, "artifact has no parent container"))?;
        if !parent.is_dir() {
            let logical_parent = path
                .rsplit_once(SEPARATOR)
                .map(|(p, _)| p)
                .unwrap_or_default();
            return Err(CreationError::MissingParent {
                parent: logical_parent.to_string(),
            });
        }
        if target.is_dir() {
            return Err(CreationError::AlreadyExists {
                path: path.to_string(),
            });
        }

        // Atomic write: tempfile + rename
        let mut temp = tempfile::NamedTempFile::new_in(parent).map_err(|e| host_error(path, e))?;
        temp.write_all(content.as_bytes())
            .map_err(|e| host_error(path, e))?;
        temp.persist(&target).map_err(|e| host_error(path, e.error))?;
        Ok(())
    }
}
