//! In-Memory Asset Database
//!
//! Implements the asset database ports over in-memory sets and maps.
//! Used by tests and by embedders that want to plan an asset layout without
//! touching disk. Every mutating call is appended to a log so callers can
//! assert on creation order.

use std::collections::{BTreeMap, BTreeSet};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::domain::entities::{parse_header, NamedRecord, RecordKind};
use crate::domain::ports::{
    ArtifactIndex, ArtifactWriter, ContainerCreator, ContainerOracle, CreationError, QueryError,
};
use crate::domain::value_objects::SEPARATOR;

/// One mutating call, as seen by the host
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    CreateContainer { parent: String, name: String },
    WriteArtifact { path: String },
}

#[derive(Debug, Default)]
struct State {
    containers: BTreeSet<String>,
    artifacts: BTreeMap<String, String>,
    log: Vec<Operation>,
}

/// In-memory asset namespace
///
/// Uses `Arc<Mutex<>>` internally so it can be cloned and shared.
#[derive(Debug, Clone, Default)]
pub struct InMemoryAssetDatabase {
    state: Arc<Mutex<State>>,
}

impl InMemoryAssetDatabase {
    /// Empty namespace with no root container
    pub fn new() -> Self {
        Self::default()
    }

    /// Namespace with a single pre-existing root container
    pub fn with_root(root: &str) -> Self {
        let db = Self::new();
        db.add_root(root);
        db
    }

    /// Add a pre-existing root container. Not logged.
    pub fn add_root(&self, root: &str) {
        self.state().containers.insert(root.to_string());
    }

    /// Place an artifact without checks or logging
    pub fn seed_artifact(&self, path: &str, content: &str) {
        self.state()
            .artifacts
            .insert(path.to_string(), content.to_string());
    }

    /// Content of the artifact at `path`
    pub fn artifact(&self, path: &str) -> Option<String> {
        self.state().artifacts.get(path).cloned()
    }

    /// All container paths, sorted
    pub fn containers(&self) -> Vec<String> {
        self.state().containers.iter().cloned().collect()
    }

    /// Every mutating call so far, in order
    pub fn operations(&self) -> Vec<Operation> {
        self.state().log.clone()
    }

    /// Number of containers created through the port
    pub fn creation_count(&self) -> usize {
        self.state()
            .log
            .iter()
            .filter(|op| matches!(op, Operation::CreateContainer { .. }))
            .count()
    }

    fn state(&self) -> MutexGuard<'_, State> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

fn parent_of(path: &str) -> Option<&str> {
    path.rsplit_once(SEPARATOR).map(|(parent, _)| parent)
}

impl ContainerOracle for InMemoryAssetDatabase {
    fn container_exists(&self, path: &str) -> bool {
        self.state().containers.contains(path)
    }
}

impl ContainerCreator for InMemoryAssetDatabase {
    fn create_container(&self, parent: &str, name: &str) -> Result<(), CreationError> {
        let mut state = self.state();
        let path = format!("{}{}{}", parent, SEPARATOR, name);

        if !state.containers.contains(parent) {
            return Err(CreationError::MissingParent {
                parent: parent.to_string(),
            });
        }
        if state.containers.contains(&path) || state.artifacts.contains_key(&path) {
            return Err(CreationError::AlreadyExists { path });
        }

        state.containers.insert(path);
        state.log.push(Operation::CreateContainer {
            parent: parent.to_string(),
            name: name.to_string(),
        });
        Ok(())
    }
}

impl ArtifactIndex for InMemoryAssetDatabase {
    /// Containers count as occupied paths too
    fn artifact_exists(&self, path: &str) -> bool {
        let state = self.state();
        state.artifacts.contains_key(path) || state.containers.contains(path)
    }

    fn list_records_of_kind(&self, kind: RecordKind) -> Result<Vec<NamedRecord>, QueryError> {
        let records = self
            .state()
            .artifacts
            .iter()
            .filter_map(|(path, content)| {
                parse_header(content)
                    .filter(|(found, _)| *found == kind)
                    .map(|(_, name)| NamedRecord::new(kind, name, path.clone()))
            })
            .collect();
        Ok(records)
    }
}

impl ArtifactWriter for InMemoryAssetDatabase {
    fn write_artifact(&self, path: &str, content: &str) -> Result<(), CreationError> {
        let mut state = self.state();

        let parent = parent_of(path).ok_or_else(|| CreationError::Host {
            path: path.to_string(),
            message: "artifact must live inside a container".to_string(),
        })?;
        if !state.containers.contains(parent) {
            return Err(CreationError::MissingParent {
                parent: parent.to_string(),
            });
        }
        if state.containers.contains(path) {
            return Err(CreationError::AlreadyExists {
                path: path.to_string(),
            });
        }

        state
            .artifacts
            .insert(path.to_string(), content.to_string());
        state.log.push(Operation::WriteArtifact {
            path: path.to_string(),
        });
        Ok(())
    }
}
