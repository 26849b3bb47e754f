//! Asset database port - abstraction over the host's asset namespace
//!
//! The namespace holds containers (directory-like nodes) and artifacts
//! (leaf records). The domain never touches storage directly; it asks these
//! capabilities instead.
//!
//! Implementations:
//! - `LocalAssetDatabase` - directories and files under a project root
//! - `InMemoryAssetDatabase` - in-memory, for tests and embedding

use thiserror::Error;

use crate::domain::entities::{NamedRecord, RecordKind};

/// The host refused to create a container or write an artifact
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CreationError {
    /// Target already exists
    #[error("'{path}' already exists")]
    AlreadyExists { path: String },

    /// Parent container does not exist
    #[error("parent container '{parent}' does not exist")]
    MissingParent { parent: String },

    /// Any other host failure
    #[error("failed to create '{path}': {message}")]
    Host { path: String, message: String },
}

/// The host could not answer a query
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("query failed: {message}")]
pub struct QueryError {
    pub message: String,
}

/// "Does a container exist at this cumulative path?"
pub trait ContainerOracle {
    fn container_exists(&self, path: &str) -> bool;
}

/// "Create container `name` inside existing container `parent`."
///
/// Not idempotent: creating an existing container is an error.
pub trait ContainerCreator {
    fn create_container(&self, parent: &str, name: &str) -> Result<(), CreationError>;
}

/// Read side of the artifact store
pub trait ArtifactIndex {
    /// Check if any artifact exists at `path`
    fn artifact_exists(&self, path: &str) -> bool;

    /// List every record of `kind` in the namespace
    fn list_records_of_kind(&self, kind: RecordKind) -> Result<Vec<NamedRecord>, QueryError>;
}

/// Write side of the artifact store
pub trait ArtifactWriter {
    /// Write an artifact, replacing any existing one at `path`.
    ///
    /// The containing container must already exist.
    fn write_artifact(&self, path: &str, content: &str) -> Result<(), CreationError>;
}

/// Everything the wizard needs from a host
pub trait AssetDatabase: ContainerOracle + ContainerCreator + ArtifactIndex + ArtifactWriter {}

impl<T> AssetDatabase for T where T: ContainerOracle + ContainerCreator + ArtifactIndex + ArtifactWriter
{}
