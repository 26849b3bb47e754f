//! Path Materializer
//!
//! Makes a logical container path exist one segment at a time, and picks a
//! collision-free artifact path inside it.
//!
//! Both operations are check-then-act sequences over the host namespace and
//! hold no lock. Callers that share the namespace with other writers must
//! wrap them in their own mutual exclusion.

use thiserror::Error;

use crate::domain::ports::{ArtifactIndex, ContainerCreator, ContainerOracle, CreationError};
use crate::domain::value_objects::{file_name, AssetPath, InvalidPathError, LogicalPath};

/// Errors from path materialization
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MaterializeError {
    /// Input path or name is malformed
    #[error(transparent)]
    InvalidPath(#[from] InvalidPathError),

    /// Host refused to create a segment. Segments before it stay created.
    #[error("cannot create container '{segment}' at '{path}': {source}")]
    Creation {
        segment: String,
        path: String,
        #[source]
        source: CreationError,
    },
}

/// Containers created by one `ensure_path` pass, parent first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnsureReport {
    pub created: Vec<String>,
}

impl EnsureReport {
    /// True when every segment already existed
    pub fn is_noop(&self) -> bool {
        self.created.is_empty()
    }
}

/// Materializes container paths against a host namespace
pub struct PathMaterializer<'a, D: ?Sized> {
    db: &'a D,
}

impl<'a, D> PathMaterializer<'a, D>
where
    D: ContainerOracle + ContainerCreator + ?Sized,
{
    pub fn new(db: &'a D) -> Self {
        Self { db }
    }

    /// Parse `path` and make every segment below its root exist.
    pub fn ensure_path(&self, path: &str) -> Result<EnsureReport, MaterializeError> {
        let path = LogicalPath::parse(path)?;
        self.ensure(&path)
    }

    /// Make every segment below the root of `path` exist.
    ///
    /// The root is never created. Each segment is checked and, if missing,
    /// created inside its parent before the next one is looked at.
    pub fn ensure(&self, path: &LogicalPath) -> Result<EnsureReport, MaterializeError> {
        let mut report = EnsureReport::default();

        for step in path.descend() {
            if self.db.container_exists(&step.cumulative) {
                continue;
            }
            self.db
                .create_container(&step.parent, &step.name)
                .map_err(|source| MaterializeError::Creation {
                    segment: step.name.clone(),
                    path: step.cumulative.clone(),
                    source,
                })?;
            report.created.push(step.cumulative);
        }

        Ok(report)
    }
}

impl<'a, D> PathMaterializer<'a, D>
where
    D: ContainerOracle + ContainerCreator + ArtifactIndex + ?Sized,
{
    /// Ensure `directory` exists, then return a path for
    /// `base_name.extension` inside it that no artifact currently occupies.
    ///
    /// The path is not reserved.
    pub fn resolve_unique_asset_path(
        &self,
        directory: &str,
        base_name: &str,
        extension: &str,
    ) -> Result<AssetPath, MaterializeError> {
        let directory = LogicalPath::parse(directory)?;
        AssetPath::new(&directory, base_name, extension)?;
        self.ensure(&directory)?;
        self.unique_asset_path(&directory, base_name, extension)
    }

    /// First free path among `base.ext`, `base 1.ext`, `base 2.ext`, ...
    ///
    /// Does not create anything.
    pub fn unique_asset_path(
        &self,
        directory: &LogicalPath,
        base_name: &str,
        extension: &str,
    ) -> Result<AssetPath, MaterializeError> {
        let candidate = AssetPath::new(directory, base_name, extension)?;
        if !self.db.artifact_exists(&candidate.as_string()) {
            return Ok(candidate);
        }

        let mut suffix: u64 = 1;
        loop {
            let name = file_name(&format!("{} {}", base_name, suffix), extension);
            let candidate = AssetPath::with_file_name(directory, &name)?;
            if !self.db.artifact_exists(&candidate.as_string()) {
                return Ok(candidate);
            }
            suffix += 1;
        }
    }
}
