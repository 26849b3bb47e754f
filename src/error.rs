//! Error types for Armory
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::application::WizardError;
use crate::domain::ports::{CreationError, QueryError};
use crate::domain::services::MaterializeError;
use crate::domain::value_objects::InvalidPathError;

/// Result type alias for Armory operations
pub type ArmoryResult<T> = Result<T, ArmoryError>;

/// Main error type for Armory operations
#[derive(Error, Debug)]
pub enum ArmoryError {
    /// Malformed logical path or asset name
    #[error(transparent)]
    InvalidPath(#[from] InvalidPathError),

    /// A path segment could not be materialized
    #[error(transparent)]
    Materialize(#[from] MaterializeError),

    /// Host refused to write an artifact
    #[error("cannot write artifact: {0}")]
    Creation(#[from] CreationError),

    /// Host could not list records
    #[error(transparent)]
    Query(#[from] QueryError),

    /// Wizard step was not allowed
    #[error(transparent)]
    Wizard(#[from] WizardError),

    /// Record could not be serialized
    #[error("cannot serialize record: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// Invalid configuration file
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Namespace lock could not be taken
    #[error("cannot lock asset namespace at {path}: {message}")]
    Lock { path: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
