//! Asset Path Value Object
//!
//! Full path of an artifact: `directory/name.extension`.

use std::fmt;

use super::logical_path::{InvalidPathError, LogicalPath, SEPARATOR};

/// File extension for weapon data records
pub const ASSET_EXTENSION: &str = "asset";
/// File extension for geometry prefabs
pub const PREFAB_EXTENSION: &str = "prefab";
/// File extension for materials
pub const MATERIAL_EXTENSION: &str = "mat";

/// Path of an artifact inside a container
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AssetPath {
    directory: String,
    file_name: String,
}

impl AssetPath {
    /// Build `directory/base_name[.extension]`
    ///
    /// A leading `.` on `extension` is ignored; an empty extension produces
    /// a bare file name.
    pub fn new(
        directory: &LogicalPath,
        base_name: &str,
        extension: &str,
    ) -> Result<Self, InvalidPathError> {
        validate_name(base_name)?;
        Ok(Self {
            directory: directory.to_string(),
            file_name: file_name(base_name, extension),
        })
    }

    /// Build from a directory and an already complete file name
    pub fn with_file_name(
        directory: &LogicalPath,
        file_name: &str,
    ) -> Result<Self, InvalidPathError> {
        validate_name(file_name)?;
        Ok(Self {
            directory: directory.to_string(),
            file_name: file_name.to_string(),
        })
    }

    /// Containing directory
    pub fn directory(&self) -> &str {
        &self.directory
    }

    /// `name.extension`
    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    /// Full path string
    pub fn as_string(&self) -> String {
        format!("{}{}{}", self.directory, SEPARATOR, self.file_name)
    }
}

pub(crate) fn file_name(base_name: &str, extension: &str) -> String {
    let extension = extension.trim_start_matches('.');
    if extension.is_empty() {
        base_name.to_string()
    } else {
        format!("{}.{}", base_name, extension)
    }
}

fn validate_name(name: &str) -> Result<(), InvalidPathError> {
    if name.trim().is_empty() || name.contains(SEPARATOR) || name == "." || name == ".." {
        return Err(InvalidPathError::InvalidName {
            name: name.to_string(),
        });
    }
    Ok(())
}

impl fmt::Display for AssetPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.directory, SEPARATOR, self.file_name)
    }
}
