//! Namespace Lock
//!
//! Exclusive advisory lock over a project's asset namespace. The path
//! materializer performs unlocked check-then-act sequences; the CLI holds
//! this lock around each command so two `armory` processes never interleave
//! them on the same project.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};

use fs2::FileExt;

use crate::error::{ArmoryError, ArmoryResult};

/// Lock file name at the project root
pub const LOCK_FILE_NAME: &str = ".armory.lock";

/// Held lock; released on drop
#[derive(Debug)]
pub struct NamespaceLock {
    file: File,
    path: PathBuf,
}

impl NamespaceLock {
    /// Block until the exclusive lock on `project_root` is acquired
    pub fn acquire(project_root: &Path) -> ArmoryResult<Self> {
        fs::create_dir_all(project_root)?;
        let path = project_root.join(LOCK_FILE_NAME);
        let file = File::create(&path)?;
        file.lock_exclusive().map_err(|e| ArmoryError::Lock {
            path: path.clone(),
            message: e.to_string(),
        })?;
        Ok(Self { file, path })
    }

    /// Try to acquire without blocking; `None` if another holder exists
    pub fn try_acquire(project_root: &Path) -> ArmoryResult<Option<Self>> {
        fs::create_dir_all(project_root)?;
        let path = project_root.join(LOCK_FILE_NAME);
        let file = File::create(&path)?;
        match file.try_lock_exclusive() {
            Ok(()) => Ok(Some(Self { file, path })),
            Err(e) if is_contended(&e) => Ok(None),
            Err(e) => Err(ArmoryError::Lock {
                path,
                message: e.to_string(),
            }),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Whether a failed lock attempt means another holder exists
fn is_contended(err: &io::Error) -> bool {
    let contended = fs2::lock_contended_error();
    match (err.raw_os_error(), contended.raw_os_error()) {
        (Some(code), Some(expected)) => code == expected,
        _ => err.kind() == contended.kind(),
    }
}

impl Drop for NamespaceLock {
    fn drop(&mut self) {
        let _ = FileExt::unlock(&self.file);
    }
}
