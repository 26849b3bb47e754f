use std::path::{Path, PathBuf};

use armory::config::CONFIG_FILE_NAME;
use armory::infrastructure::fs::LOCK_FILE_NAME;

/// Discover the project root directory from an invocation directory.
///
/// Heuristics (first match wins, walking upward from `start`):
/// - `armory.toml` (project config)
/// - `.armory.lock` (a previous armory run)
///
/// Falls back to `start` when no markers are found.
pub(crate) fn discover_project_root(start: &Path) -> PathBuf {
    for dir in start.ancestors() {
        if dir.join(CONFIG_FILE_NAME).is_file() {
            return dir.to_path_buf();
        }
        if dir.join(LOCK_FILE_NAME).is_file() {
            return dir.to_path_buf();
        }
    }
    start.to_path_buf()
}
