//! File System Implementations
//!
//! Disk-backed implementation of the asset database port, plus the
//! namespace lock used by the CLI.

mod local;
mod lock;

pub use local::LocalAssetDatabase;
pub use lock::{NamespaceLock, LOCK_FILE_NAME};
