//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//!
//! - `fs/` - Disk-backed asset database and namespace lock
//! - `memory` - In-memory asset database
//! - `events/` - Console and NDJSON event sinks

pub mod events;
pub mod fs;
pub mod memory;

pub use events::{ConsoleEventSink, JsonEventSink};
pub use fs::{LocalAssetDatabase, NamespaceLock};
pub use memory::InMemoryAssetDatabase;
