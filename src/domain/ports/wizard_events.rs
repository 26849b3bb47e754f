//! Wizard Event Port
//!
//! Observable interface for asset operations driven by the wizard and CLI.
//! Enables console progress, JSON event streams, and test recording.

use crate::domain::value_objects::WizardTab;

/// Event emitted while materializing paths and writing artifacts
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WizardEvent {
    /// A missing container was created
    ContainerCreated { path: String },

    /// An artifact was written
    ArtifactWritten { path: String, hash: String },

    /// A weapon name was refused
    NameRejected { name: String, reason: String },

    /// Weapon data, prefab and material exist
    WeaponCreated { name: String, directory: String },

    /// Active tab changed
    TabChanged { tab: WizardTab },

    /// Weapon saved and wizard finished
    Saved { name: String },
}

/// Trait for receiving wizard events
///
/// Implementations:
/// - ConsoleEventSink: human-readable lines
/// - JsonEventSink: NDJSON event stream
/// - NoopEventSink: silent operation
pub trait WizardEventSink {
    /// Handle an event
    fn on_event(&self, event: WizardEvent);

    /// Check if this sink wants per-artifact events
    fn wants_detailed_events(&self) -> bool {
        true
    }
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl WizardEventSink for NoopEventSink {
    fn on_event(&self, _event: WizardEvent) {}

    fn wants_detailed_events(&self) -> bool {
        false
    }
}
