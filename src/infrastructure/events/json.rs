//! JSON Event Sink
//!
//! Outputs wizard events as NDJSON for CI/automation consumption.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::domain::ports::{WizardEvent, WizardEventSink};

/// Event sink that outputs NDJSON events
pub struct JsonEventSink {
    command: &'static str,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout(command: &'static str) -> Self {
        Self::with_writer(command, io::stdout())
    }

    /// Create a JSON event sink writing to a custom writer
    pub fn with_writer<W: Write + Send + 'static>(command: &'static str, writer: W) -> Self {
        Self {
            command,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

/// Convert an event into its JSON object
pub fn event_to_json(command: &str, event: &WizardEvent) -> serde_json::Value {
    match event {
        WizardEvent::ContainerCreated { path } => serde_json::json!({
            "event": "container_created",
            "command": command,
            "path": path,
        }),
        WizardEvent::ArtifactWritten { path, hash } => serde_json::json!({
            "event": "artifact_written",
            "command": command,
            "path": path,
            "hash": hash,
        }),
        WizardEvent::NameRejected { name, reason } => serde_json::json!({
            "event": "name_rejected",
            "command": command,
            "name": name,
            "reason": reason,
        }),
        WizardEvent::WeaponCreated { name, directory } => serde_json::json!({
            "event": "weapon_created",
            "command": command,
            "name": name,
            "directory": directory,
        }),
        WizardEvent::TabChanged { tab } => serde_json::json!({
            "event": "tab_changed",
            "command": command,
            "tab": tab.as_str(),
        }),
        WizardEvent::Saved { name } => serde_json::json!({
            "event": "complete",
            "command": command,
            "status": "success",
            "name": name,
        }),
    }
}

impl WizardEventSink for JsonEventSink {
    fn on_event(&self, event: WizardEvent) {
        self.write_event(event_to_json(self.command, &event));
    }
}
