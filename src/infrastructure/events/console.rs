//! Console Event Sink
//!
//! Human-readable progress lines, filtered by verbosity.

use std::io::{self, Write};
use std::sync::Mutex;

use crate::config::Verbosity;
use crate::domain::ports::{WizardEvent, WizardEventSink};

/// Event sink that prints one line per event
pub struct ConsoleEventSink {
    verbosity: Verbosity,
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleEventSink {
    pub fn stdout(verbosity: Verbosity) -> Self {
        Self::with_writer(verbosity, io::stdout())
    }

    pub fn with_writer<W: Write + Send + 'static>(verbosity: Verbosity, writer: W) -> Self {
        Self {
            verbosity,
            writer: Mutex::new(Box::new(writer)),
        }
    }

    /// Lowest verbosity at which an event is shown
    fn threshold(event: &WizardEvent) -> Verbosity {
        match event {
            WizardEvent::NameRejected { .. } | WizardEvent::Saved { .. } => Verbosity::Quiet,
            WizardEvent::WeaponCreated { .. } | WizardEvent::ContainerCreated { .. } => {
                Verbosity::Normal
            }
            WizardEvent::ArtifactWritten { .. } => Verbosity::Verbose,
            WizardEvent::TabChanged { .. } => Verbosity::Debug,
        }
    }
}

/// Render an event as a single line
pub fn render_event(event: &WizardEvent, verbosity: Verbosity) -> String {
    match event {
        WizardEvent::ContainerCreated { path } => format!("+ {}/", path),
        WizardEvent::ArtifactWritten { path, hash } => {
            if verbosity >= Verbosity::Debug {
                format!("→ {} ({})", path, hash)
            } else {
                format!("→ {}", path)
            }
        }
        WizardEvent::NameRejected { name, reason } => format!("✗ '{}': {}", name, reason),
        WizardEvent::WeaponCreated { name, directory } => {
            format!("✓ Created weapon '{}' in {}", name, directory)
        }
        WizardEvent::TabChanged { tab } => format!("· tab: {}", tab),
        WizardEvent::Saved { name } => format!("✓ Saved '{}'", name),
    }
}

impl WizardEventSink for ConsoleEventSink {
    fn on_event(&self, event: WizardEvent) {
        if self.verbosity < Self::threshold(&event) {
            return;
        }
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", render_event(&event, self.verbosity));
        }
    }

    fn wants_detailed_events(&self) -> bool {
        self.verbosity >= Verbosity::Verbose
    }
}
