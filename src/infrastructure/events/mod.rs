//! Event Sinks
//!
//! Implementations of the WizardEventSink port.

mod console;
mod json;

pub use console::{render_event, ConsoleEventSink};
pub use json::{event_to_json, JsonEventSink};
