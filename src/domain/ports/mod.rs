//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod asset_database;
pub mod wizard_events;

pub use asset_database::{
    ArtifactIndex, ArtifactWriter, AssetDatabase, ContainerCreator, ContainerOracle,
    CreationError, QueryError,
};
pub use wizard_events::{NoopEventSink, WizardEvent, WizardEventSink};
