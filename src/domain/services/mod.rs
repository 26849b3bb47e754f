//! Domain Services
//!
//! Stateless operations over the ports.

mod naming;
mod path_materializer;

pub use naming::is_name_available;
pub use path_materializer::{EnsureReport, MaterializeError, PathMaterializer};
