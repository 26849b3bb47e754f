//! Named records and their kinds
//!
//! Every record artifact is a TOML document that starts with a `kind` and a
//! `name`. Hosts only need that header to answer "which records of kind T
//! exist", so the header is parsed on its own.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of record stored in an artifact
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecordKind {
    WeaponData,
    Prefab,
    Material,
}

impl RecordKind {
    /// Type tag as written in the `kind` field
    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::WeaponData => "WeaponData",
            RecordKind::Prefab => "Prefab",
            RecordKind::Material => "Material",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A record with a human-readable name, as seen by uniqueness checks
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedRecord {
    pub kind: RecordKind,
    pub name: String,
    pub path: String,
}

impl NamedRecord {
    pub fn new(kind: RecordKind, name: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            path: path.into(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct RecordHeader {
    kind: RecordKind,
    name: String,
}

/// Read the `kind`/`name` header of a serialized record.
///
/// Returns `None` for content that is not a record.
pub fn parse_header(content: &str) -> Option<(RecordKind, String)> {
    toml::from_str::<RecordHeader>(content)
        .ok()
        .map(|header| (header.kind, header.name))
}
