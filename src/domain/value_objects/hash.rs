//! Content Hash Value Object
//!
//! SHA-256 of an artifact's serialized content, reported when the artifact
//! is written.

use std::fmt;

/// Content hash with the `sha256:` prefix
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContentHash(String);

impl ContentHash {
    /// Prefix for SHA-256 hashes
    pub const PREFIX: &'static str = "sha256:";

    /// Compute the hash of `content`
    pub fn from_content(content: &str) -> Self {
        use sha2::{Digest, Sha256};
        let hash = Sha256::digest(content.as_bytes());
        Self(format!("{}{:x}", Self::PREFIX, hash))
    }

    /// Full hash string with prefix
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Hex digest without prefix
    pub fn hex(&self) -> &str {
        self.0.strip_prefix(Self::PREFIX).unwrap_or(&self.0)
    }
}

impl fmt::Display for ContentHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
