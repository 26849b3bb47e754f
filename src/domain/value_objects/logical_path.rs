//! Logical Path Value Object
//!
//! A validated, slash-delimited container path such as `Assets/Prefabs/Rifle`.
//! The first segment is the root container; every following segment is a
//! child of the one before it.

use std::fmt;

use thiserror::Error;

/// Segment separator for logical paths
pub const SEPARATOR: char = '/';

/// Error when a logical path or asset name fails validation
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidPathError {
    /// Path is empty
    #[error("invalid path: path is empty")]
    Empty,

    /// First segment is empty (e.g. `/b/c`)
    #[error("invalid path '{path}': root segment is empty")]
    EmptyRoot { path: String },

    /// A segment after the root is empty (e.g. `a//b` or `a/b/`)
    #[error("invalid path '{path}': segment {index} is empty")]
    EmptySegment { path: String, index: usize },

    /// A segment is `.` or `..`
    #[error("invalid path '{path}': segment '{segment}' is not allowed")]
    Traversal { path: String, segment: String },

    /// Asset base name is blank or contains the separator
    #[error("invalid asset name '{name}'")]
    InvalidName { name: String },
}

/// A validated logical container path
///
/// Guarantees:
/// - at least one segment (the root)
/// - no empty segments
/// - no `.` or `..` segments
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LogicalPath {
    segments: Vec<String>,
}

impl LogicalPath {
    /// Parse a slash-delimited path string
    pub fn parse(raw: &str) -> Result<Self, InvalidPathError> {
        if raw.is_empty() {
            return Err(InvalidPathError::Empty);
        }

        let mut segments = Vec::new();
        for (index, segment) in raw.split(SEPARATOR).enumerate() {
            if segment.is_empty() {
                return Err(if index == 0 {
                    InvalidPathError::EmptyRoot {
                        path: raw.to_string(),
                    }
                } else {
                    InvalidPathError::EmptySegment {
                        path: raw.to_string(),
                        index,
                    }
                });
            }
            if segment == "." || segment == ".." {
                return Err(InvalidPathError::Traversal {
                    path: raw.to_string(),
                    segment: segment.to_string(),
                });
            }
            segments.push(segment.to_string());
        }

        Ok(Self { segments })
    }

    /// Root container name
    pub fn root(&self) -> &str {
        &self.segments[0]
    }

    /// All segments, root first
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Number of segments below the root
    pub fn depth(&self) -> usize {
        self.segments.len() - 1
    }

    /// Iterate `(parent, name, cumulative)` for every segment below the root,
    /// in creation order.
    pub fn descend(&self) -> Descend<'_> {
        Descend {
            path: self,
            next: 1,
            current: self.root().to_string(),
        }
    }
}

/// Iterator over the non-root steps of a [`LogicalPath`]
pub struct Descend<'a> {
    path: &'a LogicalPath,
    next: usize,
    current: String,
}

/// One step of a descent: create `name` inside `parent` to reach `cumulative`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    pub parent: String,
    pub name: String,
    pub cumulative: String,
}

impl Iterator for Descend<'_> {
    type Item = Step;

    fn next(&mut self) -> Option<Step> {
        let name = self.path.segments.get(self.next)?.clone();
        self.next += 1;

        let cumulative = format!("{}{}{}", self.current, SEPARATOR, name);
        let parent = std::mem::replace(&mut self.current, cumulative.clone());
        Some(Step {
            parent,
            name,
            cumulative,
        })
    }
}

impl fmt::Display for LogicalPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.segments.join("/"))
    }
}

impl TryFrom<&str> for LogicalPath {
    type Error = InvalidPathError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}
