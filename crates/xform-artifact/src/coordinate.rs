//! Build coordinates
//!
//! `group:artifact[:version]` triples used by dependencies and plugins in a
//! [`BuildDescriptor`](crate::types::BuildDescriptor).

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Dependency or plugin coordinate
///
/// Two coordinates name the same element when their `group:artifact` keys
/// match; the version is the value carried by that element.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
pub struct Coordinate {
    /// Group identifier
    pub group: String,
    /// Artifact identifier
    pub artifact: String,
    /// Version, if pinned
    pub version: Option<String>,
}

impl Coordinate {
    /// Create coordinate
    #[must_use]
    pub fn new(
        group: impl Into<String>,
        artifact: impl Into<String>,
        version: Option<String>,
    ) -> Self {
        Self {
            group: group.into(),
            artifact: artifact.into(),
            version,
        }
    }

    /// Check whether both coordinates name the same element
    #[inline]
    #[must_use]
    pub fn same_element(&self, other: &Self) -> bool {
        self.group == other.group && self.artifact == other.artifact
    }
}

impl Display for Coordinate {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match &self.version {
            Some(v) => write!(f, "{}:{}:{}", self.group, self.artifact, v),
            None => write!(f, "{}:{}", self.group, self.artifact),
        }
    }
}

impl FromStr for Coordinate {
    type Err = CoordinateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(':').collect();
        if parts.iter().any(|p| p.trim().is_empty()) {
            return Err(CoordinateError::EmptyPart(s.to_string()));
        }
        match parts.as_slice() {
            [group, artifact] => Ok(Self::new(*group, *artifact, None)),
            [group, artifact, version] => {
                Ok(Self::new(*group, *artifact, Some((*version).to_string())))
            }
            _ => Err(CoordinateError::WrongArity {
                input: s.to_string(),
                parts: parts.len(),
            }),
        }
    }
}

/// Coordinate parse errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CoordinateError {
    /// Not two or three parts
    #[error("expected group:artifact[:version], got {parts} part(s) in '{input}'")]
    WrongArity {
        /// Raw input
        input: String,
        /// Number of `:`-separated parts found
        parts: usize,
    },

    /// A part was empty
    #[error("coordinate has an empty part: '{0}'")]
    EmptyPart(String),
}
