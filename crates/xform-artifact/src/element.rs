//! Element identities
//!
//! Provides [`ElementId`], the opaque token naming the element an operation
//! wants to add (a file path, a property key, a dependency coordinate).

use std::fmt::{self, Display, Formatter};

/// Opaque identity of an element within a target artifact
///
/// Owned by the concrete operation. The engine compares identities for
/// equality and prints them in result messages; it never looks inside.
///
/// # Examples
/// - `prop.key` for a properties entry
/// - `org.example:lib` for a build descriptor dependency
/// - `src/main/resources/app.yaml` for a file
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize)]
#[serde(transparent)]
pub struct ElementId(String);

impl ElementId {
    /// Create identity from any string-like token
    #[inline]
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// Borrow the raw token
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for ElementId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ElementId {
    fn from(token: &str) -> Self {
        Self::new(token)
    }
}

impl From<String> for ElementId {
    fn from(token: String) -> Self {
        Self(token)
    }
}
