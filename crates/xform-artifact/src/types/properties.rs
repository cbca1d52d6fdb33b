//! Properties target
//!
//! Ordered key/value entries, as loaded from a `.properties` file.

use indexmap::IndexMap;

use crate::hash::ContentHash;
use crate::target::{Fingerprint, TargetArtifact};

/// In-memory properties file
///
/// Insertion order is preserved so overwriting a key keeps its position.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct PropertiesFile {
    entries: IndexMap<String, String>,
}

impl PropertiesFile {
    /// Create empty properties
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a value
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Check whether a key is present
    #[inline]
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Insert or overwrite in place, returning the previous value
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) -> Option<String> {
        self.entries.insert(key.into(), value.into())
    }

    /// Iterate entries in file order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for PropertiesFile {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl TargetArtifact for PropertiesFile {
    const KIND: &'static str = "properties";

    fn fingerprint(&self) -> ContentHash {
        let mut fp = Fingerprint::new(Self::KIND);
        for (k, v) in &self.entries {
            fp.field(k).field(v);
        }
        fp.finish()
    }
}
