//! Target artifact trait
//!
//! Defines [`TargetArtifact`], the in-memory view of whatever an operation
//! mutates (a properties file, a build descriptor, a folder tree).

use crate::element::ElementId;
use crate::hash::ContentHash;
use std::fmt::Debug;

/// Trait for artifacts that add-operations mutate
///
/// Implement this for each kind of target the pipeline loads. Parsing and
/// writing the artifact belong to the pipeline; this trait only exposes what
/// the engine needs to audit an execution.
///
/// # Contract
/// - `fingerprint` must be deterministic: equal content yields equal hashes
/// - `KIND` must be stable and unique across target kinds
///
/// # Example
/// ```rust,ignore
/// impl TargetArtifact for PropertiesFile {
///     const KIND: &'static str = "properties";
///
///     fn fingerprint(&self) -> ContentHash {
///         let mut fp = Fingerprint::new(Self::KIND);
///         for (k, v) in &self.entries {
///             fp.field(k).field(v);
///         }
///         fp.finish()
///     }
/// }
/// ```
pub trait TargetArtifact: Debug {
    /// Target kind identifier
    const KIND: &'static str;

    /// Compute content fingerprint
    fn fingerprint(&self) -> ContentHash;
}

/// Incremental, length-prefixed fingerprint over artifact fields
///
/// Length prefixes keep `("ab", "c")` and `("a", "bc")` apart.
#[derive(Debug, Clone)]
pub struct Fingerprint {
    hasher: blake3::Hasher,
}

impl Fingerprint {
    /// Start a fingerprint scoped to a target kind
    #[must_use]
    pub fn new(kind: &str) -> Self {
        let mut fp = Self {
            hasher: blake3::Hasher::new(),
        };
        fp.field(kind);
        fp
    }

    /// Feed one string field
    pub fn field(&mut self, value: &str) -> &mut Self {
        self.bytes(value.as_bytes())
    }

    /// Feed one raw byte field
    pub fn bytes(&mut self, value: &[u8]) -> &mut Self {
        self.hasher.update(&(value.len() as u64).to_le_bytes());
        self.hasher.update(value);
        self
    }

    /// Feed an optional string field; `None` and `Some("")` stay distinct
    pub fn optional(&mut self, value: Option<&str>) -> &mut Self {
        match value {
            Some(v) => {
                self.hasher.update(&[1]);
                self.field(v)
            }
            None => {
                self.hasher.update(&[0]);
                self
            }
        }
    }

    /// Feed a section marker (separates collections of different roles)
    pub fn section(&mut self, name: &str) -> &mut Self {
        self.hasher.update(&[0xff]);
        self.field(name)
    }

    /// Finish into a content hash
    #[must_use]
    pub fn finish(&self) -> ContentHash {
        ContentHash::new(*self.hasher.finalize().as_bytes())
    }
}

/// Errors raised by target artifact models
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ArtifactError {
    /// Model invariant violation
    #[error("artifact invariant violated: {0}")]
    InvariantViolation(String),

    /// Element does not have the shape this target expects
    #[error("malformed element for {kind}: {element} ({reason})")]
    MalformedElement {
        /// Target kind
        kind: &'static str,
        /// Offending element
        element: ElementId,
        /// Why it was rejected
        reason: String,
    },
}

impl ArtifactError {
    /// Create malformed element error
    #[must_use]
    pub fn malformed(kind: &'static str, element: &ElementId, reason: impl Into<String>) -> Self {
        Self::MalformedElement {
            kind,
            element: element.clone(),
            reason: reason.into(),
        }
    }
}
