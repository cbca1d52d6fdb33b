//! xform Artifact System
//!
//! The targets transformation operations mutate, and the identities of the
//! elements they add.
//!
//! # Core Concepts
//!
//! - [`TargetArtifact`]: Trait for anything an operation mutates
//! - [`ElementId`]: Opaque, equality-comparable element identity
//! - [`ContentHash`]: 32-byte Blake3 fingerprint of a target's content
//! - [`Coordinate`]: `group:artifact[:version]` build coordinates
//! - [`types`]: In-memory properties, build descriptor and file tree targets
//!
//! # Example
//!
//! ```rust
//! use xform_artifact::{ElementId, TargetArtifact};
//! use xform_artifact::types::PropertiesFile;
//!
//! let mut props = PropertiesFile::new();
//! let before = props.fingerprint();
//! props.set("prop.key", "value");
//!
//! assert_ne!(before, props.fingerprint());
//! assert_eq!(ElementId::new("prop.key").as_str(), "prop.key");
//! ```

#![warn(unreachable_pub)]
#![warn(missing_docs)]

// Core modules
mod coordinate;
mod element;
mod hash;
mod target;

pub mod types;

// Re-exports
pub use coordinate::{Coordinate, CoordinateError};
pub use element::ElementId;
pub use hash::ContentHash;
pub use target::{ArtifactError, Fingerprint, TargetArtifact};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod integration_tests {
    use super::types::{BuildDescriptor, CoordinateSection, FileTree, PropertiesFile};
    use super::*;

    #[test]
    fn kinds_are_unique() {
        let kinds = [PropertiesFile::KIND, BuildDescriptor::KIND, FileTree::KIND];
        for (i, a) in kinds.iter().enumerate() {
            for b in &kinds[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn empty_targets_fingerprint_differently() {
        assert_ne!(
            PropertiesFile::new().fingerprint(),
            BuildDescriptor::new().fingerprint()
        );
        assert_ne!(PropertiesFile::new().fingerprint(), FileTree::new().fingerprint());
    }

    #[test]
    fn coordinate_identity_drives_descriptor_lookup() {
        let id = ElementId::new("dep:coord:1.0");
        let coordinate: Coordinate = id.as_str().parse().unwrap();
        let pom = BuildDescriptor::new().with(CoordinateSection::Dependencies, coordinate.clone());

        assert!(pom.contains(CoordinateSection::Dependencies, &coordinate));
        assert_eq!(coordinate.to_string(), id.to_string());
    }
}
