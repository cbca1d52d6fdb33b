//! Target Artifact Implementations
//!
//! In-memory targets for the element kinds add-operations handle:
//! - Properties: ordered key/value entries
//! - Descriptor: build coordinates and descriptor properties
//! - Tree: folders and files

pub mod descriptor;
pub mod properties;
pub mod tree;

// Re-export common types
pub use descriptor::{BuildDescriptor, CoordinateSection};
pub use properties::PropertiesFile;
pub use tree::{normalize_path, FileTree};
