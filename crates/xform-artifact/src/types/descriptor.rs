//! Build descriptor target
//!
//! The structural view of a POM-like build file: dependencies, managed
//! dependencies, plugins, managed plugins, and descriptor properties.

use indexmap::IndexMap;

use crate::coordinate::Coordinate;
use crate::hash::ContentHash;
use crate::target::{Fingerprint, TargetArtifact};

/// Which coordinate list of the descriptor an element lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CoordinateSection {
    /// `<dependencies>`
    Dependencies,
    /// `<dependencyManagement>`
    ManagedDependencies,
    /// `<build><plugins>`
    Plugins,
    /// `<build><pluginManagement>`
    ManagedPlugins,
}

impl CoordinateSection {
    /// All sections, in descriptor order
    pub const ALL: [Self; 4] = [
        Self::Dependencies,
        Self::ManagedDependencies,
        Self::Plugins,
        Self::ManagedPlugins,
    ];

    /// Section name
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dependencies => "dependencies",
            Self::ManagedDependencies => "managed_dependencies",
            Self::Plugins => "plugins",
            Self::ManagedPlugins => "managed_plugins",
        }
    }
}

/// In-memory build descriptor
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct BuildDescriptor {
    dependencies: Vec<Coordinate>,
    managed_dependencies: Vec<Coordinate>,
    plugins: Vec<Coordinate>,
    managed_plugins: Vec<Coordinate>,
    properties: IndexMap<String, String>,
}

impl BuildDescriptor {
    /// Create empty descriptor
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert, for fixtures and loaders
    #[must_use]
    pub fn with(mut self, section: CoordinateSection, coordinate: Coordinate) -> Self {
        self.upsert(section, coordinate);
        self
    }

    /// Coordinates in a section
    #[inline]
    #[must_use]
    pub fn section(&self, section: CoordinateSection) -> &[Coordinate] {
        match section {
            CoordinateSection::Dependencies => &self.dependencies,
            CoordinateSection::ManagedDependencies => &self.managed_dependencies,
            CoordinateSection::Plugins => &self.plugins,
            CoordinateSection::ManagedPlugins => &self.managed_plugins,
        }
    }

    fn section_mut(&mut self, section: CoordinateSection) -> &mut Vec<Coordinate> {
        match section {
            CoordinateSection::Dependencies => &mut self.dependencies,
            CoordinateSection::ManagedDependencies => &mut self.managed_dependencies,
            CoordinateSection::Plugins => &mut self.plugins,
            CoordinateSection::ManagedPlugins => &mut self.managed_plugins,
        }
    }

    /// Find the entry naming the same element (`group:artifact`)
    #[must_use]
    pub fn find(&self, section: CoordinateSection, coordinate: &Coordinate) -> Option<&Coordinate> {
        self.section(section).iter().find(|c| c.same_element(coordinate))
    }

    /// Check whether the section already holds this element
    #[inline]
    #[must_use]
    pub fn contains(&self, section: CoordinateSection, coordinate: &Coordinate) -> bool {
        self.find(section, coordinate).is_some()
    }

    /// Replace the matching entry in place, or append; returns the replaced entry
    pub fn upsert(
        &mut self,
        section: CoordinateSection,
        coordinate: Coordinate,
    ) -> Option<Coordinate> {
        let entries = self.section_mut(section);
        match entries.iter_mut().find(|c| c.same_element(&coordinate)) {
            Some(existing) => Some(std::mem::replace(existing, coordinate)),
            None => {
                entries.push(coordinate);
                None
            }
        }
    }

    /// Descriptor property value
    #[inline]
    #[must_use]
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// Insert or overwrite a descriptor property, returning the previous value
    pub fn set_property(
        &mut self,
        key: impl Into<String>,
        value: impl Into<String>,
    ) -> Option<String> {
        self.properties.insert(key.into(), value.into())
    }
}

impl TargetArtifact for BuildDescriptor {
    const KIND: &'static str = "descriptor";

    fn fingerprint(&self) -> ContentHash {
        let mut fp = Fingerprint::new(Self::KIND);
        for section in CoordinateSection::ALL {
            fp.section(section.as_str());
            for c in self.section(section) {
                fp.field(&c.group)
                    .field(&c.artifact)
                    .optional(c.version.as_deref());
            }
        }
        fp.section("properties");
        for (k, v) in &self.properties {
            fp.field(k).field(v);
        }
        fp.finish()
    }
}
