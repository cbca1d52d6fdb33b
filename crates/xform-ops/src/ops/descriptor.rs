use xform_artifact::types::{BuildDescriptor, CoordinateSection};
use xform_artifact::{Coordinate, ElementId};

use crate::error::{ApplyError, ProbeError};
use crate::operation::AddElementOperation;

/// Add a dependency
#[must_use]
pub fn add_dependency(coordinate: Coordinate) -> AddElementOperation<BuildDescriptor> {
    coordinate_op("AddDependency", CoordinateSection::Dependencies, coordinate)
}

/// Add a managed dependency
#[must_use]
pub fn add_managed_dependency(coordinate: Coordinate) -> AddElementOperation<BuildDescriptor> {
    coordinate_op("AddManagedDependency", CoordinateSection::ManagedDependencies, coordinate)
}

/// Add a plugin
#[must_use]
pub fn add_plugin(coordinate: Coordinate) -> AddElementOperation<BuildDescriptor> {
    coordinate_op("AddPlugin", CoordinateSection::Plugins, coordinate)
}

/// Add a managed plugin
#[must_use]
pub fn add_managed_plugin(coordinate: Coordinate) -> AddElementOperation<BuildDescriptor> {
    coordinate_op("AddManagedPlugin", CoordinateSection::ManagedPlugins, coordinate)
}

/// Add a descriptor property
#[must_use]
pub fn add_descriptor_property(
    key: impl Into<String>,
    value: impl Into<String>,
) -> AddElementOperation<BuildDescriptor> {
    let key: String = key.into();
    let value: String = value.into();
    AddElementOperation::new(
        "AddDescriptorProperty",
        key,
        |pom: &BuildDescriptor, id: &ElementId| -> Result<bool, ProbeError> {
            Ok(pom.property(id.as_str()).is_some())
        },
        move |pom: &mut BuildDescriptor, id: &ElementId| -> Result<(), ApplyError> {
            pom.set_property(id.as_str(), value.clone());
            Ok(())
        },
    )
}

// The element id is the full coordinate; presence ignores the version.
fn coordinate_op(
    name: &'static str,
    section: CoordinateSection,
    coordinate: Coordinate,
) -> AddElementOperation<BuildDescriptor> {
    let probed = coordinate.clone();
    AddElementOperation::new(
        name,
        coordinate.to_string(),
        move |pom: &BuildDescriptor, _: &ElementId| -> Result<bool, ProbeError> {
            Ok(pom.contains(section, &probed))
        },
        move |pom: &mut BuildDescriptor, id: &ElementId| -> Result<(), ApplyError> {
            if let Some(replaced) = pom.upsert(section, coordinate.clone()) {
                tracing::debug!(
                    element = %id,
                    %replaced,
                    section = section.as_str(),
                    "Replaced coordinate"
                );
            }
            Ok(())
        },
    )
}
