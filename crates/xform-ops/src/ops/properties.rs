use xform_artifact::types::PropertiesFile;
use xform_artifact::ElementId;

use crate::error::{ApplyError, ProbeError};
use crate::operation::AddElementOperation;

/// Add `key=value` to a properties file
///
/// Presence is by key. Overwriting replaces the value and keeps the key's
/// position.
#[must_use]
pub fn add_property(
    key: impl Into<String>,
    value: impl Into<String>,
) -> AddElementOperation<PropertiesFile> {
    let key: String = key.into();
    let value: String = value.into();
    AddElementOperation::new(
        "AddProperty",
        key,
        |props: &PropertiesFile, id: &ElementId| -> Result<bool, ProbeError> {
            Ok(props.contains_key(id.as_str()))
        },
        move |props: &mut PropertiesFile, id: &ElementId| -> Result<(), ApplyError> {
            if let Some(previous) = props.set(id.as_str(), value.clone()) {
                tracing::debug!(key = %id, %previous, "Replaced property value");
            }
            Ok(())
        },
    )
}
