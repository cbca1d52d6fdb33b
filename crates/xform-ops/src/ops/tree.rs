use xform_artifact::types::{normalize_path, FileTree};
use xform_artifact::{ArtifactError, ElementId};

use crate::error::{ApplyError, ProbeError};
use crate::operation::AddElementOperation;

/// Add a file, creating missing parent folders
///
/// The element id is the normalized path.
///
/// # Errors
/// Returns error if `path` is empty, absolute, or escapes the tree root
pub fn add_file(
    path: &str,
    contents: impl Into<Vec<u8>>,
) -> Result<AddElementOperation<FileTree>, ArtifactError> {
    let path = normalize_path(path)?;
    let contents: Vec<u8> = contents.into();
    Ok(AddElementOperation::new(
        "AddFile",
        path,
        |tree: &FileTree, id: &ElementId| -> Result<bool, ProbeError> {
            Ok(tree.contains_file(id.as_str()))
        },
        move |tree: &mut FileTree, id: &ElementId| -> Result<(), ApplyError> {
            tree.write_file(id.as_str(), contents.clone())?;
            Ok(())
        },
    ))
}

/// Add a folder, creating missing parents
///
/// # Errors
/// Returns error if `path` is empty, absolute, or escapes the tree root
pub fn add_folder(path: &str) -> Result<AddElementOperation<FileTree>, ArtifactError> {
    let path = normalize_path(path)?;
    Ok(AddElementOperation::new(
        "AddFolder",
        path,
        |tree: &FileTree, id: &ElementId| -> Result<bool, ProbeError> {
            Ok(tree.contains_folder(id.as_str()))
        },
        |tree: &mut FileTree, id: &ElementId| -> Result<(), ApplyError> {
            tree.create_folder(id.as_str())?;
            Ok(())
        },
    ))
}
