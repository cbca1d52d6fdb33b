//! File tree target
//!
//! The folder/file layout of an application being transformed, held in
//! memory with `/`-separated relative paths.

use std::collections::{BTreeMap, BTreeSet};

use crate::element::ElementId;
use crate::hash::ContentHash;
use crate::target::{ArtifactError, Fingerprint, TargetArtifact};

/// Normalize a relative tree path
///
/// Accepts `\` or `/` separators, drops `.` segments and trailing slashes.
///
/// # Errors
/// Returns error for empty, absolute, or parent-escaping (`..`) paths
pub fn normalize_path(raw: &str) -> Result<String, ArtifactError> {
    let element = ElementId::new(raw);
    let unified = raw.replace('\\', "/");
    if unified.starts_with('/') {
        return Err(ArtifactError::malformed(FileTree::KIND, &element, "path must be relative"));
    }
    let mut segments = Vec::new();
    for seg in unified.split('/') {
        match seg {
            "" | "." => {}
            ".." => {
                return Err(ArtifactError::malformed(
                    FileTree::KIND,
                    &element,
                    "path must not contain '..'",
                ))
            }
            other => segments.push(other),
        }
    }
    if segments.is_empty() {
        return Err(ArtifactError::malformed(FileTree::KIND, &element, "path is empty"));
    }
    Ok(segments.join("/"))
}

/// In-memory file tree
///
/// Parent folders of every file and folder are tracked implicitly.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct FileTree {
    folders: BTreeSet<String>,
    files: BTreeMap<String, Vec<u8>>,
}

impl FileTree {
    /// Create empty tree
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a file exists at this (normalized) path
    #[inline]
    #[must_use]
    pub fn contains_file(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    /// Check whether a folder exists at this (normalized) path
    #[inline]
    #[must_use]
    pub fn contains_folder(&self, path: &str) -> bool {
        self.folders.contains(path)
    }

    /// File contents
    #[inline]
    #[must_use]
    pub fn file(&self, path: &str) -> Option<&[u8]> {
        self.files.get(path).map(Vec::as_slice)
    }

    /// Number of files
    #[inline]
    #[must_use]
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    /// Write (or overwrite) a file, creating parent folders
    ///
    /// # Errors
    /// Returns error if the path is invalid or a folder occupies it
    pub fn write_file(
        &mut self,
        path: &str,
        contents: Vec<u8>,
    ) -> Result<Option<Vec<u8>>, ArtifactError> {
        let path = normalize_path(path)?;
        if self.folders.contains(&path) {
            return Err(ArtifactError::InvariantViolation(format!(
                "cannot write file '{path}': a folder exists at that path"
            )));
        }
        self.add_parents(&path)?;
        Ok(self.files.insert(path, contents))
    }

    /// Create a folder and its parents; returns false if it already existed
    ///
    /// # Errors
    /// Returns error if the path is invalid or a file occupies it
    pub fn create_folder(&mut self, path: &str) -> Result<bool, ArtifactError> {
        let path = normalize_path(path)?;
        if self.files.contains_key(&path) {
            return Err(ArtifactError::InvariantViolation(format!(
                "cannot create folder '{path}': a file exists at that path"
            )));
        }
        self.add_parents(&path)?;
        Ok(self.folders.insert(path))
    }

    // Checks every ancestor before inserting any, so a rejected path leaves
    // the tree untouched.
    fn add_parents(&mut self, path: &str) -> Result<(), ArtifactError> {
        let parents: Vec<&str> = path
            .match_indices('/')
            .map(|(idx, _)| &path[..idx])
            .collect();
        if let Some(file) = parents.iter().find(|p| self.files.contains_key(**p)) {
            return Err(ArtifactError::InvariantViolation(format!(
                "'{file}' is a file and cannot hold '{path}'"
            )));
        }
        for parent in parents {
            self.folders.insert(parent.to_string());
        }
        Ok(())
    }
}

impl TargetArtifact for FileTree {
    const KIND: &'static str = "tree";

    fn fingerprint(&self) -> ContentHash {
        let mut fp = Fingerprint::new(Self::KIND);
        fp.section("folders");
        for folder in &self.folders {
            fp.field(folder);
        }
        fp.section("files");
        for (path, contents) in &self.files {
            fp.field(path).bytes(contents);
        }
        fp.finish()
    }
}
