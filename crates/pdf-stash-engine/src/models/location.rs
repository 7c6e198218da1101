use relative_path::{RelativePath, RelativePathBuf};
use std::path::{Path, PathBuf};

/// Handle to a file kept in the documents directory.
///
/// Only the import path creates these, so a location always names a file
/// that was copied into storage by this app.
#[derive(Debug, Clone, PartialEq)]
pub struct StorageLocation {
    file_name: RelativePathBuf,
    absolute_path: PathBuf,
}

impl StorageLocation {
    pub(crate) fn new(storage_root: &Path, file_name: &str) -> Self {
        let file_name = RelativePathBuf::from(file_name);
        let absolute_path = file_name.to_path(storage_root);
        Self {
            file_name,
            absolute_path,
        }
    }

    /// Name of the stored file relative to the documents directory
    pub fn file_name(&self) -> &RelativePath {
        &self.file_name
    }

    /// Absolute path used for I/O
    pub fn path(&self) -> &Path {
        &self.absolute_path
    }
}

/// Handle to a destination folder the user granted write access to.
#[derive(Debug, Clone, PartialEq)]
pub struct FolderHandle {
    path: PathBuf,
}

impl FolderHandle {
    pub(crate) fn new(path: PathBuf) -> Self {
        Self { path }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Last path segment, for showing which folder is selected
    pub fn display_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }
}
