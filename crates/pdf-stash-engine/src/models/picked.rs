use crate::naming::extension_of;
use std::path::{Path, PathBuf};

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum PickError {
    #[error("No file name in path: {0}")]
    MissingFileName(PathBuf),
    #[error("Only PDF documents can be added: {0}")]
    NotPdf(String),
}

/// A file chosen by the picker, before it is copied into storage
#[derive(Debug, Clone, PartialEq)]
pub struct PickedDocument {
    source: PathBuf,
    display_name: String,
}

impl PickedDocument {
    /// Accept a picked path, restricted to PDF files.
    pub fn from_path(source: impl Into<PathBuf>) -> Result<Self, PickError> {
        let source = source.into();
        let display_name = source
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| PickError::MissingFileName(source.clone()))?;

        if !extension_of(&display_name).eq_ignore_ascii_case("pdf") {
            return Err(PickError::NotPdf(display_name));
        }

        Ok(Self {
            source,
            display_name,
        })
    }

    /// Platform pickers that report the name separately from the location
    pub fn with_name(source: impl Into<PathBuf>, display_name: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            display_name: display_name.into(),
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}
