use crate::models::{FolderHandle, StorageLocation};
use crate::naming::{extension_of, resolve_import_name};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::fs::{self, OpenOptions};
use std::path::{Component, Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("Invalid file name: {0}")]
    InvalidName(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid base64 content: {0}")]
    Decode(#[from] base64::DecodeError),
}

/// Create the documents directory if it doesn't exist yet
pub fn ensure_storage_dir(storage_root: &Path) -> Result<(), IoError> {
    fs::create_dir_all(storage_root).map_err(IoError::Io)
}

/// Copy `source` into the documents directory.
///
/// The stored name comes from [`resolve_import_name`], checked against the
/// files already in `storage_root`.
pub fn copy_into_storage(
    source: &Path,
    storage_root: &Path,
    requested_name: &str,
) -> Result<StorageLocation, IoError> {
    if !is_plain_file_name(requested_name) {
        return Err(IoError::InvalidName(requested_name.to_string()));
    }
    if !source.is_file() {
        return Err(IoError::NotFound(source.to_path_buf()));
    }

    ensure_storage_dir(storage_root)?;

    let stored_name = resolve_import_name(requested_name, |candidate| {
        storage_root.join(candidate).exists()
    });
    let location = StorageLocation::new(storage_root, &stored_name);

    fs::copy(source, location.path()).map_err(IoError::Io)?;
    Ok(location)
}

/// Read a stored file fully into memory as standard base64.
///
/// The whole file is held in memory twice (raw and encoded), so this is
/// only suitable for modest document sizes.
pub fn read_base64(location: &StorageLocation) -> Result<String, IoError> {
    let path = location.path();
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let bytes = fs::read(path).map_err(IoError::Io)?;
    Ok(STANDARD.encode(bytes))
}

/// Decode base64 `content` and write the bytes to `target`
pub fn write_base64(target: &Path, content: &str) -> Result<(), IoError> {
    let bytes = STANDARD.decode(content)?;
    fs::write(target, bytes).map_err(IoError::Io)
}

/// Check that a chosen destination exists and is a directory
pub fn validate_destination_dir(path: &Path) -> Result<(), IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    if !path.is_dir() {
        return Err(IoError::NotADirectory(path.to_path_buf()));
    }
    Ok(())
}

/// Create a new, empty PDF file in `folder` named after `display_name`.
///
/// Existing files are never replaced: a taken name gets ` (1)`, ` (2)`, ...
/// inserted before the extension.
pub fn create_export_file(folder: &FolderHandle, display_name: &str) -> Result<PathBuf, IoError> {
    let base_name = export_file_name(display_name);
    if !is_plain_file_name(&base_name) {
        return Err(IoError::InvalidName(display_name.to_string()));
    }
    validate_destination_dir(folder.path())?;

    let mut attempt = 0u32;
    loop {
        let candidate = numbered_name(&base_name, attempt);
        let target = folder.path().join(&candidate);
        match OpenOptions::new().write(true).create_new(true).open(&target) {
            Ok(_) => return Ok(target),
            Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                log::debug!("Export target {} is taken", target.display());
                attempt += 1;
            }
            Err(e) => return Err(IoError::Io(e)),
        }
    }
}

/// Name an export file gets for the PDF MIME type: `.pdf` is appended
/// unless the name already ends with it (any case).
pub fn export_file_name(display_name: &str) -> String {
    if extension_of(display_name).eq_ignore_ascii_case("pdf") {
        display_name.to_string()
    } else {
        format!("{display_name}.pdf")
    }
}

fn numbered_name(name: &str, attempt: u32) -> String {
    if attempt == 0 {
        return name.to_string();
    }
    match name.rsplit_once('.') {
        Some((stem, ext)) => format!("{stem} ({attempt}).{ext}"),
        None => format!("{name} ({attempt})"),
    }
}

fn is_plain_file_name(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    ) && !name.contains(['/', '\\'])
}
