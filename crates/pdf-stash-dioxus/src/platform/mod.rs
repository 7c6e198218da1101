//! Platform-specific functionality
//!
//! Exporting writes outside the app's own storage, which on Android needs a
//! storage permission. Everywhere else access is always granted.

#[cfg(target_os = "android")]
mod android;

#[cfg(target_os = "android")]
pub use android::*;

use pdf_stash_engine::PermissionResponse;
use std::path::PathBuf;

/// Result of a storage permission check
#[derive(Debug, Clone, PartialEq)]
pub enum StoragePermissionStatus {
    /// Permission is granted, can write to external storage
    Granted,
    /// Permission denied, need to request it
    Denied,
    /// Need to open settings for user to grant permission manually (Android 11+)
    NeedsSettingsIntent,
}

/// Check if the app may write to folders outside its own storage.
///
/// On non-Android platforms, always returns `Granted`.
#[cfg(not(target_os = "android"))]
pub fn check_storage_permission() -> StoragePermissionStatus {
    StoragePermissionStatus::Granted
}

/// Request storage permission.
///
/// On non-Android platforms, this is a no-op.
#[cfg(not(target_os = "android"))]
pub fn request_storage_permission() -> bool {
    true
}

/// Ask for write access to `folder`.
///
/// When permission is missing the settings page is opened so the user can
/// grant it, and this request is answered as denied. Choosing the folder
/// again afterwards picks up the new permission.
pub fn request_folder_access(folder: PathBuf) -> PermissionResponse {
    match check_storage_permission() {
        StoragePermissionStatus::Granted => PermissionResponse::Granted(folder),
        status => {
            log::warn!("Storage permission not granted ({status:?}), opening settings");
            if !request_storage_permission() {
                log::error!("Could not open the storage permission settings");
            }
            PermissionResponse::Denied
        }
    }
}
