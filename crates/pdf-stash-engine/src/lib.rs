pub mod io;
pub mod models;
pub mod naming;
pub mod preview;
pub mod session;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use io::IoError;
pub use models::{FolderHandle, ImportedDocument, PickError, PickedDocument, StorageLocation};
pub use naming::{extension_of, resolve_import_name, resolve_import_name_at};
pub use preview::{PDF_MIME_TYPE, Preview};
pub use session::{Action, ActionError, Notice, NoticeKind, PermissionResponse, Session};
