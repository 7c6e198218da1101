//! UniFFI bindings for pdf-stash mobile apps
//!
//! A native shell owns the platform pickers and the preview web view, and
//! hands their results to a [`SessionHandle`]. Every action answers with the
//! notice to show, so the shell only needs a generic alert dialog.

use pdf_stash_engine::{
    ImportedDocument, Notice, NoticeKind, PermissionResponse, PickedDocument, Session,
};
use std::collections::HashSet;
use std::sync::{Mutex, MutexGuard};

uniffi::setup_scaffolding!();

// ============ Errors ============

/// Errors that can cross the FFI boundary
/// Note: Field is named `reason` not `message` to avoid conflict with Throwable.message in Kotlin
#[derive(Debug, thiserror::Error, uniffi::Error)]
pub enum FfiError {
    #[error("Invalid pick: {reason}")]
    InvalidPick { reason: String },
    #[error("Unknown document: {reason}")]
    UnknownDocument { reason: String },
}

// ============ Session Handle ============

/// State of one document screen
#[derive(uniffi::Object)]
pub struct SessionHandle {
    inner: Mutex<Session>,
}

impl SessionHandle {
    fn session(&self) -> MutexGuard<'_, Session> {
        // Recover from poisoned mutex (another thread panicked while holding lock)
        self.inner.lock().unwrap_or_else(|e| e.into_inner())
    }

    fn find_document(&self, id: &str) -> Result<ImportedDocument, FfiError> {
        self.session()
            .documents()
            .iter()
            .find(|doc| doc.id().to_string() == id)
            .cloned()
            .ok_or_else(|| FfiError::UnknownDocument {
                reason: id.to_string(),
            })
    }
}

#[uniffi::export]
impl SessionHandle {
    /// Start an empty session storing documents under `documents_path`.
    #[uniffi::constructor]
    pub fn new(documents_path: String) -> Self {
        Self {
            inner: Mutex::new(Session::new(documents_path)),
        }
    }

    /// Import a file the picker returned.
    ///
    /// `display_name` is the name the picker reported; when absent it is
    /// taken from the path, which must then end in `.pdf`.
    pub fn import_document(
        &self,
        source_path: String,
        display_name: Option<String>,
    ) -> Result<NoticeDto, FfiError> {
        let picked = match display_name {
            Some(name) => PickedDocument::with_name(source_path, name),
            None => PickedDocument::from_path(source_path).map_err(|e| FfiError::InvalidPick {
                reason: e.to_string(),
            })?,
        };

        Ok(NoticeDto::from_engine(self.session().import_picked(picked)))
    }

    /// Pass on the answer of the folder permission request.
    pub fn select_destination(&self, granted: bool, directory_path: Option<String>) -> NoticeDto {
        let response = match (granted, directory_path) {
            (true, Some(path)) => PermissionResponse::Granted(path.into()),
            _ => PermissionResponse::Denied,
        };
        NoticeDto::from_engine(self.session().select_destination(response))
    }

    pub fn export_document(&self, document_id: String) -> Result<NoticeDto, FfiError> {
        let document = self.find_document(&document_id)?;
        Ok(NoticeDto::from_engine(
            self.session().export_document(&document),
        ))
    }

    /// Load a document into the preview. Returns a notice only on failure.
    pub fn load_preview(&self, document_id: String) -> Result<Option<NoticeDto>, FfiError> {
        let document = self.find_document(&document_id)?;
        Ok(self
            .session()
            .load_preview(&document)
            .map(NoticeDto::from_engine))
    }

    pub fn close_preview(&self) {
        self.session().close_preview();
    }

    /// The `data:` URI to feed the preview web view, if a document is shown
    pub fn preview_data_uri(&self) -> Option<String> {
        self.session()
            .preview()
            .map(|preview| preview.data_uri().to_string())
    }

    /// Imported documents in import order
    pub fn documents(&self) -> Vec<DocumentDto> {
        self.session()
            .documents()
            .iter()
            .map(DocumentDto::from_engine)
            .collect()
    }

    /// Path of the selected destination folder
    pub fn destination(&self) -> Option<String> {
        self.session()
            .destination()
            .map(|folder| folder.path().display().to_string())
    }
}

// ============ DTOs ============

/// A document in the session list.
#[derive(uniffi::Record)]
pub struct DocumentDto {
    /// Stable key for list rendering and for addressing actions
    pub id: String,
    /// Name shown to the user and used for exports
    pub display_name: String,
    /// Name of the copy inside app storage
    pub stored_name: String,
}

impl DocumentDto {
    fn from_engine(document: &ImportedDocument) -> Self {
        Self {
            id: document.id().to_string(),
            display_name: document.display_name().to_string(),
            stored_name: document.location().file_name().to_string(),
        }
    }
}

/// Alert content for the native dialog.
#[derive(uniffi::Record)]
pub struct NoticeDto {
    /// "success", "error" or "permission_denied"
    pub kind: String,
    pub title: String,
    pub body: String,
}

impl NoticeDto {
    fn from_engine(notice: Notice) -> Self {
        let kind = match notice.kind {
            NoticeKind::Success => "success",
            NoticeKind::Error => "error",
            NoticeKind::PermissionDenied => "permission_denied",
        };
        Self {
            kind: kind.to_string(),
            title: notice.title,
            body: notice.message,
        }
    }
}

// ============ Standalone Functions ============

/// Name a file would be stored under, given the names already present.
#[uniffi::export]
pub fn resolve_import_name(requested_name: String, existing_names: Vec<String>) -> String {
    let existing: HashSet<String> = existing_names.into_iter().collect();
    pdf_stash_engine::resolve_import_name(&requested_name, |candidate| {
        existing.contains(candidate)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn handle_with_pdf(name: &str) -> (TempDir, SessionHandle, String) {
        let scratch = tempfile::tempdir().unwrap();
        let source = scratch.path().join(name);
        fs::write(&source, b"%PDF-1.4\n%%EOF\n").unwrap();
        let handle = SessionHandle::new(
            scratch
                .path()
                .join("documents")
                .to_string_lossy()
                .into_owned(),
        );
        (scratch, handle, source.to_string_lossy().into_owned())
    }

    #[test]
    fn test_import_lists_document() {
        let (_scratch, handle, source) = handle_with_pdf("report.pdf");

        let notice = handle.import_document(source, None).unwrap();

        assert_eq!(notice.kind, "success");
        let documents = handle.documents();
        assert_eq!(documents.len(), 1);
        assert_eq!(documents[0].display_name, "report.pdf");
        assert_eq!(documents[0].stored_name, "report.pdf");
    }

    #[test]
    fn test_import_uses_picker_name() {
        let (_scratch, handle, source) = handle_with_pdf("content-1234");

        handle
            .import_document(source, Some("Invoice.pdf".to_string()))
            .unwrap();

        assert_eq!(handle.documents()[0].display_name, "Invoice.pdf");
    }

    #[test]
    fn test_import_rejects_non_pdf_path() {
        let (_scratch, handle, source) = handle_with_pdf("notes.txt");

        let result = handle.import_document(source, None);

        assert!(matches!(result, Err(FfiError::InvalidPick { .. })));
        assert!(handle.documents().is_empty());
    }

    #[test]
    fn test_export_without_folder() {
        let (_scratch, handle, source) = handle_with_pdf("report.pdf");
        handle.import_document(source, None).unwrap();
        let id = handle.documents()[0].id.clone();

        let notice = handle.export_document(id).unwrap();

        assert_eq!(notice.kind, "error");
        assert_eq!(
            notice.body,
            "No folder selected. Please select a folder first."
        );
    }

    #[test]
    fn test_declined_folder_permission() {
        let (scratch, handle, _source) = handle_with_pdf("report.pdf");
        let folder = scratch.path().to_string_lossy().into_owned();

        let notice = handle.select_destination(false, Some(folder));

        assert_eq!(notice.kind, "permission_denied");
        assert!(handle.destination().is_none());
    }

    #[test]
    fn test_export_and_preview_round_trip() {
        let (scratch, handle, source) = handle_with_pdf("report.pdf");
        let exports = scratch.path().join("exports");
        fs::create_dir(&exports).unwrap();
        handle.import_document(source, None).unwrap();
        let id = handle.documents()[0].id.clone();

        let selected =
            handle.select_destination(true, Some(exports.to_string_lossy().into_owned()));
        let exported = handle.export_document(id.clone()).unwrap();
        let preview_notice = handle.load_preview(id).unwrap();

        assert_eq!(selected.kind, "success");
        assert_eq!(exported.kind, "success");
        assert!(preview_notice.is_none());
        assert_eq!(
            fs::read(exports.join("report.pdf")).unwrap(),
            b"%PDF-1.4\n%%EOF\n"
        );
        assert!(
            handle
                .preview_data_uri()
                .unwrap()
                .starts_with("data:application/pdf;base64,")
        );

        handle.close_preview();
        assert!(handle.preview_data_uri().is_none());
    }

    #[test]
    fn test_unknown_document_id() {
        let (_scratch, handle, _source) = handle_with_pdf("report.pdf");

        let result = handle.export_document("not-an-id".to_string());

        assert!(matches!(result, Err(FfiError::UnknownDocument { .. })));
    }

    #[test]
    fn test_resolve_import_name_free() {
        let result = resolve_import_name("report.pdf".to_string(), vec!["other.pdf".to_string()]);
        assert_eq!(result, "report.pdf");
    }

    #[test]
    fn test_resolve_import_name_taken() {
        let result = resolve_import_name("report.pdf".to_string(), vec!["report.pdf".to_string()]);
        assert_ne!(result, "report.pdf");
        assert!(result.ends_with(".pdf"));
        assert!(
            result
                .trim_end_matches(".pdf")
                .chars()
                .all(|c| c.is_ascii_digit())
        );
    }
}
