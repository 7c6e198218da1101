//! Screen-lifetime state and the user actions that change it.
//!
//! Each action is one sequential step: it either succeeds and updates the
//! session, or fails and leaves the session as it was. Either way the caller
//! gets back what to tell the user. Nothing here is persisted.

mod error;
mod notice;

pub use error::ActionError;
pub use notice::{Action, Notice, NoticeKind};

use crate::io;
use crate::models::{FolderHandle, ImportedDocument, PickedDocument};
use crate::preview::Preview;
use std::path::{Path, PathBuf};

/// Answer from the platform when asking for access to a folder
#[derive(Debug, Clone, PartialEq)]
pub enum PermissionResponse {
    Granted(PathBuf),
    Denied,
}

#[derive(Debug, Clone)]
pub struct Session {
    documents_root: PathBuf,
    documents: Vec<ImportedDocument>,
    preview: Option<Preview>,
    destination: Option<FolderHandle>,
}

impl Session {
    pub fn new(documents_root: impl Into<PathBuf>) -> Self {
        Self {
            documents_root: documents_root.into(),
            documents: Vec::new(),
            preview: None,
            destination: None,
        }
    }

    pub fn documents_root(&self) -> &Path {
        &self.documents_root
    }

    /// Documents imported so far, in import order
    pub fn documents(&self) -> &[ImportedDocument] {
        &self.documents
    }

    pub fn preview(&self) -> Option<&Preview> {
        self.preview.as_ref()
    }

    pub fn destination(&self) -> Option<&FolderHandle> {
        self.destination.as_ref()
    }

    /// Handle the outcome of the document picker.
    ///
    /// `None` means the picker was cancelled, which is not reported.
    pub fn import_document(&mut self, picked: Option<PickedDocument>) -> Option<Notice> {
        match picked {
            Some(picked) => Some(self.import_picked(picked)),
            None => {
                log::info!("Document pick cancelled");
                None
            }
        }
    }

    /// Copy a picked document into storage and add it to the list.
    pub fn import_picked(&mut self, picked: PickedDocument) -> Notice {
        log::info!(
            "Importing {} from {}",
            picked.display_name(),
            picked.source().display()
        );
        let outcome = io::copy_into_storage(
            picked.source(),
            &self.documents_root,
            picked.display_name(),
        )
        .map_err(ActionError::from)
        .map(|location| {
            log::info!(
                "Stored {} as {}",
                picked.display_name(),
                location.file_name()
            );
            self.documents
                .push(ImportedDocument::new(picked.display_name(), location));
        });

        report(Action::Import, outcome)
    }

    /// Remember the folder exports go to.
    ///
    /// A declined request keeps whatever folder was selected before.
    pub fn select_destination(&mut self, response: PermissionResponse) -> Notice {
        let outcome = match response {
            PermissionResponse::Denied => Err(ActionError::PermissionDenied),
            PermissionResponse::Granted(path) => io::validate_destination_dir(&path)
                .map_err(ActionError::from)
                .map(|()| {
                    log::info!("Destination folder set to {}", path.display());
                    self.destination = Some(FolderHandle::new(path));
                }),
        };

        report(Action::SelectDestination, outcome)
    }

    /// Write a copy of `document` into the destination folder.
    ///
    /// Without a destination nothing is read or written. The transfer goes
    /// through an in-memory base64 copy of the whole file.
    pub fn export_document(&self, document: &ImportedDocument) -> Notice {
        report(Action::Export, self.try_export(document).map(|_| ()))
    }

    fn try_export(&self, document: &ImportedDocument) -> Result<PathBuf, ActionError> {
        let folder = self
            .destination
            .as_ref()
            .ok_or(ActionError::NoDestinationSelected)?;

        let content = io::read_base64(document.location())?;
        let target = io::create_export_file(folder, document.display_name())?;
        io::write_base64(&target, &content)?;

        log::info!(
            "Exported {} to {}",
            document.display_name(),
            target.display()
        );
        Ok(target)
    }

    /// Show `document` in the preview pane.
    ///
    /// Only failures produce a notice; on success the preview itself is
    /// the feedback.
    pub fn load_preview(&mut self, document: &ImportedDocument) -> Option<Notice> {
        match Preview::load(document) {
            Ok(preview) => {
                log::info!("Previewing {}", document.display_name());
                self.preview = Some(preview);
                None
            }
            Err(e) => Some(report(Action::Preview, Err(ActionError::from(e)))),
        }
    }

    pub fn close_preview(&mut self) {
        self.preview = None;
    }
}

fn report(action: Action, outcome: Result<(), ActionError>) -> Notice {
    match outcome {
        Ok(()) => Notice::success(action),
        Err(e) => {
            log::error!("{action:?} failed: {e}");
            Notice::failure(action, &e)
        }
    }
}
