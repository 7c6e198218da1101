//! Inline preview content for stored documents.
//!
//! The preview surface is an embedded web view, so a document is handed over
//! as a `data:` URI carrying the whole file in base64.

use crate::io::{self, IoError};
use crate::models::ImportedDocument;
use uuid::Uuid;

pub const PDF_MIME_TYPE: &str = "application/pdf";

/// The document currently shown in the preview pane
#[derive(Debug, Clone, PartialEq)]
pub struct Preview {
    document_id: Uuid,
    data_uri: String,
}

impl Preview {
    /// Encode a stored PDF for the preview surface
    pub fn load(document: &ImportedDocument) -> Result<Self, IoError> {
        let content = io::read_base64(document.location())?;
        Ok(Self {
            document_id: document.id(),
            data_uri: data_uri(PDF_MIME_TYPE, &content),
        })
    }

    pub fn document_id(&self) -> Uuid {
        self.document_id
    }

    pub fn data_uri(&self) -> &str {
        &self.data_uri
    }
}

pub fn data_uri(mime_type: &str, base64_content: &str) -> String {
    format!("data:{mime_type};base64,{base64_content}")
}
