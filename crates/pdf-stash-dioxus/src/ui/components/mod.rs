mod document_item;
mod document_list;
mod error_screen;
mod notice_dialog;
mod path_prompt;
mod pdf_preview;

pub use document_item::DocumentItem;
pub use document_list::DocumentList;
pub use error_screen::ErrorScreen;
pub use notice_dialog::NoticeDialog;
pub use path_prompt::PathPrompt;
pub use pdf_preview::PdfPreview;
