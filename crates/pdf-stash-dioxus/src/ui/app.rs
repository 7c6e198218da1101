use crate::platform;
use dioxus::prelude::*;
use pdf_stash_engine::{ImportedDocument, Notice, PermissionResponse, PickedDocument, Session};
use std::path::PathBuf;

const APP_CSS: &str = include_str!("../assets/app.css");

/// Which picker the path prompt is standing in for
#[derive(Clone, Copy, PartialEq, Debug)]
enum PromptMode {
    Document,
    Folder,
}

impl PromptMode {
    fn title(self) -> &'static str {
        match self {
            PromptMode::Document => "Upload PDF",
            PromptMode::Folder => "Select Folder for Downloads",
        }
    }

    fn description(self) -> &'static str {
        match self {
            PromptMode::Document => "Enter the path of the PDF file to add.",
            PromptMode::Folder => "Enter the path of the folder downloads should be saved to.",
        }
    }

    fn confirm_label(self) -> &'static str {
        match self {
            PromptMode::Document => "Upload",
            PromptMode::Folder => "Use this folder",
        }
    }
}

#[component]
pub fn App(documents_path: PathBuf) -> Element {
    let mut session = use_signal(|| Session::new(documents_path.clone()));
    let mut notice = use_signal(|| None::<Notice>);
    let mut prompt = use_signal(|| None::<PromptMode>);
    let mut prompt_error = use_signal(|| None::<String>);

    let mut open_prompt = move |mode: PromptMode| {
        prompt_error.set(None);
        prompt.set(Some(mode));
    };

    let handle_prompt_submit = move |path: PathBuf| {
        let Some(mode) = *prompt.read() else {
            return;
        };
        match mode {
            PromptMode::Document => match PickedDocument::from_path(path) {
                Ok(picked) => {
                    prompt.set(None);
                    let result = session.write().import_document(Some(picked));
                    notice.set(result);
                }
                Err(e) => {
                    log::info!("Rejected picked file: {e}");
                    prompt_error.set(Some(e.to_string()));
                }
            },
            PromptMode::Folder => {
                prompt.set(None);
                let response = platform::request_folder_access(path);
                let result = session.write().select_destination(response);
                notice.set(Some(result));
            }
        }
    };

    // Backing out of the folder picker counts as refusing access
    let handle_prompt_cancel = move |_: ()| {
        let Some(mode) = prompt.take() else {
            return;
        };
        match mode {
            PromptMode::Document => {
                session.write().import_document(None);
            }
            PromptMode::Folder => {
                let result = session
                    .write()
                    .select_destination(PermissionResponse::Denied);
                notice.set(Some(result));
            }
        }
    };

    let handle_preview = move |document: ImportedDocument| {
        let result = session.write().load_preview(&document);
        if result.is_some() {
            notice.set(result);
        }
    };

    let handle_download = move |document: ImportedDocument| {
        let result = session.read().export_document(&document);
        notice.set(Some(result));
    };

    let destination = session.read().destination().map(|folder| folder.display_name());
    let documents = session.read().documents().to_vec();
    let preview = session.read().preview().cloned();
    let preview_title = preview.as_ref().and_then(|current| {
        documents
            .iter()
            .find(|doc| doc.id() == current.document_id())
            .map(|doc| doc.display_name().to_string())
    });

    rsx! {
        style { {APP_CSS} }
        div {
            class: "app-container",
            div {
                class: "actions",
                button {
                    class: "action-btn",
                    onclick: move |_| open_prompt(PromptMode::Folder),
                    "Select Folder for Downloads"
                }
                button {
                    class: "action-btn",
                    onclick: move |_| open_prompt(PromptMode::Document),
                    "Upload PDF"
                }
            }

            if let Some(folder_name) = destination {
                p { class: "destination", "Saving to: {folder_name}" }
            }

            super::components::DocumentList {
                previewing: preview.as_ref().map(|current| current.document_id()),
                documents,
                on_preview: handle_preview,
                on_download: handle_download,
            }

            if let Some(current) = preview {
                super::components::PdfPreview {
                    title: preview_title.unwrap_or_default(),
                    data_uri: current.data_uri().to_string(),
                    on_close: move |_| session.write().close_preview(),
                }
            }

            if let Some(mode) = *prompt.read() {
                super::components::PathPrompt {
                    key: "{mode:?}",
                    title: mode.title().to_string(),
                    description: mode.description().to_string(),
                    confirm_label: mode.confirm_label().to_string(),
                    error: prompt_error.read().clone(),
                    on_submit: handle_prompt_submit,
                    on_cancel: handle_prompt_cancel,
                }
            }

            if let Some(current) = notice.read().clone() {
                super::components::NoticeDialog {
                    notice: current,
                    on_dismiss: move |_| notice.set(None),
                }
            }
        }
    }
}
