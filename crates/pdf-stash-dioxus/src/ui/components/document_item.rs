use dioxus::prelude::*;
use pdf_stash_engine::ImportedDocument;

#[component]
pub fn DocumentItem(
    document: ImportedDocument,
    is_previewing: bool,
    on_preview: EventHandler<ImportedDocument>,
    on_download: EventHandler<ImportedDocument>,
) -> Element {
    let classes = if is_previewing {
        "document-item previewing"
    } else {
        "document-item"
    };
    let name = document.display_name().to_string();
    let preview_document = document.clone();

    rsx! {
        div {
            class: "{classes}",
            span { class: "document-name", "{name}" }

            button {
                class: "document-link preview",
                onclick: move |_| on_preview.call(preview_document.clone()),
                "Preview"
            }

            button {
                class: "document-link download",
                onclick: move |_| on_download.call(document.clone()),
                "Download"
            }
        }
    }
}
