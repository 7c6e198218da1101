use dioxus::prelude::*;

/// Inline viewer for the selected document.
///
/// The web view renders the PDF straight from the `data:` URI.
#[component]
pub fn PdfPreview(title: String, data_uri: String, on_close: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "pdf-preview",
            div {
                class: "pdf-preview-header",
                span { class: "pdf-preview-title", "PDF Preview: {title}" }
                button {
                    class: "modal-btn",
                    onclick: move |_| on_close.call(()),
                    "Close"
                }
            }
            iframe {
                class: "pdf-preview-frame",
                src: "{data_uri}",
                title: "{title}",
            }
        }
    }
}
