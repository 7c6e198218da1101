use super::DocumentItem;
use dioxus::prelude::*;
use pdf_stash_engine::ImportedDocument;
use uuid::Uuid;

/// Imported documents in import order, each with preview and download actions
#[component]
pub fn DocumentList(
    documents: Vec<ImportedDocument>,
    previewing: Option<Uuid>,
    on_preview: EventHandler<ImportedDocument>,
    on_download: EventHandler<ImportedDocument>,
) -> Element {
    if documents.is_empty() {
        return rsx! {
            p { class: "document-list empty", "No PDFs uploaded yet." }
        };
    }

    rsx! {
        div {
            class: "document-list",
            {documents.into_iter().map(|document| {
                let id = document.id();
                rsx! {
                    DocumentItem {
                        key: "{id}",
                        document,
                        is_previewing: previewing == Some(id),
                        on_preview: move |doc| on_preview.call(doc),
                        on_download: move |doc| on_download.call(doc),
                    }
                }
            })}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;
    use pdf_stash_engine::{PickedDocument, Session};
    use pretty_assertions::assert_eq;
    use std::sync::OnceLock;
    use tempfile::TempDir;

    /// Documents shared by the render roots below, which can't capture state
    fn imported() -> &'static (TempDir, Vec<ImportedDocument>) {
        static IMPORTED: OnceLock<(TempDir, Vec<ImportedDocument>)> = OnceLock::new();
        IMPORTED.get_or_init(|| {
            let scratch = tempfile::tempdir().unwrap();
            let mut session = Session::new(scratch.path().join("documents"));
            for name in ["first.pdf", "second.pdf"] {
                let source = scratch.path().join(name);
                std::fs::write(&source, b"%PDF-1.4\n%%EOF\n").unwrap();
                session.import_document(Some(PickedDocument::from_path(source).unwrap()));
            }
            let documents = session.documents().to_vec();
            (scratch, documents)
        })
    }

    fn list_root() -> Element {
        let documents = imported().1.clone();
        let previewing = Some(documents[1].id());
        rsx! {
            DocumentList {
                documents,
                previewing,
                on_preview: move |_| {},
                on_download: move |_| {},
            }
        }
    }

    fn empty_root() -> Element {
        rsx! {
            DocumentList {
                documents: Vec::new(),
                previewing: None,
                on_preview: move |_| {},
                on_download: move |_| {},
            }
        }
    }

    #[test]
    fn test_list_renders_documents_in_order() {
        let mut dom = VirtualDom::new(list_root);
        dom.rebuild_in_place();
        let html = render(&dom);

        let first = html.find("first.pdf").unwrap();
        let second = html.find("second.pdf").unwrap();
        assert!(first < second);
        assert_eq!(html.matches("Preview").count(), 2);
        assert_eq!(html.matches("Download").count(), 2);
    }

    #[test]
    fn test_list_marks_previewed_document() {
        let mut dom = VirtualDom::new(list_root);
        dom.rebuild_in_place();
        let html = render(&dom);

        assert_eq!(html.matches("document-item previewing").count(), 1);
        let marked = html.find("document-item previewing").unwrap();
        assert!(html.find("second.pdf").unwrap() > marked);
        assert!(html.find("first.pdf").unwrap() < marked);
    }

    #[test]
    fn test_empty_list_shows_placeholder() {
        let mut dom = VirtualDom::new(empty_root);
        dom.rebuild_in_place();
        let html = render(&dom);

        assert!(html.contains("No PDFs uploaded yet."));
    }
}
