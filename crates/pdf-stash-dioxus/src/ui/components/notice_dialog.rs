use dioxus::prelude::*;
use pdf_stash_engine::{Notice, NoticeKind};

fn kind_class(kind: NoticeKind) -> &'static str {
    match kind {
        NoticeKind::Success => "success",
        NoticeKind::Error => "error",
        NoticeKind::PermissionDenied => "permission-denied",
    }
}

/// Blocking alert shown after an action until the user dismisses it
#[component]
pub fn NoticeDialog(notice: Notice, on_dismiss: EventHandler<()>) -> Element {
    let class = kind_class(notice.kind);

    rsx! {
        div {
            class: "modal-overlay",
            div {
                class: "modal notice {class}",
                role: "alertdialog",
                h2 { "{notice.title}" }
                p { "{notice.message}" }
                div {
                    class: "modal-buttons",
                    button {
                        class: "modal-btn submit",
                        onclick: move |_| on_dismiss.call(()),
                        "OK"
                    }
                }
            }
        }
    }
}
