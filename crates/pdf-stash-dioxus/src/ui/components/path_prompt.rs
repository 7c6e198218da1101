use dioxus::prelude::*;
use std::path::PathBuf;

/// Modal asking the user for a path, used as the file and folder picker.
///
/// `error` comes from the owner after it rejected a submitted path; an empty
/// submission is caught here.
#[component]
pub fn PathPrompt(
    title: String,
    description: String,
    confirm_label: String,
    error: Option<String>,
    on_submit: EventHandler<PathBuf>,
    on_cancel: EventHandler<()>,
) -> Element {
    let mut path_input = use_signal(String::new);
    let mut empty_error = use_signal(|| false);

    let handle_submit = move |_| {
        let path_str = path_input.read().trim().to_string();
        if path_str.is_empty() {
            empty_error.set(true);
            return;
        }
        empty_error.set(false);
        on_submit.call(PathBuf::from(path_str));
    };

    let shown_error = if *empty_error.read() {
        Some("Please enter a path".to_string())
    } else {
        error
    };

    rsx! {
        div {
            class: "modal-overlay",
            div {
                class: "modal prompt",
                h2 { "{title}" }
                p { "{description}" }

                div {
                    class: "prompt-form",
                    input {
                        r#type: "text",
                        value: "{path_input}",
                        oninput: move |evt| path_input.set(evt.value()),
                    }
                }

                if let Some(message) = shown_error {
                    p { class: "prompt-error", "{message}" }
                }

                div {
                    class: "modal-buttons",
                    button {
                        class: "modal-btn cancel",
                        onclick: move |_| on_cancel.call(()),
                        "Cancel"
                    }
                    button {
                        class: "modal-btn submit",
                        onclick: handle_submit,
                        "{confirm_label}"
                    }
                }
            }
        }
    }
}
