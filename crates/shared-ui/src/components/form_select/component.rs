use dioxus::prelude::*;

use crate::FieldError;

/// Native `<select>` with a label and an optional inline error.
///
/// Children are `option { value: "...", "Label" }` elements.
#[component]
pub fn FormSelect(
    #[props(default)] value: String,
    #[props(default)] onchange: Option<EventHandler<Event<FormData>>>,
    #[props(default)] label: String,
    #[props(default = false)] disabled: bool,
    #[props(default)] error: Option<String>,
    children: Element,
) -> Element {
    let aria_invalid = if error.as_ref().is_some_and(|e| !e.is_empty()) {
        "true"
    } else {
        "false"
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "form-select-wrapper",
            if !label.is_empty() {
                label { class: "form-select-label", "{label}" }
            }
            select {
                class: "form-select",
                "aria-invalid": aria_invalid,
                value: value,
                disabled: disabled,
                onchange: move |evt| {
                    if let Some(handler) = &onchange {
                        handler.call(evt);
                    }
                },
                {children}
            }
            FieldError { message: error }
        }
    }
}
