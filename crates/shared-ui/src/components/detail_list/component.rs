use dioxus::prelude::*;

/// Vertical list of label/value rows for a detail view.
#[component]
pub fn DetailList(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "detail-list", {children} }
    }
}

/// One label/value row inside a `DetailList`.
///
/// Pass `value` for plain text, or children for rich content such as badges.
#[component]
pub fn DetailItem(
    label: &'static str,
    #[props(default)] value: String,
    #[props(default)] children: Element,
) -> Element {
    let has_children = children != Ok(VNode::placeholder());

    rsx! {
        div { class: "detail-item",
            span { class: "detail-item-label", "{label}" }
            span { class: "detail-item-value",
                if has_children {
                    {children}
                } else if value.is_empty() {
                    span { class: "detail-item-none", "Not provided" }
                } else {
                    span { "{value}" }
                }
            }
        }
    }
}

/// Responsive grid of cards for a detail page.
#[component]
pub fn DetailGrid(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "detail-grid", {children} }
    }
}
