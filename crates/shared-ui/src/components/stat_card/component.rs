use dioxus::prelude::*;

/// Accent gradient behind a stat card.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum StatTone {
    #[default]
    Violet,
    Rose,
    Sky,
    Emerald,
    Amber,
}

impl StatTone {
    fn class(&self) -> &'static str {
        match self {
            StatTone::Violet => "violet",
            StatTone::Rose => "rose",
            StatTone::Sky => "sky",
            StatTone::Emerald => "emerald",
            StatTone::Amber => "amber",
        }
    }
}

/// A headline number with a label, an optional icon and an optional caption.
#[component]
pub fn StatCard(
    label: String,
    value: String,
    #[props(default)] tone: StatTone,
    #[props(default)] caption: Option<String>,
    #[props(default)] icon: Option<Element>,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "stat-card", "data-tone": tone.class(),
            div { class: "stat-card-label",
                if let Some(icon) = icon {
                    span { class: "stat-card-icon", {icon} }
                }
                span { "{label}" }
            }
            div { class: "stat-card-value", "{value}" }
            if let Some(caption) = caption {
                div { class: "stat-card-caption", "{caption}" }
            }
        }
    }
}

/// Responsive row of stat cards.
#[component]
pub fn StatGrid(children: Element) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "stat-grid", {children} }
    }
}
