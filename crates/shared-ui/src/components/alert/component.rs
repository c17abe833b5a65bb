use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AlertSeverity {
    #[default]
    Error,
    Info,
    Success,
}

impl AlertSeverity {
    fn class(&self) -> &'static str {
        match self {
            AlertSeverity::Error => "error",
            AlertSeverity::Info => "info",
            AlertSeverity::Success => "success",
        }
    }
}

/// Static message banner. Error banners have no retry action.
#[component]
pub fn Alert(
    #[props(default)] severity: AlertSeverity,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let base = vec![
        Attribute::new("class", "alert", None, false),
        Attribute::new("data-severity", severity.class(), None, false),
    ];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);
    let role = if severity == AlertSeverity::Error { "alert" } else { "status" };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div {
            role: role,
            ..merged,
            {children}
        }
    }
}
