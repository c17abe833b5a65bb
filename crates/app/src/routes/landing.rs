use crate::routes::Route;
use dioxus::prelude::*;
use shared_ui::{Button, ButtonVariant, Card, CardContent, CardHeader, CardTitle};

const HIGHLIGHTS: &[(&str, &str)] = &[
    (
        "Healthcare as a Service",
        "We provide top-notch healthcare services tailored to your needs.",
    ),
    (
        "24/7 Support",
        "Our medical team is available around the clock to assist you.",
    ),
    (
        "Advanced Technology",
        "We utilize the latest medical technology to ensure the best care.",
    ),
];

/// Public landing page.
#[component]
pub fn Landing() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./landing.css") }

        section { class: "landing-hero",
            h1 { class: "landing-title", "Welcome to EVA Hospital" }
            p { class: "landing-tagline", "Your health is our priority." }
            div { class: "landing-actions",
                Button {
                    onclick: move |_| { navigator().push(Route::Login {}); },
                    "Login"
                }
                Button {
                    variant: ButtonVariant::Outline,
                    onclick: move |_| { navigator().push(Route::Register {}); },
                    "Register"
                }
            }
        }

        section { class: "landing-highlights",
            for (title, body) in HIGHLIGHTS.iter() {
                Card { key: "{title}",
                    CardHeader {
                        CardTitle { "{title}" }
                    }
                    CardContent {
                        p { "{body}" }
                    }
                }
            }
        }
    }
}
