use crate::auth::use_api;
use crate::routes::Route;
use client::forms::RegisterForm;
use dioxus::prelude::*;
use shared_ui::{
    Alert, Button, Card, CardContent, CardDescription, CardHeader, CardTitle, Form, Input,
};
use std::collections::HashMap;

const REGISTER_ERROR: &str = "Registration failed. Email may already be in use.";

/// Account creation. The new account signs in separately.
#[component]
pub fn Register() -> Element {
    let api = use_api();
    let mut form = use_signal(RegisterForm::default);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    let handle_register = move |_: FormEvent| {
        let api = api.clone();
        async move {
            if loading() {
                return;
            }
            error_msg.set(None);

            let credentials = match form.read().to_request() {
                Ok(credentials) => credentials,
                Err(e) => {
                    field_errors.set(e.field_errors);
                    return;
                }
            };
            field_errors.set(HashMap::new());

            loading.set(true);
            match api.register(&credentials).await {
                Ok(user) => {
                    tracing::info!(email = %user.email, "Account registered");
                    navigator().push(Route::Login {});
                }
                Err(_) => error_msg.set(Some(REGISTER_ERROR.to_string())),
            }
            loading.set(false);
        }
    };

    let error_for = move |field: &str| field_errors.read().get(field).cloned();

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./auth.css") }

        div { class: "auth-page",
            Card {
                class: "auth-card",

                CardHeader {
                    CardTitle { "Create Account" }
                    CardDescription { "Join EVA Hospital Management System" }
                }

                CardContent {
                    Form {
                        onsubmit: handle_register,

                        div { class: "auth-fields",
                            if let Some(err) = error_msg() {
                                Alert { "{err}" }
                            }

                            Input {
                                label: "Email",
                                input_type: "email",
                                required: true,
                                value: form.read().email.clone(),
                                error: error_for("email"),
                                on_input: move |e: FormEvent| {
                                    form.write().email = e.value();
                                    field_errors.write().remove("email");
                                },
                            }

                            Input {
                                label: "Password",
                                input_type: "password",
                                required: true,
                                value: form.read().password.clone(),
                                error: error_for("password"),
                                on_input: move |e: FormEvent| {
                                    form.write().password = e.value();
                                    field_errors.write().remove("password");
                                },
                            }

                            Input {
                                label: "Confirm Password",
                                input_type: "password",
                                required: true,
                                value: form.read().confirm_password.clone(),
                                error: error_for("confirm_password"),
                                on_input: move |e: FormEvent| {
                                    form.write().confirm_password = e.value();
                                    field_errors.write().remove("confirm_password");
                                },
                            }

                            Button {
                                button_type: "submit",
                                class: "auth-submit",
                                disabled: loading(),
                                if loading() { "Creating Account..." } else { "Register" }
                            }
                        }
                    }

                    p { class: "auth-switch",
                        "Already have an account? "
                        Link { to: Route::Login {}, "Sign in here" }
                    }
                }
            }
        }
    }
}
