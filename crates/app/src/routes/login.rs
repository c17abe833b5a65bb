use crate::auth::use_auth;
use crate::routes::Route;
use client::credential::landing_route_for;
use client::forms::LoginForm;
use dioxus::prelude::*;
use shared_ui::{
    Alert, Button, Card, CardContent, CardDescription, CardHeader, CardTitle, Form, Input,
};
use std::collections::HashMap;

const LOGIN_ERROR: &str = "Invalid email or password. Please try again.";

/// Email/password sign-in. On success the credential is stored and the user
/// lands on the dashboard its role claim names.
#[component]
pub fn Login() -> Element {
    let auth = use_auth();
    let mut form = use_signal(LoginForm::default);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut loading = use_signal(|| false);

    // Already signed in: skip the form.
    let session = auth.session().clone();
    use_effect(move || {
        if let Some(token) = session.credential() {
            navigator().replace(Route::from_path(landing_route_for(&token)));
        }
    });

    let handle_login = move |_: FormEvent| {
        let mut auth = auth.clone();
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
            match auth.api().login(&credentials).await {
                Ok(token) => match auth.sign_in(&token) {
                    Ok(path) => {
                        navigator().push(Route::from_path(path));
                    }
                    Err(e) => error_msg.set(Some(e.message)),
                },
                Err(_) => error_msg.set(Some(LOGIN_ERROR.to_string())),
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
                    CardTitle { "Welcome Back" }
                    CardDescription { "Sign in to access your account" }
                }

                CardContent {
                    Form {
                        onsubmit: handle_login,

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

                            Button {
                                button_type: "submit",
                                class: "auth-submit",
                                disabled: loading(),
                                if loading() { "Signing In..." } else { "Sign In" }
                            }
                        }
                    }

                    p { class: "auth-switch",
                        "Don't have an account? "
                        Link { to: Route::Register {}, "Register here" }
                    }
                }
            }
        }
    }
}
