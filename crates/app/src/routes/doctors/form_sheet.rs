use client::forms::{NewDoctorForm, UpdateDoctorForm};
use client::ResourceKey;
use dioxus::prelude::*;
use shared_types::DoctorSummary;
use shared_ui::{
    Alert, Button, ButtonVariant, Form, Input, Sheet, SheetClose, SheetContent, SheetDescription,
    SheetFooter, SheetHeader, SheetTitle,
};
use std::collections::HashMap;

use crate::auth::use_api;
use crate::fetch::{invalidate, use_cache};

const CREATE_ERROR: &str = "Failed to create doctor. Please check your inputs and try again.";
const UPDATE_ERROR: &str = "Failed to update doctor. Please check your inputs and try again.";

#[component]
pub fn NewDoctorSheet(open: bool, on_close: EventHandler<()>) -> Element {
    let api = use_api();
    let cache = use_cache();

    let mut form = use_signal(NewDoctorForm::default);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut in_flight = use_signal(|| false);

    let mut reset = move || {
        form.set(NewDoctorForm::default());
        field_errors.set(HashMap::new());
        error_msg.set(None);
    };

    let mut close = move |_: ()| {
        if in_flight() {
            return;
        }
        reset();
        on_close.call(());
    };

    let mut edit = move |field: &'static str, value: String, apply: fn(&mut NewDoctorForm, String)| {
        apply(&mut form.write(), value);
        field_errors.write().remove(field);
    };

    let handle_save = move |_: FormEvent| {
        if in_flight() {
            return;
        }
        let payload = match form.read().to_request() {
            Ok(payload) => payload,
            Err(e) => {
                field_errors.set(e.field_errors);
                return;
            }
        };
        field_errors.set(HashMap::new());
        error_msg.set(None);

        let api = api.clone();
        spawn(async move {
            in_flight.set(true);
            let result = api.create_doctor(&payload).await;
            in_flight.set(false);
            match result {
                Ok(()) => {
                    invalidate(cache, &[ResourceKey::Doctors]);
                    reset();
                    on_close.call(());
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Doctor create failed");
                    error_msg.set(Some(CREATE_ERROR.to_string()));
                }
            }
        });
    };

    let error_for = move |field: &str| field_errors.read().get(field).cloned();

    rsx! {
        Sheet {
            open,
            on_close: close,
            SheetHeader {
                SheetTitle { "Add New Doctor" }
                SheetDescription { "Add a doctor to the hospital staff." }
                SheetClose { on_close: close }
            }

            Form {
                onsubmit: handle_save,

                SheetContent {
                    div { class: "sheet-form",
                        if let Some(err) = error_msg() {
                            Alert { "{err}" }
                        }

                        div { class: "form-row",
                            Input {
                                label: "First Name",
                                value: form.read().first_name.clone(),
                                error: error_for("first_name"),
                                on_input: move |e: FormEvent| edit("first_name", e.value(), |f, v| f.first_name = v),
                            }
                            Input {
                                label: "Last Name",
                                value: form.read().last_name.clone(),
                                error: error_for("last_name"),
                                on_input: move |e: FormEvent| edit("last_name", e.value(), |f, v| f.last_name = v),
                            }
                        }

                        div { class: "form-row",
                            Input {
                                label: "Specialization",
                                value: form.read().specialization.clone(),
                                error: error_for("specialization"),
                                on_input: move |e: FormEvent| edit("specialization", e.value(), |f, v| f.specialization = v),
                            }
                            Input {
                                label: "Department",
                                value: form.read().department.clone(),
                                error: error_for("department"),
                                on_input: move |e: FormEvent| edit("department", e.value(), |f, v| f.department = v),
                            }
                        }

                        div { class: "form-row",
                            Input {
                                label: "Phone Number",
                                input_type: "tel",
                                value: form.read().phone.clone(),
                                error: error_for("phone"),
                                on_input: move |e: FormEvent| edit("phone", e.value(), |f, v| f.phone = v),
                            }
                            Input {
                                label: "Email",
                                input_type: "email",
                                value: form.read().email.clone(),
                                error: error_for("email"),
                                on_input: move |e: FormEvent| edit("email", e.value(), |f, v| f.email = v),
                            }
                        }
                    }
                }

                SheetFooter {
                    Button {
                        variant: ButtonVariant::Outline,
                        disabled: in_flight(),
                        onclick: move |_| close(()),
                        "Cancel"
                    }
                    Button {
                        button_type: "submit",
                        disabled: in_flight(),
                        if in_flight() { "Adding..." } else { "Add Doctor" }
                    }
                }
            }
        }
    }
}

#[component]
pub fn UpdateDoctorSheet(doctor: DoctorSummary, on_close: EventHandler<()>) -> Element {
    let api = use_api();
    let cache = use_cache();

    let id = doctor.id;
    let mut form = use_signal(|| UpdateDoctorForm::from_doctor(&doctor));
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut in_flight = use_signal(|| false);

    let close = move |_: ()| {
        if !in_flight() {
            on_close.call(());
        }
    };

    let mut edit = move |field: &'static str, value: String, apply: fn(&mut UpdateDoctorForm, String)| {
        apply(&mut form.write(), value);
        field_errors.write().remove(field);
    };

    let handle_save = move |_: FormEvent| {
        if in_flight() {
            return;
        }
        let payload = match form.read().to_request() {
            Ok(payload) => payload,
            Err(e) => {
                field_errors.set(e.field_errors);
                return;
            }
        };
        field_errors.set(HashMap::new());
        error_msg.set(None);

        let api = api.clone();
        spawn(async move {
            in_flight.set(true);
            let result = api.update_doctor(id, &payload).await;
            in_flight.set(false);
            match result {
                Ok(()) => {
                    invalidate(cache, &[ResourceKey::Doctors, ResourceKey::Doctor(id)]);
                    on_close.call(());
                }
                Err(e) => {
                    tracing::warn!(doctor_id = id, error = %e, "Doctor update failed");
                    error_msg.set(Some(UPDATE_ERROR.to_string()));
                }
            }
        });
    };

    let error_for = move |field: &str| field_errors.read().get(field).cloned();

    rsx! {
        Sheet {
            open: true,
            on_close: close,
            SheetHeader {
                SheetTitle { "Update Doctor Information" }
                SheetDescription { "{doctor.display_name()}" }
                SheetClose { on_close: close }
            }

            Form {
                onsubmit: handle_save,

                SheetContent {
                    div { class: "sheet-form",
                        if let Some(err) = error_msg() {
                            Alert { "{err}" }
                        }

                        div { class: "form-row",
                            Input {
                                label: "First Name",
                                value: form.read().first_name.clone(),
                                error: error_for("first_name"),
                                on_input: move |e: FormEvent| edit("first_name", e.value(), |f, v| f.first_name = v),
                            }
                            Input {
                                label: "Last Name",
                                value: form.read().last_name.clone(),
                                error: error_for("last_name"),
                                on_input: move |e: FormEvent| edit("last_name", e.value(), |f, v| f.last_name = v),
                            }
                        }

                        div { class: "form-row",
                            Input {
                                label: "Specialization",
                                value: form.read().specialization.clone(),
                                error: error_for("specialization"),
                                on_input: move |e: FormEvent| edit("specialization", e.value(), |f, v| f.specialization = v),
                            }
                            Input {
                                label: "Department",
                                value: form.read().department.clone(),
                                error: error_for("department"),
                                on_input: move |e: FormEvent| edit("department", e.value(), |f, v| f.department = v),
                            }
                        }

                        Input {
                            label: "Phone Number",
                            input_type: "tel",
                            value: form.read().phone.clone(),
                            error: error_for("phone"),
                            on_input: move |e: FormEvent| edit("phone", e.value(), |f, v| f.phone = v),
                        }
                    }
                }

                SheetFooter {
                    Button {
                        variant: ButtonVariant::Outline,
                        disabled: in_flight(),
                        onclick: move |_| close(()),
                        "Cancel"
                    }
                    Button {
                        button_type: "submit",
                        disabled: in_flight(),
                        if in_flight() { "Updating..." } else { "Update Doctor" }
                    }
                }
            }
        }
    }
}
