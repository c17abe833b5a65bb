use client::forms::{NewPatientForm, UpdatePatientForm};
use client::{FetchState, ResourceKey};
use dioxus::prelude::*;
use shared_types::{DoctorSummary, Patient, SELECTABLE_SEXES};
use shared_ui::{
    Alert, Button, ButtonVariant, Form, FormSelect, Input, Sheet, SheetClose, SheetContent,
    SheetDescription, SheetFooter, SheetHeader, SheetTitle, Textarea,
};
use std::collections::HashMap;

use crate::auth::use_api;
use crate::fetch::{invalidate, use_cache, use_cached};

const CREATE_ERROR: &str = "Failed to create patient. Please check your inputs and try again.";
const UPDATE_ERROR: &str = "Failed to update patient. Please check your inputs and try again.";
const ALLERGIES_HELPER: &str = "Separate multiple allergies with commas (e.g., Penicillin, Peanuts)";

/// Registration form for a new patient.
#[component]
pub fn NewPatientSheet(open: bool, on_close: EventHandler<()>) -> Element {
    let api = use_api();
    let cache = use_cache();

    let mut form = use_signal(NewPatientForm::default);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut in_flight = use_signal(|| false);

    let mut reset = move || {
        form.set(NewPatientForm::default());
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

    let mut edit = move |field: &'static str, value: String, apply: fn(&mut NewPatientForm, String)| {
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
            match api.create_patient(&payload).await {
                Ok(()) => {
                    invalidate(cache, &[ResourceKey::Patients]);
                    in_flight.set(false);
                    reset();
                    on_close.call(());
                }
                Err(_) => {
                    error_msg.set(Some(CREATE_ERROR.to_string()));
                    in_flight.set(false);
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
                SheetTitle { "Add New Patient" }
                SheetDescription { "Register a patient with the hospital." }
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
                                label: "Date of Birth",
                                input_type: "date",
                                value: form.read().date_of_birth.clone(),
                                error: error_for("date_of_birth"),
                                on_input: move |e: FormEvent| edit("date_of_birth", e.value(), |f, v| f.date_of_birth = v),
                            }
                            FormSelect {
                                label: "Biological Sex",
                                value: form.read().biological_sex.clone(),
                                error: error_for("biological_sex"),
                                onchange: move |e: Event<FormData>| edit("biological_sex", e.value(), |f, v| f.biological_sex = v),
                                option { value: "", "Select..." }
                                for sex in SELECTABLE_SEXES {
                                    option { value: sex.as_str(), "{sex.display_name()}" }
                                }
                            }
                        }

                        Input {
                            label: "Phone Number",
                            input_type: "tel",
                            value: form.read().phone.clone(),
                            error: error_for("phone"),
                            on_input: move |e: FormEvent| edit("phone", e.value(), |f, v| f.phone = v),
                        }

                        Input {
                            label: "Address",
                            value: form.read().address.clone(),
                            error: error_for("address"),
                            on_input: move |e: FormEvent| edit("address", e.value(), |f, v| f.address = v),
                        }

                        Textarea {
                            label: "Allergies",
                            placeholder: "Penicillin, Peanuts, Latex",
                            helper: ALLERGIES_HELPER,
                            value: form.read().allergies.clone(),
                            error: error_for("allergies"),
                            on_input: move |e: FormEvent| edit("allergies", e.value(), |f, v| f.allergies = v),
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
                        if in_flight() { "Adding..." } else { "Add Patient" }
                    }
                }
            }
        }
    }
}

/// Edit form for an existing patient, including primary doctor assignment.
#[component]
pub fn UpdatePatientSheet(patient: Patient, on_close: EventHandler<()>) -> Element {
    let api = use_api();
    let cache = use_cache();
    let doctors = use_cached::<Vec<DoctorSummary>>(ResourceKey::Doctors);

    let id = patient.id;
    let mut form = use_signal(|| UpdatePatientForm::from_patient(&patient));
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut in_flight = use_signal(|| false);

    let close = move |_: ()| {
        if !in_flight() {
            on_close.call(());
        }
    };

    let mut edit = move |field: &'static str, value: String, apply: fn(&mut UpdatePatientForm, String)| {
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
            let result = api.update_patient(id, &payload).await;
            in_flight.set(false);
            match result {
                Ok(()) => {
                    invalidate(cache, &[ResourceKey::Patients, ResourceKey::Patient(id)]);
                    on_close.call(());
                }
                Err(_) => error_msg.set(Some(UPDATE_ERROR.to_string())),
            }
        });
    };

    let error_for = move |field: &str| field_errors.read().get(field).cloned();

    rsx! {
        Sheet {
            open: true,
            on_close: close,
            SheetHeader {
                SheetTitle { "Update Patient Information" }
                SheetDescription { "{patient.full_name()}" }
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
                                label: "Phone Number",
                                input_type: "tel",
                                value: form.read().phone_number.clone(),
                                error: error_for("phone_number"),
                                on_input: move |e: FormEvent| edit("phone_number", e.value(), |f, v| f.phone_number = v),
                            }
                            FormSelect {
                                label: "Primary Doctor",
                                value: form.read().doctor_id.clone(),
                                disabled: doctors.is_loading(),
                                error: error_for("doctor_id")
                                    .or_else(|| doctors.error().map(str::to_string)),
                                onchange: move |e: Event<FormData>| edit("doctor_id", e.value(), |f, v| f.doctor_id = v),
                                option { value: "0", "Select a doctor..." }
                                if let FetchState::Ready(list) = &doctors {
                                    for doctor in list.iter() {
                                        option {
                                            key: "{doctor.id}",
                                            value: "{doctor.id}",
                                            "{doctor.display_name()} - {doctor.specialization}"
                                        }
                                    }
                                }
                            }
                        }

                        Input {
                            label: "Address",
                            value: form.read().address.clone(),
                            error: error_for("address"),
                            on_input: move |e: FormEvent| edit("address", e.value(), |f, v| f.address = v),
                        }

                        Textarea {
                            label: "Allergies",
                            placeholder: "Penicillin, Peanuts, Latex",
                            helper: ALLERGIES_HELPER,
                            value: form.read().allergies.clone(),
                            error: error_for("allergies"),
                            on_input: move |e: FormEvent| edit("allergies", e.value(), |f, v| f.allergies = v),
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
                        if in_flight() { "Updating..." } else { "Update Patient" }
                    }
                }
            }
        }
    }
}
