use client::forms::NewAppointmentForm;
use client::ResourceKey;
use dioxus::prelude::*;
use shared_types::{DoctorSummary, Patient};
use shared_ui::{
    Alert, Button, ButtonVariant, Form, FormSelect, Input, Sheet, SheetClose, SheetContent,
    SheetDescription, SheetFooter, SheetHeader, SheetTitle,
};
use std::collections::HashMap;
use std::sync::Arc;

use crate::auth::use_api;
use crate::fetch::{invalidate, use_cache};

const CREATE_ERROR: &str = "Failed to create appointment. Please try again.";

/// Booking form. The caller supplies the patient and doctor lists so the
/// selects never render half-loaded.
#[component]
pub fn NewAppointmentSheet(
    open: bool,
    patients: Arc<Vec<Patient>>,
    doctors: Arc<Vec<DoctorSummary>>,
    on_close: EventHandler<()>,
) -> Element {
    let api = use_api();
    let cache = use_cache();

    let mut form = use_signal(NewAppointmentForm::default);
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut in_flight = use_signal(|| false);

    let mut reset = move || {
        form.set(NewAppointmentForm::default());
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

    let mut edit = move |field: &'static str, value: String, apply: fn(&mut NewAppointmentForm, String)| {
        apply(&mut form.write(), value);
        field_errors.write().remove(field);
    };

    let handle_save = move |_: FormEvent| {
        if in_flight() {
            return;
        }
        // An unselected patient or doctor stops here, before any request.
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
            let result = api.create_appointment(&payload).await;
            in_flight.set(false);
            match result {
                Ok(()) => {
                    invalidate(cache, &[ResourceKey::Appointments]);
                    reset();
                    on_close.call(());
                }
                Err(e) => {
                    tracing::warn!(error = %e, "Appointment create failed");
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
                SheetTitle { "Schedule New Appointment" }
                SheetDescription { "Book a patient in with a doctor." }
                SheetClose { on_close: close }
            }

            Form {
                onsubmit: handle_save,

                SheetContent {
                    div { class: "sheet-form",
                        if let Some(err) = error_msg() {
                            Alert { "{err}" }
                        }

                        FormSelect {
                            label: "Patient",
                            value: form.read().patient_id.clone(),
                            error: error_for("patient_id"),
                            onchange: move |e: Event<FormData>| edit("patient_id", e.value(), |f, v| f.patient_id = v),
                            option { value: "0", "Select a patient" }
                            for patient in patients.iter() {
                                option {
                                    key: "{patient.id}",
                                    value: "{patient.id}",
                                    "{patient.full_name()} - DOB: {patient.date_of_birth}"
                                }
                            }
                        }

                        FormSelect {
                            label: "Doctor",
                            value: form.read().doctor_id.clone(),
                            error: error_for("doctor_id"),
                            onchange: move |e: Event<FormData>| edit("doctor_id", e.value(), |f, v| f.doctor_id = v),
                            option { value: "0", "Select a doctor" }
                            for doctor in doctors.iter() {
                                option {
                                    key: "{doctor.id}",
                                    value: "{doctor.id}",
                                    "{doctor.display_name()} - {doctor.specialization}"
                                }
                            }
                        }

                        div { class: "form-row",
                            Input {
                                label: "Appointment Date",
                                input_type: "date",
                                value: form.read().date.clone(),
                                error: error_for("date"),
                                on_input: move |e: FormEvent| edit("date", e.value(), |f, v| f.date = v),
                            }
                            Input {
                                label: "Appointment Time",
                                input_type: "time",
                                value: form.read().time.clone(),
                                error: error_for("time"),
                                on_input: move |e: FormEvent| edit("time", e.value(), |f, v| f.time = v),
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
                        if in_flight() { "Creating..." } else { "Create Appointment" }
                    }
                }
            }
        }
    }
}
