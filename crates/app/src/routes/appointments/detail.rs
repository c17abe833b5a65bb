use client::forms::UpdateAppointmentForm;
use client::{FetchState, ResourceKey};
use dioxus::prelude::*;
use shared_types::{Appointment, AppointmentStatus, DoctorSummary, APPOINTMENT_STATUSES};
use shared_ui::{
    Alert, Button, ButtonVariant, ConfirmDialog, DetailItem, DetailList, Form, FormSelect, Sheet,
    SheetClose, SheetContent, SheetHeader, SheetTitle, SkeletonRows,
};
use std::collections::HashMap;
use std::sync::Arc;

use super::StatusBadge;
use crate::auth::use_api;
use crate::fetch::{invalidate, use_cache, use_cached};
use crate::format_helpers::{format_constant_title, format_date_human, format_time_human};

const UPDATE_ERROR: &str = "Failed to update appointment. Please try again.";
const CANCEL_ERROR: &str = "Failed to cancel appointment. Please try again.";

/// Appointment facts with controls to reassign, change status or cancel.
#[component]
pub fn AppointmentDetailSheet(id: i64, on_close: EventHandler<()>) -> Element {
    let state = use_cached::<Appointment>(ResourceKey::Appointment(id));
    let mut confirming = use_signal(|| false);

    rsx! {
        Sheet {
            open: true,
            on_close: move |_| on_close.call(()),
            SheetHeader {
                SheetTitle { "Appointment Details" }
                if let FetchState::Ready(appt) = &state {
                    StatusBadge { status: appt.status }
                }
                SheetClose { on_close: move |_| on_close.call(()) }
            }
            SheetContent {
                match &state {
                    FetchState::Loading => rsx! { SkeletonRows { rows: 8 } },
                    FetchState::Failed(msg) => rsx! { Alert { "{msg}" } },
                    FetchState::Ready(appointment) => rsx! {
                        AppointmentFacts { appointment: appointment.clone() }
                        // Keyed on the snapshot so a refetch re-seeds the form.
                        ManageAppointment {
                            key: "{appointment.doctor.id}-{appointment.status}",
                            appointment: appointment.clone(),
                            on_cancel_request: move |_| confirming.set(true),
                        }
                    },
                }
            }
        }

        if confirming() {
            CancelAppointmentDialog { id, on_close: move |_| confirming.set(false) }
        }
    }
}

#[component]
fn AppointmentFacts(appointment: Arc<Appointment>) -> Element {
    let patient = &appointment.patient;
    let doctor = &appointment.doctor;

    rsx! {
        h3 { class: "section-heading", "Appointment Information" }
        DetailList {
            DetailItem { label: "Date", value: format_date_human(&appointment.date) }
            DetailItem { label: "Time", value: format_time_human(&appointment.time) }
        }

        h3 { class: "section-heading", "Patient Information" }
        DetailList {
            DetailItem { label: "Name", value: patient.full_name() }
            DetailItem { label: "Date of Birth", value: format_date_human(&patient.date_of_birth) }
            DetailItem { label: "Phone Number", value: patient.phone_number.clone() }
        }

        h3 { class: "section-heading", "Doctor Information" }
        DetailList {
            DetailItem { label: "Name", value: doctor.display_name() }
            DetailItem { label: "Specialization", value: doctor.specialization.clone() }
            DetailItem { label: "Department", value: doctor.department.clone() }
        }
    }
}

#[component]
fn ManageAppointment(appointment: Arc<Appointment>, on_cancel_request: EventHandler<()>) -> Element {
    let api = use_api();
    let cache = use_cache();
    let doctors = use_cached::<Vec<DoctorSummary>>(ResourceKey::Doctors);

    let id = appointment.id;
    let already_cancelled = appointment.status == AppointmentStatus::Cancelled;
    let mut form = use_signal(|| UpdateAppointmentForm::from_appointment(&appointment));
    let mut field_errors = use_signal(HashMap::<String, String>::new);
    let mut error_msg = use_signal(|| Option::<String>::None);
    let mut in_flight = use_signal(|| false);

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
            let result = api.update_appointment(id, &payload).await;
            in_flight.set(false);
            match result {
                Ok(()) => invalidate(cache, &[ResourceKey::Appointments, ResourceKey::Appointment(id)]),
                Err(e) => {
                    tracing::warn!(appointment_id = id, error = %e, "Appointment update failed");
                    error_msg.set(Some(UPDATE_ERROR.to_string()));
                }
            }
        });
    };

    let error_for = move |field: &str| field_errors.read().get(field).cloned();

    rsx! {
        h3 { class: "section-heading", "Manage Appointment" }

        Form {
            onsubmit: handle_save,

            div { class: "sheet-form",
                if let Some(err) = error_msg() {
                    Alert { "{err}" }
                }

                div { class: "form-row",
                    FormSelect {
                        label: "Doctor",
                        value: form.read().doctor_id.clone(),
                        disabled: doctors.is_loading(),
                        error: error_for("doctor_id"),
                        onchange: move |e: Event<FormData>| {
                            form.write().doctor_id = e.value();
                            field_errors.write().remove("doctor_id");
                        },
                        option { value: "0", "Select a doctor" }
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
                    FormSelect {
                        label: "Status",
                        value: form.read().status.clone(),
                        error: error_for("status"),
                        onchange: move |e: Event<FormData>| {
                            form.write().status = e.value();
                            field_errors.write().remove("status");
                        },
                        for status in APPOINTMENT_STATUSES {
                            option { value: status.as_str(), "{format_constant_title(status.as_str())}" }
                        }
                    }
                }

                div { class: "sheet-form-actions",
                    Button {
                        variant: ButtonVariant::Destructive,
                        disabled: in_flight() || already_cancelled,
                        onclick: move |_| on_cancel_request.call(()),
                        "Cancel Appointment"
                    }
                    Button {
                        button_type: "submit",
                        disabled: in_flight(),
                        if in_flight() { "Saving..." } else { "Save Changes" }
                    }
                }
            }
        }
    }
}

#[component]
fn CancelAppointmentDialog(id: i64, on_close: EventHandler<()>) -> Element {
    let api = use_api();
    let cache = use_cache();
    let mut pending = use_signal(|| false);
    let mut error_msg = use_signal(|| Option::<String>::None);

    let handle_confirm = move |_: ()| {
        if pending() {
            return;
        }
        let api = api.clone();
        spawn(async move {
            pending.set(true);
            error_msg.set(None);
            let result = api.cancel_appointment(id).await;
            pending.set(false);
            match result {
                Ok(cancelled) => {
                    tracing::info!(appointment_id = cancelled.id, status = %cancelled.status, "Appointment cancelled");
                    invalidate(cache, &[ResourceKey::Appointments, ResourceKey::Appointment(id)]);
                    on_close.call(());
                }
                Err(e) => {
                    tracing::warn!(appointment_id = id, error = %e, "Appointment cancel failed");
                    error_msg.set(Some(CANCEL_ERROR.to_string()));
                }
            }
        });
    };

    rsx! {
        ConfirmDialog {
            open: true,
            title: "Cancel Appointment",
            description: "The appointment will be marked as cancelled. The patient and doctor records are kept.",
            confirm_label: "Cancel Appointment",
            pending_label: "Cancelling...",
            pending: pending(),
            error: error_msg(),
            on_confirm: handle_confirm,
            on_cancel: move |_| on_close.call(()),
        }
    }
}
