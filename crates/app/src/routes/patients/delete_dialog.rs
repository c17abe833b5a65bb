use client::ResourceKey;
use dioxus::prelude::*;
use shared_types::Patient;
use shared_ui::ConfirmDialog;

use crate::auth::use_api;
use crate::fetch::{invalidate, use_cache};

const DELETE_ERROR: &str = "Failed to delete patient. Please try again.";

/// Confirmation before removing a patient and their appointments.
#[component]
pub fn DeletePatientDialog(patient: Patient, on_close: EventHandler<()>) -> Element {
    let api = use_api();
    let cache = use_cache();
    let mut pending = use_signal(|| false);
    let mut error_msg = use_signal(|| Option::<String>::None);

    let id = patient.id;
    let description = format!(
        "Are you sure you want to delete patient {}? This action cannot be undone. \
         All patient records and appointments will be permanently removed.",
        patient.full_name()
    );

    let handle_confirm = move |_: ()| {
        if pending() {
            return;
        }
        let api = api.clone();
        spawn(async move {
            pending.set(true);
            error_msg.set(None);
            let result = api.delete_patient(id).await;
            pending.set(false);
            match result {
                Ok(()) => {
                    // Appointments embed the patient, so they go stale too.
                    invalidate(
                        cache,
                        &[ResourceKey::Patients, ResourceKey::Patient(id), ResourceKey::Appointments],
                    );
                    on_close.call(());
                }
                Err(e) => {
                    tracing::warn!(patient_id = id, error = %e, "Patient delete failed");
                    error_msg.set(Some(DELETE_ERROR.to_string()));
                }
            }
        });
    };

    rsx! {
        ConfirmDialog {
            open: true,
            title: "Delete Patient",
            description,
            pending: pending(),
            error: error_msg(),
            on_confirm: handle_confirm,
            on_cancel: move |_| on_close.call(()),
        }
    }
}
