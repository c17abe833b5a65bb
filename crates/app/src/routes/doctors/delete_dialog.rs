use client::ResourceKey;
use dioxus::prelude::*;
use shared_types::DoctorSummary;
use shared_ui::ConfirmDialog;

use crate::auth::use_api;
use crate::fetch::{invalidate, use_cache};

const DELETE_ERROR: &str = "Failed to delete doctor. Please try again.";

#[component]
pub fn DeleteDoctorDialog(doctor: DoctorSummary, on_close: EventHandler<()>) -> Element {
    let api = use_api();
    let cache = use_cache();
    let mut pending = use_signal(|| false);
    let mut error_msg = use_signal(|| Option::<String>::None);

    let id = doctor.id;
    let description = format!(
        "Are you sure you want to delete {}? Patients assigned to this doctor will be left without a primary doctor.",
        doctor.display_name()
    );

    let handle_confirm = move |_: ()| {
        if pending() {
            return;
        }
        let api = api.clone();
        spawn(async move {
            pending.set(true);
            error_msg.set(None);
            let result = api.delete_doctor(id).await;
            pending.set(false);
            match result {
                Ok(()) => {
                    // Patient rows embed their primary doctor.
                    invalidate(
                        cache,
                        &[ResourceKey::Doctors, ResourceKey::Doctor(id), ResourceKey::Patients],
                    );
                    on_close.call(());
                }
                Err(e) => {
                    tracing::warn!(doctor_id = id, error = %e, "Doctor delete failed");
                    error_msg.set(Some(DELETE_ERROR.to_string()));
                }
            }
        });
    };

    rsx! {
        ConfirmDialog {
            open: true,
            title: "Delete Doctor",
            description,
            pending: pending(),
            error: error_msg(),
            on_confirm: handle_confirm,
            on_cancel: move |_| on_close.call(()),
        }
    }
}
