use client::{FetchState, ResourceKey};
use dioxus::prelude::*;
use shared_types::Patient;
use shared_ui::{
    Alert, DetailItem, DetailList, Sheet, SheetClose, SheetContent, SheetHeader, SheetTitle,
    SkeletonRows,
};
use std::sync::Arc;

use crate::fetch::use_cached;
use crate::format_helpers::format_date_human;

/// Read-only patient record, fetched by id.
#[component]
pub fn PatientDetailSheet(id: i64, on_close: EventHandler<()>) -> Element {
    let state = use_cached::<Patient>(ResourceKey::Patient(id));

    rsx! {
        Sheet {
            open: true,
            on_close: move |_| on_close.call(()),
            SheetHeader {
                SheetTitle { "Patient Information" }
                SheetClose { on_close: move |_| on_close.call(()) }
            }
            SheetContent {
                match state {
                    FetchState::Loading => rsx! { SkeletonRows { rows: 6 } },
                    FetchState::Failed(msg) => rsx! { Alert { "{msg}" } },
                    FetchState::Ready(patient) => rsx! { PatientFacts { patient } },
                }
            }
        }
    }
}

#[component]
fn PatientFacts(patient: Arc<Patient>) -> Element {
    let allergies = if patient.has_allergies() {
        patient.allergies_text()
    } else {
        "None".to_string()
    };
    let doctor = patient
        .primary_doctor
        .as_ref()
        .map(|d| d.display_name())
        .unwrap_or_default();

    rsx! {
        DetailList {
            DetailItem { label: "Full Name", value: patient.full_name() }
            DetailItem { label: "Date of Birth", value: format_date_human(&patient.date_of_birth) }
            DetailItem { label: "Biological Sex", value: patient.biological_sex.display_name().to_string() }
            DetailItem { label: "Phone Number", value: patient.phone_number.clone() }
            DetailItem { label: "Address", value: patient.address.clone() }
            DetailItem { label: "Primary Doctor", value: doctor }
            DetailItem { label: "Allergies",
                span {
                    class: if patient.has_allergies() { "text-danger" } else { "" },
                    "{allergies}"
                }
            }
        }
    }
}
