use client::{FetchState, ResourceKey};
use dioxus::prelude::*;
use shared_types::DoctorDetail;
use shared_ui::{
    Alert, AlertSeverity, DataTable, DataTableBody, DataTableCell, DataTableColumn,
    DataTableHeader, DataTableRow, DetailItem, DetailList, Sheet, SheetClose, SheetContent,
    SheetHeader, SheetTitle, SkeletonRows,
};
use std::sync::Arc;

use crate::fetch::use_cached;
use crate::format_helpers::format_date_human;

/// Doctor record plus the patients assigned to them.
#[component]
pub fn DoctorDetailSheet(id: i64, on_close: EventHandler<()>) -> Element {
    let state = use_cached::<DoctorDetail>(ResourceKey::Doctor(id));

    rsx! {
        Sheet {
            open: true,
            on_close: move |_| on_close.call(()),
            SheetHeader {
                SheetTitle { "Doctor Information" }
                SheetClose { on_close: move |_| on_close.call(()) }
            }
            SheetContent {
                match state {
                    FetchState::Loading => rsx! { SkeletonRows { rows: 6 } },
                    FetchState::Failed(msg) => rsx! { Alert { "{msg}" } },
                    FetchState::Ready(detail) => rsx! { DoctorFacts { detail } },
                }
            }
        }
    }
}

#[component]
fn DoctorFacts(detail: Arc<DoctorDetail>) -> Element {
    let doctor = &detail.doctor;
    let count = detail.patients.len();

    rsx! {
        DetailList {
            DetailItem { label: "Full Name", value: doctor.display_name() }
            DetailItem { label: "Department", value: doctor.department.clone() }
            DetailItem { label: "Specialization", value: doctor.specialization.clone() }
            DetailItem { label: "Phone Number", value: doctor.phone.clone() }
        }

        h3 { class: "section-heading", "Assigned Patients ({count})" }

        if detail.patients.is_empty() {
            Alert { severity: AlertSeverity::Info, "No patients assigned to this doctor yet." }
        } else {
            DataTable {
                DataTableHeader {
                    DataTableColumn { "Name" }
                    DataTableColumn { "Date of Birth" }
                    DataTableColumn { "Phone" }
                }
                DataTableBody {
                    for patient in detail.patients.iter() {
                        DataTableRow { key: "{patient.id}",
                            DataTableCell { "{patient.full_name()}" }
                            DataTableCell { "{format_date_human(&patient.date_of_birth)}" }
                            DataTableCell { "{patient.phone_number}" }
                        }
                    }
                }
            }
        }
    }
}
