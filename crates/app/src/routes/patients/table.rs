use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdPencil, LdTrash2};
use dioxus_free_icons::Icon;
use shared_types::Patient;
use shared_ui::{
    Button, ButtonVariant, DataTable, DataTableActions, DataTableBody, DataTableCell,
    DataTableColumn, DataTableEmpty, DataTableHeader, DataTableRow,
};
use std::sync::Arc;

use super::{DeletePatientDialog, PatientDetailSheet, UpdatePatientSheet};
use crate::format_helpers::format_date_human;

/// Patient list with a detail sheet on row click and edit/delete actions.
#[component]
pub fn PatientTable(patients: Arc<Vec<Patient>>) -> Element {
    let mut viewing = use_signal(|| Option::<i64>::None);
    let mut editing = use_signal(|| Option::<Patient>::None);
    let mut deleting = use_signal(|| Option::<Patient>::None);

    rsx! {
        DataTable {
            DataTableHeader {
                DataTableColumn { "ID" }
                DataTableColumn { "Full Name" }
                DataTableColumn { "Date of Birth" }
                DataTableColumn { "Primary Doctor" }
                DataTableColumn { "Actions" }
            }
            DataTableBody {
                if patients.is_empty() {
                    DataTableEmpty { colspan: 5, message: "No patients registered yet." }
                }
                for patient in patients.iter() {
                    PatientRow {
                        key: "{patient.id}",
                        patient: patient.clone(),
                        on_view: move |id| viewing.set(Some(id)),
                        on_edit: move |p| editing.set(Some(p)),
                        on_delete: move |p| deleting.set(Some(p)),
                    }
                }
            }
        }

        if let Some(id) = viewing() {
            PatientDetailSheet { id, on_close: move |_| viewing.set(None) }
        }
        if let Some(patient) = editing() {
            UpdatePatientSheet { patient, on_close: move |_| editing.set(None) }
        }
        if let Some(patient) = deleting() {
            DeletePatientDialog { patient, on_close: move |_| deleting.set(None) }
        }
    }
}

#[component]
fn PatientRow(
    patient: Patient,
    on_view: EventHandler<i64>,
    on_edit: EventHandler<Patient>,
    on_delete: EventHandler<Patient>,
) -> Element {
    let id = patient.id;
    let name = patient.full_name();
    let dob = format_date_human(&patient.date_of_birth);
    let doctor = patient
        .primary_doctor
        .as_ref()
        .map(|d| d.display_name())
        .unwrap_or_else(|| "Unassigned".to_string());
    let for_edit = patient.clone();
    let for_delete = patient;

    rsx! {
        DataTableRow {
            onclick: move |_| on_view.call(id),
            DataTableCell { "{id}" }
            DataTableCell {
                span { class: "row-link", "{name}" }
            }
            DataTableCell { "{dob}" }
            DataTableCell { "{doctor}" }
            DataTableActions {
                Button {
                    variant: ButtonVariant::Ghost,
                    title: "Edit Patient",
                    onclick: move |evt: MouseEvent| {
                        evt.stop_propagation();
                        on_edit.call(for_edit.clone());
                    },
                    Icon::<LdPencil> { icon: LdPencil, width: 16, height: 16 }
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    class: "row-action-danger",
                    title: "Delete Patient",
                    onclick: move |evt: MouseEvent| {
                        evt.stop_propagation();
                        on_delete.call(for_delete.clone());
                    },
                    Icon::<LdTrash2> { icon: LdTrash2, width: 16, height: 16 }
                }
            }
        }
    }
}
