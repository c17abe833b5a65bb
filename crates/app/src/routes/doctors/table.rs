use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdPencil, LdTrash2};
use dioxus_free_icons::Icon;
use shared_types::DoctorSummary;
use shared_ui::{
    Button, ButtonVariant, DataTable, DataTableActions, DataTableBody, DataTableCell,
    DataTableColumn, DataTableEmpty, DataTableHeader, DataTableRow,
};
use std::sync::Arc;

use super::{DeleteDoctorDialog, DoctorDetailSheet, UpdateDoctorSheet};

#[component]
pub fn DoctorTable(doctors: Arc<Vec<DoctorSummary>>) -> Element {
    let mut viewing = use_signal(|| Option::<i64>::None);
    let mut editing = use_signal(|| Option::<DoctorSummary>::None);
    let mut deleting = use_signal(|| Option::<DoctorSummary>::None);

    rsx! {
        DataTable {
            DataTableHeader {
                DataTableColumn { "ID" }
                DataTableColumn { "Full Name" }
                DataTableColumn { "Specialization" }
                DataTableColumn { "Actions" }
            }
            DataTableBody {
                if doctors.is_empty() {
                    DataTableEmpty { colspan: 4, message: "No doctors on staff yet." }
                }
                for doctor in doctors.iter() {
                    DoctorRow {
                        key: "{doctor.id}",
                        doctor: doctor.clone(),
                        on_view: move |id| viewing.set(Some(id)),
                        on_edit: move |d| editing.set(Some(d)),
                        on_delete: move |d| deleting.set(Some(d)),
                    }
                }
            }
        }

        if let Some(id) = viewing() {
            DoctorDetailSheet { id, on_close: move |_| viewing.set(None) }
        }
        if let Some(doctor) = editing() {
            UpdateDoctorSheet { doctor, on_close: move |_| editing.set(None) }
        }
        if let Some(doctor) = deleting() {
            DeleteDoctorDialog { doctor, on_close: move |_| deleting.set(None) }
        }
    }
}

#[component]
fn DoctorRow(
    doctor: DoctorSummary,
    on_view: EventHandler<i64>,
    on_edit: EventHandler<DoctorSummary>,
    on_delete: EventHandler<DoctorSummary>,
) -> Element {
    let id = doctor.id;
    let name = doctor.display_name();
    let specialization = doctor.specialization.clone();
    let for_edit = doctor.clone();
    let for_delete = doctor;

    rsx! {
        DataTableRow {
            onclick: move |_| on_view.call(id),
            DataTableCell { "{id}" }
            DataTableCell {
                span { class: "row-link", "{name}" }
            }
            DataTableCell { "{specialization}" }
            DataTableActions {
                Button {
                    variant: ButtonVariant::Ghost,
                    title: "Edit Doctor",
                    onclick: move |evt: MouseEvent| {
                        evt.stop_propagation();
                        on_edit.call(for_edit.clone());
                    },
                    Icon::<LdPencil> { icon: LdPencil, width: 16, height: 16 }
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    class: "row-action-danger",
                    title: "Delete Doctor",
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
