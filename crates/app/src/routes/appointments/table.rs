use dioxus::prelude::*;
use shared_types::Appointment;
use shared_ui::{
    DataTable, DataTableBody, DataTableCell, DataTableColumn, DataTableEmpty, DataTableHeader,
    DataTableRow,
};

use super::{AppointmentDetailSheet, StatusBadge};
use crate::format_helpers::{format_date_human, format_time_human};

/// Appointment list; clicking a row opens its detail sheet.
#[component]
pub fn AppointmentTable(
    appointments: Vec<Appointment>,
    #[props(default = "No appointments found.".to_string())] empty_message: String,
) -> Element {
    let mut viewing = use_signal(|| Option::<i64>::None);

    rsx! {
        DataTable {
            DataTableHeader {
                DataTableColumn { "ID" }
                DataTableColumn { "Patient" }
                DataTableColumn { "Doctor" }
                DataTableColumn { "Date" }
                DataTableColumn { "Time" }
                DataTableColumn { "Status" }
            }
            DataTableBody {
                if appointments.is_empty() {
                    DataTableEmpty { colspan: 6, message: empty_message.clone() }
                }
                for appt in appointments.iter() {
                    AppointmentRow {
                        key: "{appt.id}",
                        appointment: appt.clone(),
                        on_view: move |id| viewing.set(Some(id)),
                    }
                }
            }
        }

        if let Some(id) = viewing() {
            AppointmentDetailSheet { id, on_close: move |_| viewing.set(None) }
        }
    }
}

#[component]
fn AppointmentRow(appointment: Appointment, on_view: EventHandler<i64>) -> Element {
    let id = appointment.id;
    let patient = appointment.patient.full_name();
    let doctor = appointment.doctor.display_name();
    let date = format_date_human(&appointment.date);
    let time = format_time_human(&appointment.time);

    rsx! {
        DataTableRow {
            onclick: move |_| on_view.call(id),
            DataTableCell { "{id}" }
            DataTableCell {
                span { class: "row-link", "{patient}" }
            }
            DataTableCell { "{doctor}" }
            DataTableCell { "{date}" }
            DataTableCell { "{time}" }
            DataTableCell {
                StatusBadge { status: appointment.status }
            }
        }
    }
}
