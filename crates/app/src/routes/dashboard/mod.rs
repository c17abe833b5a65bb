mod admin;
mod doctor;
mod patient;

pub use admin::AdminDashboard;
pub use doctor::DoctorDashboard;
pub use patient::PatientDashboard;

use client::{FetchState, ResourceKey};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::LdPlus;
use dioxus_free_icons::Icon;
use shared_types::{Appointment, DoctorSummary, Patient};
use shared_ui::{
    Alert, Button, Card, CardAction, CardContent, CardHeader, CardTitle, PageHeader,
    PageSubtitle, PageTitle, SkeletonRows,
};

use super::appointments::{AppointmentTable, NewAppointmentSheet};
use super::doctors::{DoctorTable, NewDoctorSheet};
use super::patients::{NewPatientSheet, PatientTable};
use crate::fetch::use_cached;

/// Landing page for a session whose role could not be read. Each section
/// loads and fails on its own.
#[component]
pub fn Dashboard() -> Element {
    let patients = use_cached::<Vec<Patient>>(ResourceKey::Patients);
    let doctors = use_cached::<Vec<DoctorSummary>>(ResourceKey::Doctors);
    let appointments = use_cached::<Vec<Appointment>>(ResourceKey::Appointments);

    let mut scheduling = use_signal(|| false);
    let mut adding_patient = use_signal(|| false);
    let mut adding_doctor = use_signal(|| false);

    let lists = patients.ready().cloned().zip(doctors.ready().cloned());

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard",
            PageHeader {
                PageTitle { "Hospital Dashboard" }
                PageSubtitle { "Patients, doctors, and appointments at a glance" }
            }

            Card {
                CardHeader {
                    CardTitle { "Appointments" }
                    CardAction {
                        Button {
                            disabled: lists.is_none(),
                            onclick: move |_| scheduling.set(true),
                            Icon::<LdPlus> { icon: LdPlus, width: 16, height: 16 }
                            "Schedule Appointment"
                        }
                    }
                }
                CardContent {
                    match &appointments {
                        FetchState::Loading => rsx! { SkeletonRows {} },
                        FetchState::Failed(msg) => rsx! { Alert { "Error loading appointments: {msg}" } },
                        FetchState::Ready(list) => rsx! { AppointmentTable { appointments: list.to_vec() } },
                    }
                }
            }

            Card {
                CardHeader {
                    CardTitle { "Patients" }
                    CardAction {
                        Button {
                            onclick: move |_| adding_patient.set(true),
                            Icon::<LdPlus> { icon: LdPlus, width: 16, height: 16 }
                            "Add Patient"
                        }
                    }
                }
                CardContent {
                    match &patients {
                        FetchState::Loading => rsx! { SkeletonRows {} },
                        FetchState::Failed(msg) => rsx! { Alert { "Error loading patients: {msg}" } },
                        FetchState::Ready(list) => rsx! { PatientTable { patients: list.clone() } },
                    }
                }
            }

            Card {
                CardHeader {
                    CardTitle { "Doctors" }
                    CardAction {
                        Button {
                            onclick: move |_| adding_doctor.set(true),
                            Icon::<LdPlus> { icon: LdPlus, width: 16, height: 16 }
                            "Add Doctor"
                        }
                    }
                }
                CardContent {
                    match &doctors {
                        FetchState::Loading => rsx! { SkeletonRows {} },
                        FetchState::Failed(msg) => rsx! { Alert { "Error loading doctors: {msg}" } },
                        FetchState::Ready(list) => rsx! { DoctorTable { doctors: list.clone() } },
                    }
                }
            }
        }

        if let Some((patients, doctors)) = lists {
            NewAppointmentSheet {
                open: scheduling(),
                patients,
                doctors,
                on_close: move |_| scheduling.set(false),
            }
        }
        NewPatientSheet { open: adding_patient(), on_close: move |_| adding_patient.set(false) }
        NewDoctorSheet { open: adding_doctor(), on_close: move |_| adding_doctor.set(false) }
    }
}
