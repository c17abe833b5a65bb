use client::{CombinedStatus, FetchState, ResourceKey};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCalendar, LdPlus, LdUserCheck, LdUsers};
use dioxus_free_icons::Icon;
use shared_types::{Appointment, DoctorSummary, Patient};
use shared_ui::{
    Alert, Button, Card, CardAction, CardContent, CardHeader, CardTitle, PageHeader,
    PageSubtitle, PageTitle, SkeletonRows, StatCard, StatGrid, StatTone,
};

use crate::fetch::{use_cache, use_cached};
use crate::routes::appointments::{AppointmentTable, NewAppointmentSheet};
use crate::routes::doctors::{DoctorTable, NewDoctorSheet};
use crate::routes::patients::{NewPatientSheet, PatientTable};

const LOAD_ERROR: &str = "Error loading data. Please try again later.";

/// Everything at once: the page waits for all three lists and shows one
/// banner if any of them fails.
#[component]
pub fn AdminDashboard() -> Element {
    let cache = use_cache();
    let patients = use_cached::<Vec<Patient>>(ResourceKey::Patients);
    let doctors = use_cached::<Vec<DoctorSummary>>(ResourceKey::Doctors);
    let appointments = use_cached::<Vec<Appointment>>(ResourceKey::Appointments);

    let mut scheduling = use_signal(|| false);
    let mut adding_patient = use_signal(|| false);
    let mut adding_doctor = use_signal(|| false);

    let status = cache.read().combined_status(&[
        ResourceKey::Patients,
        ResourceKey::Doctors,
        ResourceKey::Appointments,
    ]);

    let body = match (status, &patients, &doctors, &appointments) {
        (CombinedStatus::Failed(msg), ..) => {
            tracing::debug!(error = %msg, "Admin dashboard load failed");
            rsx! { Alert { "{LOAD_ERROR}" } }
        }
        (
            CombinedStatus::Ready,
            FetchState::Ready(patients),
            FetchState::Ready(doctors),
            FetchState::Ready(appointments),
        ) => rsx! {
            StatGrid {
                StatCard {
                    label: "Total Patients",
                    value: patients.len().to_string(),
                    tone: StatTone::Violet,
                    icon: rsx! { Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 } },
                }
                StatCard {
                    label: "Total Doctors",
                    value: doctors.len().to_string(),
                    tone: StatTone::Sky,
                    icon: rsx! { Icon::<LdUserCheck> { icon: LdUserCheck, width: 18, height: 18 } },
                }
                StatCard {
                    label: "Total Appointments",
                    value: appointments.len().to_string(),
                    tone: StatTone::Emerald,
                    icon: rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: 18, height: 18 } },
                }
            }

            Card {
                CardHeader {
                    CardTitle { "All Appointments" }
                    CardAction {
                        Button {
                            onclick: move |_| scheduling.set(true),
                            Icon::<LdPlus> { icon: LdPlus, width: 16, height: 16 }
                            "Schedule Appointment"
                        }
                    }
                }
                CardContent {
                    AppointmentTable { appointments: appointments.to_vec() }
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
                    PatientTable { patients: patients.clone() }
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
                    DoctorTable { doctors: doctors.clone() }
                }
            }

            NewAppointmentSheet {
                open: scheduling(),
                patients: patients.clone(),
                doctors: doctors.clone(),
                on_close: move |_| scheduling.set(false),
            }
        },
        _ => rsx! { SkeletonRows { rows: 8 } },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard",
            PageHeader {
                PageTitle { "Admin Dashboard" }
                PageSubtitle { "Manage all patients, doctors, and appointments" }
            }
            {body}
        }

        NewPatientSheet { open: adding_patient(), on_close: move |_| adding_patient.set(false) }
        NewDoctorSheet { open: adding_doctor(), on_close: move |_| adding_doctor.set(false) }
    }
}
