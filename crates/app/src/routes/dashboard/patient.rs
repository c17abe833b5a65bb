use client::stats::{
    age_distribution, allergy_rate, assignment_rate, current_year, filter_for_patient,
    next_appointment, patients_with_allergies, patients_with_doctor, sex_count, today,
    StatusCounts,
};
use client::{CombinedStatus, FetchState, ResourceKey};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdCalendar, LdClock, LdFileText, LdPlus, LdShield, LdUserCheck, LdUsers,
};
use dioxus_free_icons::Icon;
use shared_types::{Appointment, BiologicalSex, Patient};
use shared_ui::{
    Alert, Badge, BadgeVariant, Button, Card, CardContent, CardHeader, CardTitle, PageActions,
    PageHeader, PageTitle, SkeletonRows, StatCard, StatGrid, StatTone,
};
use std::sync::Arc;

use crate::fetch::{use_cache, use_cached};
use crate::format_helpers::format_slot;
use crate::routes::appointments::AppointmentTable;
use crate::routes::patients::{NewPatientSheet, PatientTable};

/// Both lists gate the page: one skeleton while either is pending, one
/// banner if either fails.
const REQUIRED: [ResourceKey; 2] = [ResourceKey::Patients, ResourceKey::Appointments];

fn load_error(status: &CombinedStatus) -> Option<String> {
    match status {
        CombinedStatus::Failed(msg) => Some(format!("Error loading patients: {msg}")),
        _ => None,
    }
}

#[component]
pub fn PatientDashboard() -> Element {
    let cache = use_cache();
    let patients = use_cached::<Vec<Patient>>(ResourceKey::Patients);
    let appointments = use_cached::<Vec<Appointment>>(ResourceKey::Appointments);
    let mut adding = use_signal(|| false);

    let status = cache.read().combined_status(&REQUIRED);
    let body = match (&status, &appointments, &patients) {
        (CombinedStatus::Failed(_), ..) => {
            let banner = load_error(&status).unwrap_or_default();
            rsx! { Alert { "{banner}" } }
        }
        (CombinedStatus::Ready, FetchState::Ready(all), FetchState::Ready(list)) => rsx! {
            MyAppointments { all: all.clone() }
            PatientAnalytics { patients: list.clone() }
        },
        _ => rsx! { SkeletonRows { rows: 8 } },
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard",
            PageHeader {
                PageTitle { "Patient Management Dashboard" }
                PageActions {
                    Button {
                        onclick: move |_| adding.set(true),
                        Icon::<LdPlus> { icon: LdPlus, width: 16, height: 16 }
                        "Add New Patient"
                    }
                }
            }

            {body}
        }

        NewPatientSheet { open: adding(), on_close: move |_| adding.set(false) }
    }
}

#[component]
fn MyAppointments(all: Arc<Vec<Appointment>>) -> Element {
    // The credential carries no patient id, so every appointment is shown.
    let mine = filter_for_patient(&all, None);
    let counts = StatusCounts::from_appointments(&mine);
    let next = next_appointment(&mine, today())
        .map(|a| format_slot(&a.date, &a.time));

    rsx! {
        StatGrid {
            StatCard {
                label: "Total Appointments",
                value: counts.total.to_string(),
                tone: StatTone::Violet,
                icon: rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: 18, height: 18 } },
            }
            StatCard {
                label: "Upcoming",
                value: counts.booked.to_string(),
                tone: StatTone::Sky,
                icon: rsx! { Icon::<LdClock> { icon: LdClock, width: 18, height: 18 } },
            }
            StatCard {
                label: "Completed",
                value: counts.completed.to_string(),
                tone: StatTone::Emerald,
                icon: rsx! { Icon::<LdUserCheck> { icon: LdUserCheck, width: 18, height: 18 } },
            }
            StatCard {
                label: "Next Appointment",
                value: next.unwrap_or_else(|| "None scheduled".to_string()),
                tone: StatTone::Amber,
            }
        }

        Card {
            CardHeader {
                CardTitle { "My Appointments" }
                div { class: "status-chips",
                    Badge { variant: BadgeVariant::Primary, outlined: true, "Upcoming: {counts.booked}" }
                    Badge { variant: BadgeVariant::Success, outlined: true, "Completed: {counts.completed}" }
                }
            }
            CardContent {
                AppointmentTable {
                    appointments: mine,
                    empty_message: "You have no appointments scheduled.",
                }
            }
        }
    }
}

#[component]
fn PatientAnalytics(patients: Arc<Vec<Patient>>) -> Element {
    let total = patients.len();
    let assigned = patients_with_doctor(&patients);
    let with_allergies = patients_with_allergies(&patients);
    let male = sex_count(&patients, BiologicalSex::Male);
    let female = sex_count(&patients, BiologicalSex::Female);
    let other = total - male - female;
    let ages = age_distribution(&patients, current_year());

    rsx! {
        StatGrid {
            StatCard {
                label: "Total Patients",
                value: total.to_string(),
                tone: StatTone::Violet,
                icon: rsx! { Icon::<LdUsers> { icon: LdUsers, width: 18, height: 18 } },
            }
            StatCard {
                label: "Doctor Assignment",
                value: format!("{}%", assignment_rate(&patients)),
                caption: format!("{assigned} of {total} assigned"),
                tone: StatTone::Sky,
                icon: rsx! { Icon::<LdUserCheck> { icon: LdUserCheck, width: 18, height: 18 } },
            }
            StatCard {
                label: "With Allergies",
                value: with_allergies.to_string(),
                caption: format!("{}% of total", allergy_rate(&patients)),
                tone: StatTone::Rose,
                icon: rsx! { Icon::<LdShield> { icon: LdShield, width: 18, height: 18 } },
            }
            StatCard {
                label: "Gender Split",
                value: format!("M: {male} | F: {female}"),
                caption: format!("Other: {other}"),
                tone: StatTone::Amber,
            }
        }

        Card {
            CardHeader {
                CardTitle { "Age Distribution" }
            }
            CardContent {
                if ages.is_empty() {
                    p { class: "dashboard-muted", "No patient ages to show." }
                }
                ul { class: "age-distribution",
                    for (range, count) in ages.iter() {
                        li { key: "{range}",
                            span { "{range} years" }
                            span { class: "age-count", "{count}" }
                        }
                    }
                }
            }
        }

        Card {
            CardHeader {
                CardTitle {
                    Icon::<LdFileText> { icon: LdFileText, width: 18, height: 18 }
                    "All Patients"
                }
            }
            CardContent {
                PatientTable { patients }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use client::{CachedData, ResourceCache};
    use pretty_assertions::assert_eq;
    use shared_types::AppError;
    use std::sync::Arc;

    #[test]
    fn page_waits_for_both_lists() {
        let mut cache = ResourceCache::new();
        let p = cache.begin_fetch(ResourceKey::Patients).unwrap();
        let _a = cache.begin_fetch(ResourceKey::Appointments).unwrap();
        cache.complete(p, Ok(CachedData::Patients(Arc::new(vec![]))));

        let status = cache.combined_status(&REQUIRED);
        assert_eq!(status, CombinedStatus::Loading);
        assert_eq!(load_error(&status), None);
    }

    #[test]
    fn one_failed_list_fails_the_page() {
        let mut cache = ResourceCache::new();
        let p = cache.begin_fetch(ResourceKey::Patients).unwrap();
        let a = cache.begin_fetch(ResourceKey::Appointments).unwrap();
        cache.complete(p, Ok(CachedData::Patients(Arc::new(vec![]))));
        cache.complete(a, Err(AppError::network("boom")));

        let status = cache.combined_status(&REQUIRED);
        assert_eq!(load_error(&status), Some("Error loading patients: boom".to_string()));
    }
}
