use client::stats::{filter_for_doctor, today_string, todays_appointments, StatusCounts};
use client::{FetchState, ResourceKey};
use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdActivity, LdCalendar, LdClock, LdUserCheck};
use dioxus_free_icons::Icon;
use shared_types::Appointment;
use shared_ui::{
    Alert, Badge, BadgeVariant, Card, CardContent, CardHeader, CardTitle, PageHeader,
    PageSubtitle, PageTitle, SkeletonRows, StatCard, StatGrid, StatTone,
};
use std::sync::Arc;

use crate::fetch::use_cached;
use crate::routes::appointments::AppointmentTable;

#[component]
pub fn DoctorDashboard() -> Element {
    let appointments = use_cached::<Vec<Appointment>>(ResourceKey::Appointments);

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./dashboard.css") }

        div { class: "dashboard",
            PageHeader {
                PageTitle { "Doctor Dashboard" }
                PageSubtitle { "Manage your appointments and patient schedules" }
            }

            match appointments {
                FetchState::Loading => rsx! { SkeletonRows { rows: 8 } },
                FetchState::Failed(msg) => rsx! { Alert { "Error loading appointments: {msg}" } },
                FetchState::Ready(all) => rsx! { DoctorOverview { all } },
            }
        }
    }
}

#[component]
fn DoctorOverview(all: Arc<Vec<Appointment>>) -> Element {
    // The credential carries no doctor id, so every appointment is shown.
    let mine = filter_for_doctor(&all, None);
    let counts = StatusCounts::from_appointments(&mine);
    let today = today_string();
    let todays = todays_appointments(&mine, &today).len();

    rsx! {
        StatGrid {
            StatCard {
                label: "Total Appointments",
                value: counts.total.to_string(),
                tone: StatTone::Violet,
                icon: rsx! { Icon::<LdCalendar> { icon: LdCalendar, width: 18, height: 18 } },
            }
            StatCard {
                label: "Today's Schedule",
                value: todays.to_string(),
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
                label: "Active/Cancelled",
                value: format!("{} / {}", counts.booked, counts.cancelled),
                tone: StatTone::Amber,
                icon: rsx! { Icon::<LdActivity> { icon: LdActivity, width: 18, height: 18 } },
            }
        }

        Card {
            CardHeader {
                CardTitle { "Appointment Status Overview" }
            }
            CardContent {
                div { class: "status-chips",
                    Badge { variant: BadgeVariant::Primary, outlined: true, "Booked: {counts.booked}" }
                    Badge { variant: BadgeVariant::Success, outlined: true, "Completed: {counts.completed}" }
                    Badge { variant: BadgeVariant::Destructive, outlined: true, "Cancelled: {counts.cancelled}" }
                }
            }
        }

        Card {
            CardHeader {
                CardTitle { "My Appointments" }
            }
            CardContent {
                AppointmentTable {
                    appointments: mine,
                    empty_message: "No appointments scheduled yet.",
                }
            }
        }
    }
}
