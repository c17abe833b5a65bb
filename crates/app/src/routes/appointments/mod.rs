mod detail;
mod new_form;
mod table;

pub use detail::AppointmentDetailSheet;
pub use new_form::NewAppointmentSheet;
pub use table::AppointmentTable;

use client::stats::{status_color, ChipColor};
use dioxus::prelude::*;
use shared_types::AppointmentStatus;
use shared_ui::{Badge, BadgeVariant};

use crate::format_helpers::format_constant_title;

pub(crate) fn badge_variant(color: ChipColor) -> BadgeVariant {
    match color {
        ChipColor::Primary => BadgeVariant::Primary,
        ChipColor::Success => BadgeVariant::Success,
        ChipColor::Error => BadgeVariant::Destructive,
        ChipColor::Default => BadgeVariant::Secondary,
    }
}

/// Colored chip for an appointment status.
#[component]
pub fn StatusBadge(status: AppointmentStatus) -> Element {
    let variant = badge_variant(status_color(status.as_str()));
    let label = format_constant_title(status.as_str());
    rsx! {
        Badge { variant, "{label}" }
    }
}
