use serde::{Deserialize, Serialize};
use std::fmt;

// ── Roles ───────────────────────────────────────────────────────────

/// Hospital role carried in the credential's `role` claim.
///
/// - `Admin`: lands on the admin dashboard.
/// - `Staff`: doctors and other clinical staff; lands on the doctor dashboard.
/// - `Patient`: lands on the patient dashboard.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    Admin,
    Staff,
    Patient,
}

impl Role {
    /// Parse the exact claim value. Anything else (including other casings)
    /// is not a role.
    pub fn from_claim(s: &str) -> Option<Self> {
        match s {
            "ADMIN" => Some(Role::Admin),
            "STAFF" => Some(Role::Staff),
            "PATIENT" => Some(Role::Patient),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::Staff => "STAFF",
            Role::Patient => "PATIENT",
        }
    }
}

// ── Biological sex ──────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum BiologicalSex {
    Male,
    Female,
    Intersex,
    Other,
}

impl BiologicalSex {
    pub fn as_str(&self) -> &'static str {
        match self {
            BiologicalSex::Male => "MALE",
            BiologicalSex::Female => "FEMALE",
            BiologicalSex::Intersex => "INTERSEX",
            BiologicalSex::Other => "OTHER",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BiologicalSex::Male => "Male",
            BiologicalSex::Female => "Female",
            BiologicalSex::Intersex => "Intersex",
            BiologicalSex::Other => "Other",
        }
    }
}

/// Values the new-patient form offers.
pub const SELECTABLE_SEXES: &[BiologicalSex] = &[BiologicalSex::Male, BiologicalSex::Female];

// ── Appointment status ──────────────────────────────────────────────

/// Appointment lifecycle status. Transitions are decided by the backend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum AppointmentStatus {
    Booked,
    Completed,
    Cancelled,
    /// Any status string this client does not know.
    #[serde(other)]
    Unknown,
}

impl AppointmentStatus {
    pub fn parse(s: &str) -> Self {
        match s {
            "BOOKED" => AppointmentStatus::Booked,
            "COMPLETED" => AppointmentStatus::Completed,
            "CANCELLED" => AppointmentStatus::Cancelled,
            _ => AppointmentStatus::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Booked => "BOOKED",
            AppointmentStatus::Completed => "COMPLETED",
            AppointmentStatus::Cancelled => "CANCELLED",
            AppointmentStatus::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Statuses an appointment can be explicitly set to.
pub const APPOINTMENT_STATUSES: &[AppointmentStatus] = &[
    AppointmentStatus::Booked,
    AppointmentStatus::Completed,
    AppointmentStatus::Cancelled,
];

// ── Doctor ──────────────────────────────────────────────────────────

/// A doctor as returned by the list endpoint (no patients).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoctorSummary {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub department: String,
    pub phone: String,
    pub specialization: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl DoctorSummary {
    /// "Dr. First Last"
    pub fn display_name(&self) -> String {
        format!("Dr. {} {}", self.first_name, self.last_name)
    }
}

/// A doctor as returned by the single-doctor endpoint, with assigned patients.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DoctorDetail {
    #[serde(flatten)]
    pub doctor: DoctorSummary,
    #[serde(default)]
    pub patients: Vec<Patient>,
}

// ── Patient ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Patient {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub address: String,
    /// `YYYY-MM-DD`
    pub date_of_birth: String,
    pub biological_sex: BiologicalSex,
    #[serde(default)]
    pub allergies: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub primary_doctor: Option<DoctorSummary>,
}

impl Patient {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn has_allergies(&self) -> bool {
        self.allergies.as_ref().is_some_and(|a| !a.is_empty())
    }

    /// Allergies joined for display and for editing as free text.
    pub fn allergies_text(&self) -> String {
        self.allergies
            .as_ref()
            .map(|a| a.join(", "))
            .unwrap_or_default()
    }
}

// ── Appointment ─────────────────────────────────────────────────────

/// An appointment with denormalized patient and doctor snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,
    pub patient: Patient,
    pub doctor: DoctorSummary,
    /// `YYYY-MM-DD`
    pub date: String,
    /// `HH:MM` or `HH:MM:SS`
    pub time: String,
    pub status: AppointmentStatus,
}
