//! Dashboard figures derived from cached snapshots. Everything here is pure
//! and recomputed on every render.

use chrono::{Datelike, Local, NaiveDate};
use shared_types::{Appointment, AppointmentStatus, BiologicalSex, Patient};
use std::collections::BTreeMap;

/// Appointment counts by status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusCounts {
    pub total: usize,
    pub booked: usize,
    pub completed: usize,
    pub cancelled: usize,
}

impl StatusCounts {
    pub fn from_appointments<'a>(appointments: impl IntoIterator<Item = &'a Appointment>) -> Self {
        appointments
            .into_iter()
            .fold(Self::default(), |mut counts, appt| {
                counts.total += 1;
                match appt.status {
                    AppointmentStatus::Booked => counts.booked += 1,
                    AppointmentStatus::Completed => counts.completed += 1,
                    AppointmentStatus::Cancelled => counts.cancelled += 1,
                    AppointmentStatus::Unknown => {}
                }
                counts
            })
    }
}

/// Today's local date as `YYYY-MM-DD`.
pub fn today_string() -> String {
    Local::now().date_naive().format("%Y-%m-%d").to_string()
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn current_year() -> i32 {
    Local::now().year()
}

/// Appointments whose date string equals `today` exactly.
pub fn todays_appointments<'a>(appointments: &'a [Appointment], today: &str) -> Vec<&'a Appointment> {
    appointments.iter().filter(|a| a.date == today).collect()
}

/// The earliest booked appointment on or after `today`.
///
/// Ordering is by date only; appointments on the same day keep list order.
/// Unparseable dates are skipped.
pub fn next_appointment(appointments: &[Appointment], today: NaiveDate) -> Option<&Appointment> {
    let mut upcoming: Vec<(NaiveDate, &Appointment)> = appointments
        .iter()
        .filter(|a| a.status == AppointmentStatus::Booked)
        .filter_map(|a| {
            NaiveDate::parse_from_str(&a.date, "%Y-%m-%d")
                .ok()
                .map(|d| (d, a))
        })
        .filter(|(d, _)| *d >= today)
        .collect();
    upcoming.sort_by_key(|(d, _)| *d);
    upcoming.first().map(|(_, a)| *a)
}

fn birth_year(patient: &Patient) -> Option<i32> {
    patient.date_of_birth.get(..4)?.parse().ok()
}

/// Patient counts by age decade, ordered youngest first.
///
/// Age is `current_year - birth_year`; month and day are ignored, so a
/// patient can be counted up to a year older than they are. Birth years
/// after `current_year` are left out.
pub fn age_distribution(patients: &[Patient], current_year: i32) -> Vec<(String, usize)> {
    let mut buckets: BTreeMap<i32, usize> = BTreeMap::new();
    for year in patients.iter().filter_map(birth_year) {
        let age = current_year - year;
        if age < 0 {
            continue;
        }
        let decade = age / 10 * 10;
        *buckets.entry(decade).or_default() += 1;
    }
    buckets
        .into_iter()
        .map(|(decade, count)| (format!("{}-{}", decade, decade + 9), count))
        .collect()
}

fn percentage(part: usize, whole: usize) -> String {
    if whole == 0 {
        "0".to_string()
    } else {
        // Ties round up, so 1 of 16 reads 6.3.
        let tenths = (part as f64 * 1000.0 / whole as f64).round();
        format!("{:.1}", tenths / 10.0)
    }
}

pub fn patients_with_doctor(patients: &[Patient]) -> usize {
    patients.iter().filter(|p| p.primary_doctor.is_some()).count()
}

pub fn patients_with_allergies(patients: &[Patient]) -> usize {
    patients.iter().filter(|p| p.has_allergies()).count()
}

/// Share of patients with a primary doctor: `"0"` when there are none,
/// otherwise a percentage with one decimal.
pub fn assignment_rate(patients: &[Patient]) -> String {
    percentage(patients_with_doctor(patients), patients.len())
}

pub fn allergy_rate(patients: &[Patient]) -> String {
    percentage(patients_with_allergies(patients), patients.len())
}

pub fn sex_distribution(patients: &[Patient]) -> BTreeMap<&'static str, usize> {
    let mut counts = BTreeMap::new();
    for p in patients {
        *counts.entry(p.biological_sex.display_name()).or_default() += 1;
    }
    counts
}

pub fn sex_count(patients: &[Patient], sex: BiologicalSex) -> usize {
    patients.iter().filter(|p| p.biological_sex == sex).count()
}

/// Appointments for one doctor, or all of them when no doctor is known.
pub fn filter_for_doctor(appointments: &[Appointment], doctor_id: Option<i64>) -> Vec<Appointment> {
    match doctor_id {
        Some(id) => appointments
            .iter()
            .filter(|a| a.doctor.id == id)
            .cloned()
            .collect(),
        None => appointments.to_vec(),
    }
}

/// Appointments for one patient, or all of them when no patient is known.
pub fn filter_for_patient(appointments: &[Appointment], patient_id: Option<i64>) -> Vec<Appointment> {
    match patient_id {
        Some(id) => appointments
            .iter()
            .filter(|a| a.patient.id == id)
            .cloned()
            .collect(),
        None => appointments.to_vec(),
    }
}

/// Chip color for a status label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChipColor {
    Primary,
    Success,
    Error,
    Default,
}

pub fn status_color(status: &str) -> ChipColor {
    match status {
        "BOOKED" => ChipColor::Primary,
        "COMPLETED" => ChipColor::Success,
        "CANCELLED" => ChipColor::Error,
        _ => ChipColor::Default,
    }
}
