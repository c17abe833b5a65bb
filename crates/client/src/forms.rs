//! Editable form models.
//!
//! Each form keeps the raw strings the inputs hold, validates them through
//! `validator`, and only then builds the request body. Field errors are keyed
//! by the Rust field name (`first_name`, `patient_id`, ...).

use chrono::{Local, NaiveDate};
use shared_types::{
    AppError, Appointment, AppointmentStatus, Credentials, DoctorSummary, NewAppointmentRequest,
    NewDoctorRequest, NewPatientRequest, Patient, UpdateAppointmentRequest, UpdateDoctorRequest,
    UpdatePatientRequest, APPOINTMENT_STATUSES, SELECTABLE_SEXES,
};
use std::borrow::Cow;
use validator::{Validate, ValidateEmail, ValidationError};

// ── Rules ───────────────────────────────────────────────────────────

fn rule(code: &'static str, message: impl Into<Cow<'static, str>>) -> ValidationError {
    let mut err = ValidationError::new(code);
    err.message = Some(message.into());
    err
}

fn check_length(value: &str, label: &str, min: usize, max: usize) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len == 0 {
        Err(rule("required", format!("{label} is required")))
    } else if len < min {
        Err(rule("length", format!("{label} must be at least {min} characters")))
    } else if len > max {
        Err(rule("length", format!("{label} must be less than {max} characters")))
    } else {
        Ok(())
    }
}

macro_rules! length_rule {
    ($name:ident, $label:literal, $min:literal, $max:literal) => {
        fn $name(value: &str) -> Result<(), ValidationError> {
            check_length(value, $label, $min, $max)
        }
    };
}

length_rule!(first_name_rule, "First name", 2, 150);
length_rule!(last_name_rule, "Last name", 2, 150);
length_rule!(specialization_rule, "Specialization", 2, 100);
length_rule!(department_rule, "Department", 2, 100);
length_rule!(address_rule, "Address", 5, 500);

fn allergies_rule(value: &str) -> Result<(), ValidationError> {
    if value.chars().count() > 500 {
        return Err(rule("length", "Allergies must be less than 500 characters"));
    }
    Ok(())
}

/// `^[+]?[0-9\-\s.()]{10,15}$`
pub fn is_valid_phone(value: &str) -> bool {
    let rest = value.strip_prefix('+').unwrap_or(value);
    let len = rest.chars().count();
    (10..=15).contains(&len)
        && rest
            .chars()
            .all(|c| c.is_ascii_digit() || c.is_whitespace() || matches!(c, '-' | '.' | '(' | ')'))
}

fn phone_rule(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(rule("required", "Phone number is required"));
    }
    if !is_valid_phone(value) {
        return Err(rule(
            "phone",
            "Phone number must be 10-15 characters and contain only numbers, spaces, dashes, dots, or parentheses",
        ));
    }
    Ok(())
}

fn doctor_email_rule(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(rule("required", "Email is required"));
    }
    if !value.validate_email() {
        return Err(rule("email", "Invalid email address"));
    }
    Ok(())
}

fn account_email_rule(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(rule("required", "Email is required"));
    }
    if !value.validate_email() {
        return Err(rule("email", "Email is invalid"));
    }
    Ok(())
}

fn password_rule(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(rule("required", "Password is required"));
    }
    if value.chars().count() < 6 {
        return Err(rule("length", "Password must be at least 6 characters"));
    }
    Ok(())
}

fn date_of_birth_rule(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(rule("required", "Date of birth is required"));
    }
    let date = NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| rule("date", "Please enter a valid date"))?;
    if date > Local::now().date_naive() {
        return Err(rule("date", "Date of birth cannot be in the future"));
    }
    Ok(())
}

fn biological_sex_rule(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(rule("required", "Biological sex is required"));
    }
    if !SELECTABLE_SEXES.iter().any(|s| s.as_str() == value) {
        return Err(rule("one_of", "Please select a valid biological sex"));
    }
    Ok(())
}

/// Select inputs report the chosen id as text; `0` is the placeholder.
fn selected_id(value: &str) -> Option<i64> {
    value.trim().parse::<i64>().ok().filter(|id| *id > 0)
}

fn patient_choice_rule(value: &str) -> Result<(), ValidationError> {
    selected_id(value)
        .map(|_| ())
        .ok_or_else(|| rule("selection", "Please select a patient"))
}

fn doctor_choice_rule(value: &str) -> Result<(), ValidationError> {
    selected_id(value)
        .map(|_| ())
        .ok_or_else(|| rule("selection", "Please select a doctor"))
}

fn appointment_date_rule(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(rule("required", "Please select a date"));
    }
    Ok(())
}

fn appointment_time_rule(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(rule("required", "Please select a time"));
    }
    Ok(())
}

fn status_rule(value: &str) -> Result<(), ValidationError> {
    if !APPOINTMENT_STATUSES.iter().any(|s| s.as_str() == value) {
        return Err(rule("one_of", "Please select a status"));
    }
    Ok(())
}

/// Split free-text allergies on commas, trimming and dropping empties.
pub fn split_allergies(text: &str) -> Vec<String> {
    text.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn selected_or_zero(value: &str) -> i64 {
    selected_id(value).unwrap_or(0)
}

// ── Patients ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct NewPatientForm {
    #[validate(custom(function = "first_name_rule"))]
    pub first_name: String,
    #[validate(custom(function = "last_name_rule"))]
    pub last_name: String,
    #[validate(custom(function = "date_of_birth_rule"))]
    pub date_of_birth: String,
    #[validate(custom(function = "biological_sex_rule"))]
    pub biological_sex: String,
    #[validate(custom(function = "phone_rule"))]
    pub phone: String,
    #[validate(custom(function = "address_rule"))]
    pub address: String,
    #[validate(custom(function = "allergies_rule"))]
    pub allergies: String,
}

impl NewPatientForm {
    /// Allergies go out as the text the user typed.
    pub fn to_request(&self) -> Result<NewPatientRequest, AppError> {
        self.validate()?;
        Ok(NewPatientRequest {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            date_of_birth: self.date_of_birth.clone(),
            biological_sex: self.biological_sex.clone(),
            phone: self.phone.clone(),
            address: self.address.clone(),
            allergies: self.allergies.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct UpdatePatientForm {
    #[validate(custom(function = "first_name_rule"))]
    pub first_name: String,
    #[validate(custom(function = "last_name_rule"))]
    pub last_name: String,
    #[validate(custom(function = "phone_rule"))]
    pub phone_number: String,
    #[validate(custom(function = "address_rule"))]
    pub address: String,
    #[validate(custom(function = "allergies_rule"))]
    pub allergies: String,
    #[validate(custom(function = "doctor_choice_rule"))]
    pub doctor_id: String,
}

impl UpdatePatientForm {
    pub fn from_patient(patient: &Patient) -> Self {
        Self {
            first_name: patient.first_name.clone(),
            last_name: patient.last_name.clone(),
            phone_number: patient.phone_number.clone(),
            address: patient.address.clone(),
            allergies: patient.allergies_text(),
            doctor_id: patient
                .primary_doctor
                .as_ref()
                .map_or_else(|| "0".to_string(), |d| d.id.to_string()),
        }
    }

    /// Allergies go out as a list.
    pub fn to_request(&self) -> Result<UpdatePatientRequest, AppError> {
        self.validate()?;
        Ok(UpdatePatientRequest {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            phone_number: self.phone_number.clone(),
            address: self.address.clone(),
            allergies: split_allergies(&self.allergies),
            doctor_id: selected_or_zero(&self.doctor_id),
        })
    }
}

// ── Doctors ─────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct NewDoctorForm {
    #[validate(custom(function = "first_name_rule"))]
    pub first_name: String,
    #[validate(custom(function = "last_name_rule"))]
    pub last_name: String,
    #[validate(custom(function = "specialization_rule"))]
    pub specialization: String,
    #[validate(custom(function = "department_rule"))]
    pub department: String,
    #[validate(custom(function = "phone_rule"))]
    pub phone: String,
    #[validate(custom(function = "doctor_email_rule"))]
    pub email: String,
}

impl NewDoctorForm {
    pub fn to_request(&self) -> Result<NewDoctorRequest, AppError> {
        self.validate()?;
        Ok(NewDoctorRequest {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            specialization: self.specialization.clone(),
            department: self.department.clone(),
            phone: self.phone.clone(),
            email: self.email.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct UpdateDoctorForm {
    #[validate(custom(function = "first_name_rule"))]
    pub first_name: String,
    #[validate(custom(function = "last_name_rule"))]
    pub last_name: String,
    #[validate(custom(function = "specialization_rule"))]
    pub specialization: String,
    #[validate(custom(function = "department_rule"))]
    pub department: String,
    #[validate(custom(function = "phone_rule"))]
    pub phone: String,
}

impl UpdateDoctorForm {
    pub fn from_doctor(doctor: &DoctorSummary) -> Self {
        Self {
            first_name: doctor.first_name.clone(),
            last_name: doctor.last_name.clone(),
            specialization: doctor.specialization.clone(),
            department: doctor.department.clone(),
            phone: doctor.phone.clone(),
        }
    }

    pub fn to_request(&self) -> Result<UpdateDoctorRequest, AppError> {
        self.validate()?;
        Ok(UpdateDoctorRequest {
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            department: self.department.clone(),
            phone: self.phone.clone(),
            specialization: self.specialization.clone(),
        })
    }
}

// ── Appointments ────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewAppointmentForm {
    #[validate(custom(function = "patient_choice_rule"))]
    pub patient_id: String,
    #[validate(custom(function = "doctor_choice_rule"))]
    pub doctor_id: String,
    #[validate(custom(function = "appointment_date_rule"))]
    pub date: String,
    #[validate(custom(function = "appointment_time_rule"))]
    pub time: String,
}

impl Default for NewAppointmentForm {
    fn default() -> Self {
        Self {
            patient_id: "0".into(),
            doctor_id: "0".into(),
            date: String::new(),
            time: String::new(),
        }
    }
}

impl NewAppointmentForm {
    pub fn to_request(&self) -> Result<NewAppointmentRequest, AppError> {
        self.validate()?;
        Ok(NewAppointmentRequest {
            patient_id: selected_or_zero(&self.patient_id),
            doctor_id: selected_or_zero(&self.doctor_id),
            date: self.date.clone(),
            time: self.time.clone(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Validate)]
pub struct UpdateAppointmentForm {
    #[validate(custom(function = "doctor_choice_rule"))]
    pub doctor_id: String,
    #[validate(custom(function = "status_rule"))]
    pub status: String,
}

impl UpdateAppointmentForm {
    pub fn from_appointment(appointment: &Appointment) -> Self {
        Self {
            doctor_id: appointment.doctor.id.to_string(),
            status: appointment.status.as_str().to_string(),
        }
    }

    pub fn to_request(&self) -> Result<UpdateAppointmentRequest, AppError> {
        self.validate()?;
        Ok(UpdateAppointmentRequest {
            doctor_id: selected_or_zero(&self.doctor_id),
            status: AppointmentStatus::parse(&self.status),
        })
    }
}

// ── Accounts ────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct LoginForm {
    #[validate(custom(function = "account_email_rule"))]
    pub email: String,
    #[validate(custom(function = "password_rule"))]
    pub password: String,
}

impl LoginForm {
    pub fn to_request(&self) -> Result<Credentials, AppError> {
        self.validate()?;
        Ok(Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct RegisterForm {
    #[validate(custom(function = "account_email_rule"))]
    pub email: String,
    #[validate(custom(function = "password_rule"))]
    pub password: String,
    pub confirm_password: String,
}

impl RegisterForm {
    fn confirm_error(&self) -> Option<&'static str> {
        if self.confirm_password.is_empty() {
            Some("Please confirm your password")
        } else if self.confirm_password != self.password {
            Some("Passwords do not match")
        } else {
            None
        }
    }

    pub fn to_request(&self) -> Result<Credentials, AppError> {
        let mut err = match self.validate() {
            Ok(()) => None,
            Err(e) => Some(AppError::from(e)),
        };
        if let Some(msg) = self.confirm_error() {
            err.get_or_insert_with(|| AppError::validation("Validation failed", Default::default()))
                .field_errors
                .insert("confirm_password".to_string(), msg.to_string());
        }
        if let Some(e) = err {
            return Err(e);
        }
        Ok(Credentials {
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn valid_new_patient() -> NewPatientForm {
        NewPatientForm {
            first_name: "Jane".into(),
            last_name: "Roe".into(),
            date_of_birth: "1992-03-14".into(),
            biological_sex: "FEMALE".into(),
            phone: "555-123-4567".into(),
            address: "12 Harbor Way".into(),
            allergies: "Penicillin, Peanuts".into(),
        }
    }

    #[test]
    fn new_patient_sends_allergies_verbatim() {
        let req = valid_new_patient().to_request().unwrap();
        assert_eq!(req.allergies, "Penicillin, Peanuts");
    }

    #[test]
    fn update_patient_splits_allergies() {
        let form = UpdatePatientForm {
            first_name: "Jane".into(),
            last_name: "Roe".into(),
            phone_number: "(555) 123-4567".into(),
            address: "12 Harbor Way".into(),
            allergies: "Penicillin, Peanuts, ,".into(),
            doctor_id: "3".into(),
        };
        let req = form.to_request().unwrap();
        assert_eq!(req.allergies, vec!["Penicillin".to_string(), "Peanuts".to_string()]);
        assert_eq!(req.doctor_id, 3);
    }

    #[test]
    fn update_patient_requires_a_doctor() {
        let form = UpdatePatientForm {
            doctor_id: "0".into(),
            ..UpdatePatientForm::from_patient(&Patient {
                id: 1,
                first_name: "Jane".into(),
                last_name: "Roe".into(),
                phone_number: "555-123-4567".into(),
                address: "12 Harbor Way".into(),
                date_of_birth: "1992-03-14".into(),
                biological_sex: shared_types::BiologicalSex::Female,
                allergies: Some(vec!["Latex".into(), "Dust".into()]),
                primary_doctor: None,
            })
        };
        assert_eq!(form.allergies, "Latex, Dust");
        let err = form.to_request().unwrap_err();
        assert_eq!(err.field_error("doctor_id"), Some("Please select a doctor"));
    }

    #[test]
    fn name_messages_follow_length_bounds() {
        let mut form = valid_new_patient();
        form.first_name = String::new();
        form.last_name = "R".into();
        let err = form.to_request().unwrap_err();
        assert_eq!(err.field_error("first_name"), Some("First name is required"));
        assert_eq!(err.field_error("last_name"), Some("Last name must be at least 2 characters"));

        form.first_name = "x".repeat(151);
        form.last_name = "Roe".into();
        let err = form.to_request().unwrap_err();
        assert_eq!(err.field_error("first_name"), Some("First name must be less than 150 characters"));
    }

    #[test]
    fn future_birth_date_and_bad_sex_are_rejected() {
        let mut form = valid_new_patient();
        form.date_of_birth = "2999-01-01".into();
        form.biological_sex = "INTERSEX".into();
        let err = form.to_request().unwrap_err();
        assert_eq!(err.field_error("date_of_birth"), Some("Date of birth cannot be in the future"));
        assert_eq!(err.field_error("biological_sex"), Some("Please select a valid biological sex"));
    }

    #[test]
    fn phone_pattern() {
        assert!(is_valid_phone("555-123-4567"));
        assert!(is_valid_phone("+1 555 123.4567"));
        assert!(!is_valid_phone("+1 (555) 123.4567"));
        assert!(!is_valid_phone("555-1234"));
        assert!(!is_valid_phone("555-123-4567 ext 9"));
        assert!(!is_valid_phone("++15551234567"));
        assert!(!is_valid_phone("1234567890123456"));
    }

    #[test]
    fn new_appointment_with_unselected_ids_is_rejected() {
        let form = NewAppointmentForm {
            date: "2026-11-02".into(),
            time: "10:30".into(),
            ..Default::default()
        };
        let err = form.to_request().unwrap_err();
        assert!(err.is_validation());
        assert_eq!(err.field_error("patient_id"), Some("Please select a patient"));
        assert_eq!(err.field_error("doctor_id"), Some("Please select a doctor"));
        assert_eq!(err.field_error("date"), None);
    }

    #[test]
    fn new_appointment_requires_date_and_time() {
        let form = NewAppointmentForm {
            patient_id: "4".into(),
            doctor_id: "2".into(),
            ..Default::default()
        };
        let err = form.to_request().unwrap_err();
        assert_eq!(err.field_error("date"), Some("Please select a date"));
        assert_eq!(err.field_error("time"), Some("Please select a time"));
    }

    #[test]
    fn new_appointment_builds_numeric_ids() {
        let form = NewAppointmentForm {
            patient_id: "4".into(),
            doctor_id: "2".into(),
            date: "2026-11-02".into(),
            time: "10:30".into(),
        };
        let req = form.to_request().unwrap();
        assert_eq!((req.patient_id, req.doctor_id), (4, 2));
    }

    #[test]
    fn doctor_email_is_checked() {
        let form = NewDoctorForm {
            first_name: "Ada".into(),
            last_name: "Byron".into(),
            specialization: "Surgeon".into(),
            department: "Cardiology".into(),
            phone: "555-010-2030".into(),
            email: "not-an-email".into(),
        };
        let err = form.to_request().unwrap_err();
        assert_eq!(err.field_error("email"), Some("Invalid email address"));
    }

    #[test]
    fn register_confirms_password() {
        let mut form = RegisterForm {
            email: "nurse@eva.test".into(),
            password: "secret1".into(),
            confirm_password: String::new(),
        };
        let err = form.to_request().unwrap_err();
        assert_eq!(err.field_error("confirm_password"), Some("Please confirm your password"));

        form.confirm_password = "secret2".into();
        let err = form.to_request().unwrap_err();
        assert_eq!(err.field_error("confirm_password"), Some("Passwords do not match"));

        form.confirm_password = "secret1".into();
        assert_eq!(form.to_request().unwrap().email, "nurse@eva.test");
    }

    #[test]
    fn login_messages() {
        let err = LoginForm::default().to_request().unwrap_err();
        assert_eq!(err.field_error("email"), Some("Email is required"));
        assert_eq!(err.field_error("password"), Some("Password is required"));

        let err = LoginForm {
            email: "nobody".into(),
            password: "123".into(),
        }
        .to_request()
        .unwrap_err();
        assert_eq!(err.field_error("email"), Some("Email is invalid"));
        assert_eq!(err.field_error("password"), Some("Password must be at least 6 characters"));
    }

    #[test]
    fn update_appointment_round_trips_status() {
        let form = UpdateAppointmentForm {
            doctor_id: "5".into(),
            status: "CANCELLED".into(),
        };
        let req = form.to_request().unwrap();
        assert_eq!(req.status, AppointmentStatus::Cancelled);

        let bad = UpdateAppointmentForm {
            doctor_id: "5".into(),
            status: "UNKNOWN".into(),
        };
        assert_eq!(bad.to_request().unwrap_err().field_error("status"), Some("Please select a status"));
    }
}
