use serde::{Deserialize, Serialize};

use crate::AppointmentStatus;

/// Login and registration body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// Registration response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegisteredUser {
    pub email: String,
}

/// Body for `POST /patient/add-patient`.
///
/// `allergies` is the raw comma-separated text the user typed; the backend
/// splits it. The update body sends a list instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewPatientRequest {
    pub first_name: String,
    pub last_name: String,
    pub date_of_birth: String,
    pub biological_sex: String,
    pub phone: String,
    pub address: String,
    pub allergies: String,
}

/// Body for `PUT /patient/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePatientRequest {
    pub first_name: String,
    pub last_name: String,
    pub phone_number: String,
    pub address: String,
    pub allergies: Vec<String>,
    pub doctor_id: i64,
}

/// Body for `POST /doctor/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewDoctorRequest {
    pub first_name: String,
    pub last_name: String,
    pub specialization: String,
    pub department: String,
    pub phone: String,
    pub email: String,
}

/// Body for `PUT /doctor/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDoctorRequest {
    pub first_name: String,
    pub last_name: String,
    pub department: String,
    pub phone: String,
    pub specialization: String,
}

/// Body for `POST /appointment/`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAppointmentRequest {
    pub patient_id: i64,
    pub doctor_id: i64,
    pub date: String,
    pub time: String,
}

/// Body for `PUT /appointment/{id}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateAppointmentRequest {
    pub doctor_id: i64,
    pub status: AppointmentStatus,
}
