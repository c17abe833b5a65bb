use axum::{
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use client::api::{CANCEL_APPOINTMENT_FAILED, CREATE_APPOINTMENT_FAILED};
use client::forms::{NewAppointmentForm, UpdateAppointmentForm};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{Appointment, AppointmentStatus};

use crate::common;

#[tokio::test]
async fn test_list_appointments_keeps_unknown_statuses() {
    let backend = common::spawn_backend(Router::new().route(
        "/appointment/",
        get(|| async {
            Json(json!([
                common::appointment_json(1, "BOOKED"),
                common::appointment_json(2, "CANCELLED"),
                common::appointment_json(3, "RESCHEDULED"),
            ]))
        }),
    ))
    .await;

    let list = backend.client().list_appointments().await.unwrap();
    let statuses: Vec<_> = list.iter().map(|a| a.status).collect();
    assert_eq!(
        statuses,
        vec![AppointmentStatus::Booked, AppointmentStatus::Cancelled, AppointmentStatus::Unknown]
    );
    assert_eq!(list[0].patient.full_name(), "Ada Lovelace");
    assert_eq!(list[0].doctor.id, 3);
}

#[tokio::test]
async fn test_create_appointment_sends_numeric_ids() {
    let backend = common::spawn_backend(Router::new().route(
        "/appointment/",
        post(|| async { StatusCode::CREATED }),
    ))
    .await;

    let form = NewAppointmentForm {
        patient_id: "1".into(),
        doctor_id: "3".into(),
        date: "2030-04-02".into(),
        time: "09:30".into(),
    };
    let payload = form.to_request().unwrap();
    backend.client().create_appointment(&payload).await.unwrap();

    assert_eq!(
        backend.last_request().body,
        Some(json!({"patientId": 1, "doctorId": 3, "date": "2030-04-02", "time": "09:30"}))
    );
}

#[tokio::test]
async fn test_unselected_patient_and_doctor_never_reach_the_backend() {
    let backend = common::spawn_backend(Router::new().route(
        "/appointment/",
        post(|| async { StatusCode::CREATED }),
    ))
    .await;
    let api = backend.client();

    let form = NewAppointmentForm {
        date: "2030-04-02".into(),
        time: "09:30".into(),
        ..NewAppointmentForm::default()
    };
    let err = match form.to_request() {
        Ok(payload) => {
            api.create_appointment(&payload).await.unwrap();
            panic!("form with unselected ids validated");
        }
        Err(err) => err,
    };

    assert_eq!(err.field_error("patient_id"), Some("Please select a patient"));
    assert_eq!(err.field_error("doctor_id"), Some("Please select a doctor"));
    assert!(backend.requests().is_empty());
}

#[tokio::test]
async fn test_create_appointment_failure_message() {
    let backend = common::spawn_backend(Router::new().route(
        "/appointment/",
        post(|| async { StatusCode::OK }),
    ))
    .await;

    let payload = NewAppointmentForm {
        patient_id: "1".into(),
        doctor_id: "3".into(),
        date: "2030-04-02".into(),
        time: "09:30".into(),
    }
    .to_request()
    .unwrap();
    let err = backend.client().create_appointment(&payload).await.unwrap_err();
    assert_eq!(err.message, CREATE_APPOINTMENT_FAILED);
}

#[tokio::test]
async fn test_update_appointment_sends_status_constant() {
    let backend = common::spawn_backend(Router::new().route(
        "/appointment/{id}",
        put(|| async { Json(common::appointment_json(4, "COMPLETED")) }),
    ))
    .await;

    let existing: Appointment =
        serde_json::from_value(common::appointment_json(4, "BOOKED")).unwrap();
    let mut form = UpdateAppointmentForm::from_appointment(&existing);
    form.status = "COMPLETED".into();
    let payload = form.to_request().unwrap();
    backend.client().update_appointment(4, &payload).await.unwrap();

    let sent = backend.last_request();
    assert_eq!(sent.path, "/appointment/4");
    assert_eq!(sent.body, Some(json!({"doctorId": 3, "status": "COMPLETED"})));
}

#[tokio::test]
async fn test_cancel_appointment_returns_the_cancelled_record() {
    let backend = common::spawn_backend(Router::new().route(
        "/appointment/{id}",
        delete(|| async { Json(common::appointment_json(4, "CANCELLED")) }),
    ))
    .await;

    let cancelled = backend.client().cancel_appointment(4).await.unwrap();
    assert_eq!(cancelled.id, 4);
    assert_eq!(cancelled.status, AppointmentStatus::Cancelled);
    assert_eq!(backend.last_request().method, "DELETE");
}

#[tokio::test]
async fn test_cancel_appointment_no_content_is_an_error() {
    let backend = common::spawn_backend(Router::new().route(
        "/appointment/{id}",
        delete(|| async { StatusCode::NO_CONTENT }),
    ))
    .await;

    let err = backend.client().cancel_appointment(4).await.unwrap_err();
    assert_eq!(err.message, CANCEL_APPOINTMENT_FAILED);
}
