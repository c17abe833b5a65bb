use axum::{
    http::StatusCode,
    routing::{delete, get, post, put},
    Json, Router,
};
use client::api::{CREATE_DOCTOR_FAILED, DELETE_DOCTOR_FAILED, UPDATE_DOCTOR_FAILED};
use client::forms::{NewDoctorForm, UpdateDoctorForm};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::DoctorSummary;

use crate::common;

fn new_doctor_form() -> NewDoctorForm {
    NewDoctorForm {
        first_name: "Lisa".into(),
        last_name: "Cuddy".into(),
        specialization: "Endocrinology".into(),
        department: "Administration".into(),
        phone: "555-010-3000".into(),
        email: "cuddy@example.com".into(),
    }
}

#[tokio::test]
async fn test_list_doctors() {
    let backend = common::spawn_backend(Router::new().route(
        "/doctor/",
        get(|| async { Json(json!([common::doctor_json(3), common::doctor_json(4)])) }),
    ))
    .await;

    let doctors = backend.client().list_doctors().await.unwrap();
    assert_eq!(doctors.len(), 2);
    assert_eq!(doctors[0].display_name(), "Dr. Gregory House");
    assert_eq!(doctors[1].id, 4);
}

#[tokio::test]
async fn test_get_doctor_includes_assigned_patients() {
    let backend = common::spawn_backend(Router::new().route(
        "/doctor/{id}",
        get(|| async {
            let mut body = common::doctor_json(3);
            body["patients"] = json!([common::patient_json(1), common::patient_json(2)]);
            Json(body)
        }),
    ))
    .await;

    let detail = backend.client().get_doctor(3).await.unwrap();
    assert_eq!(detail.doctor.id, 3);
    assert_eq!(detail.doctor.specialization, "Nephrology");
    assert_eq!(detail.patients.len(), 2);
    assert_eq!(backend.last_request().path, "/doctor/3");
}

#[tokio::test]
async fn test_get_doctor_without_patients_field() {
    let backend = common::spawn_backend(Router::new().route(
        "/doctor/{id}",
        get(|| async { Json(common::doctor_json(3)) }),
    ))
    .await;

    let detail = backend.client().get_doctor(3).await.unwrap();
    assert!(detail.patients.is_empty());
}

#[tokio::test]
async fn test_create_doctor_expects_created() {
    let backend = common::spawn_backend(Router::new().route(
        "/doctor/",
        post(|| async { (StatusCode::CREATED, Json(common::doctor_json(8))) }),
    ))
    .await;

    let payload = new_doctor_form().to_request().unwrap();
    backend.client().create_doctor(&payload).await.unwrap();

    let body = backend.last_request().body.unwrap();
    assert_eq!(body["firstName"], json!("Lisa"));
    assert_eq!(body["email"], json!("cuddy@example.com"));
}

#[tokio::test]
async fn test_create_doctor_plain_ok_is_an_error() {
    let backend = common::spawn_backend(Router::new().route(
        "/doctor/",
        post(|| async { StatusCode::OK }),
    ))
    .await;

    let payload = new_doctor_form().to_request().unwrap();
    let err = backend.client().create_doctor(&payload).await.unwrap_err();
    assert_eq!(err.message, CREATE_DOCTOR_FAILED);
}

#[tokio::test]
async fn test_update_doctor() {
    let backend = common::spawn_backend(Router::new().route(
        "/doctor/{id}",
        put(|| async { Json(common::doctor_json(3)) }),
    ))
    .await;

    let existing: DoctorSummary = serde_json::from_value(common::doctor_json(3)).unwrap();
    let mut form = UpdateDoctorForm::from_doctor(&existing);
    form.department = "Emergency".into();
    let payload = form.to_request().unwrap();
    backend.client().update_doctor(3, &payload).await.unwrap();

    let sent = backend.last_request();
    assert_eq!(sent.method, "PUT");
    assert_eq!(
        sent.body,
        Some(json!({
            "firstName": "Gregory",
            "lastName": "House",
            "department": "Emergency",
            "phone": "555-010-2000",
            "specialization": "Nephrology"
        }))
    );
}

#[tokio::test]
async fn test_update_doctor_failure_message() {
    let backend = common::spawn_backend(Router::new().route(
        "/doctor/{id}",
        put(|| async { StatusCode::NOT_FOUND }),
    ))
    .await;

    let existing: DoctorSummary = serde_json::from_value(common::doctor_json(3)).unwrap();
    let payload = UpdateDoctorForm::from_doctor(&existing).to_request().unwrap();
    let err = backend.client().update_doctor(3, &payload).await.unwrap_err();
    assert_eq!(err.message, UPDATE_DOCTOR_FAILED);
}

#[tokio::test]
async fn test_delete_doctor() {
    let backend = common::spawn_backend(Router::new().route(
        "/doctor/{id}",
        delete(|| async { StatusCode::NO_CONTENT }),
    ))
    .await;

    backend.client().delete_doctor(3).await.unwrap();
    assert_eq!(backend.last_request().path, "/doctor/3");
}

#[tokio::test]
async fn test_delete_doctor_failure_message() {
    let backend = common::spawn_backend(Router::new().route(
        "/doctor/{id}",
        delete(|| async { StatusCode::CONFLICT }),
    ))
    .await;

    let err = backend.client().delete_doctor(3).await.unwrap_err();
    assert_eq!(err.message, DELETE_DOCTOR_FAILED);
}
