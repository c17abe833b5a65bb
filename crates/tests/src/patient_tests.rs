use axum::{
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use client::api::{
    CREATE_PATIENT_FAILED, DELETE_PATIENT_FAILED, FETCH_PATIENTS_FAILED, FETCH_PATIENT_FAILED,
};
use client::forms::{NewPatientForm, UpdatePatientForm};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{AppErrorKind, BiologicalSex, Patient};

use crate::common;

fn new_patient_form() -> NewPatientForm {
    NewPatientForm {
        first_name: "Ada".into(),
        last_name: "Lovelace".into(),
        date_of_birth: "1990-12-10".into(),
        biological_sex: "FEMALE".into(),
        phone: "555-010-1000".into(),
        address: "12 St James's Square".into(),
        allergies: "Penicillin, Peanuts".into(),
    }
}

#[tokio::test]
async fn test_list_patients_decodes_wire_shape() {
    let backend = common::spawn_backend(Router::new().route(
        "/patient/",
        get(|| async {
            let mut bare = common::patient_json(2);
            bare["allergies"] = json!(null);
            bare.as_object_mut().unwrap().remove("primaryDoctor");
            Json(json!([common::patient_json(1), bare]))
        }),
    ))
    .await;

    let patients = backend.client().list_patients().await.unwrap();
    assert_eq!(patients.len(), 2);
    assert_eq!(patients[0].full_name(), "Ada Lovelace");
    assert_eq!(patients[0].biological_sex, BiologicalSex::Female);
    assert_eq!(patients[0].primary_doctor.as_ref().map(|d| d.id), Some(3));
    assert!(patients[0].has_allergies());
    assert!(!patients[1].has_allergies());
    assert_eq!(patients[1].primary_doctor, None);
}

#[tokio::test]
async fn test_list_patients_failure_message() {
    let backend = common::spawn_backend(Router::new().route(
        "/patient/",
        get(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
    ))
    .await;

    let err = backend.client().list_patients().await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::UnexpectedStatus);
    assert_eq!(err.message, FETCH_PATIENTS_FAILED);
}

#[tokio::test]
async fn test_get_patient_by_id() {
    let backend = common::spawn_backend(Router::new().route(
        "/patient/{id}",
        get(|axum::extract::Path(id): axum::extract::Path<i64>| async move {
            Json(common::patient_json(id))
        }),
    ))
    .await;

    let patient = backend.client().get_patient(41).await.unwrap();
    assert_eq!(patient.id, 41);
    assert_eq!(backend.last_request().path, "/patient/41");
}

#[tokio::test]
async fn test_get_patient_not_found() {
    let backend = common::spawn_backend(Router::new()).await;

    let err = backend.client().get_patient(404).await.unwrap_err();
    assert_eq!(err.message, FETCH_PATIENT_FAILED);
}

#[tokio::test]
async fn test_malformed_patient_body_is_a_decode_error() {
    let backend = common::spawn_backend(Router::new().route(
        "/patient/{id}",
        get(|| async { Json(json!({"id": "not-a-number"})) }),
    ))
    .await;

    let err = backend.client().get_patient(1).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Decode);
    assert_eq!(err.message, FETCH_PATIENT_FAILED);
}

#[tokio::test]
async fn test_create_patient_sends_allergies_as_text() {
    let backend = common::spawn_backend(Router::new().route(
        "/patient/add-patient",
        post(|| async { StatusCode::CREATED }),
    ))
    .await;

    let payload = new_patient_form().to_request().unwrap();
    backend.client().create_patient(&payload).await.unwrap();

    let sent = backend.last_request();
    assert_eq!(sent.method, "POST");
    assert_eq!(
        sent.body,
        Some(json!({
            "firstName": "Ada",
            "lastName": "Lovelace",
            "dateOfBirth": "1990-12-10",
            "biologicalSex": "FEMALE",
            "phone": "555-010-1000",
            "address": "12 St James's Square",
            "allergies": "Penicillin, Peanuts"
        }))
    );
}

#[tokio::test]
async fn test_create_patient_accepts_any_success_status() {
    let backend = common::spawn_backend(Router::new().route(
        "/patient/add-patient",
        post(|| async { Json(common::patient_json(7)) }),
    ))
    .await;

    let payload = new_patient_form().to_request().unwrap();
    assert!(backend.client().create_patient(&payload).await.is_ok());
}

#[tokio::test]
async fn test_create_patient_rejected() {
    let backend = common::spawn_backend(Router::new().route(
        "/patient/add-patient",
        post(|| async { StatusCode::BAD_REQUEST }),
    ))
    .await;

    let payload = new_patient_form().to_request().unwrap();
    let err = backend.client().create_patient(&payload).await.unwrap_err();
    assert_eq!(err.message, CREATE_PATIENT_FAILED);
}

#[tokio::test]
async fn test_update_patient_sends_allergies_as_list() {
    let backend = common::spawn_backend(Router::new().route(
        "/patient/{id}",
        axum::routing::put(|| async { Json(common::patient_json(1)) }),
    ))
    .await;

    let existing: Patient = serde_json::from_value(common::patient_json(1)).unwrap();
    let mut form = UpdatePatientForm::from_patient(&existing);
    form.allergies = "Penicillin, Peanuts".into();
    let payload = form.to_request().unwrap();
    backend.client().update_patient(1, &payload).await.unwrap();

    let sent = backend.last_request();
    assert_eq!(sent.method, "PUT");
    assert_eq!(sent.path, "/patient/1");
    let body = sent.body.unwrap();
    assert_eq!(body["allergies"], json!(["Penicillin", "Peanuts"]));
    assert_eq!(body["doctorId"], json!(3));
    assert_eq!(body["phoneNumber"], json!("555-010-1000"));
}

#[tokio::test]
async fn test_delete_patient_expects_no_content() {
    let backend = common::spawn_backend(Router::new().route(
        "/patient/{id}",
        axum::routing::delete(|| async { StatusCode::NO_CONTENT }),
    ))
    .await;

    backend.client().delete_patient(5).await.unwrap();
    let sent = backend.last_request();
    assert_eq!(sent.method, "DELETE");
    assert_eq!(sent.path, "/patient/5");
}

#[tokio::test]
async fn test_delete_patient_other_success_is_an_error() {
    let backend = common::spawn_backend(Router::new().route(
        "/patient/{id}",
        axum::routing::delete(|| async { StatusCode::OK }),
    ))
    .await;

    let err = backend.client().delete_patient(5).await.unwrap_err();
    assert_eq!(err.message, DELETE_PATIENT_FAILED);
}
