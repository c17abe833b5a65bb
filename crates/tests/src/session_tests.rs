use axum::{routing::get, Json, Router};
use client::guard::{check_access, Access};
use client::Session;
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::common;

async fn patients_backend() -> common::MockBackend {
    common::spawn_backend(
        Router::new().route("/patient/", get(|| async { Json(json!([])) })),
    )
    .await
}

#[tokio::test]
async fn test_requests_without_credential_send_no_authorization() {
    let backend = patients_backend().await;
    backend.client().list_patients().await.unwrap();
    assert_eq!(backend.last_request().authorization, None);
}

#[tokio::test]
async fn test_stored_credential_is_sent_as_bearer() {
    let backend = patients_backend().await;
    let session = Session::in_memory();
    session.set_credential("tok-123").unwrap();

    backend.client_with_session(session).list_patients().await.unwrap();
    assert_eq!(backend.last_request().authorization.as_deref(), Some("Bearer tok-123"));
}

#[tokio::test]
async fn test_credential_change_applies_to_the_next_request() {
    let backend = patients_backend().await;
    let session = Session::in_memory();
    let api = backend.client_with_session(session.clone());

    session.set_credential("first").unwrap();
    api.list_patients().await.unwrap();
    session.set_credential("second").unwrap();
    api.list_patients().await.unwrap();

    let auth: Vec<_> = backend
        .requests()
        .into_iter()
        .map(|r| r.authorization)
        .collect();
    assert_eq!(auth, vec![Some("Bearer first".to_string()), Some("Bearer second".to_string())]);
}

#[tokio::test]
async fn test_logout_stops_auth_and_guard_redirects() {
    let backend = patients_backend().await;
    let session = Session::in_memory();
    let api = backend.client_with_session(session.clone());

    session.set_credential("tok-123").unwrap();
    assert_eq!(check_access(&session, "/dashboard/admin"), Access::Allow);

    session.clear_credential().unwrap();
    api.list_patients().await.unwrap();

    assert_eq!(backend.last_request().authorization, None);
    assert_eq!(check_access(&session, "/dashboard/admin"), Access::Redirect("/login"));
    assert_eq!(check_access(&session, "/login"), Access::Allow);
}
