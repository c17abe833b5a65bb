use axum::{http::StatusCode, routing::post, Json, Router};
use client::api::{LOGIN_FAILED, REGISTER_FAILED};
use client::credential::landing_route_for;
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{AppErrorKind, Credentials};

use crate::common;

fn credentials() -> Credentials {
    Credentials {
        email: "ada@example.com".into(),
        password: "secret1".into(),
    }
}

#[tokio::test]
async fn test_login_returns_plain_text_token() {
    let backend = common::spawn_backend(
        Router::new().route("/auth/login", post(|| async { "header.payload.sig" })),
    )
    .await;

    let token = backend.client().login(&credentials()).await.unwrap();
    assert_eq!(token, "header.payload.sig");

    let sent = backend.last_request();
    assert_eq!(sent.method, "POST");
    assert_eq!(sent.body, Some(json!({"email": "ada@example.com", "password": "secret1"})));
    assert_eq!(sent.authorization, None);
}

#[tokio::test]
async fn test_login_accepts_json_string_token() {
    let backend = common::spawn_backend(
        Router::new().route("/auth/login", post(|| async { Json(json!("a.b.c")) })),
    )
    .await;

    let token = backend.client().login(&credentials()).await.unwrap();
    assert_eq!(token, "a.b.c");
}

#[tokio::test]
async fn test_login_rejected_returns_fixed_message() {
    let backend = common::spawn_backend(
        Router::new().route("/auth/login", post(|| async { StatusCode::UNAUTHORIZED })),
    )
    .await;

    let err = backend.client().login(&credentials()).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::UnexpectedStatus);
    assert_eq!(err.message, LOGIN_FAILED);
}

#[tokio::test]
async fn test_login_empty_body_is_a_decode_error() {
    let backend = common::spawn_backend(
        Router::new().route("/auth/login", post(|| async { "" })),
    )
    .await;

    let err = backend.client().login(&credentials()).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Decode);
}

#[tokio::test]
async fn test_login_unreachable_backend_is_a_network_error() {
    let api = client::ApiClient::new(
        common::unreachable_base_url().await,
        client::Session::in_memory(),
    );

    let err = api.login(&credentials()).await.unwrap_err();
    assert_eq!(err.kind, AppErrorKind::Network);
    assert_eq!(err.message, LOGIN_FAILED);
}

#[tokio::test]
async fn test_register_decodes_created_account() {
    let backend = common::spawn_backend(Router::new().route(
        "/auth/register",
        post(|| async { Json(json!({"id": 9, "email": "ada@example.com", "role": "PATIENT"})) }),
    ))
    .await;

    let user = backend.client().register(&credentials()).await.unwrap();
    assert_eq!(user.email, "ada@example.com");
}

#[tokio::test]
async fn test_register_conflict_returns_fixed_message() {
    let backend = common::spawn_backend(
        Router::new().route("/auth/register", post(|| async { StatusCode::CONFLICT })),
    )
    .await;

    let err = backend.client().register(&credentials()).await.unwrap_err();
    assert_eq!(err.message, REGISTER_FAILED);
}

#[tokio::test]
async fn test_issued_token_role_picks_the_dashboard() {
    for (role, expected) in [
        ("ADMIN", "/dashboard/admin"),
        ("STAFF", "/dashboard/doctor"),
        ("PATIENT", "/dashboard/patient"),
        ("JANITOR", "/dashboard"),
    ] {
        let token = common::token_with_claims(json!({"sub": "ada@example.com", "role": role}));
        let backend = common::spawn_backend(
            Router::new().route("/auth/login", post(move || async move { token })),
        )
        .await;

        let issued = backend.client().login(&credentials()).await.unwrap();
        assert_eq!(landing_route_for(&issued), expected, "role {role}");
    }
}

#[tokio::test]
async fn test_undecodable_token_lands_on_generic_dashboard() {
    let backend = common::spawn_backend(
        Router::new().route("/auth/login", post(|| async { "abc.%%%not-base64%%%.xyz" })),
    )
    .await;

    let issued = backend.client().login(&credentials()).await.unwrap();
    assert_eq!(landing_route_for(&issued), "/dashboard");
}
