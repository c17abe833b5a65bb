use axum::{http::StatusCode, routing::get, Json, Router};
use client::api::FETCH_DOCTORS_FAILED;
use client::{CombinedStatus, FetchState, ResourceCache, ResourceKey};
use pretty_assertions::assert_eq;
use serde_json::json;
use shared_types::{DoctorDetail, DoctorSummary, Patient};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use crate::common;

/// Run one fetch for `key` the way a mounted view does.
async fn load(cache: &mut ResourceCache, api: &client::ApiClient, key: ResourceKey) {
    let Some(ticket) = cache.begin_fetch(key) else {
        return;
    };
    let result = api.fetch(&ticket.key).await;
    cache.complete(ticket, result);
}

#[tokio::test]
async fn test_fetched_list_is_served_from_cache() {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    let backend = common::spawn_backend(Router::new().route(
        "/patient/",
        get(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            async { Json(json!([common::patient_json(1)])) }
        }),
    ))
    .await;
    let api = backend.client();
    let mut cache = ResourceCache::new();

    load(&mut cache, &api, ResourceKey::Patients).await;
    load(&mut cache, &api, ResourceKey::Patients).await;

    match cache.state::<Vec<Patient>>(&ResourceKey::Patients) {
        FetchState::Ready(list) => assert_eq!(list[0].id, 1),
        other => panic!("expected ready, got {other:?}"),
    }
    assert_eq!(hits.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_invalidate_after_mutation_refetches() {
    let hits = Arc::new(AtomicUsize::new(0));
    let counter = hits.clone();
    let backend = common::spawn_backend(Router::new().route(
        "/doctor/{id}",
        get(move || {
            let n = counter.fetch_add(1, Ordering::SeqCst);
            async move {
                let mut body = common::doctor_json(3);
                body["department"] = json!(format!("Ward {n}"));
                Json(body)
            }
        }),
    ))
    .await;
    let api = backend.client();
    let mut cache = ResourceCache::new();
    let key = ResourceKey::Doctor(3);

    load(&mut cache, &api, key).await;
    cache.invalidate(&key);
    assert!(cache.needs_fetch(&key));
    load(&mut cache, &api, key).await;

    let detail = cache.state::<DoctorDetail>(&key);
    assert_eq!(detail.ready().map(|d| d.doctor.department.clone()), Some("Ward 1".to_string()));
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_failed_fetch_reports_message_per_key() {
    let backend = common::spawn_backend(
        Router::new()
            .route("/patient/", get(|| async { Json(json!([])) }))
            .route("/doctor/", get(|| async { StatusCode::SERVICE_UNAVAILABLE }))
            .route("/appointment/", get(|| async { Json(json!([])) })),
    )
    .await;
    let api = backend.client();
    let mut cache = ResourceCache::new();
    let keys = [ResourceKey::Patients, ResourceKey::Doctors, ResourceKey::Appointments];

    assert_eq!(cache.combined_status(&keys), CombinedStatus::Loading);
    for key in keys {
        load(&mut cache, &api, key).await;
    }

    assert_eq!(
        cache.state::<Vec<DoctorSummary>>(&ResourceKey::Doctors),
        FetchState::Failed(FETCH_DOCTORS_FAILED.to_string())
    );
    assert!(cache.state::<Vec<Patient>>(&ResourceKey::Patients).ready().is_some());
    assert_eq!(
        cache.combined_status(&keys),
        CombinedStatus::Failed(FETCH_DOCTORS_FAILED.to_string())
    );
    assert!(!cache.needs_fetch(&ResourceKey::Doctors));
}

#[tokio::test]
async fn test_logout_clear_drops_every_snapshot() {
    let backend = common::spawn_backend(
        Router::new().route("/patient/", get(|| async { Json(json!([])) })),
    )
    .await;
    let api = backend.client();
    let mut cache = ResourceCache::new();

    load(&mut cache, &api, ResourceKey::Patients).await;
    cache.clear();

    assert!(cache.entry(&ResourceKey::Patients).is_none());
    assert!(cache.state::<Vec<Patient>>(&ResourceKey::Patients).is_loading());
}
