// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use serde_json::{json, Value};
use sports_tracker::config::Config;
use sports_tracker::db::{DocumentStore, FirestoreDb, MemoryDb};
use sports_tracker::routes::create_router;
use sports_tracker::AppState;
use std::sync::Arc;
use tower::ServiceExt;

/// Check if emulator is available via environment variable.
#[allow(dead_code)]
pub fn emulator_available() -> bool {
    std::env::var("FIRESTORE_EMULATOR_HOST").is_ok()
}

/// Skip test with message if emulator not available.
#[macro_export]
macro_rules! require_emulator {
    () => {
        if !crate::common::emulator_available() {
            eprintln!("⚠️  Skipping: FIRESTORE_EMULATOR_HOST not set");
            return;
        }
    };
}

/// Create a Firestore client for the emulator.
#[allow(dead_code)]
pub async fn test_db() -> FirestoreDb {
    FirestoreDb::new("test-project")
        .await
        .expect("Failed to connect to Firestore emulator")
}

/// Create a test app over the given store.
#[allow(dead_code)]
pub fn create_app_with(store: Arc<dyn DocumentStore>) -> (axum::Router, Arc<AppState>) {
    let state = Arc::new(AppState::new(Config::default(), store));
    (create_router(state.clone()), state)
}

/// Create a test app over a fresh in-memory store.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    create_app_with(Arc::new(MemoryDb::new()))
}

/// Create a test app whose store is offline: every operation fails.
#[allow(dead_code)]
pub fn create_offline_app() -> (axum::Router, Arc<AppState>) {
    create_app_with(Arc::new(FirestoreDb::new_offline()))
}

/// Send a request and return the status and the JSON body (`Null` if empty).
#[allow(dead_code)]
pub async fn send(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

/// Send a raw body and return the status, the `content-type` and the body
/// parsed as JSON.
#[allow(dead_code)]
pub async fn send_raw(
    app: &axum::Router,
    method: &str,
    uri: &str,
    body: Body,
) -> (StatusCode, String, Value) {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body)
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
        .to_string();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();

    (status, content_type, serde_json::from_slice(&bytes).unwrap())
}

/// A nonexistent but well-formed document id.
#[allow(dead_code)]
pub const MISSING_ID: &str = "0123456789abcdef01234567";

#[allow(dead_code)]
pub fn track_payload(name: &str) -> Value {
    json!({
        "nombre": name,
        "inicio": { "latitud": 28.4636, "longitud": -16.2518 },
        "final": { "latitud": 28.2724, "longitud": -16.6425 },
        "longitud": 5,
        "desnivel": 10,
        "usuarios": [],
        "actividad": "running",
        "calificacion": 4
    })
}

#[allow(dead_code)]
pub fn user_payload(name: &str) -> Value {
    json!({
        "nombre": name,
        "actividad": "bicicleta",
        "amigos": ["f1", "f2"],
        "grupos": [],
        "estadisticas": { "semana": { "km": 42, "desnivel": 900 } },
        "rutas": [],
        "retos": [],
        "historicoRutas": { "r1": ["2023-04-01"] }
    })
}

#[allow(dead_code)]
pub fn group_payload(name: &str) -> Value {
    json!({
        "nombre": name,
        "miembrosID": ["u1", "u2"],
        "propietarioID": "u1",
        "estadisticas": {},
        "ranking": ["u2", "u1"],
        "rutasFav": ["r1"],
        "historicoRutas": {}
    })
}

#[allow(dead_code)]
pub fn challenge_payload(name: &str) -> Value {
    json!({
        "nombre": name,
        "rutas": ["r1", "r2"],
        "actividad": "running",
        "total": 42,
        "usuarios": ["u1"]
    })
}

/// Insert a track through the API and return its `_id`.
#[allow(dead_code)]
pub async fn create_track(app: &axum::Router, name: &str) -> String {
    let (status, body) = send(app, "POST", "/tracks", Some(track_payload(name))).await;
    assert_eq!(status, StatusCode::OK, "track creation failed: {body}");
    body["_id"].as_str().unwrap().to_string()
}
