// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore integration tests.
//!
//! These tests require the Firestore emulator to be running and
//! `FIRESTORE_EMULATOR_HOST` to point at it. They are skipped otherwise.

use axum::http::StatusCode;
use serde_json::{json, Value};
use sports_tracker::db::{new_document_id, DocumentStore};
use std::sync::Arc;

mod common;
use common::{send, test_db, track_payload};

/// Unique name so tests sharing an emulator don't collide.
fn unique_name(prefix: &str) -> String {
    format!("{}-{}", prefix, new_document_id().unwrap())
}

fn document(value: Value) -> sports_tracker::db::Document {
    value.as_object().cloned().unwrap()
}

#[tokio::test]
async fn test_insert_get_delete() {
    require_emulator!();

    let db = test_db().await;
    let name = unique_name("track");

    let stored = db
        .insert("tracks", document(json!({ "nombre": name, "longitud": 5.0 })))
        .await
        .unwrap();
    let id = stored["_id"].as_str().unwrap().to_string();

    let fetched = db.get("tracks", &id).await.unwrap().expect("stored");
    assert_eq!(fetched["nombre"], name.as_str());
    assert_eq!(fetched["_id"], id.as_str());
    assert!(fetched.keys().all(|key| !key.starts_with("_firestore")));

    let found = db
        .find_first("tracks", "nombre", &name)
        .await
        .unwrap()
        .expect("found by name");
    assert_eq!(found["_id"], id.as_str());

    db.delete("tracks", &id).await.unwrap();
    assert!(db.get("tracks", &id).await.unwrap().is_none());
}

#[tokio::test]
async fn test_replace_overwrites_fields() {
    require_emulator!();

    let db = test_db().await;
    let name = unique_name("group");
    let stored = db
        .insert("groups", document(json!({ "nombre": name, "ranking": ["a"] })))
        .await
        .unwrap();
    let id = stored["_id"].as_str().unwrap();

    db.replace("groups", id, document(json!({ "nombre": name, "ranking": ["b", "a"] })))
        .await
        .unwrap();

    let fetched = db.get("groups", id).await.unwrap().unwrap();
    assert_eq!(fetched["ranking"], json!(["b", "a"]));
}

#[tokio::test]
async fn test_track_lifecycle_through_api() {
    require_emulator!();

    let (app, _) = common::create_app_with(Arc::new(test_db().await));
    let name = unique_name("api");

    let (status, created) = send(&app, "POST", "/tracks", Some(track_payload(&name))).await;
    assert_eq!(status, StatusCode::OK, "{created}");
    let id = created["_id"].as_str().unwrap().to_string();

    let uri = format!("/tracks?nombre={name}");
    let (status, body) = send(&app, "PATCH", &uri, Some(json!({ "calificacion": 1 }))).await;
    assert_eq!(status, StatusCode::OK, "{body}");
    assert_eq!(body["modifiedCount"], 1);

    let (status, body) = send(&app, "GET", &format!("/tracks?id={id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["calificacion"].as_f64(), Some(1.0));

    let (status, body) = send(&app, "DELETE", &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["deletedCount"], 1);
}
