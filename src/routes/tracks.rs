// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! `/tracks`: full CRUD over routes.

use crate::error::{ApiResult, AppError, Operation, OperationContext};
use crate::models::Route;
use crate::routes::params::{
    into_object, is_empty_object, read_body, selector_query, QueryParams, RawBody,
};
use crate::routes::{create_document, SELECTOR_REQUIRED};
use crate::services::{DeleteResult, Selector, UpdateResult};
use crate::AppState;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde_json::Value;
use std::sync::Arc;

const EMPTY_TRACK: &str = "Debe introducir los datos de la ruta";
const EMPTY_TRACK_UPDATE: &str = "Debe introducir los datos de la ruta a modificar";
const UPDATE_SELECTOR_REQUIRED: &str = "Debe introducir la id o el nombre de la ruta a modificar";
const NAME_NOT_FOUND: &str = "El nombre no coincide con ninguna ruta";
const ID_NOT_FOUND: &str = "El id no coincide con ninguna ruta";
const UPDATE_NOT_FOUND: &str = "El nombre o el elemento a modificar no coinciden con ninguna ruta";

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route(
        "/tracks",
        get(get_tracks)
            .post(create_track)
            .delete(delete_track)
            .patch(update_track),
    )
}

/// List every track, or look one up by name or id.
async fn get_tracks(
    State(state): State<Arc<AppState>>,
    query: QueryParams,
) -> ApiResult<Response> {
    let query = selector_query(query).during(Operation::Read)?;
    let tracks = state.repository::<Route>();

    let Some(selector) = query.selector() else {
        let all = tracks.all().await.during(Operation::Read)?;
        return Ok(Json(all).into_response());
    };

    let not_found = match selector {
        Selector::Name(_) => NAME_NOT_FOUND,
        Selector::Id(_) => ID_NOT_FOUND,
    };

    let track = tracks
        .find(&selector)
        .await
        .and_then(|found| found.ok_or(AppError::NotFound(not_found)))
        .during(Operation::Read)?;

    Ok(Json(track).into_response())
}

async fn create_track(State(state): State<Arc<AppState>>, body: RawBody) -> ApiResult<Response> {
    create_document::<Route>(&state, body, EMPTY_TRACK)
        .await
        .map(IntoResponse::into_response)
}

/// Delete one track. By name the response is a delete summary; by id it is
/// the deleted document.
async fn delete_track(
    State(state): State<Arc<AppState>>,
    query: QueryParams,
) -> ApiResult<Response> {
    let query = selector_query(query).during(Operation::Remove)?;
    let Some(selector) = query.selector() else {
        return Err(AppError::MissingSelector(SELECTOR_REQUIRED).during(Operation::Remove));
    };

    let deleted = state
        .repository::<Route>()
        .delete(&selector)
        .await
        .during(Operation::Remove)?;

    match (selector, deleted) {
        (Selector::Name(_), Some(document)) => {
            Ok(Json(DeleteResult::from_delete(Some(&document))).into_response())
        }
        (Selector::Id(_), Some(document)) => Ok(Json(document).into_response()),
        (_, None) => Err(AppError::NotFound(NAME_NOT_FOUND).during(Operation::Remove)),
    }
}

/// Update one track. By name the response is an update summary and an
/// unchanged document counts as a miss; by id it is the document as it was
/// before the update.
async fn update_track(
    State(state): State<Arc<AppState>>,
    query: QueryParams,
    body: RawBody,
) -> ApiResult<Response> {
    let payload: Value = read_body(body).during(Operation::Update)?;
    if is_empty_object(&payload) {
        return Err(AppError::EmptyPayload(EMPTY_TRACK_UPDATE).during(Operation::Update));
    }

    let query = selector_query(query).during(Operation::Update)?;
    let Some(selector) = query.selector() else {
        return Err(AppError::MissingSelector(UPDATE_SELECTOR_REQUIRED).during(Operation::Update));
    };

    let changes = into_object(payload).during(Operation::Update)?;
    let outcome = state
        .repository::<Route>()
        .update(&selector, changes)
        .await
        .during(Operation::Update)?;

    match (selector, outcome) {
        (Selector::Name(_), Some(updated)) if updated.modified => {
            Ok(Json(UpdateResult::from_update(Some(&updated))).into_response())
        }
        (Selector::Id(_), Some(updated)) => Ok(Json(updated.previous).into_response()),
        _ => Err(AppError::NotFound(UPDATE_NOT_FOUND).during(Operation::Update)),
    }
}
