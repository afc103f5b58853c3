// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! `/users`: create, delete and update users.
//!
//! Deletes and updates go through [`crate::services::UserManager`]; their
//! store failures surface as 500s.

use crate::error::{ApiResult, AppError, Operation, OperationContext};
use crate::models::{from_payload, User};
use crate::routes::params::{read_body, selector_query, QueryParams, RawBody};
use crate::routes::{create_document, SELECTOR_REQUIRED};
use crate::schemas::{self, UserSchema};
use crate::services::{DeleteResult, UpdateResult};
use crate::AppState;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;

const EMPTY_USER: &str = "Debe introducir los datos del usuario";
const UPDATE_SELECTOR_REQUIRED: &str = "Debe introducir la id o el nombre del usuario a modificar";

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route(
        "/users",
        post(create_user).delete(delete_user).patch(update_user),
    )
}

/// Manager results are wrapped as `{"response": ...}`.
#[derive(Serialize)]
pub struct ManagerResponse<T> {
    pub response: T,
}

async fn create_user(State(state): State<Arc<AppState>>, body: RawBody) -> ApiResult<Response> {
    create_document::<User>(&state, body, EMPTY_USER)
        .await
        .map(IntoResponse::into_response)
}

async fn delete_user(
    State(state): State<Arc<AppState>>,
    query: QueryParams,
) -> ApiResult<Json<ManagerResponse<DeleteResult>>> {
    let query = selector_query(query).during(Operation::Remove)?;
    let Some(selector) = query.selector() else {
        return Err(AppError::MissingSelector(SELECTOR_REQUIRED).during(Operation::Remove));
    };

    let response = state
        .user_manager
        .delete_user(&selector)
        .await
        .during(Operation::Remove)?;

    Ok(Json(ManagerResponse { response }))
}

/// Replace a user. The body must be a complete user.
async fn update_user(
    State(state): State<Arc<AppState>>,
    query: QueryParams,
    body: RawBody,
) -> ApiResult<Json<ManagerResponse<UpdateResult>>> {
    let payload = read_body(body).during(Operation::Update)?;

    schemas::validate::<UserSchema>(&payload)
        .map_err(AppError::Validation)
        .during(Operation::Update)?;

    let query = selector_query(query).during(Operation::Update)?;
    let Some(selector) = query.selector() else {
        return Err(AppError::MissingSelector(UPDATE_SELECTOR_REQUIRED).during(Operation::Update));
    };

    let user: User = from_payload(payload).during(Operation::Update)?;
    let response = state
        .user_manager
        .update_user(&selector, &user)
        .await
        .during(Operation::Update)?;

    Ok(Json(ManagerResponse { response }))
}
