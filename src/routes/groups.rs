// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! `/groups`: group creation.

use crate::error::ApiResult;
use crate::models::Group;
use crate::routes::create_document;
use crate::routes::params::RawBody;
use crate::AppState;
use axum::{
    extract::State,
    response::{IntoResponse, Response},
    routing::post,
    Router,
};
use std::sync::Arc;

const EMPTY_GROUP: &str = "Debe introducir los datos del grupo";

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/groups", post(create_group))
}

async fn create_group(State(state): State<Arc<AppState>>, body: RawBody) -> ApiResult<Response> {
    create_document::<Group>(&state, body, EMPTY_GROUP)
        .await
        .map(IntoResponse::into_response)
}
