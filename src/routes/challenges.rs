// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! `/retos`: challenge creation.

use crate::error::ApiResult;
use crate::models::Challenge;
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

const EMPTY_CHALLENGE: &str = "Debe introducir los datos del reto";

pub fn routes() -> Router<Arc<AppState>> {
    Router::new().route("/retos", post(create_challenge))
}

/// Schema failures report the challenge schema's own issues.
async fn create_challenge(
    State(state): State<Arc<AppState>>,
    body: RawBody,
) -> ApiResult<Response> {
    create_document::<Challenge>(&state, body, EMPTY_CHALLENGE)
        .await
        .map(IntoResponse::into_response)
}
