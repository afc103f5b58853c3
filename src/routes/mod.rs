// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! HTTP route handlers.

pub mod challenges;
pub mod groups;
pub mod params;
pub mod tracks;
pub mod users;

use crate::db::{Document, ID_FIELD};
use crate::error::{ApiResult, AppError, Operation, OperationContext};
use crate::models::Resource;
use crate::schemas;
use crate::AppState;
use axum::extract::State;
use axum::http::{header, Method, StatusCode};
use axum::{routing::get, Json, Router};
use params::{is_empty_object, read_body, RawBody};
use serde::Serialize;
use serde_json::Value;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Message of the delete handlers when neither `nombre` nor `id` is given.
pub const SELECTOR_REQUIRED: &str = "Un nombre o un id deben ser introducidos";

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub build_id: String,
    pub store: String,
}

/// Health check response
async fn health_check(State(state): State<Arc<AppState>>) -> Json<HealthResponse> {
    let build_id = option_env!("BUILD_ID").unwrap_or("unknown").to_string();
    Json(HealthResponse {
        status: "ok".to_string(),
        build_id,
        store: state.store.backend().to_string(),
    })
}

#[derive(Serialize)]
struct RouteNotFound {
    error: &'static str,
}

/// Fallback for unknown paths and unsupported methods.
async fn route_not_found() -> (StatusCode, Json<RouteNotFound>) {
    (
        StatusCode::NOT_FOUND,
        Json(RouteNotFound {
            error: "Route not found",
        }),
    )
}

/// Shared POST flow: reject `{}`, check the schema, cast and insert.
pub(crate) async fn create_document<R: Resource>(
    state: &AppState,
    body: RawBody,
    empty_message: &'static str,
) -> ApiResult<Json<Document>> {
    let payload = read_body(body).during(Operation::Add)?;
    if is_empty_object(&payload) {
        return Err(AppError::EmptyPayload(empty_message).during(Operation::Add));
    }

    schemas::validate::<R::Schema>(&payload)
        .map_err(AppError::Validation)
        .during(Operation::Add)?;

    let saved = state
        .repository::<R>()
        .create(payload)
        .await
        .during(Operation::Add)?;

    let id = saved.get(ID_FIELD).and_then(Value::as_str).unwrap_or_default();
    tracing::debug!(collection = R::COLLECTION, id, "Created via API");
    Ok(Json(saved))
}

/// Build the complete router with all routes.
pub fn create_router(state: Arc<AppState>) -> Router {
    // CORS layer - allow requests from frontend URL and localhost (for dev)
    let frontend_url = state.config.frontend_url.clone();
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::AllowOrigin::predicate(
            move |origin: &axum::http::HeaderValue, _request_parts: &axum::http::request::Parts| {
                let origin_str = origin.to_str().unwrap_or("");
                origin_str == frontend_url
                    || origin_str.starts_with("http://localhost")
                    || origin_str.starts_with("http://127.0.0.1")
            },
        ))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/health", get(health_check))
        .merge(tracks::routes())
        .merge(users::routes())
        .merge(groups::routes())
        .merge(challenges::routes())
        .fallback(route_not_found)
        .method_not_allowed_fallback(route_not_found)
        .layer(cors)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
