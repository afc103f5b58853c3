// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Request parsing shared by the resource handlers.

use crate::db::Document;
use crate::error::{AppError, Result};
use crate::schemas::SchemaIssue;
use crate::services::Selector;
use axum::body::Bytes;
use axum::extract::rejection::{BytesRejection, QueryRejection};
use axum::extract::Query;
use axum::http::StatusCode;
use serde::Deserialize;
use serde_json::Value;

/// Query extraction, with the rejection kept so it can be reported in the
/// error envelope.
pub type QueryParams = std::result::Result<Query<SelectorQuery>, QueryRejection>;

/// Body extraction, with the rejection kept (body too large, read failure).
pub type RawBody = std::result::Result<Bytes, BytesRejection>;

/// `?nombre=` / `?id=` query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct SelectorQuery {
    pub nombre: Option<String>,
    pub id: Option<String>,
}

impl SelectorQuery {
    /// The selector to use, if any. Name wins over id; empty values count
    /// as absent.
    pub fn selector(&self) -> Option<Selector> {
        let non_empty = |value: &Option<String>| value.clone().filter(|v| !v.is_empty());

        non_empty(&self.nombre)
            .map(Selector::Name)
            .or_else(|| non_empty(&self.id).map(Selector::Id))
    }
}

/// Unwrap extracted query parameters.
pub fn selector_query(query: QueryParams) -> Result<SelectorQuery> {
    query
        .map(|Query(query)| query)
        .map_err(|rejection| AppError::MalformedQuery(rejection.body_text()))
}

/// Read and parse a JSON request body.
pub fn read_body(body: RawBody) -> Result<Value> {
    let bytes = body.map_err(|rejection| {
        if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
            AppError::PayloadTooLarge(rejection.body_text())
        } else {
            AppError::MalformedBody(rejection.body_text())
        }
    })?;
    parse_body(&bytes)
}

/// Parse a JSON request body. An absent body reads as `{}`.
pub fn parse_body(body: &Bytes) -> Result<Value> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Object(Document::new()));
    }
    serde_json::from_slice(body).map_err(|e| AppError::MalformedBody(e.to_string()))
}

pub fn is_empty_object(payload: &Value) -> bool {
    matches!(payload, Value::Object(fields) if fields.is_empty())
}

/// Unwrap an object payload, rejecting arrays and scalars.
pub fn into_object(payload: Value) -> Result<Document> {
    match payload {
        Value::Object(fields) => Ok(fields),
        _ => Err(AppError::Validation(vec![SchemaIssue::not_an_object()])),
    }
}
