// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Application error types with consistent API responses.
//!
//! Every failure leaves a handler as an [`OperationError`]: the error kind
//! plus the operation (`add`, `read`, `update`, `remove`) that failed. Its
//! response body is always the envelope
//! `{"error": {"type": ..., "success": false, "error": ...}}`.

use crate::schemas::SchemaIssue;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;

/// Application error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Request body was `{}` where data is required.
    #[error("{0}")]
    EmptyPayload(&'static str),

    /// Neither `nombre` nor `id` was supplied.
    #[error("{0}")]
    MissingSelector(&'static str),

    #[error("Malformed JSON body: {0}")]
    MalformedBody(String),

    /// Query string could not be read as `nombre`/`id` parameters.
    #[error("Malformed query string: {0}")]
    MalformedQuery(String),

    #[error("Request body too large: {0}")]
    PayloadTooLarge(String),

    /// Schema check failed.
    #[error("Schema validation failed ({} issues)", .0.len())]
    Validation(Vec<SchemaIssue>),

    /// Lookup, update or delete matched no document.
    #[error("{0}")]
    NotFound(&'static str),

    #[error("Database error: {0}")]
    Database(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl AppError {
    /// Tag this error with the operation that failed.
    pub fn during(self, operation: Operation) -> OperationError {
        OperationError {
            operation,
            error: self,
        }
    }

    fn status(&self) -> StatusCode {
        match self {
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            _ => StatusCode::BAD_REQUEST,
        }
    }

    /// The `error` member of the envelope.
    fn details(&self) -> Value {
        match self {
            AppError::Validation(issues) => {
                serde_json::to_value(issues).unwrap_or_else(|_| Value::Array(Vec::new()))
            }
            AppError::Database(msg)
            | AppError::MalformedBody(msg)
            | AppError::MalformedQuery(msg)
            | AppError::PayloadTooLarge(msg) => Value::String(msg.clone()),
            AppError::Internal(err) => Value::String(format!("{:#}", err)),
            other => Value::String(other.to_string()),
        }
    }
}

/// Operation reported in the `type` member of an error envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Operation {
    Add,
    Read,
    Update,
    Remove,
}

/// An [`AppError`] attached to the operation that produced it.
#[derive(Debug, thiserror::Error)]
#[error("{operation:?} failed: {error}")]
pub struct OperationError {
    pub operation: Operation,
    #[source]
    pub error: AppError,
}

#[derive(Serialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

#[derive(Serialize)]
struct ErrorBody {
    #[serde(rename = "type")]
    operation: Operation,
    success: bool,
    error: Value,
}

impl IntoResponse for OperationError {
    fn into_response(self) -> Response {
        let status = self.error.status();

        match &self.error {
            AppError::Database(msg) => {
                tracing::error!(operation = ?self.operation, error = %msg, "Database error");
            }
            AppError::Internal(err) => {
                tracing::error!(operation = ?self.operation, error = %err, "Internal server error");
            }
            other => {
                tracing::debug!(operation = ?self.operation, error = %other, "Request rejected");
            }
        }

        let body = ErrorEnvelope {
            error: ErrorBody {
                operation: self.operation,
                success: false,
                error: self.error.details(),
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Attach an [`Operation`] to the error side of a service result.
pub trait OperationContext<T> {
    fn during(self, operation: Operation) -> ApiResult<T>;
}

impl<T> OperationContext<T> for Result<T> {
    fn during(self, operation: Operation) -> ApiResult<T> {
        self.map_err(|err| err.during(operation))
    }
}

/// Result type alias for services.
pub type Result<T> = std::result::Result<T, AppError>;

/// Result type alias for handlers.
pub type ApiResult<T> = std::result::Result<T, OperationError>;
