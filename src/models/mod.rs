// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.
//!
//! Rust field names are English; the serialized names are the Spanish
//! property names used on the wire and in the document store.

pub mod challenge;
pub mod group;
pub mod route;
pub mod user;

pub use challenge::Challenge;
pub use group::Group;
pub use route::{Geolocation, Route};
pub use user::User;

use crate::db::Document;
use crate::error::{AppError, Result};
use crate::schemas::Schema;
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

/// A document type stored in its own collection.
pub trait Resource: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Collection holding documents of this type.
    const COLLECTION: &'static str;

    /// Fields whose values must be unique within the collection.
    const UNIQUE_FIELDS: &'static [&'static str] = &[];

    /// Required-field schema checked before writes.
    type Schema: Schema;
}

/// Cast a JSON payload into resource `R`.
///
/// Fails when a field has the wrong type. Unknown fields are dropped.
pub fn from_payload<R: Resource>(payload: Value) -> Result<R> {
    serde_json::from_value(payload)
        .map_err(|e| AppError::Database(format!("{} validation failed: {}", R::COLLECTION, e)))
}

/// Serialize a resource into a storable document.
pub fn to_document<R: Resource>(resource: &R) -> Result<Document> {
    match serde_json::to_value(resource) {
        Ok(Value::Object(document)) => Ok(document),
        Ok(other) => Err(AppError::Internal(anyhow::anyhow!(
            "{} serialized to a non-object value: {}",
            R::COLLECTION,
            other
        ))),
        Err(e) => Err(AppError::Internal(e.into())),
    }
}
