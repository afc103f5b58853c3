// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Typed access to one resource collection.
//!
//! Every write goes through the resource model: payloads are cast into `R`
//! and serialized back before they reach the store. Wrongly typed fields are
//! rejected and unknown fields are dropped.

use crate::db::{is_document_id, Document, DocumentStore, ID_FIELD};
use crate::error::{AppError, Result};
use crate::models::{from_payload, to_document, Resource};
use serde::Serialize;
use serde_json::Value;
use std::marker::PhantomData;
use std::sync::Arc;

/// Field used for lookups by name.
pub const NAME_FIELD: &str = "nombre";

/// How a request addresses a single document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// First document whose `nombre` matches exactly.
    Name(String),
    /// Document with this `_id`.
    Id(String),
}

/// Outcome of an update that found its target.
#[derive(Debug, Clone, PartialEq)]
pub struct Updated {
    /// Document as stored before the update
    pub previous: Document,
    /// Document as stored after the update
    pub current: Document,
    /// Whether any field changed (no write happens otherwise)
    pub modified: bool,
}

/// Summary of an update, in the shape clients already parse.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResult {
    pub acknowledged: bool,
    pub modified_count: u64,
    pub upserted_id: Option<String>,
    pub upserted_count: u64,
    pub matched_count: u64,
}

impl UpdateResult {
    pub fn from_update(outcome: Option<&Updated>) -> Self {
        Self {
            acknowledged: true,
            modified_count: u64::from(outcome.is_some_and(|updated| updated.modified)),
            upserted_id: None,
            upserted_count: 0,
            matched_count: u64::from(outcome.is_some()),
        }
    }
}

/// Summary of a delete.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResult {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

impl DeleteResult {
    pub fn from_delete(deleted: Option<&Document>) -> Self {
        Self {
            acknowledged: true,
            deleted_count: u64::from(deleted.is_some()),
        }
    }
}

/// Repository over the collection of resource `R`.
pub struct Repository<R> {
    store: Arc<dyn DocumentStore>,
    resource: PhantomData<fn() -> R>,
}

impl<R> Clone for Repository<R> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            resource: PhantomData,
        }
    }
}

impl<R: Resource> Repository<R> {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            store,
            resource: PhantomData,
        }
    }

    /// Every document in the collection.
    pub async fn all(&self) -> Result<Vec<Document>> {
        self.store.list(R::COLLECTION).await
    }

    /// Look up one document.
    ///
    /// A malformed id is a database error, not a miss.
    pub async fn find(&self, selector: &Selector) -> Result<Option<Document>> {
        match selector {
            Selector::Name(name) => self.store.find_first(R::COLLECTION, NAME_FIELD, name).await,
            Selector::Id(id) => {
                self.check_id(id)?;
                self.store.get(R::COLLECTION, id).await
            }
        }
    }

    /// Cast, check uniqueness and insert a new document.
    pub async fn create(&self, payload: Value) -> Result<Document> {
        let resource: R = from_payload(payload)?;
        let document = to_document(&resource)?;

        self.ensure_unique(&document, None).await?;

        let stored = self.store.insert(R::COLLECTION, document).await?;
        let id = stored.get(ID_FIELD).and_then(Value::as_str).unwrap_or_default();
        tracing::info!(collection = R::COLLECTION, id, "Document created");
        Ok(stored)
    }

    /// Apply `changes` on top of the selected document.
    ///
    /// Returns `None` when nothing matches. Fields not named in `changes`
    /// keep their stored values; `_id` cannot be changed.
    pub async fn update(&self, selector: &Selector, changes: Document) -> Result<Option<Updated>> {
        let Some(previous) = self.find(selector).await? else {
            return Ok(None);
        };
        let id = stored_id(&previous)?;

        let mut merged = previous.clone();
        merged.remove(ID_FIELD);
        let before = merged.clone();
        for (field, value) in changes {
            if field != ID_FIELD {
                merged.insert(field, value);
            }
        }

        let resource: R = from_payload(Value::Object(merged))?;
        let updated = to_document(&resource)?;
        let modified = updated != before;

        if modified {
            self.ensure_unique(&updated, Some(&id)).await?;
            self.store.replace(R::COLLECTION, &id, updated.clone()).await?;
            tracing::info!(collection = R::COLLECTION, id = %id, "Document updated");
        } else {
            tracing::debug!(collection = R::COLLECTION, id = %id, "Update changed nothing");
        }

        let mut current = updated;
        current.insert(ID_FIELD.to_string(), Value::String(id));

        Ok(Some(Updated {
            previous,
            current,
            modified,
        }))
    }

    /// Delete the selected document and return it.
    pub async fn delete(&self, selector: &Selector) -> Result<Option<Document>> {
        let Some(document) = self.find(selector).await? else {
            return Ok(None);
        };
        let id = stored_id(&document)?;

        self.store.delete(R::COLLECTION, &id).await?;
        tracing::info!(collection = R::COLLECTION, id = %id, "Document deleted");

        Ok(Some(document))
    }

    fn check_id(&self, id: &str) -> Result<()> {
        if is_document_id(id) {
            Ok(())
        } else {
            Err(AppError::Database(format!(
                "Cast to ObjectId failed for value \"{}\" (type string) at path \"{}\" for collection \"{}\"",
                id,
                ID_FIELD,
                R::COLLECTION
            )))
        }
    }

    /// Reject a write that would duplicate a unique field of another document.
    async fn ensure_unique(&self, document: &Document, own_id: Option<&str>) -> Result<()> {
        for field in R::UNIQUE_FIELDS {
            let Some(value) = document.get(*field).and_then(Value::as_str) else {
                continue;
            };

            if let Some(existing) = self.store.find_first(R::COLLECTION, field, value).await? {
                let existing_id = existing.get(ID_FIELD).and_then(Value::as_str);
                if own_id.is_none() || existing_id != own_id {
                    return Err(AppError::Database(format!(
                        "E11000 duplicate key error collection: {} index: {}_1 dup key: {{ {}: \"{}\" }}",
                        R::COLLECTION,
                        field,
                        field,
                        value
                    )));
                }
            }
        }
        Ok(())
    }
}

fn stored_id(document: &Document) -> Result<String> {
    document
        .get(ID_FIELD)
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| AppError::Database("Stored document has no _id".to_string()))
}
