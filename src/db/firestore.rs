// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Firestore-backed document store.
//!
//! Each resource collection maps to a Firestore collection of the same name.
//! The document id is also written into the document body as `_id`, so
//! queries return it without relying on Firestore metadata.

use crate::db::{new_document_id, Document, DocumentStore, ID_FIELD};
use crate::error::{AppError, Result};
use async_trait::async_trait;
use serde_json::Value;

/// Prefix of metadata fields the Firestore deserializer injects.
const FIRESTORE_META_PREFIX: &str = "_firestore_";

/// Firestore database client.
#[derive(Clone)]
pub struct FirestoreDb {
    client: Option<firestore::FirestoreDb>,
}

impl FirestoreDb {
    /// Create a new Firestore client.
    ///
    /// For local development with emulator, set FIRESTORE_EMULATOR_HOST.
    pub async fn new(project_id: &str) -> Result<Self> {
        if std::env::var("FIRESTORE_EMULATOR_HOST").is_ok() {
            return Self::create_emulator_client(project_id).await;
        }

        let client = firestore::FirestoreDb::new(project_id)
            .await
            .map_err(|e| AppError::Database(format!("Failed to connect to Firestore: {}", e)))?;

        tracing::info!(project = project_id, "Connected to Firestore");

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a Firestore client for the emulator with unauthenticated access.
    async fn create_emulator_client(project_id: &str) -> Result<Self> {
        tracing::info!("Using unauthenticated connection for Firestore Emulator");

        let token_source = gcloud_sdk::ExternalJwtFunctionSource::new(|| async {
            Ok(gcloud_sdk::Token {
                token_type: "Bearer".to_string(),
                token: gcloud_sdk::SecretValue::new(
                    "eyJhbGciOiJub25lIn0.eyJ1aWQiOiJ0ZXN0In0."
                        .to_string()
                        .into(),
                ),
                expiry: chrono::Utc::now() + chrono::Duration::hours(1),
            })
        });

        let options = firestore::FirestoreDbOptions::new(project_id.to_string());

        let client = firestore::FirestoreDb::with_options_token_source(
            options,
            gcloud_sdk::GCP_DEFAULT_SCOPES.clone(),
            gcloud_sdk::TokenSourceType::ExternalSource(Box::new(token_source)),
        )
        .await
        .map_err(|e| {
            AppError::Database(format!("Failed to connect to Firestore Emulator: {}", e))
        })?;

        tracing::info!(
            project = project_id,
            "Connected to Firestore (Emulator/Unauthenticated)"
        );

        Ok(Self {
            client: Some(client),
        })
    }

    /// Create a client with no connection.
    ///
    /// Every operation fails with a database error. Used when the initial
    /// connection fails and in tests.
    pub fn new_offline() -> Self {
        Self { client: None }
    }

    fn get_client(&self) -> Result<&firestore::FirestoreDb> {
        self.client
            .as_ref()
            .ok_or_else(|| AppError::Database("Database not connected (offline mode)".to_string()))
    }
}

/// Drop Firestore metadata fields from a fetched document.
fn strip_metadata(mut document: Document) -> Document {
    document.retain(|key, _| !key.starts_with(FIRESTORE_META_PREFIX));
    document
}

fn with_id(mut document: Document, id: &str) -> Document {
    document.insert(ID_FIELD.to_string(), Value::String(id.to_string()));
    document
}

#[async_trait]
impl DocumentStore for FirestoreDb {
    fn backend(&self) -> &'static str {
        "firestore"
    }

    async fn list(&self, collection: &str) -> Result<Vec<Document>> {
        let documents: Vec<Document> = self
            .get_client()?
            .fluent()
            .select()
            .from(collection)
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(documents.into_iter().map(strip_metadata).collect())
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>> {
        let document: Option<Document> = self
            .get_client()?
            .fluent()
            .select()
            .by_id_in(collection)
            .obj()
            .one(id)
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(document.map(|document| with_id(strip_metadata(document), id)))
    }

    async fn find_first(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> Result<Option<Document>> {
        let documents: Vec<Document> = self
            .get_client()?
            .fluent()
            .select()
            .from(collection)
            .filter(|q| q.for_all([q.field(field).eq(value)]))
            .limit(1)
            .obj()
            .query()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        Ok(documents.into_iter().next().map(strip_metadata))
    }

    async fn insert(&self, collection: &str, document: Document) -> Result<Document> {
        let id = new_document_id()?;
        let document = with_id(document, &id);

        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collection)
            .document_id(&id)
            .object(&document)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;

        tracing::debug!(collection, id = %id, "Inserted document");
        Ok(document)
    }

    async fn replace(&self, collection: &str, id: &str, document: Document) -> Result<()> {
        let document = with_id(document, id);

        let _: () = self
            .get_client()?
            .fluent()
            .update()
            .in_col(collection)
            .document_id(id)
            .object(&document)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<()> {
        self.get_client()?
            .fluent()
            .delete()
            .from(collection)
            .document_id(id)
            .execute()
            .await
            .map_err(|e| AppError::Database(e.to_string()))?;
        Ok(())
    }
}
