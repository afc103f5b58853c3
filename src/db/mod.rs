//! Document store layer.
//!
//! Handlers and services only see [`DocumentStore`]; the backend is picked
//! once at startup by [`connect`].

pub mod firestore;
pub mod memory;

pub use firestore::FirestoreDb;
pub use memory::MemoryDb;

use crate::config::{Config, StoreBackend};
use crate::error::{AppError, Result};
use async_trait::async_trait;
use ring::rand::{SecureRandom, SystemRandom};
use std::sync::Arc;

/// A stored document: a JSON object keyed by field name.
pub type Document = serde_json::Map<String, serde_json::Value>;

/// Field carrying the document identifier in every document the store returns.
pub const ID_FIELD: &str = "_id";

/// Length in bytes of a generated document id (hex-encoded to twice this).
const ID_BYTES: usize = 12;

/// Collection names as constants.
pub mod collections {
    pub const TRACKS: &str = "tracks";
    pub const USERS: &str = "users";
    pub const GROUPS: &str = "groups";
    pub const CHALLENGES: &str = "retos";
}

/// Collection-scoped document operations.
///
/// Documents handed to `insert`/`replace` carry no `_id`; every document
/// returned carries one.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Short backend name for logs and the health endpoint.
    fn backend(&self) -> &'static str;

    /// All documents of a collection.
    async fn list(&self, collection: &str) -> Result<Vec<Document>>;

    /// Document by id.
    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>>;

    /// First document whose `field` equals `value`.
    async fn find_first(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> Result<Option<Document>>;

    /// Store a new document under a generated id and return it with `_id` set.
    async fn insert(&self, collection: &str, document: Document) -> Result<Document>;

    /// Overwrite the document stored under `id`.
    async fn replace(&self, collection: &str, id: &str, document: Document) -> Result<()>;

    /// Remove the document stored under `id`.
    async fn delete(&self, collection: &str, id: &str) -> Result<()>;
}

/// Generate a fresh document id: 24 lowercase hex characters.
pub fn new_document_id() -> Result<String> {
    let mut bytes = [0u8; ID_BYTES];
    SystemRandom::new()
        .fill(&mut bytes)
        .map_err(|_| AppError::Internal(anyhow::anyhow!("System RNG unavailable")))?;
    Ok(hex::encode(bytes))
}

/// Whether `id` has the shape of a generated document id.
pub fn is_document_id(id: &str) -> bool {
    id.len() == ID_BYTES * 2 && id.bytes().all(|b| b.is_ascii_hexdigit())
}

/// Open the store selected by configuration.
///
/// A Firestore connection failure is logged and the service continues with
/// an offline client, so requests fail instead of the process.
pub async fn connect(config: &Config) -> Arc<dyn DocumentStore> {
    match config.store_backend {
        StoreBackend::Memory => {
            tracing::info!("Using in-memory document store");
            Arc::new(MemoryDb::new())
        }
        StoreBackend::Firestore => match FirestoreDb::new(&config.gcp_project_id).await {
            Ok(db) => Arc::new(db),
            Err(e) => {
                tracing::error!(
                    error = %e,
                    project = %config.gcp_project_id,
                    "Something went wrong when connecting to the database, continuing offline"
                );
                Arc::new(FirestoreDb::new_offline())
            }
        },
    }
}
