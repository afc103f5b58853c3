// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! In-process document store for local development and tests.

use crate::db::{new_document_id, Document, DocumentStore, ID_FIELD};
use crate::error::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use serde_json::Value;
use std::sync::Arc;

/// Collections kept in insertion order, one lock per collection.
#[derive(Clone, Default)]
pub struct MemoryDb {
    collections: Arc<DashMap<String, Vec<Document>>>,
}

impl MemoryDb {
    pub fn new() -> Self {
        Self::default()
    }
}

fn has_id(document: &Document, id: &str) -> bool {
    document.get(ID_FIELD).and_then(Value::as_str) == Some(id)
}

#[async_trait]
impl DocumentStore for MemoryDb {
    fn backend(&self) -> &'static str {
        "memory"
    }

    async fn list(&self, collection: &str) -> Result<Vec<Document>> {
        Ok(self
            .collections
            .get(collection)
            .map(|documents| documents.clone())
            .unwrap_or_default())
    }

    async fn get(&self, collection: &str, id: &str) -> Result<Option<Document>> {
        Ok(self.collections.get(collection).and_then(|documents| {
            documents
                .iter()
                .find(|document| has_id(document, id))
                .cloned()
        }))
    }

    async fn find_first(
        &self,
        collection: &str,
        field: &str,
        value: &str,
    ) -> Result<Option<Document>> {
        Ok(self.collections.get(collection).and_then(|documents| {
            documents
                .iter()
                .find(|document| document.get(field).and_then(Value::as_str) == Some(value))
                .cloned()
        }))
    }

    async fn insert(&self, collection: &str, mut document: Document) -> Result<Document> {
        let id = new_document_id()?;
        document.insert(ID_FIELD.to_string(), Value::String(id.clone()));

        self.collections
            .entry(collection.to_string())
            .or_default()
            .push(document.clone());

        tracing::debug!(collection, id = %id, "Inserted document");
        Ok(document)
    }

    async fn replace(&self, collection: &str, id: &str, mut document: Document) -> Result<()> {
        document.insert(ID_FIELD.to_string(), Value::String(id.to_string()));

        let mut documents = self.collections.entry(collection.to_string()).or_default();
        match documents.iter().position(|existing| has_id(existing, id)) {
            Some(index) => documents[index] = document,
            // Same as an upserting write in Firestore.
            None => documents.push(document),
        }
        Ok(())
    }

    async fn delete(&self, collection: &str, id: &str) -> Result<()> {
        if let Some(mut documents) = self.collections.get_mut(collection) {
            documents.retain(|document| !has_id(document, id));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> Document {
        value.as_object().cloned().unwrap()
    }

    #[tokio::test]
    async fn test_insert_assigns_id() {
        let db = MemoryDb::new();
        let stored = db
            .insert("tracks", doc(json!({ "nombre": "A" })))
            .await
            .unwrap();

        let id = stored[ID_FIELD].as_str().unwrap();
        assert!(crate::db::is_document_id(id));

        let fetched = db.get("tracks", id).await.unwrap().unwrap();
        assert_eq!(fetched, stored);
    }

    #[tokio::test]
    async fn test_find_first_returns_earliest_match() {
        let db = MemoryDb::new();
        let first = db
            .insert("tracks", doc(json!({ "nombre": "A", "n": 1 })))
            .await
            .unwrap();
        db.insert("tracks", doc(json!({ "nombre": "A", "n": 2 })))
            .await
            .unwrap();

        let found = db.find_first("tracks", "nombre", "A").await.unwrap();
        assert_eq!(found, Some(first));
        assert!(db.find_first("tracks", "nombre", "B").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_replace_and_delete() {
        let db = MemoryDb::new();
        let stored = db
            .insert("users", doc(json!({ "nombre": "Ana" })))
            .await
            .unwrap();
        let id = stored[ID_FIELD].as_str().unwrap().to_string();

        db.replace("users", &id, doc(json!({ "nombre": "Eva" })))
            .await
            .unwrap();
        let fetched = db.get("users", &id).await.unwrap().unwrap();
        assert_eq!(fetched["nombre"], "Eva");
        assert_eq!(fetched[ID_FIELD], json!(id));

        db.delete("users", &id).await.unwrap();
        assert!(db.get("users", &id).await.unwrap().is_none());
        assert!(db.list("users").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_collections_are_independent() {
        let db = MemoryDb::new();
        db.insert("groups", doc(json!({ "nombre": "G" })))
            .await
            .unwrap();

        assert_eq!(db.list("groups").await.unwrap().len(), 1);
        assert!(db.list("retos").await.unwrap().is_empty());
    }
}
