// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! User manager.
//!
//! User deletes and updates go through here instead of straight to the
//! repository. Any failure below this layer is reported as an internal
//! error, which the API maps to a 500.

use crate::db::DocumentStore;
use crate::error::{AppError, Result};
use crate::models::{to_document, User};
use crate::services::repository::{DeleteResult, Repository, Selector, UpdateResult};
use std::sync::Arc;

#[derive(Clone)]
pub struct UserManager {
    users: Repository<User>,
}

impl UserManager {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            users: Repository::new(store),
        }
    }

    /// Delete the user matched by `selector`.
    ///
    /// A miss is not an error: the result reports `deletedCount: 0`.
    pub async fn delete_user(&self, selector: &Selector) -> Result<DeleteResult> {
        let deleted = self.users.delete(selector).await.map_err(unexpected)?;
        if deleted.is_none() {
            tracing::debug!(?selector, "No user to delete");
        }
        Ok(DeleteResult::from_delete(deleted.as_ref()))
    }

    /// Replace every field of the matched user with `user`.
    pub async fn update_user(&self, selector: &Selector, user: &User) -> Result<UpdateResult> {
        let changes = to_document(user).map_err(unexpected)?;
        let updated = self
            .users
            .update(selector, changes)
            .await
            .map_err(unexpected)?;
        Ok(UpdateResult::from_update(updated.as_ref()))
    }
}

fn unexpected(err: AppError) -> AppError {
    match err {
        AppError::Internal(_) => err,
        other => AppError::Internal(anyhow::Error::new(other).context("User manager operation failed")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{FirestoreDb, MemoryDb};
    use crate::models::from_payload;
    use serde_json::json;

    fn user(name: &str) -> User {
        from_payload(json!({
            "nombre": name,
            "actividad": "running",
            "amigos": [],
            "grupos": [],
            "estadisticas": { "semana": { "km": 10, "desnivel": 200 } },
            "rutas": [],
            "retos": [],
            "historicoRutas": {}
        }))
        .unwrap()
    }

    #[tokio::test]
    async fn test_update_then_delete_by_name() {
        let store = Arc::new(MemoryDb::new());
        let repo: Repository<User> = Repository::new(store.clone());
        let manager = UserManager::new(store);

        repo.create(serde_json::to_value(user("Ana")).unwrap())
            .await
            .unwrap();

        let mut renamed = user("Ana");
        renamed.friends.push("u2".to_string());
        let result = manager
            .update_user(&Selector::Name("Ana".into()), &renamed)
            .await
            .unwrap();
        assert_eq!(result.matched_count, 1);
        assert_eq!(result.modified_count, 1);

        let result = manager
            .delete_user(&Selector::Name("Ana".into()))
            .await
            .unwrap();
        assert_eq!(result.deleted_count, 1);

        let result = manager
            .delete_user(&Selector::Name("Ana".into()))
            .await
            .unwrap();
        assert_eq!(result.deleted_count, 0);
    }

    #[tokio::test]
    async fn test_store_failures_become_internal() {
        let manager = UserManager::new(Arc::new(FirestoreDb::new_offline()));

        let err = manager
            .delete_user(&Selector::Name("Ana".into()))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));

        let err = manager
            .update_user(&Selector::Id("bogus".into()), &user("Ana"))
            .await
            .unwrap_err();
        assert!(matches!(err, AppError::Internal(_)));
    }
}
