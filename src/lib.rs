// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Sports tracker: REST backend for routes, users, groups and challenges.
//!
//! Each endpoint validates its JSON payload against a required-field schema,
//! performs one document store operation and returns the document or an
//! error envelope.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod schemas;
pub mod services;

use config::Config;
use db::DocumentStore;
use models::Resource;
use services::{Repository, UserManager};
use std::sync::Arc;

/// Shared application state.
pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn DocumentStore>,
    pub user_manager: UserManager,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn DocumentStore>) -> Self {
        Self {
            config,
            user_manager: UserManager::new(store.clone()),
            store,
        }
    }

    /// Repository for resource `R` over the shared store.
    pub fn repository<R: Resource>(&self) -> Repository<R> {
        Repository::new(self.store.clone())
    }
}
