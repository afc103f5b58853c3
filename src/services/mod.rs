// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - data access layer.

pub mod repository;
pub mod users;

pub use repository::{DeleteResult, Repository, Selector, UpdateResult, Updated};
pub use users::UserManager;
