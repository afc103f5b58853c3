// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Group model.

use crate::db::collections;
use crate::models::Resource;
use crate::schemas::GroupSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Training group stored in the `groups` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "miembrosID")]
    pub member_ids: Vec<String>,
    #[serde(rename = "propietarioID")]
    pub owner_id: String,
    /// Aggregate training statistics (free-form)
    #[serde(rename = "estadisticas")]
    pub stats: Value,
    /// Member ids ordered by ranking
    pub ranking: Vec<String>,
    #[serde(rename = "rutasFav")]
    pub favorite_routes: Vec<String>,
    #[serde(rename = "historicoRutas")]
    pub route_history: BTreeMap<String, Vec<String>>,
}

impl Resource for Group {
    const COLLECTION: &'static str = collections::GROUPS;
    type Schema = GroupSchema;
}
