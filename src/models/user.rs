//! User model for storage and API.

use crate::db::collections;
use crate::models::Resource;
use crate::schemas::UserSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// User profile stored in the `users` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    #[serde(rename = "nombre")]
    pub name: String,
    /// Preferred activity type
    #[serde(rename = "actividad")]
    pub activity: String,
    /// Friend user ids
    #[serde(rename = "amigos")]
    pub friends: Vec<String>,
    /// Group ids
    #[serde(rename = "grupos")]
    pub groups: Vec<String>,
    /// Training statistics (free-form)
    #[serde(rename = "estadisticas")]
    pub stats: Value,
    /// Favourite route ids
    #[serde(rename = "rutas")]
    pub routes: Vec<String>,
    /// Active challenge ids
    #[serde(rename = "retos")]
    pub challenges: Vec<String>,
    /// Route id -> completion dates
    #[serde(rename = "historicoRutas")]
    pub route_history: BTreeMap<String, Vec<String>>,
}

impl Resource for User {
    const COLLECTION: &'static str = collections::USERS;
    type Schema = UserSchema;
}
