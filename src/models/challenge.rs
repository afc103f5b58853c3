//! Challenge model.

use crate::db::collections;
use crate::models::Resource;
use crate::schemas::ChallengeSchema;
use serde::{Deserialize, Serialize};

/// A challenge ("reto") stored in the `retos` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Challenge {
    #[serde(rename = "nombre")]
    pub name: String,
    /// Route ids that make up the challenge
    #[serde(rename = "rutas")]
    pub routes: Vec<String>,
    #[serde(rename = "actividad")]
    pub activity: String,
    /// Target total to complete the challenge
    pub total: f64,
    /// Participating user ids
    #[serde(rename = "usuarios")]
    pub users: Vec<String>,
}

impl Resource for Challenge {
    const COLLECTION: &'static str = collections::CHALLENGES;
    type Schema = ChallengeSchema;
}
