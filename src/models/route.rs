// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Route (track) model.

use crate::db::collections;
use crate::models::Resource;
use crate::schemas::RouteSchema;
use serde::{Deserialize, Serialize};

/// A point on the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Geolocation {
    #[serde(rename = "latitud")]
    pub latitude: f64,
    #[serde(rename = "longitud")]
    pub longitude: f64,
}

/// A recorded path, stored in the `tracks` collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Route name (unique)
    #[serde(rename = "nombre")]
    pub name: String,
    #[serde(rename = "inicio")]
    pub start: Geolocation,
    #[serde(rename = "final")]
    pub end: Geolocation,
    /// Length of the route
    #[serde(rename = "longitud")]
    pub distance: f64,
    /// Accumulated elevation gain
    #[serde(rename = "desnivel")]
    pub elevation_gain: f64,
    /// Ids of users who completed the route
    #[serde(rename = "usuarios")]
    pub participants: Vec<String>,
    /// Activity type ("running", "bicicleta", ...)
    #[serde(rename = "actividad")]
    pub activity: String,
    /// Average user rating
    #[serde(rename = "calificacion")]
    pub rating: f64,
}

impl Resource for Route {
    const COLLECTION: &'static str = collections::TRACKS;
    const UNIQUE_FIELDS: &'static [&'static str] = &["nombre"];
    type Schema = RouteSchema;
}
