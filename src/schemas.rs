// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Required-field schemas checked before documents are written.
//!
//! Each schema only declares which properties must be present. Field types
//! are not checked here; that happens when the payload is cast into its
//! model (see [`crate::models::from_payload`]).

use serde::{de::DeserializeOwned, Deserialize, Deserializer, Serialize};
use serde_json::{json, Value};
use std::collections::HashSet;
use validator::Validate;

/// A compiled required-field schema.
pub trait Schema: DeserializeOwned + Validate {
    /// Required properties, in declaration order.
    const REQUIRED: &'static [&'static str];
}

/// One schema violation, in the shape API clients already parse.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaIssue {
    pub instance_path: String,
    pub schema_path: String,
    pub keyword: String,
    pub params: Value,
    pub message: String,
}

impl SchemaIssue {
    pub fn missing_property(property: &str) -> Self {
        Self {
            instance_path: String::new(),
            schema_path: "#/required".to_string(),
            keyword: "required".to_string(),
            params: json!({ "missingProperty": property }),
            message: format!("must have required property '{}'", property),
        }
    }

    pub fn not_an_object() -> Self {
        Self {
            instance_path: String::new(),
            schema_path: "#/type".to_string(),
            keyword: "type".to_string(),
            params: json!({ "type": "object" }),
            message: "must be object".to_string(),
        }
    }
}

/// Check `payload` against schema `S`.
///
/// Returns every missing property, ordered as the schema declares them,
/// rather than stopping at the first one. A property that is present with a
/// `null` value is not missing.
pub fn validate<S: Schema>(payload: &Value) -> Result<(), Vec<SchemaIssue>> {
    if !payload.is_object() {
        return Err(vec![SchemaIssue::not_an_object()]);
    }

    let candidate: S =
        serde_json::from_value(payload.clone()).map_err(|_| vec![SchemaIssue::not_an_object()])?;

    let errors = match candidate.validate() {
        Ok(()) => return Ok(()),
        Err(errors) => errors,
    };

    // Raw identifiers (`r#final`) keep their prefix in validator's field names.
    let failed: HashSet<String> = errors
        .field_errors()
        .keys()
        .map(|field| field.trim_start_matches("r#").to_string())
        .collect();

    let issues: Vec<SchemaIssue> = S::REQUIRED
        .iter()
        .filter(|property| failed.contains(**property))
        .map(|property| SchemaIssue::missing_property(property))
        .collect();

    if issues.is_empty() {
        // validator reported something outside the declared list
        return Err(failed
            .iter()
            .map(|property| SchemaIssue::missing_property(property))
            .collect());
    }

    Err(issues)
}

// ─── Resource Schemas ────────────────────────────────────────

/// Any value under a present key, `null` included, is `Some`. Only an
/// absent key (via `serde(default)`) leaves the field `None`.
fn present<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Value>, D::Error> {
    Value::deserialize(deserializer).map(Some)
}

#[derive(Debug, Deserialize, Validate)]
pub struct RouteSchema {
    #[validate(required)]
    #[serde(default, deserialize_with = "present")]
    nombre: Option<Value>,
    #[validate(required)]
    #[serde(default, deserialize_with = "present")]
    inicio: Option<Value>,
    #[validate(required)]
    #[serde(default, deserialize_with = "present")]
    r#final: Option<Value>,
    #[validate(required)]
    #[serde(default, deserialize_with = "present")]
    longitud: Option<Value>,
    #[validate(required)]
    #[serde(default, deserialize_with = "present")]
    desnivel: Option<Value>,
    #[validate(required)]
    #[serde(default, deserialize_with = "present")]
    usuarios: Option<Value>,
    #[validate(required)]
    #[serde(default, deserialize_with = "present")]
    actividad: Option<Value>,
    #[validate(required)]
    #[serde(default, deserialize_with = "present")]
    calificacion: Option<Value>,
}

impl Schema for RouteSchema {
    const REQUIRED: &'static [&'static str] = &[
        "nombre",
        "inicio",
        "final",
        "longitud",
        "desnivel",
        "usuarios",
        "actividad",
        "calificacion",
    ];
}

#[derive(Debug, Deserialize, Validate)]
#[allow(non_snake_case)]
pub struct UserSchema {
    #[validate(required)]
    #[serde(default, deserialize_with = "present")]
    nombre: Option<Value>,
    #[validate(required)]
    #[serde(default, deserialize_with = "present")]
    actividad: Option<Value>,
    #[validate(required)]
    #[serde(default, deserialize_with = "present")]
    amigos: Option<Value>,
    #[validate(required)]
    #[serde(default, deserialize_with = "present")]
    grupos: Option<Value>,
    #[validate(required)]
    #[serde(default, deserialize_with = "present")]
    estadisticas: Option<Value>,
    #[validate(required)]
    #[serde(default, deserialize_with = "present")]
    rutas: Option<Value>,
    #[validate(required)]
    #[serde(default, deserialize_with = "present")]
    retos: Option<Value>,
    #[validate(required)]
    #[serde(default, deserialize_with = "present")]
    historicoRutas: Option<Value>,
}

impl Schema for UserSchema {
    const REQUIRED: &'static [&'static str] = &[
        "nombre",
        "actividad",
        "amigos",
        "grupos",
        "estadisticas",
        "rutas",
        "retos",
        "historicoRutas",
    ];
}

#[derive(Debug, Deserialize, Validate)]
#[allow(non_snake_case)]
pub struct GroupSchema {
    #[validate(required)]
    #[serde(default, deserialize_with = "present")]
    nombre: Option<Value>,
    #[validate(required)]
    #[serde(default, deserialize_with = "present")]
    miembrosID: Option<Value>,
    #[validate(required)]
    #[serde(default, deserialize_with = "present")]
    propietarioID: Option<Value>,
    #[validate(required)]
    #[serde(default, deserialize_with = "present")]
    estadisticas: Option<Value>,
    #[validate(required)]
    #[serde(default, deserialize_with = "present")]
    ranking: Option<Value>,
    #[validate(required)]
    #[serde(default, deserialize_with = "present")]
    rutasFav: Option<Value>,
    #[validate(required)]
    #[serde(default, deserialize_with = "present")]
    historicoRutas: Option<Value>,
}

impl Schema for GroupSchema {
    const REQUIRED: &'static [&'static str] = &[
        "nombre",
        "miembrosID",
        "propietarioID",
        "estadisticas",
        "ranking",
        "rutasFav",
        "historicoRutas",
    ];
}

#[derive(Debug, Deserialize, Validate)]
pub struct ChallengeSchema {
    #[validate(required)]
    #[serde(default, deserialize_with = "present")]
    nombre: Option<Value>,
    #[validate(required)]
    #[serde(default, deserialize_with = "present")]
    rutas: Option<Value>,
    #[validate(required)]
    #[serde(default, deserialize_with = "present")]
    actividad: Option<Value>,
    #[validate(required)]
    #[serde(default, deserialize_with = "present")]
    total: Option<Value>,
    #[validate(required)]
    #[serde(default, deserialize_with = "present")]
    usuarios: Option<Value>,
}

impl Schema for ChallengeSchema {
    const REQUIRED: &'static [&'static str] =
        &["nombre", "rutas", "actividad", "total", "usuarios"];
}
