//! Data Transfer Objects - request/response bodies per route.
//!
//! Body fields are all optional: presence checks happen in the handlers so
//! a missing field produces the route's own validation error instead of a
//! deserialization failure.

use serde::{Deserialize, Serialize};

/// Body of `POST /post`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CrearPostRequest {
    pub titulo: Option<String>,
    pub contenido: Option<String>,
    pub categoria: Option<String>,
}

/// Body of `PUT /post/{id}`. `titulo` is accepted but never persisted; it
/// only flows back out through the response echo.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActualizarPostRequest {
    pub titulo: Option<String>,
    pub contenido: Option<String>,
    pub categoria: Option<String>,
}

/// Body of `POST /categoria`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CrearCategoriaRequest {
    pub nombre: Option<String>,
}

/// Payload returned by `PUT /post/{id}`: an echo of the request fields plus
/// the resolved categoria id, not the stored row. Absent request fields are
/// dropped from the JSON.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostActualizadoData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub titulo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contenido: Option<String>,
    #[serde(rename = "categoriaId")]
    pub categoria_id: i32,
}
