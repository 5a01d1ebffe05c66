use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Categoria entity - a named tag classifying one or more posts.
///
/// Serialized keys follow the persisted table layout: `nombre` as-is and
/// the timestamp in camelCase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Categoria {
    pub id: i32,
    pub nombre: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// A categoria not yet persisted; the store assigns `id` and `createdAt`.
#[derive(Debug, Clone)]
pub struct NuevaCategoria {
    pub nombre: String,
}
