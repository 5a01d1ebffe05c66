use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Post entity - a blog entry tied to exactly one categoria.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    pub id: i32,
    pub titulo: String,
    pub contenido: String,
    #[serde(rename = "categoriaId")]
    pub categoria_id: i32,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// A post not yet persisted; the store assigns `id` and `createdAt`.
#[derive(Debug, Clone)]
pub struct NuevoPost {
    pub titulo: String,
    pub contenido: String,
    pub categoria_id: i32,
}

/// Field changes applied by the update endpoint. `contenido` is only
/// written when the caller supplied it; `titulo` is never writable.
#[derive(Debug, Clone)]
pub struct CambiosPost {
    pub contenido: Option<String>,
    pub categoria_id: i32,
}

/// Joined categoria restricted to its `nombre`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoriaRef {
    pub nombre: String,
}

/// Reduced row served by the post listing: id and titulo plus the
/// categoria's nombre. The join is a LEFT JOIN, so `categoria` is nullable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostResumen {
    pub id: i32,
    pub titulo: String,
    pub categoria: Option<CategoriaRef>,
}

/// Row served by the detail queries: id, titulo, and contenido plus the
/// categoria's nombre.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PostDetalle {
    pub id: i32,
    pub titulo: String,
    pub contenido: String,
    pub categoria: Option<CategoriaRef>,
}
