use async_trait::async_trait;

use crate::domain::{
    CambiosPost, Categoria, NuevaCategoria, NuevoPost, Post, PostDetalle, PostResumen,
};
use crate::error::RepoError;

/// Categoria gateway. Categories are looked up by their unique nombre and
/// inserted; they are never updated or deleted.
#[async_trait]
pub trait CategoriaRepository: Send + Sync {
    async fn find_by_nombre(&self, nombre: &str) -> Result<Option<Categoria>, RepoError>;

    /// Insert a new categoria and return it with its assigned id.
    async fn insert(&self, draft: NuevaCategoria) -> Result<Categoria, RepoError>;
}

/// Post gateway.
#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, RepoError>;

    /// Titulo is unique; used by the pre-insert duplicate check.
    async fn find_by_titulo(&self, titulo: &str) -> Result<Option<Post>, RepoError>;

    /// Insert a new post and return it with its assigned id.
    async fn insert(&self, draft: NuevoPost) -> Result<Post, RepoError>;

    /// Apply `cambios` to the post with the given id.
    async fn update(&self, id: i32, cambios: CambiosPost) -> Result<(), RepoError>;

    async fn delete(&self, id: i32) -> Result<(), RepoError>;

    /// All posts reduced to id/titulo plus each categoria's nombre.
    async fn list_resumen(&self) -> Result<Vec<PostResumen>, RepoError>;

    /// One post's detail view joined with its categoria.
    async fn find_detalle(&self, id: i32) -> Result<Option<PostDetalle>, RepoError>;

    /// Detail views of every post in one categoria.
    async fn list_by_categoria(&self, categoria_id: i32) -> Result<Vec<PostDetalle>, RepoError>;
}
