//! Application state - shared across all handlers.

use std::sync::Arc;

use bitacora_core::domain::{
    CambiosPost, Categoria, NuevaCategoria, NuevoPost, Post, PostDetalle, PostResumen,
};
use bitacora_core::error::RepoError;
use bitacora_core::ports::{CategoriaRepository, PostRepository};
use bitacora_infra::database::{
    self, DatabaseConfig, PostgresCategoriaRepository, PostgresPostRepository,
};

/// Shared application state: the repository handles injected into every
/// handler. No global singleton; handlers receive this explicitly.
#[derive(Clone)]
pub struct AppState {
    pub posts: Arc<dyn PostRepository>,
    pub categorias: Arc<dyn CategoriaRepository>,
}

impl AppState {
    /// Connect to the store, sync the schema, and wire the repositories.
    ///
    /// A missing or failed database connection is logged and the server
    /// still starts listening; every request then fails at the data-access
    /// layer instead of killing the process.
    pub async fn new(db_config: Option<&DatabaseConfig>) -> Self {
        let Some(config) = db_config else {
            tracing::warn!("DATABASE_URL not set. Requests will fail until it is configured.");
            return Self::unavailable();
        };

        match database::connect(config).await {
            Ok(db) => {
                if let Err(e) = database::sync_schema(&db).await {
                    tracing::error!("Schema sync failed: {}", e);
                }

                tracing::info!("Application state initialized");

                Self {
                    posts: Arc::new(PostgresPostRepository::new(db.clone())),
                    categorias: Arc::new(PostgresCategoriaRepository::new(db)),
                }
            }
            Err(e) => {
                tracing::error!("Failed to connect to database: {}", e);
                Self::unavailable()
            }
        }
    }

    fn unavailable() -> Self {
        Self {
            posts: Arc::new(UnavailableRepository),
            categorias: Arc::new(UnavailableRepository),
        }
    }
}

/// Stand-in used when the store is unreachable at startup; every call
/// surfaces a connection error, so requests fail like any other
/// data-access error while the listener stays up.
pub(crate) struct UnavailableRepository;

fn unavailable() -> RepoError {
    RepoError::Connection("database unavailable".to_string())
}

#[async_trait::async_trait]
impl CategoriaRepository for UnavailableRepository {
    async fn find_by_nombre(&self, _nombre: &str) -> Result<Option<Categoria>, RepoError> {
        Err(unavailable())
    }

    async fn insert(&self, _draft: NuevaCategoria) -> Result<Categoria, RepoError> {
        Err(unavailable())
    }
}

#[async_trait::async_trait]
impl PostRepository for UnavailableRepository {
    async fn find_by_id(&self, _id: i32) -> Result<Option<Post>, RepoError> {
        Err(unavailable())
    }

    async fn find_by_titulo(&self, _titulo: &str) -> Result<Option<Post>, RepoError> {
        Err(unavailable())
    }

    async fn insert(&self, _draft: NuevoPost) -> Result<Post, RepoError> {
        Err(unavailable())
    }

    async fn update(&self, _id: i32, _cambios: CambiosPost) -> Result<(), RepoError> {
        Err(unavailable())
    }

    async fn delete(&self, _id: i32) -> Result<(), RepoError> {
        Err(unavailable())
    }

    async fn list_resumen(&self) -> Result<Vec<PostResumen>, RepoError> {
        Err(unavailable())
    }

    async fn find_detalle(&self, _id: i32) -> Result<Option<PostDetalle>, RepoError> {
        Err(unavailable())
    }

    async fn list_by_categoria(&self, _categoria_id: i32) -> Result<Vec<PostDetalle>, RepoError> {
        Err(unavailable())
    }
}
