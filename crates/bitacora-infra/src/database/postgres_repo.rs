//! PostgreSQL repository implementations.

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DbConn, DbErr, EntityTrait, NotSet, QueryFilter,
    Set,
};

use bitacora_core::domain::{
    CambiosPost, Categoria, CategoriaRef, NuevaCategoria, NuevoPost, Post, PostDetalle,
    PostResumen,
};
use bitacora_core::error::RepoError;
use bitacora_core::ports::{CategoriaRepository, PostRepository};

use super::entity::categoria::{self, Entity as CategoriaEntity};
use super::entity::post::{self, Entity as PostEntity};

/// Maps a driver error into the repository taxonomy, recognizing
/// unique-index violations so the handler's pre-check has a storage-level
/// backstop for check-then-act races.
fn map_db_err(e: DbErr) -> RepoError {
    let msg = e.to_string();
    if msg.contains("duplicate") || msg.contains("unique") {
        RepoError::Constraint(msg)
    } else {
        RepoError::Query(msg)
    }
}

fn query_err(e: DbErr) -> RepoError {
    RepoError::Query(e.to_string())
}

/// PostgreSQL categoria repository.
pub struct PostgresCategoriaRepository {
    db: DbConn,
}

impl PostgresCategoriaRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl CategoriaRepository for PostgresCategoriaRepository {
    async fn find_by_nombre(&self, nombre: &str) -> Result<Option<Categoria>, RepoError> {
        tracing::debug!(categoria = %nombre, "Finding categoria by nombre");

        let result = CategoriaEntity::find()
            .filter(categoria::Column::Nombre.eq(nombre))
            .one(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.map(Into::into))
    }

    async fn insert(&self, draft: NuevaCategoria) -> Result<Categoria, RepoError> {
        let row = categoria::ActiveModel {
            id: NotSet,
            nombre: Set(draft.nombre),
            created_at: Set(Utc::now().into()),
        };

        let model = row.insert(&self.db).await.map_err(map_db_err)?;
        Ok(model.into())
    }
}

/// PostgreSQL post repository.
pub struct PostgresPostRepository {
    db: DbConn,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, RepoError> {
        let result = PostEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.map(Into::into))
    }

    async fn find_by_titulo(&self, titulo: &str) -> Result<Option<Post>, RepoError> {
        let result = PostEntity::find()
            .filter(post::Column::Titulo.eq(titulo))
            .one(&self.db)
            .await
            .map_err(query_err)?;

        Ok(result.map(Into::into))
    }

    async fn insert(&self, draft: NuevoPost) -> Result<Post, RepoError> {
        let row = post::ActiveModel {
            id: NotSet,
            titulo: Set(draft.titulo),
            contenido: Set(draft.contenido),
            categoria_id: Set(draft.categoria_id),
            created_at: Set(Utc::now().into()),
        };

        let model = row.insert(&self.db).await.map_err(map_db_err)?;
        Ok(model.into())
    }

    async fn update(&self, id: i32, cambios: CambiosPost) -> Result<(), RepoError> {
        let mut row = post::ActiveModel {
            id: ActiveValue::Unchanged(id),
            categoria_id: Set(cambios.categoria_id),
            ..Default::default()
        };
        if let Some(contenido) = cambios.contenido {
            row.contenido = Set(contenido);
        }

        row.update(&self.db).await.map_err(|e| match e {
            DbErr::RecordNotUpdated => RepoError::NotFound,
            other => map_db_err(other),
        })?;

        Ok(())
    }

    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        let result = PostEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(query_err)?;

        if result.rows_affected == 0 {
            return Err(RepoError::NotFound);
        }

        Ok(())
    }

    async fn list_resumen(&self) -> Result<Vec<PostResumen>, RepoError> {
        let rows = PostEntity::find()
            .find_also_related(CategoriaEntity)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(rows
            .into_iter()
            .map(|(p, c)| PostResumen {
                id: p.id,
                titulo: p.titulo,
                categoria: c.map(|c| CategoriaRef { nombre: c.nombre }),
            })
            .collect())
    }

    async fn find_detalle(&self, id: i32) -> Result<Option<PostDetalle>, RepoError> {
        let row = PostEntity::find_by_id(id)
            .find_also_related(CategoriaEntity)
            .one(&self.db)
            .await
            .map_err(query_err)?;

        Ok(row.map(detalle_from_row))
    }

    async fn list_by_categoria(&self, categoria_id: i32) -> Result<Vec<PostDetalle>, RepoError> {
        let rows = PostEntity::find()
            .filter(post::Column::CategoriaId.eq(categoria_id))
            .find_also_related(CategoriaEntity)
            .all(&self.db)
            .await
            .map_err(query_err)?;

        Ok(rows.into_iter().map(detalle_from_row).collect())
    }
}

fn detalle_from_row((p, c): (post::Model, Option<categoria::Model>)) -> PostDetalle {
    PostDetalle {
        id: p.id,
        titulo: p.titulo,
        contenido: p.contenido,
        categoria: c.map(|c| CategoriaRef { nombre: c.nombre }),
    }
}
