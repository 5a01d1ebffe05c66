//! Non-destructive schema sync.
//!
//! Creates the `Categoria` and `Post` tables (with the unique indexes and
//! the foreign key from the entity definitions) when absent; existing
//! tables and their data are left untouched.

use sea_orm::{ConnectionTrait, DbConn, DbErr, Schema};

use super::entity::{categoria, post};

pub async fn sync_schema(db: &DbConn) -> Result<(), DbErr> {
    let backend = db.get_database_backend();
    let schema = Schema::new(backend);

    // Categoria first: Post carries the foreign key.
    let mut categorias = schema.create_table_from_entity(categoria::Entity);
    db.execute(backend.build(categorias.if_not_exists())).await?;

    let mut posts = schema.create_table_from_entity(post::Entity);
    db.execute(backend.build(posts.if_not_exists())).await?;

    tracing::info!("Schema synchronized (tables created if absent)");

    Ok(())
}
