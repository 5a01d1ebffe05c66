//! Post entity for SeaORM.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "Post")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(column_type = "String(StringLen::N(30))", unique)]
    pub titulo: String,
    #[sea_orm(column_type = "Text")]
    pub contenido: String,
    #[sea_orm(column_name = "categoriaId")]
    pub categoria_id: i32,
    #[sea_orm(column_name = "createdAt")]
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::categoria::Entity",
        from = "Column::CategoriaId",
        to = "super::categoria::Column::Id"
    )]
    Categoria,
}

impl Related<super::categoria::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Categoria.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to the domain Post.
impl From<Model> for bitacora_core::domain::Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            titulo: model.titulo,
            contenido: model.contenido,
            categoria_id: model.categoria_id,
            created_at: model.created_at.into(),
        }
    }
}
