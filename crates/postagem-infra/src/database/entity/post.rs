//! Post entity for SeaORM.
//!
//! The table has foreign keys to `usuario` and `categoria` only; there is no
//! `genero_id` column and no genre relation.

use sea_orm::entity::prelude::*;
use sea_orm::{NotSet, Set};

use postagem_core::domain::{NewPost, Post};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "postagem")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    #[sea_orm(column_name = "legenda", column_type = "Text")]
    pub caption: String,
    #[sea_orm(column_name = "descricao", column_type = "Text")]
    pub description: String,
    #[sea_orm(column_name = "conteudo")]
    pub content: Option<Vec<u8>>,
    #[sea_orm(column_name = "data_cadastro")]
    pub created_at: DateTimeWithTimeZone,
    #[sea_orm(column_name = "usuario_id")]
    pub user_id: i64,
    #[sea_orm(column_name = "categoria_id")]
    pub category_id: i64,
    #[sea_orm(column_name = "status_postagem")]
    pub status: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::user::Entity",
        from = "Column::UserId",
        to = "super::user::Column::Id"
    )]
    User,
    #[sea_orm(
        belongs_to = "super::category::Entity",
        from = "Column::CategoryId",
        to = "super::category::Column::Id"
    )]
    Category,
}

impl Related<super::user::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<super::category::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Category.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Post.
impl From<Model> for Post {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            caption: model.caption,
            description: model.description,
            content: model.content,
            created_at: model.created_at.into(),
            user_id: model.user_id,
            category_id: model.category_id,
            status: model.status,
        }
    }
}

/// Conversion from a not-yet-persisted post; the id is left to the database.
impl From<NewPost> for ActiveModel {
    fn from(post: NewPost) -> Self {
        Self {
            id: NotSet,
            caption: Set(post.caption),
            description: Set(post.description),
            content: Set(post.content),
            created_at: Set(post.created_at.into()),
            user_id: Set(post.user_id),
            category_id: Set(post.category_id),
            status: Set(post.status),
        }
    }
}
