//! Post history entity for SeaORM.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "posts_history")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub posts_id: i64,
    #[sea_orm(column_type = "Text")]
    pub content: String,
    /// Epoch seconds.
    pub created_at: i64,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Revision.
impl From<Model> for forum_core::domain::Revision {
    fn from(model: Model) -> Self {
        Self {
            post_id: model.posts_id as u64,
            content: model.content,
            saved_at: model.created_at,
        }
    }
}
