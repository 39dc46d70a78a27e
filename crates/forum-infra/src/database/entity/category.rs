//! Category entity for SeaORM.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "categories")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    /// `Y` when the category opted out of bounties.
    pub no_bounty: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Conversion from SeaORM Model to Domain Category.
impl From<Model> for forum_core::domain::Category {
    fn from(model: Model) -> Self {
        Self {
            id: model.id as u64,
            name: model.name,
            no_bounty: model.no_bounty == "Y",
        }
    }
}
