//! PostgreSQL category lookup.

use async_trait::async_trait;
use sea_orm::{DbConn, EntityTrait};

use forum_core::domain::{Category, CategoryId};
use forum_core::error::RepoError;
use forum_core::ports::CategoryLookup;

use super::entity::category::Entity as CategoryEntity;

/// Categories read from the `categories` table.
pub struct SeaOrmCategories {
    db: DbConn,
}

impl SeaOrmCategories {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }

    async fn find(&self, id: CategoryId) -> Result<Option<Category>, RepoError> {
        let row = CategoryEntity::find_by_id(id as i64)
            .one(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(row.map(Into::into))
    }
}

#[async_trait]
impl CategoryLookup for SeaOrmCategories {
    async fn exists(&self, id: CategoryId) -> Result<bool, RepoError> {
        Ok(self.find(id).await?.is_some())
    }

    async fn no_bounty_flag(&self, id: CategoryId) -> Result<bool, RepoError> {
        Ok(self.find(id).await?.is_some_and(|category| category.no_bounty))
    }
}
