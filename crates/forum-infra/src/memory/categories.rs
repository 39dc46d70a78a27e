use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use forum_core::domain::{Category, CategoryId};
use forum_core::error::RepoError;
use forum_core::ports::CategoryLookup;

/// Category directory held in memory.
#[derive(Default)]
pub struct InMemoryCategories {
    categories: RwLock<HashMap<CategoryId, Category>>,
}

impl InMemoryCategories {
    pub fn new(categories: impl IntoIterator<Item = Category>) -> Self {
        Self {
            categories: RwLock::new(categories.into_iter().map(|c| (c.id, c)).collect()),
        }
    }

    pub async fn insert(&self, category: Category) {
        self.categories.write().await.insert(category.id, category);
    }
}

#[async_trait]
impl CategoryLookup for InMemoryCategories {
    async fn exists(&self, id: CategoryId) -> Result<bool, RepoError> {
        Ok(self.categories.read().await.contains_key(&id))
    }

    async fn no_bounty_flag(&self, id: CategoryId) -> Result<bool, RepoError> {
        Ok(self
            .categories
            .read()
            .await
            .get(&id)
            .is_some_and(|category| category.no_bounty))
    }
}
