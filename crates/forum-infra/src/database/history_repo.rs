//! PostgreSQL revision history.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DbConn, EntityTrait, QueryFilter, QueryOrder, Set};

use forum_core::domain::{PostId, Revision, Timestamp};
use forum_core::error::RepoError;
use forum_core::ports::RevisionHistoryStore;

use super::entity::post_history::{self, Entity as PostHistoryEntity};

/// Revision history stored in the `posts_history` table.
pub struct SeaOrmRevisionHistory {
    db: DbConn,
}

impl SeaOrmRevisionHistory {
    pub fn new(db: DbConn) -> Self {
        Self { db }
    }
}

#[async_trait]
impl RevisionHistoryStore for SeaOrmRevisionHistory {
    async fn list_revisions(&self, post_id: PostId) -> Result<Vec<Revision>, RepoError> {
        tracing::debug!(post_id, "Loading revision history");

        let rows = PostHistoryEntity::find()
            .filter(post_history::Column::PostsId.eq(post_id as i64))
            .order_by_desc(post_history::Column::CreatedAt)
            .order_by_desc(post_history::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn append(
        &self,
        post_id: PostId,
        content: &str,
        saved_at: Timestamp,
    ) -> Result<(), RepoError> {
        let row = post_history::ActiveModel {
            posts_id: Set(post_id as i64),
            content: Set(content.to_string()),
            created_at: Set(saved_at),
            ..Default::default()
        };

        row.insert(&self.db).await.map_err(|e| {
            let err_str = e.to_string();
            if err_str.contains("foreign key") {
                RepoError::Constraint(err_str)
            } else {
                RepoError::Query(err_str)
            }
        })?;

        Ok(())
    }
}
