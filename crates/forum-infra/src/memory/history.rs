use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use forum_core::domain::{PostId, Revision, Timestamp};
use forum_core::error::RepoError;
use forum_core::ports::RevisionHistoryStore;

/// Revision history kept in append order per post.
#[derive(Default)]
pub struct InMemoryRevisionHistory {
    revisions: RwLock<HashMap<PostId, Vec<Revision>>>,
}

impl InMemoryRevisionHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed from revisions given oldest first.
    pub fn with_revisions(revisions: impl IntoIterator<Item = Revision>) -> Self {
        let mut by_post: HashMap<PostId, Vec<Revision>> = HashMap::new();
        for revision in revisions {
            by_post.entry(revision.post_id).or_default().push(revision);
        }
        Self {
            revisions: RwLock::new(by_post),
        }
    }
}

#[async_trait]
impl RevisionHistoryStore for InMemoryRevisionHistory {
    async fn list_revisions(&self, post_id: PostId) -> Result<Vec<Revision>, RepoError> {
        let revisions = self.revisions.read().await;
        Ok(revisions
            .get(&post_id)
            .map(|list| list.iter().rev().cloned().collect())
            .unwrap_or_default())
    }

    async fn append(
        &self,
        post_id: PostId,
        content: &str,
        saved_at: Timestamp,
    ) -> Result<(), RepoError> {
        let mut revisions = self.revisions.write().await;
        revisions.entry(post_id).or_default().push(Revision {
            post_id,
            content: content.to_string(),
            saved_at,
        });
        tracing::debug!(post_id, saved_at, "Revision appended");
        Ok(())
    }
}
