use async_trait::async_trait;

use crate::domain::{PostId, Revision, Timestamp};
use crate::error::RepoError;

/// Append-only store of post body snapshots.
#[async_trait]
pub trait RevisionHistoryStore: Send + Sync {
    /// All revisions of a post, most recent first.
    async fn list_revisions(&self, post_id: PostId) -> Result<Vec<Revision>, RepoError>;

    /// Record the body a post had before an update.
    async fn append(
        &self,
        post_id: PostId,
        content: &str,
        saved_at: Timestamp,
    ) -> Result<(), RepoError>;
}
