use async_trait::async_trait;

use crate::domain::{PollOption, PollVote, PostId, PostView, Reply, UserId, UserRef};
use crate::error::RepoError;

/// Filtering and ordering applied to a related collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CollectionQuery {
    /// Only entries belonging to this user.
    pub user_id: Option<UserId>,
    /// At most this many entries.
    pub limit: Option<usize>,
    /// Most recent entries first instead of storage order.
    pub newest_first: bool,
}

impl CollectionQuery {
    pub fn all() -> Self {
        Self::default()
    }

    pub fn for_user(user_id: UserId) -> Self {
        Self {
            user_id: Some(user_id),
            ..Self::default()
        }
    }

    pub fn latest(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            newest_first: true,
            ..Self::default()
        }
    }
}

/// Materialized collections hanging off a post.
///
/// The aggregate never queries these itself; callers fetch and pass them in.
#[async_trait]
pub trait RelatedCollectionProvider: Send + Sync {
    async fn replies(&self, post_id: PostId, query: CollectionQuery)
    -> Result<Vec<Reply>, RepoError>;

    /// Views are keyed by address, not by user: `query.user_id` is ignored.
    async fn views(&self, post_id: PostId, query: CollectionQuery)
    -> Result<Vec<PostView>, RepoError>;

    async fn poll_options(&self, post_id: PostId) -> Result<Vec<PollOption>, RepoError>;

    async fn poll_votes(
        &self,
        post_id: PostId,
        query: CollectionQuery,
    ) -> Result<Vec<PollVote>, RepoError>;

    /// Number of subscriptions `user_id` holds on the post.
    async fn count_subscribers(&self, post_id: PostId, user_id: UserId) -> Result<u64, RepoError>;

    /// Public identity of a user, e.g. the post author.
    async fn user(&self, user_id: UserId) -> Result<Option<UserRef>, RepoError>;
}
