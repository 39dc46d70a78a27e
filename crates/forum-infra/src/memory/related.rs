use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use forum_core::domain::{PollOption, PollVote, PostId, PostView, Reply, UserId, UserRef};
use forum_core::error::RepoError;
use forum_core::ports::{CollectionQuery, RelatedCollectionProvider};

#[derive(Default)]
struct PostCollections {
    replies: Vec<Reply>,
    views: Vec<PostView>,
    poll_options: Vec<PollOption>,
    poll_votes: Vec<PollVote>,
    subscribers: Vec<UserId>,
}

/// Replies, views, polls and subscriptions of every post, held in memory.
///
/// Entries are kept in insertion order; `newest_first` reverses it, except
/// for replies which are ordered by their own timestamp.
#[derive(Default)]
pub struct InMemoryRelatedCollections {
    posts: RwLock<HashMap<PostId, PostCollections>>,
    users: RwLock<HashMap<UserId, UserRef>>,
}

impl InMemoryRelatedCollections {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn add_user(&self, user: UserRef) {
        self.users.write().await.insert(user.id, user);
    }

    pub async fn add_reply(&self, reply: Reply) {
        let mut posts = self.posts.write().await;
        posts.entry(reply.post_id).or_default().replies.push(reply);
    }

    pub async fn record_view(&self, view: PostView) {
        let mut posts = self.posts.write().await;
        posts.entry(view.post_id).or_default().views.push(view);
    }

    pub async fn add_poll_option(&self, option: PollOption) {
        let mut posts = self.posts.write().await;
        posts.entry(option.post_id).or_default().poll_options.push(option);
    }

    pub async fn add_poll_vote(&self, vote: PollVote) {
        let mut posts = self.posts.write().await;
        posts.entry(vote.post_id).or_default().poll_votes.push(vote);
    }

    pub async fn subscribe(&self, post_id: PostId, user_id: UserId) {
        let mut posts = self.posts.write().await;
        posts.entry(post_id).or_default().subscribers.push(user_id);
    }

    async fn collect<T, F>(&self, post_id: PostId, query: CollectionQuery, select: F) -> Vec<T>
    where
        T: Clone,
        F: Fn(&PostCollections) -> &Vec<T>,
    {
        let posts = self.posts.read().await;
        let Some(collections) = posts.get(&post_id) else {
            return Vec::new();
        };

        let mut items = select(collections).clone();
        if query.newest_first {
            items.reverse();
        }
        if let Some(limit) = query.limit {
            items.truncate(limit);
        }
        items
    }
}

#[async_trait]
impl RelatedCollectionProvider for InMemoryRelatedCollections {
    async fn replies(
        &self,
        post_id: PostId,
        query: CollectionQuery,
    ) -> Result<Vec<Reply>, RepoError> {
        let mut replies = self
            .collect(post_id, CollectionQuery::all(), |c| &c.replies)
            .await;

        if let Some(user_id) = query.user_id {
            replies.retain(|reply| reply.author.id == user_id);
        }
        if query.newest_first {
            replies.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        }
        if let Some(limit) = query.limit {
            replies.truncate(limit);
        }
        Ok(replies)
    }

    /// `query.user_id` has nothing to match against; views carry an address.
    async fn views(
        &self,
        post_id: PostId,
        query: CollectionQuery,
    ) -> Result<Vec<PostView>, RepoError> {
        Ok(self.collect(post_id, query, |c| &c.views).await)
    }

    async fn poll_options(&self, post_id: PostId) -> Result<Vec<PollOption>, RepoError> {
        Ok(self
            .collect(post_id, CollectionQuery::all(), |c| &c.poll_options)
            .await)
    }

    async fn poll_votes(
        &self,
        post_id: PostId,
        query: CollectionQuery,
    ) -> Result<Vec<PollVote>, RepoError> {
        let unlimited = CollectionQuery {
            limit: None,
            ..query
        };
        let mut votes = self.collect(post_id, unlimited, |c| &c.poll_votes).await;

        if let Some(user_id) = query.user_id {
            votes.retain(|vote| vote.user_id == user_id);
        }
        if let Some(limit) = query.limit {
            votes.truncate(limit);
        }
        Ok(votes)
    }

    async fn count_subscribers(&self, post_id: PostId, user_id: UserId) -> Result<u64, RepoError> {
        let posts = self.posts.read().await;
        Ok(posts.get(&post_id).map_or(0, |c| {
            c.subscribers.iter().filter(|id| **id == user_id).count() as u64
        }))
    }

    async fn user(&self, user_id: UserId) -> Result<Option<UserRef>, RepoError> {
        Ok(self.users.read().await.get(&user_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: UserId) -> UserRef {
        UserRef {
            id,
            login: format!("user{id}"),
            email: format!("user{id}@example.org"),
        }
    }

    fn reply(id: u64, author: UserId, created_at: i64) -> Reply {
        Reply {
            id,
            post_id: 1,
            author: user(author),
            created_at,
        }
    }

    fn vote(user_id: UserId) -> PollVote {
        PollVote {
            post_id: 1,
            option_id: 1,
            user_id,
        }
    }

    #[tokio::test]
    async fn test_latest_replies_by_timestamp() {
        let related = InMemoryRelatedCollections::new();
        related.add_reply(reply(1, 2, 300)).await;
        related.add_reply(reply(2, 3, 100)).await;
        related.add_reply(reply(3, 4, 200)).await;

        let ids: Vec<u64> = related
            .replies(1, CollectionQuery::latest(2))
            .await
            .unwrap()
            .iter()
            .map(|r| r.id)
            .collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[tokio::test]
    async fn test_votes_filtered_by_user() {
        let related = InMemoryRelatedCollections::new();
        related.add_poll_vote(vote(5)).await;
        related.add_poll_vote(vote(6)).await;

        let mine = related.poll_votes(1, CollectionQuery::for_user(6)).await.unwrap();
        assert_eq!(mine, vec![vote(6)]);
        assert_eq!(related.poll_votes(1, CollectionQuery::all()).await.unwrap().len(), 2);
        assert!(related.poll_votes(2, CollectionQuery::all()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_subscriber_count() {
        let related = InMemoryRelatedCollections::new();
        related.subscribe(1, 5).await;
        related.subscribe(1, 6).await;

        assert_eq!(related.count_subscribers(1, 5).await.unwrap(), 1);
        assert_eq!(related.count_subscribers(1, 7).await.unwrap(), 0);
        assert_eq!(related.count_subscribers(2, 5).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_users_and_views() {
        let related = InMemoryRelatedCollections::new();
        related.add_user(user(1)).await;
        related
            .record_view(PostView {
                post_id: 1,
                address: "10.0.0.1".to_string(),
            })
            .await;

        assert_eq!(related.user(1).await.unwrap(), Some(user(1)));
        assert_eq!(related.user(2).await.unwrap(), None);
        assert_eq!(related.views(1, CollectionQuery::all()).await.unwrap().len(), 1);
        assert_eq!(related.views(1, CollectionQuery::for_user(9)).await.unwrap().len(), 1);
    }
}
