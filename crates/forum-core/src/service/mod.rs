//! Post service - wires the ports to the aggregate and the pure policies.
//!
//! The service fetches related collections, reads the clock, and hands
//! materialized data to [`Post`] and [`crate::policy`]. It owns no state of
//! its own beyond its collaborators, so one instance can serve any number of
//! concurrent requests.

mod facts;
mod invalidation;
mod observer;


use std::sync::Arc;

use crate::diff::{self, DifferenceBaseline, Hunk, SideBySideDiff};
use crate::domain::{NewPost, Post, PostId, UserId, UserRef};
use crate::error::DomainError;
use crate::policy::{Bounty, participants};
use crate::ports::{
    CacheInvalidation, CategoryLookup, Clock, CollectionQuery, RelatedCollectionProvider,
    RevisionHistoryStore,
};

pub use facts::PostFacts;
pub use invalidation::{SIDEBAR_KEY, cache_keys};
pub use observer::{PostEvent, PostObserver};

/// Tunables of the post policies.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PolicyConfig {
    pub difference_baseline: DifferenceBaseline,
    /// Unchanged rows kept around each change when grouping into hunks.
    pub diff_context_lines: usize,
}

impl Default for PolicyConfig {
    fn default() -> Self {
        Self {
            difference_baseline: DifferenceBaseline::default(),
            diff_context_lines: 3,
        }
    }
}

/// Collaborators the service depends on.
#[derive(Clone)]
pub struct PostPorts {
    pub categories: Arc<dyn CategoryLookup>,
    pub related: Arc<dyn RelatedCollectionProvider>,
    pub history: Arc<dyn RevisionHistoryStore>,
    pub cache: Arc<dyn CacheInvalidation>,
    pub clock: Arc<dyn Clock>,
}

#[derive(Clone)]
pub struct PostService {
    ports: PostPorts,
    observers: Vec<Arc<dyn PostObserver>>,
    config: PolicyConfig,
}

impl PostService {
    pub fn new(ports: PostPorts, config: PolicyConfig) -> Self {
        Self {
            ports,
            observers: Vec::new(),
            config,
        }
    }

    /// Register an observer; observers run in the order they were added.
    pub fn with_observer(mut self, observer: Arc<dyn PostObserver>) -> Self {
        self.observers.push(observer);
        self
    }

    pub fn config(&self) -> PolicyConfig {
        self.config
    }

    /// Current time according to the injected clock.
    pub fn now(&self) -> i64 {
        self.ports.clock.now()
    }

    /// Validate and build a new post stamped with the current time.
    ///
    /// The only rejected input is a category that does not exist. The post
    /// has no id yet; call [`PostService::created`] once storage assigns one.
    pub async fn create(&self, draft: NewPost) -> Result<Post, DomainError> {
        let category_id = draft.category_id;
        if category_id == 0 || !self.ports.categories.exists(category_id).await? {
            tracing::debug!(category_id, "Rejected post with unknown category");
            return Err(DomainError::Validation(
                "The category is not valid".to_string(),
            ));
        }

        Ok(Post::new(draft, self.now()))
    }

    /// Record the id storage gave a freshly created post, then announce it
    /// and drop the fragments it affects.
    pub async fn created(&self, post: &mut Post, id: PostId) -> Result<(), DomainError> {
        if !post.assign_id(id) {
            return Err(DomainError::Validation(format!(
                "Cannot assign id {id} to post {}",
                post.id
            )));
        }

        tracing::debug!(post_id = id, "Post persisted");
        self.notify(PostEvent::Created { post_id: id });
        self.clear_cache(post).await;

        Ok(())
    }

    /// Replace the post body, archiving the previous one first.
    ///
    /// Returns `false` without touching anything when the body is unchanged.
    /// If the history store fails the post is left as it was.
    pub async fn update_content(
        &self,
        post: &mut Post,
        content: impl Into<String>,
    ) -> Result<bool, DomainError> {
        let mut updated = post.clone();
        let Some(revision) = updated.revise(content, self.now()) else {
            return Ok(false);
        };

        self.ports
            .history
            .append(revision.post_id, &revision.content, revision.saved_at)
            .await?;
        *post = updated;

        tracing::debug!(post_id = post.id, "Post content updated");
        self.notify(PostEvent::ContentUpdated { post_id: post.id });
        self.clear_cache(post).await;

        Ok(true)
    }

    /// Hide the post. Repeating it is a no-op and emits nothing.
    pub async fn soft_delete(&self, post: &mut Post) {
        if !post.soft_delete() {
            return;
        }

        tracing::debug!(post_id = post.id, "Post soft-deleted");
        self.notify(PostEvent::SoftDeleted { post_id: post.id });
        self.clear_cache(post).await;
    }

    /// Drop every cached fragment of the post. Failures are logged only.
    pub async fn clear_cache(&self, post: &Post) {
        if post.id == 0 {
            return;
        }

        for key in cache_keys(post.id) {
            if let Err(e) = self.ports.cache.delete(&key).await {
                tracing::warn!(post_id = post.id, key = %key, error = %e, "Cache invalidation failed");
            }
        }
    }

    pub async fn can_have_bounty(&self, post: &Post) -> Result<bool, DomainError> {
        let no_bounty = self.ports.categories.no_bounty_flag(post.category_id).await?;
        Ok(post.can_have_bounty(no_bounty, self.now()))
    }

    /// Bounty amount by age only; check [`PostService::can_have_bounty`] first.
    pub fn bounty(&self, post: &Post) -> Option<Bounty> {
        post.bounty(self.now())
    }

    pub fn human_created_at(&self, post: &Post) -> String {
        post.human_created_at(self.now())
    }

    pub fn human_edited_at(&self, post: &Post) -> Option<String> {
        post.human_edited_at(self.now())
    }

    pub fn human_modified_at(&self, post: &Post) -> Option<String> {
        post.human_modified_at(self.now())
    }

    pub async fn has_poll(&self, post: &Post) -> Result<bool, DomainError> {
        let options = self.ports.related.poll_options(post.id).await?;
        Ok(post.has_poll(&options))
    }

    /// Whether the user voted. An absent or zero user short-circuits to
    /// `false` without querying votes.
    pub async fn is_participated_in_poll(
        &self,
        post: &Post,
        user_id: Option<UserId>,
    ) -> Result<bool, DomainError> {
        let Some(user_id) = user_id.filter(|id| *id != 0) else {
            return Ok(false);
        };

        let votes = self
            .ports
            .related
            .poll_votes(post.id, CollectionQuery::for_user(user_id))
            .await?;
        Ok(post.is_participated_in_poll(Some(user_id), &votes))
    }

    pub async fn is_start_voting(&self, post: &Post) -> Result<bool, DomainError> {
        let votes = self
            .ports
            .related
            .poll_votes(post.id, CollectionQuery::all())
            .await?;
        Ok(post.is_start_voting(&votes))
    }

    pub async fn is_subscribed(&self, post: &Post, user_id: UserId) -> Result<bool, DomainError> {
        let count = self
            .ports
            .related
            .count_subscribers(post.id, user_id)
            .await?;
        Ok(post.is_subscribed(count))
    }

    /// Whether a view from `address` was already recorded.
    pub async fn is_viewed_by(&self, post: &Post, address: &str) -> Result<bool, DomainError> {
        let views = self
            .ports
            .related
            .views(post.id, CollectionQuery::all())
            .await?;
        Ok(views.iter().any(|view| view.address == address))
    }

    /// The author and the authors of the latest replies.
    pub async fn recent_users(&self, post: &Post) -> Result<Vec<UserRef>, DomainError> {
        let author = self.ports.related.user(post.author_id).await?;
        let replies = self
            .ports
            .related
            .replies(
                post.id,
                CollectionQuery::latest(participants::RECENT_REPLIES),
            )
            .await?;
        Ok(participants::recent_users(author.as_ref(), &replies))
    }

    /// Difference between the post body and its history, if it has any.
    pub async fn post_difference(
        &self,
        post: &Post,
    ) -> Result<Option<SideBySideDiff>, DomainError> {
        let revisions = self.ports.history.list_revisions(post.id).await?;
        Ok(diff::post_difference(
            post,
            &revisions,
            self.config.difference_baseline,
        ))
    }

    /// Changed regions of [`PostService::post_difference`], with the
    /// configured number of context rows.
    pub async fn difference_hunks(&self, post: &Post) -> Result<Option<Vec<Hunk>>, DomainError> {
        Ok(self
            .post_difference(post)
            .await?
            .map(|diff| diff.hunks(self.config.diff_context_lines)))
    }

    /// Evaluate every derived fact for `viewer` against a single clock reading.
    pub async fn facts(
        &self,
        post: &Post,
        viewer: Option<UserId>,
    ) -> Result<PostFacts, DomainError> {
        let now = self.now();
        let viewer = viewer.filter(|id| *id != 0);

        let options = self.ports.related.poll_options(post.id).await?;
        let votes = self
            .ports
            .related
            .poll_votes(post.id, CollectionQuery::all())
            .await?;
        let no_bounty = self.ports.categories.no_bounty_flag(post.category_id).await?;
        let is_subscribed = match viewer {
            Some(user_id) => self.is_subscribed(post, user_id).await?,
            None => false,
        };

        let can_have_bounty = post.can_have_bounty(no_bounty, now);

        Ok(PostFacts {
            evaluated_at: now,
            human_created_at: post.human_created_at(now),
            human_edited_at: post.human_edited_at(now),
            human_modified_at: post.human_modified_at(now),
            utc_modified_at: post.utc_modified_at(),
            human_number_views: post.human_number_views(),
            has_replies: post.has_replies(),
            has_accepted_answer: post.has_accepted_answer(),
            can_have_bounty,
            bounty: can_have_bounty.then(|| post.bounty(now)).flatten(),
            has_poll: post.has_poll(&options),
            is_start_voting: post.is_start_voting(&votes),
            is_participated_in_poll: post.is_participated_in_poll(viewer, &votes),
            is_subscribed,
            recent_users: self.recent_users(post).await?,
        })
    }

    fn notify(&self, event: PostEvent) {
        for observer in &self.observers {
            observer.on_event(&event);
        }
    }
}
