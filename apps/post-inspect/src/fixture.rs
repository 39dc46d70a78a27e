//! JSON description of a post and everything stored around it.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use serde::Deserialize;

use forum_core::domain::{
    Category, PollOption, PollVote, Post, PostView, Reply, Revision, UserId, UserRef,
};
use forum_core::ports::{CacheInvalidation, Clock};
use forum_core::service::PostPorts;
use forum_infra::{InMemoryCategories, InMemoryRelatedCollections, InMemoryRevisionHistory};

#[derive(Debug, Deserialize)]
pub struct Fixture {
    pub post: Post,
    #[serde(default)]
    pub categories: Vec<Category>,
    /// Oldest first.
    #[serde(default)]
    pub revisions: Vec<Revision>,
    #[serde(default)]
    pub users: Vec<UserRef>,
    #[serde(default)]
    pub replies: Vec<Reply>,
    #[serde(default)]
    pub views: Vec<PostView>,
    #[serde(default)]
    pub poll_options: Vec<PollOption>,
    #[serde(default)]
    pub poll_votes: Vec<PollVote>,
    #[serde(default)]
    pub subscribers: Vec<UserId>,
}

impl Fixture {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("reading fixture {}", path.display()))?;
        Self::parse(&raw).with_context(|| format!("parsing fixture {}", path.display()))
    }

    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Load the stored collections into in-memory adapters.
    pub async fn into_ports(
        self,
        clock: Arc<dyn Clock>,
        cache: Arc<dyn CacheInvalidation>,
    ) -> (PostPorts, Post) {
        let related = InMemoryRelatedCollections::new();
        for user in self.users {
            related.add_user(user).await;
        }
        for reply in self.replies {
            related.add_reply(reply).await;
        }
        for view in self.views {
            related.record_view(view).await;
        }
        for option in self.poll_options {
            related.add_poll_option(option).await;
        }
        for vote in self.poll_votes {
            related.add_poll_vote(vote).await;
        }
        for user_id in self.subscribers {
            related.subscribe(self.post.id, user_id).await;
        }

        tracing::debug!(
            post_id = self.post.id,
            revisions = self.revisions.len(),
            "Fixture loaded"
        );

        let ports = PostPorts {
            categories: Arc::new(InMemoryCategories::new(self.categories)),
            related: Arc::new(related),
            history: Arc::new(InMemoryRevisionHistory::with_revisions(self.revisions)),
            cache,
            clock,
        };

        (ports, self.post)
    }
}
