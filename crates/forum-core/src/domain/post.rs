use serde::{Deserialize, Serialize};

use super::{CategoryId, PollOption, PollVote, PostId, Revision, Timestamp, UserId};
use crate::policy::{bounty, humanize, poll};

/// Whether a post is pinned to the top of its listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sticked {
    #[serde(rename = "Y")]
    Stuck,
    #[default]
    #[serde(rename = "N")]
    Unstuck,
}

/// Whether one of the replies was accepted as the answer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum AcceptedAnswer {
    #[serde(rename = "Y")]
    Yes,
    #[default]
    #[serde(rename = "N")]
    No,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostStatus {
    #[default]
    Open,
    Closed,
}

/// Fields supplied by the author when a post is first written.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewPost {
    pub author_id: UserId,
    pub category_id: CategoryId,
    pub title: String,
    pub slug: String,
    pub content: String,
}

/// Post aggregate - a discussion thread's opening entry.
///
/// Counters are unsigned so they can never go below zero. `deleted` is a
/// visibility flag only; no field is cleared when a post is soft-deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: PostId,
    pub author_id: UserId,
    pub category_id: CategoryId,
    pub title: String,
    pub slug: String,
    pub content: String,
    pub number_views: u64,
    pub number_replies: u64,
    pub votes_up: u64,
    pub votes_down: u64,
    pub sticked: Sticked,
    pub status: PostStatus,
    pub locked: bool,
    pub deleted: bool,
    pub accepted_answer: AcceptedAnswer,
    pub created_at: Timestamp,
    pub modified_at: Timestamp,
    pub edited_at: Option<Timestamp>,
}

impl Post {
    /// Build a fresh, unsaved post. `created_at` and `modified_at` both start at `now`.
    ///
    /// The id stays `0` until storage assigns one through [`Post::assign_id`].
    pub fn new(draft: NewPost, now: Timestamp) -> Self {
        Self {
            id: 0,
            author_id: draft.author_id,
            category_id: draft.category_id,
            title: draft.title,
            slug: draft.slug,
            content: draft.content,
            number_views: 0,
            number_replies: 0,
            votes_up: 0,
            votes_down: 0,
            sticked: Sticked::Unstuck,
            status: PostStatus::Open,
            locked: false,
            deleted: false,
            accepted_answer: AcceptedAnswer::No,
            created_at: now,
            modified_at: now,
            edited_at: None,
        }
    }

    /// Set the storage id. Returns `false` and leaves the post untouched if
    /// an id was already assigned.
    pub fn assign_id(&mut self, id: PostId) -> bool {
        if self.id != 0 || id == 0 {
            return false;
        }
        self.id = id;
        true
    }

    /// Mark the post as deleted. Returns whether anything changed.
    pub fn soft_delete(&mut self) -> bool {
        if self.deleted {
            return false;
        }
        self.deleted = true;
        true
    }

    /// Replace the body, returning a snapshot of the previous one.
    ///
    /// Unchanged content yields `None` and leaves every field as it was.
    pub fn revise(&mut self, content: impl Into<String>, now: Timestamp) -> Option<Revision> {
        let content = content.into();
        if content == self.content {
            return None;
        }

        let previous = std::mem::replace(&mut self.content, content);
        self.edited_at = Some(now);
        self.touch(now);

        Some(Revision {
            post_id: self.id,
            content: previous,
            saved_at: now,
        })
    }

    /// Advance `modified_at` to `now`; it never moves backwards.
    pub fn touch(&mut self, now: Timestamp) {
        self.modified_at = self.modified_at.max(now);
    }

    pub fn has_replies(&self) -> bool {
        self.number_replies > 0
    }

    pub fn has_accepted_answer(&self) -> bool {
        self.accepted_answer == AcceptedAnswer::Yes
    }

    pub fn is_sticked(&self) -> bool {
        self.sticked == Sticked::Stuck
    }

    /// Up-votes minus down-votes, clamped to the `i64` range.
    pub fn vote_balance(&self) -> i64 {
        let balance = i128::from(self.votes_up) - i128::from(self.votes_down);
        balance.clamp(i128::from(i64::MIN), i128::from(i64::MAX)) as i64
    }

    /// Age in seconds at `now`. Negative for posts dated in the future.
    pub fn age(&self, now: Timestamp) -> i64 {
        now.saturating_sub(self.created_at)
    }

    pub fn human_created_at(&self, now: Timestamp) -> String {
        humanize::humanize(self.created_at, now)
    }

    /// `None` while the post was never edited.
    pub fn human_edited_at(&self, now: Timestamp) -> Option<String> {
        self.edited_at.map(|edited_at| humanize::humanize(edited_at, now))
    }

    /// `None` while the post was never modified after creation.
    pub fn human_modified_at(&self, now: Timestamp) -> Option<String> {
        if self.modified_at == self.created_at {
            return None;
        }
        Some(humanize::humanize(self.modified_at, now))
    }

    pub fn human_number_views(&self) -> String {
        humanize::humanize_view_count(self.number_views)
    }

    /// W3C datetime of the last modification, as used in sitemaps.
    pub fn utc_modified_at(&self) -> String {
        humanize::w3c_datetime(self.modified_at)
    }

    /// See [`bounty::can_have_bounty`].
    pub fn can_have_bounty(&self, category_no_bounty: bool, now: Timestamp) -> bool {
        bounty::can_have_bounty(self, category_no_bounty, now)
    }

    /// See [`bounty::compute_bounty`].
    pub fn bounty(&self, now: Timestamp) -> Option<bounty::Bounty> {
        bounty::compute_bounty(self, now)
    }

    pub fn has_poll(&self, options: &[PollOption]) -> bool {
        poll::has_poll(options)
    }

    pub fn is_participated_in_poll(&self, user_id: Option<UserId>, votes: &[PollVote]) -> bool {
        poll::is_participated(user_id, votes)
    }

    pub fn is_start_voting(&self, votes: &[PollVote]) -> bool {
        poll::is_start_voting(votes)
    }

    pub fn is_subscribed(&self, subscriber_count: u64) -> bool {
        subscriber_count > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> NewPost {
        NewPost {
            author_id: 7,
            category_id: 3,
            title: "Routing question".to_string(),
            slug: "routing-question".to_string(),
            content: "first".to_string(),
        }
    }

    #[test]
    fn test_new_post_starts_unmodified() {
        let post = Post::new(draft(), 1_700_000_000);
        assert_eq!(post.created_at, 1_700_000_000);
        assert_eq!(post.modified_at, post.created_at);
        assert_eq!(post.edited_at, None);
        assert_eq!(post.id, 0);
        assert!(!post.deleted);
        assert_eq!(post.human_modified_at(1_700_000_500), None);
    }

    #[test]
    fn test_assign_id_only_once() {
        let mut post = Post::new(draft(), 0);
        assert!(post.assign_id(42));
        assert!(!post.assign_id(43));
        assert_eq!(post.id, 42);
    }

    #[test]
    fn test_soft_delete_is_idempotent() {
        let mut post = Post::new(draft(), 0);
        let before = post.clone();

        assert!(post.soft_delete());
        assert!(!post.soft_delete());
        assert!(post.deleted);
        assert_eq!(post.content, before.content);
        assert_eq!(post.modified_at, before.modified_at);
    }

    #[test]
    fn test_revise_snapshots_previous_content() {
        let mut post = Post::new(draft(), 1_000);
        post.assign_id(9);

        let revision = post.revise("second", 2_000).unwrap();
        assert_eq!(revision.post_id, 9);
        assert_eq!(revision.content, "first");
        assert_eq!(revision.saved_at, 2_000);
        assert_eq!(post.content, "second");
        assert_eq!(post.modified_at, 2_000);
        assert_eq!(post.edited_at, Some(2_000));
    }

    #[test]
    fn test_revise_with_same_content_changes_nothing() {
        let mut post = Post::new(draft(), 1_000);
        let before = post.clone();
        assert!(post.revise("first", 2_000).is_none());
        assert_eq!(post, before);
    }

    #[test]
    fn test_predicates() {
        let mut post = Post::new(draft(), 0);
        assert!(!post.has_replies());
        assert!(!post.has_accepted_answer());

        post.number_replies = 1;
        post.accepted_answer = AcceptedAnswer::Yes;
        assert!(post.has_replies());
        assert!(post.has_accepted_answer());
        assert!(post.is_subscribed(1));
        assert!(!post.is_subscribed(0));
    }

    #[test]
    fn test_vote_balance_can_be_negative() {
        let mut post = Post::new(draft(), 0);
        post.votes_up = 2;
        post.votes_down = 5;
        assert_eq!(post.vote_balance(), -3);
    }

    #[test]
    fn test_extreme_counters_and_times_saturate() {
        let mut post = Post::new(draft(), i64::MIN);
        post.votes_up = u64::MAX;
        assert_eq!(post.vote_balance(), i64::MAX);
        assert_eq!(post.age(i64::MAX), i64::MAX);
        assert!(post.bounty(i64::MAX).is_none());

        post.votes_up = 0;
        post.votes_down = u64::MAX;
        assert_eq!(post.vote_balance(), i64::MIN);
    }

    #[test]
    fn test_utc_modified_at() {
        let post = Post::new(draft(), 1_704_067_200);
        assert_eq!(post.utc_modified_at(), "2024-01-01T00:00:00Z");
    }

    #[test]
    fn test_flags_use_single_letter_codes() {
        assert_eq!(serde_json::to_string(&Sticked::Stuck).unwrap(), "\"Y\"");
        assert_eq!(serde_json::to_string(&AcceptedAnswer::No).unwrap(), "\"N\"");
    }
}
