use serde::{Deserialize, Serialize};

use super::{PostId, UserId};

/// One answer of a poll attached to a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollOption {
    pub id: u64,
    pub post_id: PostId,
    pub title: String,
}

/// A single user's vote for a poll option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PollVote {
    pub post_id: PostId,
    pub option_id: u64,
    pub user_id: UserId,
}
