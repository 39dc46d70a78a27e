use serde::{Deserialize, Serialize};

use crate::domain::{Timestamp, UserRef};
use crate::policy::Bounty;

/// Everything a viewer is shown about a post, derived from one clock reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostFacts {
    pub evaluated_at: Timestamp,
    pub human_created_at: String,
    pub human_edited_at: Option<String>,
    pub human_modified_at: Option<String>,
    pub utc_modified_at: String,
    pub human_number_views: String,
    pub has_replies: bool,
    pub has_accepted_answer: bool,
    pub can_have_bounty: bool,
    /// Only present when the post is eligible.
    pub bounty: Option<Bounty>,
    pub has_poll: bool,
    pub is_start_voting: bool,
    pub is_participated_in_poll: bool,
    pub is_subscribed: bool,
    pub recent_users: Vec<UserRef>,
}
