//! Data Transfer Objects - what a post page renders.

use serde::{Deserialize, Serialize};

/// A participant shown next to the thread.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserView {
    pub id: u64,
    pub login: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BountyView {
    /// `old` or `fast-reply`.
    pub kind: String,
    pub amount: u64,
}

/// Derived facts about a post for one viewer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostSummary {
    pub id: u64,
    pub title: String,
    pub slug: String,
    pub created: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub edited: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified: Option<String>,
    pub modified_utc: String,
    pub views: String,
    pub has_replies: bool,
    pub has_accepted_answer: bool,
    pub can_have_bounty: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bounty: Option<BountyView>,
    pub has_poll: bool,
    pub is_start_voting: bool,
    pub is_participated_in_poll: bool,
    pub is_subscribed: bool,
    pub recent_users: Vec<UserView>,
}

/// One side-by-side row. Absent sides are `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffRowView {
    /// `equal`, `deleted`, `inserted` or `replaced`.
    pub op: String,
    pub old_number: Option<usize>,
    pub old_text: Option<String>,
    pub new_number: Option<usize>,
    pub new_text: Option<String>,
}

/// Grouped change rows ready for a two-column table.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffView {
    pub hunks: Vec<Vec<DiffRowView>>,
}
