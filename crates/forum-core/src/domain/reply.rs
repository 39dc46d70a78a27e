use serde::{Deserialize, Serialize};

use super::{PostId, Timestamp, UserRef};

/// A reply to a post, with its author already resolved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reply {
    pub id: u64,
    pub post_id: PostId,
    pub author: UserRef,
    pub created_at: Timestamp,
}

/// A recorded view of a post, keyed by the viewer's address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostView {
    pub post_id: PostId,
    pub address: String,
}
