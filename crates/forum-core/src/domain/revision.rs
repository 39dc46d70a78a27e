use serde::{Deserialize, Serialize};

use super::{PostId, Timestamp};

/// Snapshot of a post body taken right before it was overwritten.
///
/// Revisions belong to the history store; `post_id` is a back-reference only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Revision {
    pub post_id: PostId,
    pub content: String,
    pub saved_at: Timestamp,
}
