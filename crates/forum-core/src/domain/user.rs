use serde::{Deserialize, Serialize};

use super::UserId;

/// Public identity of a user, as shown next to posts and replies.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserRef {
    pub id: UserId,
    pub login: String,
    pub email: String,
}
