use serde::{Deserialize, Serialize};

use super::CategoryId;

/// Category a post is filed under, as far as post policies care about it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    /// Category-level opt-out from bounties.
    #[serde(default)]
    pub no_bounty: bool,
}
