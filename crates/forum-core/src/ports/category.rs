use async_trait::async_trait;

use crate::domain::CategoryId;
use crate::error::RepoError;

/// Read access to categories, as needed by post validation and bounties.
#[async_trait]
pub trait CategoryLookup: Send + Sync {
    /// Whether a category with this id exists.
    async fn exists(&self, id: CategoryId) -> Result<bool, RepoError>;

    /// Whether the category opted out of bounties. Unknown categories report `false`.
    async fn no_bounty_flag(&self, id: CategoryId) -> Result<bool, RepoError>;
}
