//! Cache invalidation port - drops rendered fragments of the view cache.

use async_trait::async_trait;

/// Removal side of the rendered-view cache (Redis, in-memory).
///
/// Fragments are written by whatever renders the pages; the post lifecycle
/// only ever needs to throw them away.
#[async_trait]
pub trait CacheInvalidation: Send + Sync {
    /// Drop one fragment. Removing an absent key is not an error.
    async fn delete(&self, key: &str) -> Result<(), CacheError>;
}

#[derive(Debug, thiserror::Error)]
pub enum CacheError {
    #[error("Cache unreachable: {0}")]
    Connection(String),

    #[error("Invalidation failed: {0}")]
    Operation(String),
}
