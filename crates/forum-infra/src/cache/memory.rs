//! In-memory invalidation sink - used in tests and when Redis is unavailable.

use async_trait::async_trait;
use tokio::sync::RwLock;

use forum_core::ports::{CacheError, CacheInvalidation};

/// Process-local stand-in for the view cache.
///
/// Nothing renders fragments into it, so invalidation only records which
/// keys were dropped, in order.
#[derive(Default)]
pub struct InMemoryCache {
    invalidated: RwLock<Vec<String>>,
}

impl InMemoryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keys dropped so far, oldest first.
    pub async fn invalidated(&self) -> Vec<String> {
        self.invalidated.read().await.clone()
    }
}

#[async_trait]
impl CacheInvalidation for InMemoryCache {
    async fn delete(&self, key: &str) -> Result<(), CacheError> {
        tracing::debug!(key = %key, "Cache fragment invalidated");
        self.invalidated.write().await.push(key.to_string());
        Ok(())
    }
}
