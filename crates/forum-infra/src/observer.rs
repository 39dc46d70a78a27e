//! Observer that records post lifecycle events in the log.

use forum_core::service::{PostEvent, PostObserver};

/// Emits one `info` line per post event.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl PostObserver for TracingObserver {
    fn on_event(&self, event: &PostEvent) {
        match event {
            PostEvent::Created { post_id } => tracing::info!(post_id, "Post created"),
            PostEvent::ContentUpdated { post_id } => tracing::info!(post_id, "Post content updated"),
            PostEvent::SoftDeleted { post_id } => tracing::info!(post_id, "Post soft-deleted"),
        }
    }
}
