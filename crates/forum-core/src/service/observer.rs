//! Synchronous post-mutation hooks.

use serde::{Deserialize, Serialize};

use crate::domain::PostId;

/// What happened to a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum PostEvent {
    Created { post_id: PostId },
    ContentUpdated { post_id: PostId },
    SoftDeleted { post_id: PostId },
}

impl PostEvent {
    pub fn post_id(&self) -> PostId {
        match self {
            Self::Created { post_id }
            | Self::ContentUpdated { post_id }
            | Self::SoftDeleted { post_id } => *post_id,
        }
    }
}

/// Receives events after the mutation is complete, in registration order.
pub trait PostObserver: Send + Sync {
    fn on_event(&self, event: &PostEvent);
}

impl<F> PostObserver for F
where
    F: Fn(&PostEvent) + Send + Sync,
{
    fn on_event(&self, event: &PostEvent) {
        self(event)
    }
}
