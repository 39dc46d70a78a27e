use crate::domain::PostId;

/// Shared key for the sidebar fragment, which lists recent posts.
pub const SIDEBAR_KEY: &str = "sidebar";

/// View-cache keys holding rendered fragments of a post.
pub fn cache_keys(post_id: PostId) -> [String; 4] {
    [
        format!("post-{post_id}"),
        format!("post-body-{post_id}"),
        format!("post-users-{post_id}"),
        SIDEBAR_KEY.to_string(),
    ]
}
