//! The people shown as taking part in a thread.

use crate::domain::{Reply, UserRef};

/// How many of the latest replies contribute participants.
pub const RECENT_REPLIES: usize = 3;

/// The author followed by the authors of the most recent replies.
///
/// `replies` is expected newest first; only the first [`RECENT_REPLIES`] are
/// considered. Users appear once, at their first position.
pub fn recent_users(author: Option<&UserRef>, replies: &[Reply]) -> Vec<UserRef> {
    let mut users: Vec<UserRef> = Vec::with_capacity(RECENT_REPLIES + 1);

    let candidates = author
        .into_iter()
        .chain(replies.iter().take(RECENT_REPLIES).map(|reply| &reply.author));

    for user in candidates {
        if !users.iter().any(|known| known.id == user.id) {
            users.push(user.clone());
        }
    }

    users
}
