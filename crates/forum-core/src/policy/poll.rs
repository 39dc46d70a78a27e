//! Poll participation predicates over already-fetched collections.

use crate::domain::{PollOption, PollVote, UserId};

pub fn has_poll(options: &[PollOption]) -> bool {
    !options.is_empty()
}

/// Whether `user_id` has voted. A missing or zero user never has.
pub fn is_participated(user_id: Option<UserId>, votes: &[PollVote]) -> bool {
    match user_id {
        Some(user_id) if user_id != 0 => votes.iter().any(|vote| vote.user_id == user_id),
        _ => false,
    }
}

pub fn is_start_voting(votes: &[PollVote]) -> bool {
    !votes.is_empty()
}
