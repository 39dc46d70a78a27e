//! Bounty eligibility and value.
//!
//! [`can_have_bounty`] and [`compute_bounty`] are independent: the amount is
//! derived from the post's age alone, so callers must check eligibility
//! before acting on it.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{DAY, HOUR, MONTH};
use crate::domain::{CategoryId, Post, Timestamp};

pub const ANNOUNCEMENTS: CategoryId = 15;
pub const NO_BOUNTY: CategoryId = 1;
pub const JOBS: CategoryId = 7;
pub const SHOW_COMMUNITY: CategoryId = 24;

/// Categories whose posts never carry a bounty.
pub const EXCLUDED_CATEGORIES: [CategoryId; 4] = [ANNOUNCEMENTS, NO_BOUNTY, JOBS, SHOW_COMMUNITY];

const FAST_REPLY_AMOUNT: u64 = 100;
const OLD_BASE_AMOUNT: u64 = 150;
const OLD_AMOUNT_PER_DAY: i64 = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BountyKind {
    /// Unanswered for more than a day.
    Old,
    /// Less than an hour old.
    FastReply,
}

impl fmt::Display for BountyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Old => f.write_str("old"),
            Self::FastReply => f.write_str("fast-reply"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bounty {
    pub kind: BountyKind,
    pub amount: u64,
}

/// Whether the post may currently be offered a bounty.
///
/// Requires no accepted answer, not sticky, no replies, a category outside
/// [`EXCLUDED_CATEGORIES`] without its own opt-out, a non-negative vote
/// balance, and an age inside one of the bounty windows.
pub fn can_have_bounty(post: &Post, category_no_bounty: bool, now: Timestamp) -> bool {
    let eligible = !post.has_accepted_answer()
        && !post.is_sticked()
        && post.number_replies == 0
        && !EXCLUDED_CATEGORIES.contains(&post.category_id)
        && !category_no_bounty
        && post.vote_balance() >= 0;

    eligible && window(post.age(now)).is_some()
}

/// Bounty the post would earn at `now`, ignoring reply/category/vote gating.
///
/// Between one and thirty days old: `150 + trunc(age_in_days * 3)`.
/// Under one hour old: a flat 100. Anything else earns nothing.
pub fn compute_bounty(post: &Post, now: Timestamp) -> Option<Bounty> {
    let age = post.age(now);
    let kind = window(age)?;

    let amount = match kind {
        BountyKind::Old => OLD_BASE_AMOUNT + (age * OLD_AMOUNT_PER_DAY / DAY) as u64,
        BountyKind::FastReply => FAST_REPLY_AMOUNT,
    };

    Some(Bounty { kind, amount })
}

fn window(age: i64) -> Option<BountyKind> {
    if age > DAY && age < MONTH {
        Some(BountyKind::Old)
    } else if age < HOUR {
        Some(BountyKind::FastReply)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{AcceptedAnswer, NewPost, Sticked};
    use crate::policy::MINUTE;
    use rstest::rstest;

    const NOW: Timestamp = 1_717_200_000;

    fn post_aged(age: i64) -> Post {
        Post::new(
            NewPost {
                author_id: 1,
                category_id: 3,
                title: "Unanswered".to_string(),
                slug: "unanswered".to_string(),
                content: "help".to_string(),
            },
            NOW - age,
        )
    }

    #[rstest]
    #[case::two_days(2 * DAY, 156)]
    #[case::twenty_nine_days(29 * DAY, 237)]
    #[case::just_over_a_day(DAY + 1, 153)]
    #[case::a_day_and_a_half(DAY + DAY / 2, 154)]
    fn test_old_bounty_amount(#[case] age: i64, #[case] amount: u64) {
        let bounty = compute_bounty(&post_aged(age), NOW).unwrap();
        assert_eq!(bounty.kind, BountyKind::Old);
        assert_eq!(bounty.amount, amount);
    }

    #[test]
    fn test_fast_reply_bounty() {
        let bounty = compute_bounty(&post_aged(30 * MINUTE), NOW).unwrap();
        assert_eq!(bounty, Bounty { kind: BountyKind::FastReply, amount: 100 });
        assert_eq!(bounty.kind.to_string(), "fast-reply");
    }

    #[rstest]
    #[case::exactly_one_hour(HOUR)]
    #[case::half_a_day(12 * HOUR)]
    #[case::exactly_one_day(DAY)]
    #[case::exactly_thirty_days(MONTH)]
    #[case::a_year(365 * DAY)]
    fn test_outside_windows_earns_nothing(#[case] age: i64) {
        let post = post_aged(age);
        assert_eq!(compute_bounty(&post, NOW), None);
        assert!(!can_have_bounty(&post, false, NOW));
    }

    #[test]
    fn test_bounty_ignores_gating() {
        let mut post = post_aged(2 * DAY);
        post.number_replies = 4;
        post.category_id = JOBS;
        assert!(!can_have_bounty(&post, false, NOW));
        assert!(compute_bounty(&post, NOW).is_some());
    }

    #[rstest]
    fn test_excluded_categories_never_eligible(
        #[values(ANNOUNCEMENTS, NO_BOUNTY, JOBS, SHOW_COMMUNITY)] category_id: CategoryId,
        #[values(10 * MINUTE, 2 * DAY)] age: i64,
    ) {
        let mut post = post_aged(age);
        post.category_id = category_id;
        assert!(!can_have_bounty(&post, false, NOW));
    }

    #[test]
    fn test_eligible_in_both_windows() {
        assert!(can_have_bounty(&post_aged(10 * MINUTE), false, NOW));
        assert!(can_have_bounty(&post_aged(3 * DAY), false, NOW));
    }

    #[test]
    fn test_each_gate_blocks_eligibility() {
        let base = post_aged(3 * DAY);

        let mut answered = base.clone();
        answered.accepted_answer = AcceptedAnswer::Yes;
        assert!(!can_have_bounty(&answered, false, NOW));

        let mut sticky = base.clone();
        sticky.sticked = Sticked::Stuck;
        assert!(!can_have_bounty(&sticky, false, NOW));

        let mut replied = base.clone();
        replied.number_replies = 1;
        assert!(!can_have_bounty(&replied, false, NOW));

        let mut downvoted = base.clone();
        downvoted.votes_down = 1;
        assert!(!can_have_bounty(&downvoted, false, NOW));

        assert!(!can_have_bounty(&base, true, NOW));
    }

    #[test]
    fn test_balanced_votes_are_fine() {
        let mut post = post_aged(3 * DAY);
        post.votes_up = 2;
        post.votes_down = 2;
        assert!(can_have_bounty(&post, false, NOW));
    }
}
