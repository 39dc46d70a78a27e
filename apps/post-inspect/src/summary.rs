//! Mapping of domain results to presentation DTOs.

use forum_core::diff::{DiffRow, Hunk};
use forum_core::domain::Post;
use forum_core::service::PostFacts;
use forum_shared::{BountyView, DiffRowView, DiffView, PostSummary, UserView};

pub fn post_summary(post: &Post, facts: PostFacts) -> PostSummary {
    PostSummary {
        id: post.id,
        title: post.title.clone(),
        slug: post.slug.clone(),
        created: facts.human_created_at,
        edited: facts.human_edited_at,
        modified: facts.human_modified_at,
        modified_utc: facts.utc_modified_at,
        views: facts.human_number_views,
        has_replies: facts.has_replies,
        has_accepted_answer: facts.has_accepted_answer,
        can_have_bounty: facts.can_have_bounty,
        bounty: facts.bounty.map(|bounty| BountyView {
            kind: bounty.kind.to_string(),
            amount: bounty.amount,
        }),
        has_poll: facts.has_poll,
        is_start_voting: facts.is_start_voting,
        is_participated_in_poll: facts.is_participated_in_poll,
        is_subscribed: facts.is_subscribed,
        recent_users: facts
            .recent_users
            .into_iter()
            .map(|user| UserView {
                id: user.id,
                login: user.login,
            })
            .collect(),
    }
}

pub fn diff_view(hunks: &[Hunk]) -> DiffView {
    DiffView {
        hunks: hunks
            .iter()
            .map(|hunk| hunk.rows.iter().map(row_view).collect())
            .collect(),
    }
}

fn row_view(row: &DiffRow) -> DiffRowView {
    let op = match row {
        DiffRow::Equal { .. } => "equal",
        DiffRow::Deleted { .. } => "deleted",
        DiffRow::Inserted { .. } => "inserted",
        DiffRow::Replaced { .. } => "replaced",
    };

    DiffRowView {
        op: op.to_string(),
        old_number: row.old_line().map(|line| line.number),
        old_text: row.old_line().map(|line| line.text.clone()),
        new_number: row.new_line().map(|line| line.number),
        new_text: row.new_line().map(|line| line.text.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use forum_core::diff::diff;

    #[test]
    fn test_diff_view_keeps_only_hunks() {
        let old = "a\nb\nc\nd\ne\nf";
        let new = "a\nb\nc\nd\ne\nF";
        let view = diff_view(&diff(old, new).hunks(1));

        assert_eq!(view.hunks.len(), 1);
        let rows = &view.hunks[0];
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].op, "equal");
        assert_eq!(rows[1].op, "replaced");
        assert_eq!(rows[1].old_text.as_deref(), Some("f"));
        assert_eq!(rows[1].new_number, Some(6));
    }
}
