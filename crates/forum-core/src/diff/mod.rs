//! Side-by-side comparison of two post bodies.
//!
//! Bodies are split into lines, aligned with a longest-common-subsequence
//! match, and laid out as rows pairing the old and new side. Runs of
//! deletions and insertions between two unchanged lines are paired up into
//! `Replaced` rows; whatever is left over on the longer side stays a plain
//! deletion or insertion.

mod align;
mod hunk;

use serde::{Deserialize, Serialize};

use crate::domain::{Post, Revision};
use align::Edit;

pub use hunk::Hunk;

/// A line of one side, numbered from 1.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    pub number: usize,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DiffRow {
    Equal { old: Line, new: Line },
    Deleted { old: Line },
    Inserted { new: Line },
    Replaced { old: Line, new: Line },
}

impl DiffRow {
    pub fn old_line(&self) -> Option<&Line> {
        match self {
            Self::Equal { old, .. } | Self::Deleted { old } | Self::Replaced { old, .. } => {
                Some(old)
            }
            Self::Inserted { .. } => None,
        }
    }

    pub fn new_line(&self) -> Option<&Line> {
        match self {
            Self::Equal { new, .. } | Self::Inserted { new } | Self::Replaced { new, .. } => {
                Some(new)
            }
            Self::Deleted { .. } => None,
        }
    }

    pub fn is_change(&self) -> bool {
        !matches!(self, Self::Equal { .. })
    }
}

/// Row counts per kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    pub equal: usize,
    pub deleted: usize,
    pub inserted: usize,
    pub replaced: usize,
}

/// Which revision the current body is compared against.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DifferenceBaseline {
    /// Skip the most recent revision when there are two or more.
    #[default]
    SkipLatest,
    /// Always use the most recent revision.
    Latest,
}

impl std::str::FromStr for DifferenceBaseline {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "skip-latest" => Ok(Self::SkipLatest),
            "latest" => Ok(Self::Latest),
            other => Err(format!("unknown difference baseline: {other}")),
        }
    }
}

/// Aligned rows describing how one text became another.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SideBySideDiff {
    rows: Vec<DiffRow>,
}

impl SideBySideDiff {
    pub fn compute(old: &str, new: &str) -> Self {
        let old_lines = split_lines(old);
        let new_lines = split_lines(new);

        let line = |lines: &[&str], index: usize| Line {
            number: index + 1,
            text: lines[index].to_string(),
        };

        let mut rows = Vec::with_capacity(old_lines.len().max(new_lines.len()));
        let mut deleted = Vec::new();
        let mut inserted = Vec::new();

        for edit in align::align(&old_lines, &new_lines) {
            match edit {
                Edit::Keep(i, j) => {
                    flush_changes(&mut rows, &mut deleted, &mut inserted);
                    rows.push(DiffRow::Equal {
                        old: line(&old_lines, i),
                        new: line(&new_lines, j),
                    });
                }
                Edit::Delete(i) => deleted.push(line(&old_lines, i)),
                Edit::Insert(j) => inserted.push(line(&new_lines, j)),
            }
        }
        flush_changes(&mut rows, &mut deleted, &mut inserted);

        Self { rows }
    }

    pub fn rows(&self) -> &[DiffRow] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<DiffRow> {
        self.rows
    }

    pub fn is_unchanged(&self) -> bool {
        self.rows.iter().all(|row| !row.is_change())
    }

    pub fn stats(&self) -> DiffStats {
        self.rows
            .iter()
            .fold(DiffStats::default(), |mut stats, row| {
                match row {
                    DiffRow::Equal { .. } => stats.equal += 1,
                    DiffRow::Deleted { .. } => stats.deleted += 1,
                    DiffRow::Inserted { .. } => stats.inserted += 1,
                    DiffRow::Replaced { .. } => stats.replaced += 1,
                }
                stats
            })
    }
}

/// Shorthand for [`SideBySideDiff::compute`].
pub fn diff(old: &str, new: &str) -> SideBySideDiff {
    SideBySideDiff::compute(old, new)
}

/// Compare the post's current body against its revision history.
///
/// `revisions` must be ordered most recent first. Without history there is
/// nothing to show. With one revision it is the baseline; with more, the
/// baseline picks the entry (see [`DifferenceBaseline`]).
pub fn post_difference(
    post: &Post,
    revisions: &[Revision],
    baseline: DifferenceBaseline,
) -> Option<SideBySideDiff> {
    let revision = match baseline {
        DifferenceBaseline::SkipLatest if revisions.len() > 1 => &revisions[1],
        _ => revisions.first()?,
    };

    Some(SideBySideDiff::compute(&revision.content, &post.content))
}

/// The empty text has no lines; anything else is split on `\n`, dropping a
/// trailing `\r` from each line.
fn split_lines(text: &str) -> Vec<&str> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}

fn flush_changes(rows: &mut Vec<DiffRow>, deleted: &mut Vec<Line>, inserted: &mut Vec<Line>) {
    let mut deleted = deleted.drain(..);
    let mut inserted = inserted.drain(..);

    loop {
        match (deleted.next(), inserted.next()) {
            (Some(old), Some(new)) => rows.push(DiffRow::Replaced { old, new }),
            (Some(old), None) => rows.push(DiffRow::Deleted { old }),
            (None, Some(new)) => rows.push(DiffRow::Inserted { new }),
            (None, None) => break,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::NewPost;

    fn texts(rows: &[DiffRow]) -> Vec<(Option<&str>, Option<&str>)> {
        rows.iter()
            .map(|row| {
                (
                    row.old_line().map(|l| l.text.as_str()),
                    row.new_line().map(|l| l.text.as_str()),
                )
            })
            .collect()
    }

    #[test]
    fn test_identical_texts_are_all_equal() {
        for text in ["", "one", "a\nb\nc", "a\n\na\n"] {
            let diff = diff(text, text);
            assert!(diff.is_unchanged(), "{text:?}");
            assert_eq!(diff.stats().equal, split_lines(text).len());
        }
    }

    #[test]
    fn test_changed_last_line() {
        let diff = diff("a\nb", "a\nc");
        assert_eq!(
            diff.rows(),
            &[
                DiffRow::Equal {
                    old: Line { number: 1, text: "a".into() },
                    new: Line { number: 1, text: "a".into() },
                },
                DiffRow::Replaced {
                    old: Line { number: 2, text: "b".into() },
                    new: Line { number: 2, text: "c".into() },
                },
            ]
        );
    }

    #[test]
    fn test_against_empty_text() {
        let added = diff("", "a\nb");
        assert_eq!(added.stats(), DiffStats { inserted: 2, ..Default::default() });

        let removed = diff("a\nb", "");
        assert_eq!(removed.stats(), DiffStats { deleted: 2, ..Default::default() });
    }

    #[test]
    fn test_uneven_change_runs() {
        let diff = diff("keep\nold1\nold2\nend", "keep\nnew1\nend\ntail");
        assert_eq!(
            texts(diff.rows()),
            vec![
                (Some("keep"), Some("keep")),
                (Some("old1"), Some("new1")),
                (Some("old2"), None),
                (Some("end"), Some("end")),
                (None, Some("tail")),
            ]
        );
    }

    #[test]
    fn test_line_numbers_follow_each_side() {
        let diff = diff("a\nb\nc", "x\na\nc");
        let numbers: Vec<(Option<usize>, Option<usize>)> = diff
            .rows()
            .iter()
            .map(|row| (row.old_line().map(|l| l.number), row.new_line().map(|l| l.number)))
            .collect();
        assert_eq!(
            numbers,
            vec![(None, Some(1)), (Some(1), Some(2)), (Some(2), None), (Some(3), Some(3))]
        );
    }

    #[test]
    fn test_carriage_returns_are_ignored() {
        assert!(diff("a\r\nb", "a\nb").is_unchanged());
    }

    #[test]
    fn test_deterministic() {
        let old = "intro\nfoo\nbar\nfoo\noutro";
        let new = "intro\nbar\nfoo\nbaz\noutro";
        assert_eq!(diff(old, new), diff(old, new));
    }

    fn post_with(content: &str) -> Post {
        Post::new(
            NewPost {
                author_id: 1,
                category_id: 2,
                title: "t".into(),
                slug: "t".into(),
                content: content.into(),
            },
            0,
        )
    }

    fn revision(content: &str, saved_at: i64) -> Revision {
        Revision {
            post_id: 0,
            content: content.into(),
            saved_at,
        }
    }

    #[test]
    fn test_post_difference_without_history() {
        let post = post_with("now");
        assert_eq!(post_difference(&post, &[], DifferenceBaseline::SkipLatest), None);
        assert_eq!(post_difference(&post, &[], DifferenceBaseline::Latest), None);
    }

    #[test]
    fn test_post_difference_single_revision() {
        let post = post_with("now");
        let history = [revision("before", 10)];
        let diff = post_difference(&post, &history, DifferenceBaseline::SkipLatest).unwrap();
        assert_eq!(texts(diff.rows()), vec![(Some("before"), Some("now"))]);
    }

    #[test]
    fn test_post_difference_skips_latest() {
        let post = post_with("now");
        let history = [revision("latest", 30), revision("older", 20), revision("oldest", 10)];

        let diff = post_difference(&post, &history, DifferenceBaseline::SkipLatest).unwrap();
        assert_eq!(texts(diff.rows()), vec![(Some("older"), Some("now"))]);

        let diff = post_difference(&post, &history, DifferenceBaseline::Latest).unwrap();
        assert_eq!(texts(diff.rows()), vec![(Some("latest"), Some("now"))]);
    }

    #[test]
    fn test_baseline_from_str() {
        assert_eq!("latest".parse::<DifferenceBaseline>(), Ok(DifferenceBaseline::Latest));
        assert_eq!(" Skip-Latest ".parse::<DifferenceBaseline>(), Ok(DifferenceBaseline::SkipLatest));
        assert!("newest".parse::<DifferenceBaseline>().is_err());
    }
}
