//! Grouping of change rows with surrounding context, and a plain-text layout.

use serde::{Deserialize, Serialize};

use super::{DiffRow, SideBySideDiff};

/// A contiguous slice of rows: at least one change plus its context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hunk {
    pub rows: Vec<DiffRow>,
}

impl Hunk {
    /// First old-side line number in the hunk, if it touches the old side.
    pub fn old_start(&self) -> Option<usize> {
        self.rows.iter().find_map(|row| row.old_line()).map(|l| l.number)
    }

    /// First new-side line number in the hunk, if it touches the new side.
    pub fn new_start(&self) -> Option<usize> {
        self.rows.iter().find_map(|row| row.new_line()).map(|l| l.number)
    }
}

impl SideBySideDiff {
    /// Change rows grouped with up to `context` unchanged rows on each side.
    ///
    /// Groups whose context would touch or overlap are merged.
    pub fn hunks(&self, context: usize) -> Vec<Hunk> {
        let rows = self.rows();
        let mut ranges: Vec<(usize, usize)> = Vec::new();

        for (index, _) in rows.iter().enumerate().filter(|(_, row)| row.is_change()) {
            let start = index.saturating_sub(context);
            let end = (index + context + 1).min(rows.len());

            match ranges.last_mut() {
                Some((_, last_end)) if start <= *last_end => *last_end = end.max(*last_end),
                _ => ranges.push((start, end)),
            }
        }

        ranges
            .into_iter()
            .map(|(start, end)| Hunk {
                rows: rows[start..end].to_vec(),
            })
            .collect()
    }

    /// Two-column text layout, each side clipped to `width` characters.
    ///
    /// The gutter marks rows the way `sdiff` does: `|` replaced, `<` deleted,
    /// `>` inserted, blank for unchanged.
    pub fn render_text(&self, width: usize) -> String {
        let mut out = String::new();

        for row in self.rows() {
            let marker = match row {
                DiffRow::Equal { .. } => ' ',
                DiffRow::Replaced { .. } => '|',
                DiffRow::Deleted { .. } => '<',
                DiffRow::Inserted { .. } => '>',
            };
            let (old_number, old_text) = column(row.old_line().map(|l| (l.number, &l.text)), width);
            let (new_number, new_text) = column(row.new_line().map(|l| (l.number, &l.text)), width);

            let line = format!("{old_number:>4} {old_text:<width$} {marker} {new_number:>4} {new_text}");
            out.push_str(line.trim_end());
            out.push('\n');
        }

        out
    }
}

fn column(line: Option<(usize, &String)>, width: usize) -> (String, String) {
    match line {
        Some((number, text)) => (number.to_string(), text.chars().take(width).collect()),
        None => (String::new(), String::new()),
    }
}

#[cfg(test)]
mod tests {
    use crate::diff::diff;

    fn body(lines: std::ops::RangeInclusive<u32>) -> String {
        lines.map(|n| format!("line {n}")).collect::<Vec<_>>().join("\n")
    }

    #[test]
    fn test_no_hunks_when_unchanged() {
        let text = body(1..=5);
        assert!(diff(&text, &text).hunks(3).is_empty());
    }

    #[test]
    fn test_hunk_carries_context() {
        let old = body(1..=10);
        let new = old.replace("line 5", "line five");

        let hunks = diff(&old, &new).hunks(2);
        assert_eq!(hunks.len(), 1);
        assert_eq!(hunks[0].rows.len(), 5);
        assert_eq!(hunks[0].old_start(), Some(3));
        assert_eq!(hunks[0].new_start(), Some(3));
    }

    #[test]
    fn test_distant_changes_split_and_close_ones_merge() {
        let old = body(1..=20);
        let new = old.replace("line 2\n", "").replace("line 18", "line eighteen");
        assert_eq!(diff(&old, &new).hunks(3).len(), 2);

        let new = old.replace("line 2\n", "").replace("line 7", "line seven");
        assert_eq!(diff(&old, &new).hunks(3).len(), 1);
    }

    #[test]
    fn test_render_text_marks_rows() {
        let rendered = diff("same\nold\ngone", "same\nnew").render_text(6);
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "   1 same        1 same");
        assert_eq!(lines[1], "   2 old    |    2 new");
        assert_eq!(lines[2], "   3 gone   <");
    }

    #[test]
    fn test_render_text_clips_long_lines() {
        let rendered = diff("abcdefghij", "").render_text(4);
        assert_eq!(rendered, "   1 abcd <\n");
    }
}
