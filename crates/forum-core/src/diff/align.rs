//! Longest-common-subsequence line alignment.

/// One step of an edit script, indices into the old and new sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Edit {
    Keep(usize, usize),
    Delete(usize),
    Insert(usize),
}

/// Minimal edit script turning `old` into `new`.
///
/// Equal items are matched as early as possible; when deleting and inserting
/// are equally good, the deletion comes first.
pub(crate) fn align<T: PartialEq>(old: &[T], new: &[T]) -> Vec<Edit> {
    let prefix = old.iter().zip(new).take_while(|(a, b)| a == b).count();
    let mut edits: Vec<Edit> = (0..prefix).map(|i| Edit::Keep(i, i)).collect();

    let (old_rest, new_rest) = (&old[prefix..], &new[prefix..]);
    let (n, m) = (old_rest.len(), new_rest.len());

    // lcs[i][j] holds the LCS length of old_rest[i..] and new_rest[j..].
    let width = m + 1;
    let mut lcs = vec![0u32; (n + 1) * width];
    for i in (0..n).rev() {
        for j in (0..m).rev() {
            lcs[i * width + j] = if old_rest[i] == new_rest[j] {
                lcs[(i + 1) * width + j + 1] + 1
            } else {
                lcs[(i + 1) * width + j].max(lcs[i * width + j + 1])
            };
        }
    }

    let (mut i, mut j) = (0, 0);
    while i < n && j < m {
        if old_rest[i] == new_rest[j] {
            edits.push(Edit::Keep(prefix + i, prefix + j));
            i += 1;
            j += 1;
        } else if lcs[(i + 1) * width + j] >= lcs[i * width + j + 1] {
            edits.push(Edit::Delete(prefix + i));
            i += 1;
        } else {
            edits.push(Edit::Insert(prefix + j));
            j += 1;
        }
    }
    edits.extend((i..n).map(|i| Edit::Delete(prefix + i)));
    edits.extend((j..m).map(|j| Edit::Insert(prefix + j)));

    edits
}
