//! Position allocation for dense per-column ordering
//!
//! Every column keeps its tasks at positions `{0..n-1}` - no gaps, no
//! duplicates. These pure functions compute the position changes for the
//! three situations that touch ordering (append, same-column reorder,
//! cross-column move) without renumbering tasks that are not affected.
//! The board-position rules for columns are the same functions.
//!
//! An insertion index outside `[0, n]` is a caller bug, not a runtime
//! condition: [`assert_insertable`] panics rather than guessing.

/// Tail position for a collection currently holding `len` items.
pub fn append(len: usize) -> usize {
    len
}

/// Validate an insertion index against a collection of `len` items
/// (`len` excludes the item being moved, for a same-column reorder).
///
/// # Panics
///
/// Panics if `index > len`.
pub fn assert_insertable(index: usize, len: usize) {
    assert!(
        index <= len,
        "insertion index {} out of range for column of {} tasks",
        index,
        len
    );
}

/// New position of an untouched sibling when another task in the same
/// column moves from `old` to `new`. Siblings strictly between the two
/// slots shift one step toward the vacated slot; everything else stays.
pub fn reorder_shift(sibling: usize, old: usize, new: usize) -> usize {
    if old < new && sibling > old && sibling <= new {
        sibling - 1
    } else if new < old && sibling >= new && sibling < old {
        sibling + 1
    } else {
        sibling
    }
}

/// New position of a sibling in a column that a task just left from
/// position `vacated`: later siblings close the gap.
pub fn close_gap(sibling: usize, vacated: usize) -> usize {
    if sibling > vacated {
        sibling - 1
    } else {
        sibling
    }
}

/// New position of a sibling in a column a task is entering at `target`:
/// siblings at or after the slot make room.
pub fn open_gap(sibling: usize, target: usize) -> usize {
    if sibling >= target {
        sibling + 1
    } else {
        sibling
    }
}
