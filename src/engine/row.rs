//! Slide-and-merge for a single row.
//!
//! Processing is always toward index 0:
//! 1. compact non-zero tiles toward the start, keeping their order
//! 2. one left-to-right pass merging each adjacent equal pair into `{2v, 0}`
//! 3. compact again to close the gaps left by merges
//!
//! Each tile is tagged with the index it started at before step 1, so the
//! final `shifts` are read back from the tags rather than inferred from the
//! values.

use smallvec::SmallVec;

use crate::core::{can_merge, Tile};

/// Where one source tile ended up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RowShift {
    /// Index the tile started at.
    pub from: usize,
    /// Index the tile (or the merge it joined) ended at.
    pub to: usize,
    /// True if the tile took part in a merge.
    pub merged: bool,
}

impl RowShift {
    /// Returns true if the tile changed index.
    #[must_use]
    pub fn moved(&self) -> bool {
        self.from != self.to
    }
}

/// Result of processing one row.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RowOutcome {
    /// Row after sliding and merging.
    pub cells: Vec<Tile>,
    /// Sum of every merge result in this row.
    pub score: u64,
    /// One entry per non-zero input tile, in input order.
    pub shifts: SmallVec<[RowShift; 8]>,
}

impl RowOutcome {
    /// Returns true if the row differs from its input.
    #[must_use]
    pub fn changed(&self) -> bool {
        self.shifts.iter().any(|s| s.moved() || s.merged)
    }
}

/// A tile travelling through the row, carrying the source indices of every
/// tile folded into it.
#[derive(Clone, Debug)]
struct Tagged {
    value: Tile,
    sources: SmallVec<[usize; 2]>,
}

fn compact(cells: &mut Vec<Option<Tagged>>) {
    let len = cells.len();
    cells.retain(Option::is_some);
    cells.resize(len, None);
}

fn combine(cells: &mut [Option<Tagged>]) -> u64 {
    let mut score = 0;
    for i in 0..cells.len().saturating_sub(1) {
        let equal = match (&cells[i], &cells[i + 1]) {
            (Some(a), Some(b)) => a.value == b.value && can_merge(a.value),
            _ => false,
        };
        if !equal {
            continue;
        }
        // Emptying i + 1 keeps the merge result from pairing again this pass.
        if let (Some(right), Some(left)) = (cells[i + 1].take(), cells[i].as_mut()) {
            left.value *= 2;
            left.sources.extend(right.sources);
            score += u64::from(left.value);
        }
    }
    score
}

/// Slide and merge one row toward index 0.
///
/// ```
/// use rust_2048::engine::process_row;
///
/// let out = process_row(&[2, 2, 2, 2]);
/// assert_eq!(out.cells, vec![4, 4, 0, 0]);
/// assert_eq!(out.score, 8);
///
/// let out = process_row(&[2, 4, 2, 0]);
/// assert_eq!(out.cells, vec![2, 4, 2, 0]);
/// assert_eq!(out.score, 0);
/// ```
#[must_use]
pub fn process_row(row: &[Tile]) -> RowOutcome {
    let mut cells: Vec<Option<Tagged>> = row
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            (value != 0).then(|| Tagged {
                value,
                sources: SmallVec::from_slice(&[index]),
            })
        })
        .collect();

    compact(&mut cells);
    let score = combine(&mut cells);
    compact(&mut cells);

    let mut shifts: SmallVec<[RowShift; 8]> = SmallVec::new();
    for (to, tile) in cells.iter().enumerate() {
        if let Some(tile) = tile {
            let merged = tile.sources.len() > 1;
            shifts.extend(tile.sources.iter().map(|&from| RowShift { from, to, merged }));
        }
    }
    shifts.sort_unstable_by_key(|s| s.from);

    RowOutcome {
        cells: cells
            .into_iter()
            .map(|tile| tile.map_or(0, |t| t.value))
            .collect(),
        score,
        shifts,
    }
}
