//! Move orchestration: rotate, process rows, rotate back.
//!
//! Every direction is reduced to "slide left". Alongside the tile values, a
//! grid of original coordinates is rotated with the same permutation, so a
//! row shift `(r, from) -> (r, to)` in rotated space maps straight back to
//! positions on the caller's grid.

use crate::core::{Direction, Grid, Movement, Position};

use super::rotate::rotate_cells;
use super::row::process_row;

/// Result of sliding a grid in one direction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Grid after the slide. No tile has been spawned.
    pub grid: Grid,

    /// Score gained from merges during this move.
    pub score: u64,

    /// Every tile that changed position, in unrotated coordinates,
    /// ordered by origin.
    pub movements: Vec<Movement>,

    /// True if any tile moved or merged.
    pub changed: bool,
}

/// Slide and merge every tile of `grid` toward `direction`.
///
/// The input grid is left untouched; the score gained is returned rather
/// than accumulated anywhere.
///
/// ```
/// use rust_2048::core::{Direction, Grid, Position};
/// use rust_2048::engine::slide;
///
/// let grid = Grid::from_rows(vec![
///     vec![0, 0, 0, 0],
///     vec![2, 0, 0, 2],
///     vec![0, 0, 0, 0],
///     vec![0, 0, 0, 0],
/// ]).unwrap();
///
/// let out = slide(&grid, Direction::Right);
/// assert_eq!(out.grid.row(1), &[0, 0, 0, 4]);
/// assert_eq!(out.score, 4);
///
/// // Only the left tile travelled; the right one merged in place.
/// assert_eq!(out.movements.len(), 1);
/// assert_eq!(out.movements[0].from, Position::new(1, 0));
/// assert_eq!(out.movements[0].to, Position::new(1, 3));
/// ```
#[must_use]
pub fn slide(grid: &Grid, direction: Direction) -> MoveOutcome {
    let size = grid.size();
    let turns = direction.quarter_turns();

    let rotated = rotate_cells(grid.cells(), size, turns);
    let origins: Vec<Position> = rotate_cells(&grid.positions().collect::<Vec<_>>(), size, turns);

    let mut cells = Vec::with_capacity(rotated.len());
    let mut score = 0;
    let mut changed = false;
    let mut movements = Vec::new();

    for (r, row) in rotated.chunks(size).enumerate() {
        let outcome = process_row(row);
        let base = r * size;

        changed |= outcome.changed();
        score += outcome.score;
        movements.extend(
            outcome
                .shifts
                .iter()
                .filter(|s| s.moved())
                .map(|s| Movement::new(origins[base + s.from], origins[base + s.to], s.merged)),
        );
        cells.extend(outcome.cells);
    }

    movements.sort_unstable_by_key(|m| m.from);

    MoveOutcome {
        grid: Grid::from_cells(size, rotate_cells(&cells, size, -turns)),
        score,
        movements,
        changed,
    }
}

/// Returns true if sliding toward `direction` would change the grid.
#[must_use]
pub fn can_slide(grid: &Grid, direction: Direction) -> bool {
    slide(grid, direction).changed
}
