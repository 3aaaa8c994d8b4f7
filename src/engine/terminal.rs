//! Game-over detection.

use crate::core::{can_merge, Grid, Position};

/// Returns true if no move can change the grid.
///
/// That is the case exactly when no cell is empty and no two horizontally
/// or vertically adjacent cells hold the same mergeable value. The scan
/// stops at the first empty cell or mergeable pair.
///
/// ```
/// use rust_2048::core::Grid;
/// use rust_2048::engine::is_game_over;
///
/// let stuck = Grid::from_rows(vec![vec![2, 4], vec![4, 2]]).unwrap();
/// assert!(is_game_over(&stuck));
///
/// let open = Grid::from_rows(vec![vec![2, 2], vec![4, 8]]).unwrap();
/// assert!(!is_game_over(&open));
/// ```
#[must_use]
pub fn is_game_over(grid: &Grid) -> bool {
    let size = grid.size();
    for pos in grid.positions() {
        let value = grid[pos];
        if value == 0 {
            return false;
        }
        if !can_merge(value) {
            continue;
        }
        if pos.col + 1 < size && grid[Position::new(pos.row, pos.col + 1)] == value {
            return false;
        }
        if pos.row + 1 < size && grid[Position::new(pos.row + 1, pos.col)] == value {
            return false;
        }
    }
    true
}
