//! Quarter-turn rotation of square buffers.
//!
//! Rotation is a pure index remapping over a row-major buffer; the input is
//! never touched. The same permutation is applied to tile values and to
//! coordinate maps, which is how move orchestration recovers movements in
//! unrotated space.

use crate::core::Grid;

/// Source index for output cell `(row, col)` after `turns` clockwise quarter
/// turns, with `turns` already normalized to `0..4`.
#[inline]
fn source_index(size: usize, turns: u32, row: usize, col: usize) -> usize {
    let last = size - 1;
    let (r, c) = match turns {
        0 => (row, col),
        1 => (last - col, row),
        2 => (last - row, last - col),
        _ => (col, last - row),
    };
    r * size + c
}

/// Rotate a row-major `size`×`size` buffer by `quarter_turns` × 90°.
///
/// Positive counts turn clockwise, negative counts counter-clockwise. Any
/// count is accepted; it is reduced modulo 4.
#[must_use]
pub fn rotate_cells<T: Copy>(cells: &[T], size: usize, quarter_turns: i32) -> Vec<T> {
    debug_assert_eq!(cells.len(), size * size);
    let turns = quarter_turns.rem_euclid(4) as u32;
    if turns == 0 {
        return cells.to_vec();
    }

    let mut out = Vec::with_capacity(cells.len());
    for row in 0..size {
        for col in 0..size {
            out.push(cells[source_index(size, turns, row, col)]);
        }
    }
    out
}

/// Return `grid` rotated by `quarter_turns` × 90° (clockwise when positive).
///
/// ```
/// use rust_2048::core::Grid;
/// use rust_2048::engine::rotate;
///
/// let grid = Grid::from_rows(vec![
///     vec![2, 4],
///     vec![8, 16],
/// ]).unwrap();
///
/// let turned = rotate(&grid, 1);
/// assert_eq!(turned.to_rows(), vec![vec![8, 2], vec![16, 4]]);
///
/// assert_eq!(rotate(&turned, -1), grid);
/// ```
#[must_use]
pub fn rotate(grid: &Grid, quarter_turns: i32) -> Grid {
    let size = grid.size();
    Grid::from_cells(size, rotate_cells(grid.cells(), size, quarter_turns))
}
