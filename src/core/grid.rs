//! Board representation.
//!
//! ## Grid
//!
//! A square N×N board of tile values stored row-major. `0` is an empty
//! cell; every other value is a power of two >= 2. Constructors validate
//! these invariants, so every `Grid` in the program is well-formed.
//!
//! ## Position
//!
//! A 0-based `(row, col)` coordinate, indexing a `Grid` directly.

use serde::{Deserialize, Serialize};
use std::ops::Index;

use crate::error::GridError;

/// A tile value. `0` means the cell is empty.
pub type Tile = u32;

/// Canonical board size.
pub const DEFAULT_SIZE: usize = 4;

/// Largest tile a grid may hold. Tiles of this value never merge, so a
/// merge result always fits in a `Tile`.
pub const MAX_TILE: Tile = 1 << 30;

/// Returns true if `value` may appear on a grid.
#[must_use]
pub const fn is_valid_tile(value: Tile) -> bool {
    value == 0 || (value >= 2 && value <= MAX_TILE && value.is_power_of_two())
}

/// Returns true if two adjacent tiles of `value` merge when slid together.
#[must_use]
pub const fn can_merge(value: Tile) -> bool {
    value != 0 && value < MAX_TILE
}

/// A cell coordinate on the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Square board of tiles.
///
/// ## Example
///
/// ```
/// use rust_2048::core::{Grid, Position};
///
/// let grid = Grid::from_rows(vec![
///     vec![2, 0],
///     vec![0, 4],
/// ]).unwrap();
///
/// assert_eq!(grid.size(), 2);
/// assert_eq!(grid[Position::new(1, 1)], 4);
/// assert_eq!(grid.empty_count(), 2);
///
/// // Non-square input is rejected
/// assert!(Grid::from_rows(vec![vec![2, 0], vec![0]]).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<Tile>>", into = "Vec<Vec<Tile>>")]
pub struct Grid {
    size: usize,
    cells: Vec<Tile>,
}

impl Grid {
    /// Create an all-empty grid of the given size.
    pub fn empty(size: usize) -> Result<Self, GridError> {
        if size == 0 {
            return Err(GridError::Empty);
        }
        Ok(Self {
            size,
            cells: vec![0; size * size],
        })
    }

    /// Create an all-empty grid of the canonical 4×4 size.
    #[must_use]
    pub fn new() -> Self {
        Self {
            size: DEFAULT_SIZE,
            cells: vec![0; DEFAULT_SIZE * DEFAULT_SIZE],
        }
    }

    /// Create a grid from rows, validating shape and tile values.
    pub fn from_rows(rows: Vec<Vec<Tile>>) -> Result<Self, GridError> {
        let size = rows.len();
        if size == 0 {
            return Err(GridError::Empty);
        }

        let mut cells = Vec::with_capacity(size * size);
        for (row, values) in rows.into_iter().enumerate() {
            if values.len() != size {
                return Err(GridError::NotSquare {
                    row,
                    expected: size,
                    found: values.len(),
                });
            }
            for (col, &value) in values.iter().enumerate() {
                if !is_valid_tile(value) {
                    return Err(GridError::InvalidTile { row, col, value });
                }
            }
            cells.extend(values);
        }

        Ok(Self { size, cells })
    }

    /// Build a grid from an already-validated row-major buffer.
    pub(crate) fn from_cells(size: usize, cells: Vec<Tile>) -> Self {
        debug_assert_eq!(cells.len(), size * size);
        debug_assert!(cells.iter().all(|&v| is_valid_tile(v)));
        Self { size, cells }
    }

    /// Side length of the grid.
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Row-major view of every cell.
    #[must_use]
    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    /// Get a tile, or `None` if the position is off the grid.
    #[must_use]
    pub fn get(&self, pos: Position) -> Option<Tile> {
        if pos.row < self.size && pos.col < self.size {
            Some(self.cells[pos.row * self.size + pos.col])
        } else {
            None
        }
    }

    /// Borrow one row.
    #[must_use]
    pub fn row(&self, row: usize) -> &[Tile] {
        let start = row * self.size;
        &self.cells[start..start + self.size]
    }

    /// Iterate over rows.
    pub fn rows(&self) -> impl Iterator<Item = &[Tile]> {
        self.cells.chunks(self.size)
    }

    /// Copy the grid out as nested rows.
    #[must_use]
    pub fn to_rows(&self) -> Vec<Vec<Tile>> {
        self.rows().map(<[Tile]>::to_vec).collect()
    }

    /// Iterate over every position, row-major.
    pub fn positions(&self) -> impl Iterator<Item = Position> {
        let size = self.size;
        (0..size * size).map(move |i| Position::new(i / size, i % size))
    }

    /// Positions of every empty cell, row-major.
    #[must_use]
    pub fn empty_positions(&self) -> Vec<Position> {
        self.positions().filter(|&p| self[p] == 0).collect()
    }

    /// Number of empty cells.
    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 0).count()
    }

    /// Number of occupied cells.
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.cells.len() - self.empty_count()
    }

    /// Highest tile on the board (0 for an empty board).
    #[must_use]
    pub fn max_tile(&self) -> Tile {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Sum of all tiles. Sliding and merging preserve it.
    #[must_use]
    pub fn sum(&self) -> u64 {
        self.cells.iter().map(|&v| u64::from(v)).sum()
    }

    /// Returns true if no cell is empty.
    #[must_use]
    pub fn is_full(&self) -> bool {
        !self.cells.contains(&0)
    }

    /// Place a tile on an empty cell.
    ///
    /// Returns false (and leaves the grid alone) if the cell is occupied,
    /// off the grid, or the value is not a valid tile.
    pub fn place(&mut self, pos: Position, value: Tile) -> bool {
        if value == 0 || !is_valid_tile(value) || self.get(pos) != Some(0) {
            return false;
        }
        self.set(pos, value);
        true
    }

    /// Overwrite a cell. Callers guarantee `value` is a valid tile.
    pub(crate) fn set(&mut self, pos: Position, value: Tile) {
        debug_assert!(is_valid_tile(value));
        self.cells[pos.row * self.size + pos.col] = value;
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<Position> for Grid {
    type Output = Tile;

    fn index(&self, pos: Position) -> &Self::Output {
        assert!(pos.col < self.size, "column {} out of range", pos.col);
        &self.cells[pos.row * self.size + pos.col]
    }
}

impl TryFrom<Vec<Vec<Tile>>> for Grid {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<Tile>>) -> Result<Self, Self::Error> {
        Self::from_rows(rows)
    }
}

impl From<Grid> for Vec<Vec<Tile>> {
    fn from(grid: Grid) -> Self {
        grid.to_rows()
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let width = self.max_tile().max(1).to_string().len();
        for row in self.rows() {
            let line: Vec<String> = row
                .iter()
                .map(|&v| {
                    if v == 0 {
                        format!("{:>width$}", ".")
                    } else {
                        format!("{:>width$}", v)
                    }
                })
                .collect();
            writeln!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}
