//! Move commands and their per-tile results.
//!
//! A `Direction` is the whole command surface of the game besides "new
//! game". Every direction reduces to the canonical "slide left" by rotating
//! the grid `quarter_turns()` times clockwise, sliding, then rotating back.
//!
//! A `Movement` describes one tile's displacement during a move, in the
//! coordinates of the unrotated grid. Movements are descriptive only: the
//! presentation layer uses them for animation and then drops them.

use serde::{Deserialize, Serialize};

use super::grid::Position;

/// A direction to slide and merge tiles.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Direction {
    /// All four directions, in clockwise order starting from `Up`.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Right,
        Direction::Down,
        Direction::Left,
    ];

    /// Clockwise quarter turns that bring this direction to "left".
    ///
    /// Undoing the rotation uses the negated count.
    ///
    /// ```
    /// use rust_2048::core::Direction;
    ///
    /// assert_eq!(Direction::Left.quarter_turns(), 0);
    /// assert_eq!(Direction::Down.quarter_turns(), 1);
    /// assert_eq!(Direction::Right.quarter_turns(), 2);
    /// assert_eq!(Direction::Up.quarter_turns(), -1);
    /// ```
    #[must_use]
    pub const fn quarter_turns(self) -> i32 {
        match self {
            Direction::Left => 0,
            Direction::Down => 1,
            Direction::Right => 2,
            Direction::Up => -1,
        }
    }

    /// The opposite direction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Direction::Up => "up",
            Direction::Right => "right",
            Direction::Down => "down",
            Direction::Left => "left",
        };
        f.write_str(name)
    }
}

/// One tile's displacement during a move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Movement {
    /// Where the tile started.
    pub from: Position,

    /// Where the tile ended up.
    pub to: Position,

    /// True if the tile was consumed into a merge at `to`.
    pub merged: bool,
}

impl Movement {
    /// Create a movement record.
    #[must_use]
    pub const fn new(from: Position, to: Position, merged: bool) -> Self {
        Self { from, to, merged }
    }

    /// Manhattan distance travelled. Moves are along one axis, so this is
    /// the number of cells crossed.
    #[must_use]
    pub fn distance(&self) -> usize {
        self.from.row.abs_diff(self.to.row) + self.from.col.abs_diff(self.to.col)
    }
}
