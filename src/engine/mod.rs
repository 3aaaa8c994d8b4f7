//! The pure 2048 engine.
//!
//! Every function here takes its inputs explicitly and owns no state:
//! - `rotate`: quarter-turn rotation
//! - `process_row`: slide and merge one row toward index 0
//! - `slide`: full move in a direction, with per-tile movements
//! - `spawn`: place a tile on a random empty cell
//! - `is_game_over`: terminal detection

pub mod rotate;
pub mod row;
pub mod moves;
pub mod spawn;
pub mod terminal;

pub use rotate::{rotate, rotate_cells};
pub use row::{process_row, RowOutcome, RowShift};
pub use moves::{can_slide, slide, MoveOutcome};
pub use spawn::spawn;
pub use terminal::is_game_over;
