//! Classic 2048.
//!
//! The standard game:
//! - A 4×4 grid starting with two tiles worth 2
//! - Every direction slides and merges toward that edge
//! - One tile worth 2 spawns after each move that changed the grid
//! - The game ends when the board is full with no equal neighbours
//!
//! Size, spawn value and spawn policy are configurable through
//! `ClassicGameBuilder`.

mod game;

pub use game::{ClassicGame, ClassicGameBuilder};
