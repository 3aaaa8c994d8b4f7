//! Core types: grid, directions, movements, RNG, configuration, state.
//!
//! Everything here is plain data. The algorithms that operate on it live
//! in `engine`.

pub mod grid;
pub mod action;
pub mod rng;
pub mod config;
pub mod state;

pub use grid::{can_merge, is_valid_tile, Grid, Position, Tile, DEFAULT_SIZE, MAX_TILE};
pub use action::{Direction, Movement};
pub use rng::{GameRng, GameRngState};
pub use config::{GameConfig, SpawnPolicy};
pub use state::{GameSnapshot, GameState, Phase};
