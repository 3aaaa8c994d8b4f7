//! Session-owned game state.
//!
//! The engine functions are pure; everything that changes between turns
//! lives here and is threaded through calls by the owner:
//! - The grid
//! - The running score
//! - Whether the game is still in play
//! - The spawn RNG
//!
//! `GameSnapshot` captures all of it in a serializable form.

use serde::{Deserialize, Serialize};

use super::grid::Grid;
use super::rng::{GameRng, GameRngState};

/// Session phase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Moves are accepted.
    #[default]
    Playing,
    /// No move remains; only a new game leaves this phase.
    GameOver,
}

/// Mutable state of one game.
#[derive(Clone, Debug)]
pub struct GameState {
    /// Current board.
    pub grid: Grid,

    /// Sum of every merge result this game.
    pub score: u64,

    /// Playing or over.
    pub phase: Phase,

    /// Moves committed this game.
    pub moves: u32,

    /// Spawn RNG.
    pub rng: GameRng,
}

impl GameState {
    /// Create a state in the `Playing` phase with a zero score.
    #[must_use]
    pub fn new(grid: Grid, rng: GameRng) -> Self {
        Self {
            grid,
            score: 0,
            phase: Phase::Playing,
            moves: 0,
            rng,
        }
    }

    /// Check whether the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    /// Capture the state for saving.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            grid: self.grid.clone(),
            score: self.score,
            phase: self.phase,
            moves: self.moves,
            rng: self.rng.state(),
        }
    }

    /// Rebuild a state from a snapshot.
    ///
    /// The restored RNG continues the original spawn sequence.
    #[must_use]
    pub fn from_snapshot(snapshot: &GameSnapshot) -> Self {
        Self {
            grid: snapshot.grid.clone(),
            score: snapshot.score,
            phase: snapshot.phase,
            moves: snapshot.moves,
            rng: GameRng::from_state(&snapshot.rng),
        }
    }
}

/// Serializable form of `GameState`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub grid: Grid,
    pub score: u64,
    pub phase: Phase,
    pub moves: u32,
    pub rng: GameRngState,
}
