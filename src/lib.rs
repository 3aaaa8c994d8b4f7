//! # rust-2048
//!
//! A pure game-state engine for the sliding-tile puzzle 2048.
//!
//! ## Design Principles
//!
//! 1. **Pure Engine**: Rotation, row processing, moves, spawning and
//!    terminal detection are free functions over explicit inputs. The
//!    engine owns no state and has no globals.
//!
//! 2. **One Primitive**: Every direction reduces to "slide left" through
//!    quarter-turn rotations, so there is a single merge implementation.
//!
//! 3. **Session-Owned State**: Grid, score, phase and RNG live in a
//!    `GameState` that the caller threads through each turn.
//!
//! ## Quick Start
//!
//! ```
//! use rust_2048::{Direction, Session};
//!
//! let mut session = Session::classic(42);
//!
//! // Plan, animate the movements, then commit
//! let pending = session.plan_move(Direction::Left).unwrap();
//! for movement in pending.movements() {
//!     let _ = (movement.from, movement.to);
//! }
//! let report = session.commit(pending).unwrap();
//!
//! assert_eq!(session.score(), report.score_gained);
//! ```
//!
//! ## Modules
//!
//! - `core`: Grid, positions, directions, movements, RNG, configuration, state
//! - `engine`: The pure slide/merge/spawn/terminal algorithms
//! - `rules`: `RulesEngine` trait for game variants
//! - `games`: The classic variant
//! - `session`: Two-phase turns, game-over state machine, score storage
//! - `error`: Error types

pub mod core;
pub mod engine;
pub mod error;
pub mod rules;
pub mod games;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Direction, GameConfig, GameRng, GameRngState, GameSnapshot, GameState, Grid, Movement, Phase,
    Position, SpawnPolicy, Tile,
};

pub use crate::engine::{is_game_over, process_row, rotate, slide, spawn, MoveOutcome};

pub use crate::error::{ConfigError, GridError, SessionError, StoreError};

pub use crate::rules::RulesEngine;

pub use crate::games::classic::{ClassicGame, ClassicGameBuilder};

pub use crate::session::{
    FileScoreStore, MemoryScoreStore, PendingMove, ScoreStore, Session, TurnReport, MAX_SCORE_KEY,
};
