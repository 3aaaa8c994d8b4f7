//! Error types.
//!
//! The engine itself is total once its inputs are valid, so errors only
//! arise at construction time (grids, configs) and at the session boundary
//! (score storage, stale or late moves).

use std::path::PathBuf;

/// Errors raised when a grid would violate its invariants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GridError {
    #[error("grid must have at least one row")]
    Empty,

    #[error("grid is not square: row {row} has {found} cells, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid tile {value} at ({row}, {col}): expected 0 or a power of two up to 2^30")]
    InvalidTile { row: usize, col: usize, value: u32 },
}

/// Errors raised by `GameConfig::validate`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("grid size must be at least 1")]
    ZeroSize,

    #[error("spawn value {0} is not a power of two from 2 to 2^30")]
    InvalidSpawnValue(u32),

    #[error("{tiles} starting tiles do not fit on a {size}x{size} grid")]
    TooManyStartingTiles { tiles: usize, size: usize },
}

/// Errors raised by score stores.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read score file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write score file {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("score file {path} is corrupt: {source}")]
    Decode {
        path: PathBuf,
        source: bincode::Error,
    },

    #[error("failed to encode scores: {0}")]
    Encode(#[source] bincode::Error),
}

/// Errors raised by `Session`.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("the game is over; start a new game to keep playing")]
    GameOver,

    #[error("planned move no longer matches the current grid")]
    StaleMove,

    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    #[error("score store error: {0}")]
    Store(#[from] StoreError),
}
