//! Game configuration.
//!
//! `GameConfig` fixes the board size, the value of spawned tiles, how many
//! tiles a new game starts with, and when the session spawns after a move.
//! The defaults are the classic 4×4 game with two starting tiles worth 2.

use serde::{Deserialize, Serialize};

use super::grid::{is_valid_tile, Tile, DEFAULT_SIZE};
use crate::error::ConfigError;

/// When a committed move is followed by a spawn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SpawnPolicy {
    /// Spawn only if the move changed the grid.
    #[default]
    OnChange,
    /// Spawn after every move, even one that changed nothing.
    Always,
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the grid.
    pub size: usize,

    /// Value of every spawned tile.
    pub spawn_value: Tile,

    /// Tiles spawned onto a fresh grid.
    pub starting_tiles: usize,

    /// When a move is followed by a spawn.
    pub spawn_policy: SpawnPolicy,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            spawn_value: 2,
            starting_tiles: 2,
            spawn_policy: SpawnPolicy::OnChange,
        }
    }
}

impl GameConfig {
    /// Create the classic configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the grid size.
    #[must_use]
    pub fn with_size(mut self, size: usize) -> Self {
        self.size = size;
        self
    }

    /// Set the value of spawned tiles.
    #[must_use]
    pub fn with_spawn_value(mut self, value: Tile) -> Self {
        self.spawn_value = value;
        self
    }

    /// Set how many tiles a new game starts with.
    #[must_use]
    pub fn with_starting_tiles(mut self, tiles: usize) -> Self {
        self.starting_tiles = tiles;
        self
    }

    /// Set the spawn policy.
    #[must_use]
    pub fn with_spawn_policy(mut self, policy: SpawnPolicy) -> Self {
        self.spawn_policy = policy;
        self
    }

    /// Check that the configuration describes a playable game.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size == 0 {
            return Err(ConfigError::ZeroSize);
        }
        if self.spawn_value == 0 || !is_valid_tile(self.spawn_value) {
            return Err(ConfigError::InvalidSpawnValue(self.spawn_value));
        }
        if self.starting_tiles > self.size * self.size {
            return Err(ConfigError::TooManyStartingTiles {
                tiles: self.starting_tiles,
                size: self.size,
            });
        }
        Ok(())
    }
}
