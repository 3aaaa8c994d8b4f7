//! Classic game implementation.

use crate::core::{Direction, GameConfig, GameRng, GameState, Grid, Position, SpawnPolicy, Tile};
use crate::engine::{self, MoveOutcome};
use crate::error::ConfigError;
use crate::rules::RulesEngine;

/// The classic rules: every direction slides and merges, spawns are a
/// single fixed value on a uniformly chosen empty cell, and the game ends
/// when the static board has no empty cell and no equal neighbours.
#[derive(Clone, Debug)]
pub struct ClassicGame {
    config: GameConfig,
}

impl ClassicGame {
    /// Create the game from a validated configuration.
    pub fn new(config: GameConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Value placed by every spawn.
    #[must_use]
    pub fn spawn_value(&self) -> Tile {
        self.config.spawn_value
    }
}

impl Default for ClassicGame {
    fn default() -> Self {
        Self {
            config: GameConfig::default(),
        }
    }
}

impl RulesEngine for ClassicGame {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn slide(&self, grid: &Grid, direction: Direction) -> MoveOutcome {
        engine::slide(grid, direction)
    }

    fn spawn(&self, grid: &mut Grid, rng: &mut GameRng) -> Option<Position> {
        engine::spawn(grid, self.config.spawn_value, rng)
    }

    fn is_terminal(&self, grid: &Grid) -> bool {
        engine::is_game_over(grid)
    }
}

/// Builder for creating a ClassicGame.
#[derive(Clone, Debug, Default)]
pub struct ClassicGameBuilder {
    config: GameConfig,
}

impl ClassicGameBuilder {
    /// Start from the classic configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the grid size.
    #[must_use]
    pub fn size(mut self, size: usize) -> Self {
        self.config.size = size;
        self
    }

    /// Set the value of spawned tiles.
    #[must_use]
    pub fn spawn_value(mut self, value: Tile) -> Self {
        self.config.spawn_value = value;
        self
    }

    /// Set how many tiles a new game starts with.
    #[must_use]
    pub fn starting_tiles(mut self, tiles: usize) -> Self {
        self.config.starting_tiles = tiles;
        self
    }

    /// Set when a move is followed by a spawn.
    #[must_use]
    pub fn spawn_policy(mut self, policy: SpawnPolicy) -> Self {
        self.config.spawn_policy = policy;
        self
    }

    /// Build the game and its initial state.
    ///
    /// Fails if the configuration does not validate.
    pub fn build(self, seed: u64) -> Result<(ClassicGame, GameState), ConfigError> {
        let game = ClassicGame::new(self.config)?;
        let mut rng = GameRng::new(seed);
        let grid = game.initial_grid(&mut rng);
        Ok((game, GameState::new(grid, rng)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Phase;

    #[test]
    fn test_game_creation() {
        let (game, state) = ClassicGameBuilder::new().build(42).unwrap();

        assert_eq!(game.config().size, 4);
        assert_eq!(state.grid.size(), 4);
        assert_eq!(state.grid.tile_count(), 2);
        assert!(state.grid.cells().iter().all(|&v| v == 0 || v == 2));
        assert_eq!(state.score, 0);
        assert_eq!(state.phase, Phase::Playing);
    }

    #[test]
    fn test_custom_game() {
        let (game, state) = ClassicGameBuilder::new()
            .size(5)
            .spawn_value(4)
            .starting_tiles(3)
            .build(7)
            .unwrap();

        assert_eq!(game.spawn_value(), 4);
        assert_eq!(state.grid.size(), 5);
        assert_eq!(state.grid.tile_count(), 3);
        assert_eq!(state.grid.sum(), 12);
    }

    #[test]
    fn test_invalid_config_rejected() {
        assert_eq!(
            ClassicGameBuilder::new().size(0).build(1).unwrap_err(),
            ConfigError::ZeroSize
        );
        assert!(ClassicGame::new(GameConfig::new().with_spawn_value(6)).is_err());
    }

    #[test]
    fn test_legal_moves() {
        let game = ClassicGame::default();
        let grid = Grid::from_rows(vec![
            vec![2, 0, 0, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
        ])
        .unwrap();

        assert_eq!(game.legal_moves(&grid), vec![Direction::Right, Direction::Down]);

        let stuck = Grid::from_rows(vec![vec![2, 4], vec![4, 2]]).unwrap();
        assert!(game.legal_moves(&stuck).is_empty());
        assert!(game.is_terminal(&stuck));
    }

    #[test]
    fn test_deterministic_build() {
        let (_, a) = ClassicGameBuilder::new().build(12345).unwrap();
        let (_, b) = ClassicGameBuilder::new().build(12345).unwrap();
        assert_eq!(a.grid, b.grid);
    }

    #[test]
    fn test_game_to_completion() {
        let (game, mut state) = ClassicGameBuilder::new().size(3).build(42).unwrap();

        let mut turns = 0;
        const MAX_TURNS: usize = 10_000;

        while !game.is_terminal(&state.grid) && turns < MAX_TURNS {
            let legal = game.legal_moves(&state.grid);
            let Some(&direction) = legal.first() else {
                break;
            };

            let outcome = game.slide(&state.grid, direction);
            assert!(outcome.changed);
            assert_eq!(outcome.grid.sum(), state.grid.sum());

            state.grid = outcome.grid;
            state.score += outcome.score;
            game.spawn(&mut state.grid, &mut state.rng);
            turns += 1;
        }

        assert!(game.is_terminal(&state.grid), "game should have ended");
        assert!(game.legal_moves(&state.grid).is_empty());
        assert!(state.score > 0);
    }
}
