//! Rules engine trait for game variants.
//!
//! A variant implements `RulesEngine` to define:
//! - How a grid slides in a direction
//! - How new tiles appear
//! - When no move remains
//!
//! `Session` drives play through this trait and never calls the engine
//! functions directly.

use crate::core::{Direction, GameConfig, GameRng, Grid, Position};
use crate::engine::MoveOutcome;

/// Rules engine trait.
///
/// ## Implementation Notes
///
/// - `slide`: Must be pure and deterministic; spawning happens separately
/// - `spawn`: Return `None` when the grid is full
/// - `is_terminal`: Return true only when no direction can change the grid
pub trait RulesEngine {
    /// Get the game configuration.
    ///
    /// Must pass `GameConfig::validate`; implementations check it when
    /// they are constructed, as `ClassicGame::new` does.
    fn config(&self) -> &GameConfig;

    /// Slide the grid toward `direction` without spawning.
    fn slide(&self, grid: &Grid, direction: Direction) -> MoveOutcome;

    /// Place one new tile.
    fn spawn(&self, grid: &mut Grid, rng: &mut GameRng) -> Option<Position>;

    /// Check whether the game is over.
    fn is_terminal(&self, grid: &Grid) -> bool;

    // === Convenience Methods ===

    /// Build the grid a new game starts from.
    ///
    /// Default implementation spawns `starting_tiles` tiles onto an empty
    /// grid of the configured size.
    ///
    /// # Panics
    ///
    /// Panics if `config()` has a zero size, which a validated config never
    /// does.
    fn initial_grid(&self, rng: &mut GameRng) -> Grid {
        let config = self.config();
        let Ok(mut grid) = Grid::empty(config.size) else {
            panic!("rules config has zero grid size; validate it on construction");
        };
        for _ in 0..config.starting_tiles {
            self.spawn(&mut grid, rng);
        }
        grid
    }

    /// Directions that would change the grid.
    fn legal_moves(&self, grid: &Grid) -> Vec<Direction> {
        Direction::ALL
            .into_iter()
            .filter(|&d| self.slide(grid, d).changed)
            .collect()
    }
}
