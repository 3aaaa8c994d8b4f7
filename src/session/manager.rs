//! A running game session.
//!
//! `Session` owns everything that lives longer than one call: the rules,
//! the score store, and the `GameState`. A turn is a two-phase commit:
//!
//! 1. `plan_move` computes the next grid and the movements to animate,
//!    without changing anything
//! 2. `commit` applies the planned grid, adds the score, spawns a tile,
//!    and checks for game over
//!
//! The presentation layer animates between the two calls. `play` does both
//! at once.

use crate::core::{
    Direction, GameConfig, GameRng, GameState, Grid, Movement, Phase, Position, SpawnPolicy,
};
use crate::engine::MoveOutcome;
use crate::error::{SessionError, StoreError};
use crate::games::classic::ClassicGame;
use crate::rules::RulesEngine;

use super::store::{MemoryScoreStore, ScoreStore, MAX_SCORE_KEY};

/// A move computed against a specific grid, waiting to be committed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PendingMove {
    direction: Direction,
    base: Grid,
    outcome: MoveOutcome,
}

impl PendingMove {
    /// Direction of the move.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Grid the move will produce, before any spawn.
    #[must_use]
    pub fn preview(&self) -> &Grid {
        &self.outcome.grid
    }

    /// Tile movements to animate.
    #[must_use]
    pub fn movements(&self) -> &[Movement] {
        &self.outcome.movements
    }

    /// Score the move will add.
    #[must_use]
    pub fn score_gained(&self) -> u64 {
        self.outcome.score
    }

    /// True if the move changes the grid.
    #[must_use]
    pub fn changed(&self) -> bool {
        self.outcome.changed
    }
}

/// What a committed move did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TurnReport {
    pub direction: Direction,
    /// Score added by this move's merges.
    pub score_gained: u64,
    pub movements: Vec<Movement>,
    /// True if the slide changed the grid.
    pub changed: bool,
    /// Where a tile spawned, if one did.
    pub spawned: Option<Position>,
    /// True if this move ended the game.
    pub game_over: bool,
    /// True if the final score was stored as the new maximum.
    pub new_max_score: bool,
}

/// A game session with a persistent best score.
#[derive(Debug)]
pub struct Session<R: RulesEngine = ClassicGame, S: ScoreStore = MemoryScoreStore> {
    rules: R,
    store: S,
    state: GameState,
    max_score: u64,
}

impl Session {
    /// Classic rules, in-memory store, seeded spawns.
    #[must_use]
    pub fn classic(seed: u64) -> Self {
        Self::new(ClassicGame::default(), MemoryScoreStore::new(), GameRng::new(seed))
    }
}

impl<S: ScoreStore> Session<ClassicGame, S> {
    /// Classic rules with a custom configuration.
    pub fn from_config(config: GameConfig, store: S, seed: u64) -> Result<Self, SessionError> {
        let rules = ClassicGame::new(config)?;
        Ok(Self::new(rules, store, GameRng::new(seed)))
    }
}

impl<R: RulesEngine, S: ScoreStore> Session<R, S> {
    /// Start a session on a fresh game.
    ///
    /// The best score is read from `store`; an absent entry counts as 0.
    pub fn new(rules: R, store: S, mut rng: GameRng) -> Self {
        let grid = rules.initial_grid(&mut rng);
        Self::with_state(rules, store, GameState::new(grid, rng))
    }

    /// Resume a session from existing state (a builder's output or a
    /// restored snapshot).
    pub fn with_state(rules: R, store: S, state: GameState) -> Self {
        let max_score = store.get(MAX_SCORE_KEY).unwrap_or(0);
        log::debug!(
            "session started: {}x{} grid, best score {}",
            state.grid.size(),
            state.grid.size(),
            max_score
        );
        Self {
            rules,
            store,
            state,
            max_score,
        }
    }

    // === Accessors ===

    /// Get the rules.
    #[must_use]
    pub fn rules(&self) -> &R {
        &self.rules
    }

    /// Get the score store.
    #[must_use]
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Get the game state.
    #[must_use]
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Current grid.
    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.state.grid
    }

    /// Current score.
    #[must_use]
    pub fn score(&self) -> u64 {
        self.state.score
    }

    /// Best score known to this session.
    #[must_use]
    pub fn max_score(&self) -> u64 {
        self.max_score
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Check if the game has ended.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    // === Turns ===

    /// Compute a move without applying it.
    pub fn plan_move(&self, direction: Direction) -> Result<PendingMove, SessionError> {
        if self.state.is_over() {
            return Err(SessionError::GameOver);
        }
        Ok(PendingMove {
            direction,
            base: self.state.grid.clone(),
            outcome: self.rules.slide(&self.state.grid, direction),
        })
    }

    /// Apply a planned move.
    ///
    /// Fails with `StaleMove` if the grid changed since planning. If the
    /// move ends the game with a new best score that the store cannot
    /// persist, the game is still over and the store error is returned.
    pub fn commit(&mut self, pending: PendingMove) -> Result<TurnReport, SessionError> {
        if self.state.is_over() {
            return Err(SessionError::GameOver);
        }
        if pending.base != self.state.grid {
            return Err(SessionError::StaleMove);
        }

        let PendingMove {
            direction, outcome, ..
        } = pending;

        self.state.grid = outcome.grid;
        self.state.score += outcome.score;
        self.state.moves += 1;

        let spawn = outcome.changed || self.rules.config().spawn_policy == SpawnPolicy::Always;
        let spawned = if spawn {
            self.rules.spawn(&mut self.state.grid, &mut self.state.rng)
        } else {
            None
        };

        log::debug!(
            "move {} {}: +{} (score {}), {} tiles moved, spawned {:?}",
            self.state.moves,
            direction,
            outcome.score,
            self.state.score,
            outcome.movements.len(),
            spawned
        );

        let game_over = self.rules.is_terminal(&self.state.grid);
        let mut new_max_score = false;
        if game_over {
            self.state.phase = Phase::GameOver;
            log::info!(
                "game over after {} moves: score {}, best tile {}",
                self.state.moves,
                self.state.score,
                self.state.grid.max_tile()
            );
            new_max_score = self.record_max_score()?;
        }

        Ok(TurnReport {
            direction,
            score_gained: outcome.score,
            movements: outcome.movements,
            changed: outcome.changed,
            spawned,
            game_over,
            new_max_score,
        })
    }

    /// Plan and commit a move in one step.
    pub fn play(&mut self, direction: Direction) -> Result<TurnReport, SessionError> {
        let pending = self.plan_move(direction)?;
        self.commit(pending)
    }

    /// Start a new game: fresh grid, zero score, `Playing` phase.
    ///
    /// Allowed in any phase. The spawn RNG continues its stream.
    pub fn new_game(&mut self) {
        let grid = self.rules.initial_grid(&mut self.state.rng);
        let rng = self.state.rng.clone();
        self.state = GameState::new(grid, rng);
        log::info!("new game started (best score {})", self.max_score);
    }

    /// Store the current score if it beats the best one.
    fn record_max_score(&mut self) -> Result<bool, StoreError> {
        if self.state.score <= self.max_score {
            return Ok(false);
        }
        if let Err(err) = self.store.set(MAX_SCORE_KEY, self.state.score) {
            log::warn!("failed to store best score {}: {}", self.state.score, err);
            return Err(err);
        }
        log::info!("new best score {} (was {})", self.state.score, self.max_score);
        self.max_score = self.state.score;
        Ok(true)
    }
}
