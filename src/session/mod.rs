//! Game sessions and score persistence.
//!
//! `Session` threads a `GameState` through the rules, implements the
//! `Playing`/`GameOver` state machine, and keeps the best score in a
//! `ScoreStore`.

pub mod manager;
pub mod store;

pub use manager::{PendingMove, Session, TurnReport};
pub use store::{FileScoreStore, MemoryScoreStore, ScoreStore, MAX_SCORE_KEY};
