//! Rules engine trait for game variants.
//!
//! Variants implement `RulesEngine` to define:
//! - How a move transforms the grid
//! - How and where new tiles spawn
//! - When the game is over
//!
//! `Session` calls into `RulesEngine` but never interprets variant-specific
//! settings directly.

pub mod engine;

pub use engine::RulesEngine;
