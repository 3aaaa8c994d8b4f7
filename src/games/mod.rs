//! Game variants built on the engine.

pub mod classic;
