//! Rules engine trait and scoring.
//!
//! Games implement `RulesEngine` to define:
//! - Legal actions for each game state
//! - How actions modify state
//! - When the game ends
//!
//! Scoring is kept separate from turn flow: it is a pure function of the
//! cards each player holds and runs once, when the game is finalized.

pub mod engine;
pub mod scoring;

pub use engine::{GameEvent, RulesEngine, Transition};
pub use scoring::{finalize_game, score, FinalTally, GoalTally, ScoringEngine};
