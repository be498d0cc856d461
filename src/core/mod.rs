//! Core engine types: players, state, actions, RNG, configuration, errors.

pub mod action;
pub mod config;
pub mod error;
pub mod player;
pub mod rng;
pub mod state;

pub use action::{Action, ActionRecord};
pub use config::{AutomationConfig, GameConfig, PlayerConfig, TimingConfig, DEFAULT_TARGET_SCORE};
pub use error::{ConfigError, EngineError, SnapshotError};
pub use player::{Player, PlayerId, PlayerMap};
pub use rng::{GameRng, GameRngState};
pub use state::{GameState, Phase};
