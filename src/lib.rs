//! # sdg-agents
//!
//! A cooperative push-your-luck card game engine themed on the UN
//! Sustainable Development Goals.
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: The whole game is one serializable `GameState`.
//!    Only the rules engine mutates it; everything else reads it or reacts
//!    to the transitions the engine returns.
//!
//! 2. **One Trigger Path**: Human input and the automated driver issue the
//!    same `Action`s through `RulesEngine::apply_action`.
//!
//! 3. **Deterministic**: All randomness flows through a seeded `GameRng`,
//!    so a seed plus an action list replays a game exactly.
//!
//! ## Game Flow
//!
//! Flip -> Decision -> (Bust | DiscardSelect) -> next turn, until the draw
//! pile is empty; then one round of gift exchange, then final scoring.
//!
//! ## Modules
//!
//! - `core`: Players, state, actions, RNG, configuration, errors
//! - `cards`: Goals, card instances, the goal catalog, deck building
//! - `zones`: Card locations (draw pile, table, collections, forfeited)
//! - `rules`: RulesEngine trait and scoring
//! - `games`: The SDG game rules
//! - `agents`: Automated players and their timer-driven driver
//! - `advisor`: Optional advice and insight collaborators
//! - `session`: Presentation boundary tying it all together

pub mod advisor;
pub mod agents;
pub mod cards;
pub mod core;
pub mod games;
pub mod rules;
pub mod session;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{
    Action, ActionRecord, ConfigError, EngineError, GameConfig, GameRng, GameRngState, GameState,
    Phase, Player, PlayerConfig, PlayerId, PlayerMap, SnapshotError,
};

pub use crate::cards::{Card, CardId, DeckBuilder, DeckCounts, Goal, GoalCatalog, ScoringRule};

pub use crate::zones::{Zone, ZoneManager};

pub use crate::rules::{
    finalize_game, score, FinalTally, GameEvent, RulesEngine, ScoringEngine, Transition,
};

pub use crate::games::{SdgGame, SdgGameBuilder};

pub use crate::agents::{AutoPilot, AutoPolicy, DefaultPolicy};

pub use crate::advisor::{
    AdviceRequest, AdviceTicket, Advisor, AdvisorError, InsightTicket, OfflineAdvisor,
};

pub use crate::session::GameSession;
