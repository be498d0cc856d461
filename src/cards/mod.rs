//! Card system: goals, card instances, the goal catalog, and deck building.
//!
//! ## Key Types
//!
//! - `Goal`: Closed set of goal identifiers that can appear on a card
//! - `ScoringRule`: Scoring rule tag attached to each goal
//! - `GoalCatalog`: Static goal definition lookup
//! - `Card` / `CardId`: Immutable card instances
//! - `DeckBuilder` / `DeckCounts`: Shuffled draw piles from a count table

pub mod deck;
pub mod goal;
pub mod instance;
pub mod registry;

pub use deck::{DeckBuilder, DeckCounts};
pub use goal::{Goal, ScoringRule, UnknownGoal, CURVE_BRACKETS};
pub use instance::{Card, CardId};
pub use registry::{GoalCatalog, GoalDefinition};
