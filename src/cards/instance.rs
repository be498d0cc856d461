//! Card instances.
//!
//! A `Card` is one physical card in the deck: a unique instance id plus the
//! goal it bears. Cards are immutable; only their location changes, and
//! locations are tracked by the zone manager.

use serde::{Deserialize, Serialize};

use super::goal::Goal;

/// Unique identifier for a card instance.
///
/// Two cards bearing the same goal still have distinct ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A card in the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub id: CardId,
    pub goal: Goal,
}

impl Card {
    #[must_use]
    pub const fn new(id: CardId, goal: Goal) -> Self {
        Self { id, goal }
    }

    /// Bust detection compares goals only, never instance identity.
    #[must_use]
    pub fn collides_with(&self, other: &Card) -> bool {
        self.goal == other.goal
    }
}
