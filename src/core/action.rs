//! Actions: the trigger API every player, human or automated, goes through.
//!
//! Each action names one state transition. The engine validates the action
//! against the current phase and the acting player before touching state,
//! so a rejected action never leaves a partial change behind.

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// A player action.
///
/// ## Example
///
/// ```
/// use sdg_agents::core::{Action, PlayerId};
///
/// let discard = Action::Discard { index: 0 };
/// assert_eq!(discard.name(), "discard");
///
/// let gift = Action::GiveCard { card_index: Some(2), to: PlayerId::new(1) };
/// assert!(gift.is_gift_exchange());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Action {
    /// Reveal the first card of the turn.
    StartTurn,
    /// Push your luck: reveal one more card.
    DrawMore,
    /// Keep the table. Two or more cards require a discard first.
    Collect,
    /// Sacrifice the table card at `index` and keep the rest.
    Discard { index: usize },
    /// Forfeit the table after a bust.
    AcknowledgeBust,
    /// Mark a card of your own collection as the one to give.
    SelectGift { card_index: usize },
    /// Give one card to another player. `None` uses the current selection.
    GiveCard { card_index: Option<usize>, to: PlayerId },
    /// Decline to give a card.
    SkipGift,
}

impl Action {
    /// Short name for logs and error messages.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Action::StartTurn => "start turn",
            Action::DrawMore => "draw more",
            Action::Collect => "collect",
            Action::Discard { .. } => "discard",
            Action::AcknowledgeBust => "acknowledge bust",
            Action::SelectGift { .. } => "select gift",
            Action::GiveCard { .. } => "give card",
            Action::SkipGift => "skip gift",
        }
    }

    /// Check if this action belongs to the gift exchange.
    #[must_use]
    pub const fn is_gift_exchange(&self) -> bool {
        matches!(
            self,
            Action::SelectGift { .. } | Action::GiveCard { .. } | Action::SkipGift
        )
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A recorded action with metadata for history tracking.
///
/// Used for replay and debugging.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Turn number when action was taken.
    pub turn: u32,

    /// Sequence number across the whole game (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    #[must_use]
    pub fn new(player: PlayerId, action: Action, turn: u32, sequence: u32) -> Self {
        Self {
            player,
            action,
            turn,
            sequence,
        }
    }
}
