//! Rules engine trait for game implementations.
//!
//! Games implement `RulesEngine` to define their rules:
//! - What actions are legal
//! - How actions modify state
//! - When the game is over

use smallvec::SmallVec;

use super::scoring::FinalTally;
use crate::cards::Card;
use crate::core::action::Action;
use crate::core::config::GameConfig;
use crate::core::error::EngineError;
use crate::core::player::PlayerId;
use crate::core::state::{GameState, Phase};

/// Something observable that happened while applying an action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameEvent {
    /// A card moved from the draw pile to the table without colliding.
    CardRevealed { card: Card },
    /// A card moved to the table and duplicated a goal already there.
    Bust { card: Card },
    /// Cards moved from the table to a player's collection.
    ///
    /// `direct` is set when a single card was collected without a discard.
    Collected { player: PlayerId, cards: Vec<Card>, direct: bool },
    /// The card sacrificed to collect the rest.
    Discarded { card: Card },
    /// Table cards lost to a bust.
    Forfeited { cards: Vec<Card> },
    /// The next player is up.
    TurnPassed { to: PlayerId },
    /// The draw pile ran out.
    GiftExchangeOpened,
    GiftSelected { player: PlayerId, card: Card },
    GiftDeselected { player: PlayerId },
    Gifted { from: PlayerId, to: PlayerId, card: Card },
    GiftSkipped { player: PlayerId },
    GameFinished { grand_total: u32, passed: bool },
}

/// Outcome of one accepted action.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub from: Phase,
    pub to: Phase,
    pub events: SmallVec<[GameEvent; 4]>,
}

impl Transition {
    #[must_use]
    pub fn new(from: Phase) -> Self {
        Self {
            from,
            to: from,
            events: SmallVec::new(),
        }
    }

    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Check if the phase changed.
    #[must_use]
    pub fn changed_phase(&self) -> bool {
        self.from != self.to
    }

    /// Check if the transition reached `GameOver`.
    #[must_use]
    pub fn finished(&self) -> bool {
        self.to == Phase::GameOver
    }
}

/// Rules engine trait.
///
/// Games implement this trait to define their rules. Every caller, human
/// input or the automated driver, goes through `apply_action`.
///
/// ## Implementation Notes
///
/// - `legal_actions`: Return empty vec if player can't act
/// - `apply_action`: Must be deterministic given the state's RNG, and must
///   leave the state untouched when it returns an error
/// - `is_terminal`: Return None if game continues
pub trait RulesEngine {
    /// Get the game configuration.
    fn config(&self) -> &GameConfig;

    /// Enumerate the actions `player` may take right now.
    fn legal_actions(&self, state: &GameState, player: PlayerId) -> Vec<Action>;

    /// Apply an action to the game state.
    fn apply_action(
        &self,
        state: &mut GameState,
        player: PlayerId,
        action: &Action,
    ) -> Result<Transition, EngineError>;

    /// Check if the game is over.
    ///
    /// Returns the final tally once the game has ended, `None` if it continues.
    fn is_terminal<'a>(&self, state: &'a GameState) -> Option<&'a FinalTally> {
        state.final_tally.as_ref()
    }

    // === Convenience Methods ===

    /// Check if an action is currently legal for a player.
    fn is_legal(&self, state: &GameState, player: PlayerId, action: &Action) -> bool {
        self.legal_actions(state, player).contains(action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardId, Goal};

    #[test]
    fn test_transition_flags() {
        let mut transition = Transition::new(Phase::Decision);
        assert!(!transition.changed_phase());

        transition.push(GameEvent::Bust {
            card: Card::new(CardId(3), Goal::ClimateAction),
        });
        transition.to = Phase::Bust;

        assert!(transition.changed_phase());
        assert!(!transition.finished());
        assert_eq!(transition.events.len(), 1);
    }
}
