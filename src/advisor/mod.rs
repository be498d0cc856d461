//! Advisory collaborators.
//!
//! An `Advisor` supplies flavor text: strategy advice while a player is
//! deciding, and a short insight when a goal is collected. Advice only ever
//! reaches display text. A game plays the same with an advisor that always
//! fails, times out, or is absent.
//!
//! The engine never calls an advisor itself. Boards issue tickets; whoever
//! owns the advisor answers them on its own schedule and hands the result
//! back. A reply that never comes leaves the game untouched.
//!
//! - `AdviceBoard`: debounced advice keyed by state version
//! - `InsightBoard`: one transient insight with a display timeout

pub mod advice;
pub mod insight;

use thiserror::Error;

use crate::cards::Goal;
use crate::core::{GameState, PlayerId};

pub use advice::{AdviceBoard, AdviceTicket, EMPTY_ADVICE, FALLBACK_ADVICE};
pub use insight::{InsightBoard, InsightTicket};

/// Why an advisory call produced nothing usable.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AdvisorError {
    #[error("advisor unavailable: {0}")]
    Unavailable(String),

    #[error("advisor timed out")]
    Timeout,

    #[error("advisor returned an empty response")]
    EmptyResponse,
}

/// What the advisor sees when asked for strategy advice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdviceRequest {
    pub player: PlayerId,
    /// Goals on the table, in reveal order.
    pub table: Vec<Goal>,
    pub remaining: usize,
    /// Goals the active player has collected so far.
    pub hand: Vec<Goal>,
}

impl AdviceRequest {
    #[must_use]
    pub fn from_state(state: &GameState) -> Self {
        Self {
            player: state.active_player,
            table: state.table_goals(),
            remaining: state.draw_pile_size(),
            hand: state.collected_goals(state.active_player),
        }
    }
}

/// Source of advisory text.
pub trait Advisor {
    /// Short push-or-collect advice for the active player.
    fn strategist_advice(&mut self, request: &AdviceRequest) -> Result<String, AdvisorError>;

    /// A one-line fact about a goal, or `None` if there is nothing to say.
    fn goal_insight(&mut self, goal: Goal) -> Result<Option<String>, AdvisorError>;
}

/// Advisor for sessions with no collaborator attached.
#[derive(Clone, Copy, Debug, Default)]
pub struct OfflineAdvisor;

impl Advisor for OfflineAdvisor {
    fn strategist_advice(&mut self, _request: &AdviceRequest) -> Result<String, AdvisorError> {
        Err(AdvisorError::Unavailable("offline".to_string()))
    }

    fn goal_insight(&mut self, _goal: Goal) -> Result<Option<String>, AdvisorError> {
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Goal::*;
    use crate::games::SdgGameBuilder;

    #[test]
    fn test_request_from_state() {
        let (game, mut state) = SdgGameBuilder::new()
            .stacked_deck(vec![Partnerships, NoPoverty, ZeroHunger, LifeOnLand])
            .build(1)
            .unwrap();
        game.start_turn(&mut state, PlayerId::new(0)).unwrap();
        game.collect(&mut state, PlayerId::new(0)).unwrap();
        game.start_turn(&mut state, PlayerId::new(1)).unwrap();

        let request = AdviceRequest::from_state(&state);

        assert_eq!(request.player, PlayerId::new(1));
        assert_eq!(request.table, vec![NoPoverty]);
        assert_eq!(request.remaining, 2);
        assert!(request.hand.is_empty());
    }

    #[test]
    fn test_offline_advisor() {
        let mut advisor = OfflineAdvisor;
        let request = AdviceRequest {
            player: PlayerId::new(0),
            table: vec![],
            remaining: 0,
            hand: vec![],
        };

        assert!(matches!(advisor.strategist_advice(&request), Err(AdvisorError::Unavailable(_))));
        assert_eq!(advisor.goal_insight(ClimateAction), Ok(None));
    }
}
