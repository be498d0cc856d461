//! Automated player policies.
//!
//! A policy only picks the next action; it never mutates state. The driver
//! feeds the chosen action through the same `RulesEngine::apply_action` path
//! a human seat uses.

use crate::core::{Action, AutomationConfig, GameRng, GameState, Phase};

/// Policy for choosing an automated seat's next action.
pub trait AutoPolicy {
    /// Pick the active player's next action, or `None` if there is nothing
    /// to do.
    fn choose(&self, state: &GameState, rng: &mut GameRng) -> Option<Action>;
}

/// The stock automated agent.
///
/// - `Flip`: start the turn
/// - `Decision`: draw again with `draw_probability` while the table holds
///   fewer than `draw_limit` cards, otherwise collect
/// - `Bust`: acknowledge
/// - `DiscardSelect`: sacrifice the first table card
/// - `GiftExchange`: skip
#[derive(Clone, Debug, PartialEq)]
pub struct DefaultPolicy {
    pub draw_probability: f64,
    pub draw_limit: usize,
}

impl Default for DefaultPolicy {
    fn default() -> Self {
        Self::from(&AutomationConfig::default())
    }
}

impl From<&AutomationConfig> for DefaultPolicy {
    fn from(config: &AutomationConfig) -> Self {
        Self {
            draw_probability: config.draw_probability,
            draw_limit: config.draw_limit,
        }
    }
}

impl AutoPolicy for DefaultPolicy {
    fn choose(&self, state: &GameState, rng: &mut GameRng) -> Option<Action> {
        let action = match state.phase {
            Phase::Flip => Action::StartTurn,
            Phase::Decision => {
                let wants_more = state.table_size() < self.draw_limit && state.draw_pile_size() > 0;
                if wants_more && rng.gen_bool(self.draw_probability) {
                    Action::DrawMore
                } else {
                    Action::Collect
                }
            }
            Phase::Bust => Action::AcknowledgeBust,
            Phase::DiscardSelect => Action::Discard { index: 0 },
            Phase::GiftExchange => Action::SkipGift,
            Phase::GameOver => return None,
        };
        Some(action)
    }
}
