//! Gift exchange and final scoring.
//!
//! Runs once, after the draw pile is exhausted. Players are visited in seat
//! order starting from seat 0; each may move one card from their own
//! collection to another player's, or skip. After the last seat acts the
//! game is scored and ends.

use tracing::info;

use super::game::{require_phase, SdgGame};
use crate::core::{Action, EngineError, GameState, Phase, PlayerId};
use crate::rules::{GameEvent, Transition};
use crate::zones::Zone;

impl SdgGame {
    pub(super) fn legal_gift_actions(state: &GameState, player: PlayerId) -> Vec<Action> {
        let recipients: Vec<PlayerId> = PlayerId::all(state.player_count())
            .filter(|&p| p != player)
            .collect();
        let mut actions = vec![Action::SkipGift];

        if state.gift_selection.is_some() {
            actions.extend(recipients.iter().map(|&to| Action::GiveCard {
                card_index: None,
                to,
            }));
        }

        for card_index in 0..state.collected_size(player) {
            actions.push(Action::SelectGift { card_index });
            actions.extend(recipients.iter().map(|&to| Action::GiveCard {
                card_index: Some(card_index),
                to,
            }));
        }

        actions
    }

    pub(super) fn handle_select_gift(
        state: &mut GameState,
        card_index: usize,
        transition: &mut Transition,
    ) -> Result<(), EngineError> {
        require_phase(state, Phase::GiftExchange, "select gift")?;

        let player = state.active_player;
        let zone = Zone::Collected(player);
        let id = state.zones.card_at(zone, card_index).ok_or(EngineError::InvalidCardIndex {
            index: card_index,
            len: state.zones.zone_size(zone),
        })?;

        // Picking the selected card again puts it back.
        if state.gift_selection == Some(card_index) {
            state.gift_selection = None;
            transition.push(GameEvent::GiftDeselected { player });
            return Ok(());
        }

        state.gift_selection = Some(card_index);
        if let Some(card) = state.card(id).copied() {
            transition.push(GameEvent::GiftSelected { player, card });
        }
        Ok(())
    }

    pub(super) fn handle_give_card(
        &self,
        state: &mut GameState,
        card_index: Option<usize>,
        to: PlayerId,
        transition: &mut Transition,
    ) -> Result<(), EngineError> {
        require_phase(state, Phase::GiftExchange, "give card")?;

        let from = state.active_player;
        if to == from || !state.players.contains(to) {
            return Err(EngineError::InvalidRecipient(to));
        }

        let index = card_index.or(state.gift_selection).ok_or(EngineError::NoGiftSelected)?;
        let zone = Zone::Collected(from);
        let id = state.zones.card_at(zone, index).ok_or(EngineError::InvalidCardIndex {
            index,
            len: state.zones.zone_size(zone),
        })?;

        state.zones.move_to_zone(id, Zone::Collected(to));
        state.gift_selection = None;
        if let Some(card) = state.card(id).copied() {
            info!(%from, %to, goal = %card.goal, "card gifted");
            transition.push(GameEvent::Gifted { from, to, card });
        }

        self.advance_gift(state, transition);
        Ok(())
    }

    pub(super) fn handle_skip_gift(
        &self,
        state: &mut GameState,
        transition: &mut Transition,
    ) -> Result<(), EngineError> {
        require_phase(state, Phase::GiftExchange, "skip gift")?;

        let player = state.active_player;
        state.gift_selection = None;
        transition.push(GameEvent::GiftSkipped { player });

        self.advance_gift(state, transition);
        Ok(())
    }

    /// Hand the gift slot to the next seat, or score the game after the last.
    fn advance_gift(&self, state: &mut GameState, transition: &mut Transition) {
        let next = state.active_player.index() + 1;
        if next < state.player_count() {
            state.active_player = PlayerId::new(next as u8);
        } else {
            self.finalize(state, transition);
        }
    }

    fn finalize(&self, state: &mut GameState, transition: &mut Transition) {
        let collections = state.players.map(|p, _| state.collected_goals(p));
        let tally = self.scoring().finalize(&collections, state.target_score);

        for (p, player) in state.players.iter_mut() {
            player.final_score = Some(tally.scores[p]);
        }

        info!(
            grand_total = tally.grand_total,
            target = tally.target,
            passed = tally.passed,
            "game finished"
        );

        transition.push(GameEvent::GameFinished {
            grand_total: tally.grand_total,
            passed: tally.passed,
        });
        state.final_tally = Some(tally);
        state.phase = Phase::GameOver;
    }
}
