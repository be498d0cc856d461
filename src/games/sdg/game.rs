//! SDG game implementation: builder and turn engine.

use tracing::{debug, info};

use crate::cards::{DeckBuilder, DeckCounts, Goal};
use crate::core::{
    Action, ConfigError, EngineError, GameConfig, GameRng, GameState, Phase, PlayerConfig, PlayerId,
};
use crate::rules::{GameEvent, RulesEngine, ScoringEngine, Transition};
use crate::zones::Zone;

/// The SDG game rules.
#[derive(Clone, Debug)]
pub struct SdgGame {
    config: GameConfig,
    scoring: ScoringEngine,
}

/// Builder for creating an SdgGame.
///
/// ## Example
///
/// ```
/// use sdg_agents::core::Phase;
/// use sdg_agents::games::SdgGameBuilder;
///
/// let (_game, state) = SdgGameBuilder::new().target_score(40).build(42).unwrap();
/// assert_eq!(state.phase, Phase::Flip);
/// assert_eq!(state.draw_pile_size(), 79);
/// assert_eq!(state.target_score, 40);
/// ```
#[derive(Clone, Debug, Default)]
pub struct SdgGameBuilder {
    config: GameConfig,
    stacked: Option<Vec<Goal>>,
}

impl SdgGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: GameConfig) -> Self {
        self.config = config;
        self
    }

    pub fn roster(mut self, roster: Vec<PlayerConfig>) -> Self {
        self.config.roster = roster;
        self
    }

    pub fn target_score(mut self, target: u32) -> Self {
        self.config.target_score = target;
        self
    }

    pub fn deck_counts(mut self, counts: DeckCounts) -> Self {
        self.config.deck = counts;
        self
    }

    /// Deal exactly these goals, first element first, instead of a shuffled
    /// deck built from the counts.
    pub fn stacked_deck(mut self, draw_order: Vec<Goal>) -> Self {
        self.stacked = Some(draw_order);
        self
    }

    pub fn draw_probability(mut self, probability: f64) -> Self {
        self.config.automation.draw_probability = probability;
        self
    }

    /// Build the game and initial state.
    pub fn build(self, seed: u64) -> Result<(SdgGame, GameState), ConfigError> {
        self.config.validate()?;

        let mut rng = GameRng::new(seed);
        let pile = match &self.stacked {
            Some(order) => DeckBuilder::stacked(order),
            None => DeckBuilder::new(self.config.deck.clone()).build(&mut rng),
        };

        let players = self.config.seat_players();
        let state = GameState::new(players, pile, self.config.target_score, rng);

        info!(
            seed,
            players = state.player_count(),
            deck = state.deck_size(),
            target = state.target_score,
            stacked = self.stacked.is_some(),
            "game created"
        );

        let game = SdgGame {
            config: self.config,
            scoring: ScoringEngine::default(),
        };

        Ok((game, state))
    }
}

/// Reject an action unless the game is in `phase`.
pub(super) fn require_phase(
    state: &GameState,
    phase: Phase,
    action: &'static str,
) -> Result<(), EngineError> {
    if state.phase == phase {
        Ok(())
    } else {
        Err(EngineError::WrongPhase {
            action,
            phase: state.phase,
        })
    }
}

impl SdgGame {
    /// Get the scoring engine.
    pub fn scoring(&self) -> &ScoringEngine {
        &self.scoring
    }

    // === Trigger API ===

    pub fn start_turn(
        &self,
        state: &mut GameState,
        player: PlayerId,
    ) -> Result<Transition, EngineError> {
        self.apply_action(state, player, &Action::StartTurn)
    }

    pub fn draw_more(
        &self,
        state: &mut GameState,
        player: PlayerId,
    ) -> Result<Transition, EngineError> {
        self.apply_action(state, player, &Action::DrawMore)
    }

    pub fn collect(
        &self,
        state: &mut GameState,
        player: PlayerId,
    ) -> Result<Transition, EngineError> {
        self.apply_action(state, player, &Action::Collect)
    }

    pub fn discard(
        &self,
        state: &mut GameState,
        player: PlayerId,
        index: usize,
    ) -> Result<Transition, EngineError> {
        self.apply_action(state, player, &Action::Discard { index })
    }

    pub fn acknowledge_bust(
        &self,
        state: &mut GameState,
        player: PlayerId,
    ) -> Result<Transition, EngineError> {
        self.apply_action(state, player, &Action::AcknowledgeBust)
    }

    pub fn select_gift(
        &self,
        state: &mut GameState,
        player: PlayerId,
        card_index: usize,
    ) -> Result<Transition, EngineError> {
        self.apply_action(state, player, &Action::SelectGift { card_index })
    }

    pub fn give_card(
        &self,
        state: &mut GameState,
        player: PlayerId,
        card_index: Option<usize>,
        to: PlayerId,
    ) -> Result<Transition, EngineError> {
        self.apply_action(state, player, &Action::GiveCard { card_index, to })
    }

    pub fn skip_gift(
        &self,
        state: &mut GameState,
        player: PlayerId,
    ) -> Result<Transition, EngineError> {
        self.apply_action(state, player, &Action::SkipGift)
    }

    // === Turn flow ===

    fn check_actor(state: &GameState, player: PlayerId) -> Result<(), EngineError> {
        if state.is_over() {
            return Err(EngineError::GameOver);
        }
        if !state.players.contains(player) {
            return Err(EngineError::UnknownPlayer(player));
        }
        if player != state.active_player {
            return Err(EngineError::OutOfTurn {
                player,
                active: state.active_player,
            });
        }
        Ok(())
    }

    fn dispatch(
        &self,
        state: &mut GameState,
        action: Action,
        transition: &mut Transition,
    ) -> Result<(), EngineError> {
        match action {
            Action::StartTurn => self.handle_start_turn(state, transition),
            Action::DrawMore => Self::handle_draw_more(state, transition),
            Action::Collect => self.handle_collect(state, transition),
            Action::Discard { index } => self.handle_discard(state, index, transition),
            Action::AcknowledgeBust => self.handle_acknowledge_bust(state, transition),
            Action::SelectGift { card_index } => {
                Self::handle_select_gift(state, card_index, transition)
            }
            Action::GiveCard { card_index, to } => {
                self.handle_give_card(state, card_index, to, transition)
            }
            Action::SkipGift => self.handle_skip_gift(state, transition),
        }
    }

    fn handle_start_turn(
        &self,
        state: &mut GameState,
        transition: &mut Transition,
    ) -> Result<(), EngineError> {
        require_phase(state, Phase::Flip, "start turn")?;

        match state.draw_card() {
            Some(card) => {
                state.phase = Phase::Decision;
                transition.push(GameEvent::CardRevealed { card });
            }
            None => self.open_gift_exchange(state, transition),
        }
        Ok(())
    }

    fn handle_draw_more(
        state: &mut GameState,
        transition: &mut Transition,
    ) -> Result<(), EngineError> {
        require_phase(state, Phase::Decision, "draw more")?;

        let prior = state.table();
        let card = state.draw_card().ok_or(EngineError::DrawPileEmpty)?;

        if prior.iter().any(|c| c.collides_with(&card)) {
            debug!(player = %state.active_player, goal = %card.goal, "bust");
            state.phase = Phase::Bust;
            transition.push(GameEvent::Bust { card });
        } else {
            transition.push(GameEvent::CardRevealed { card });
        }
        Ok(())
    }

    fn handle_collect(
        &self,
        state: &mut GameState,
        transition: &mut Transition,
    ) -> Result<(), EngineError> {
        require_phase(state, Phase::Decision, "collect")?;

        if state.table_size() >= 2 {
            state.phase = Phase::DiscardSelect;
            return Ok(());
        }

        let player = state.active_player;
        let ids = state.zones.sweep_table(Zone::Collected(player));
        transition.push(GameEvent::Collected {
            player,
            cards: state.resolve_cards(&ids),
            direct: true,
        });
        self.end_turn(state, transition);
        Ok(())
    }

    fn handle_discard(
        &self,
        state: &mut GameState,
        index: usize,
        transition: &mut Transition,
    ) -> Result<(), EngineError> {
        require_phase(state, Phase::DiscardSelect, "discard")?;

        let sacrificed = state
            .zones
            .card_at(Zone::Table, index)
            .ok_or(EngineError::InvalidTableIndex {
                index,
                len: state.table_size(),
            })?;

        state.zones.move_to_zone(sacrificed, Zone::Forfeited);
        if let Some(card) = state.card(sacrificed).copied() {
            transition.push(GameEvent::Discarded { card });
        }

        let player = state.active_player;
        let kept = state.zones.sweep_table(Zone::Collected(player));
        transition.push(GameEvent::Collected {
            player,
            cards: state.resolve_cards(&kept),
            direct: false,
        });
        self.end_turn(state, transition);
        Ok(())
    }

    fn handle_acknowledge_bust(
        &self,
        state: &mut GameState,
        transition: &mut Transition,
    ) -> Result<(), EngineError> {
        require_phase(state, Phase::Bust, "acknowledge bust")?;

        let lost = state.zones.sweep_table(Zone::Forfeited);
        transition.push(GameEvent::Forfeited {
            cards: state.resolve_cards(&lost),
        });
        self.end_turn(state, transition);
        Ok(())
    }

    /// Route to the next player's `Flip`, or to the gift exchange once the
    /// draw pile is empty.
    fn end_turn(&self, state: &mut GameState, transition: &mut Transition) {
        if state.draw_pile_size() == 0 {
            self.open_gift_exchange(state, transition);
            return;
        }

        let next = state.active_player.next(state.player_count());
        state.active_player = next;
        state.turn_number += 1;
        state.phase = Phase::Flip;
        transition.push(GameEvent::TurnPassed { to: next });
    }

    fn open_gift_exchange(&self, state: &mut GameState, transition: &mut Transition) {
        state.phase = Phase::GiftExchange;
        state.active_player = PlayerId::new(0);
        state.gift_selection = None;
        transition.push(GameEvent::GiftExchangeOpened);

        info!(
            turn = state.turn_number,
            forfeited = state.forfeited_size(),
            "draw pile exhausted, gift exchange open"
        );
    }
}

impl RulesEngine for SdgGame {
    fn config(&self) -> &GameConfig {
        &self.config
    }

    fn legal_actions(&self, state: &GameState, player: PlayerId) -> Vec<Action> {
        if Self::check_actor(state, player).is_err() {
            return vec![];
        }

        match state.phase {
            Phase::Flip => vec![Action::StartTurn],
            Phase::Decision => {
                let mut actions = Vec::with_capacity(2);
                if state.draw_pile_size() > 0 {
                    actions.push(Action::DrawMore);
                }
                actions.push(Action::Collect);
                actions
            }
            Phase::Bust => vec![Action::AcknowledgeBust],
            Phase::DiscardSelect => (0..state.table_size())
                .map(|index| Action::Discard { index })
                .collect(),
            Phase::GiftExchange => Self::legal_gift_actions(state, player),
            Phase::GameOver => vec![],
        }
    }

    fn apply_action(
        &self,
        state: &mut GameState,
        player: PlayerId,
        action: &Action,
    ) -> Result<Transition, EngineError> {
        let turn = state.turn_number;
        let mut transition = Transition::new(state.phase);

        let result = Self::check_actor(state, player)
            .and_then(|()| self.dispatch(state, *action, &mut transition));

        if let Err(err) = result {
            debug!(
                %player,
                %action,
                phase = %state.phase,
                error = %err,
                "action rejected"
            );
            return Err(err);
        }

        transition.to = state.phase;
        state.record_action(player, *action, turn);

        debug!(
            %player,
            %action,
            from = %transition.from,
            to = %transition.to,
            version = state.version,
            "action applied"
        );

        Ok(transition)
    }
}
