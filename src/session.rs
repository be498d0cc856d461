//! Game session: the boundary a presentation layer talks to.
//!
//! A `GameSession` owns the rules, the state, the automated driver and the
//! advisory boards. The presentation layer sends player input through
//! [`GameSession::act`], calls [`GameSession::tick`] on a timer, and reads
//! the state or subscribes to transitions. It never writes the state itself.
//!
//! The session never waits on an advisor. Due advice and insight requests
//! are queued as tickets; the presentation layer takes them, answers them
//! however it likes, and resolves them later. Advice that comes back after
//! the state has moved on is dropped.
//!
//! Time is the elapsed time since the session started, supplied by the
//! caller.

use std::collections::VecDeque;
use std::time::Duration;

use tracing::{debug, warn};

use crate::advisor::{AdviceBoard, AdviceTicket, AdvisorError, InsightBoard, InsightTicket};
use crate::agents::AutoPilot;
use crate::cards::Goal;
use crate::core::{Action, ConfigError, EngineError, GameConfig, GameState, Phase, PlayerId};
use crate::games::{SdgGame, SdgGameBuilder};
use crate::rules::{GameEvent, RulesEngine, Transition};

/// Lines kept in the activity feed.
pub const FEED_CAPACITY: usize = 10;

pub const READY_STATUS: &str = "Ready for your mission, Agent?";

/// Called after every accepted transition with the new state.
pub type Observer = Box<dyn FnMut(&GameState, &Transition)>;

/// A running game plus everything around it.
pub struct GameSession {
    game: SdgGame,
    state: GameState,
    pilot: AutoPilot,
    advice: AdviceBoard,
    insight: InsightBoard,
    advice_outbox: Option<AdviceTicket>,
    insight_outbox: Option<InsightTicket>,
    observers: Vec<Observer>,
    feed: VecDeque<String>,
    status: String,
}

impl GameSession {
    /// Start a session from a configuration.
    pub fn from_config(config: GameConfig, seed: u64) -> Result<Self, ConfigError> {
        let (game, state) = SdgGameBuilder::new().config(config).build(seed)?;
        Ok(Self::new(game, state))
    }

    /// Wrap a freshly built game. The session clock starts at zero.
    pub fn new(game: SdgGame, state: GameState) -> Self {
        let timing = &game.config().timing;
        let mut pilot = AutoPilot::new(game.config(), state.rng.for_context("autopilot"));
        let mut advice = AdviceBoard::new(timing.advice_quiet());
        let insight = InsightBoard::new(timing.insight_display());

        pilot.arm(&state, Duration::ZERO);
        advice.on_state_change(&state, Duration::ZERO);

        let lead = state
            .players
            .values()
            .find(|p| p.initiator)
            .unwrap_or_else(|| state.active());
        let mut feed = VecDeque::with_capacity(FEED_CAPACITY);
        feed.push_front(format!("Mission initialized. Future secured by {}.", lead.name));

        Self {
            game,
            state,
            pilot,
            advice,
            insight,
            advice_outbox: None,
            insight_outbox: None,
            observers: Vec::new(),
            feed,
            status: READY_STATUS.to_string(),
        }
    }

    /// Apply a player's action.
    pub fn act(
        &mut self,
        player: PlayerId,
        action: Action,
        now: Duration,
    ) -> Result<Transition, EngineError> {
        let transition = self.game.apply_action(&mut self.state, player, &action)?;
        self.after_transition(player, &transition, now);
        Ok(transition)
    }

    /// Advance timers: expire the insight, queue due advice, and let the
    /// automated driver act if its delay has elapsed.
    ///
    /// Returns the automated transition, if one happened.
    pub fn tick(&mut self, now: Duration) -> Option<Transition> {
        self.insight.expire(now);

        if let Some(ticket) = self.advice.take_due(&self.state, now) {
            self.advice_outbox = Some(ticket);
        }

        let moved = self.pilot.poll(&self.game, &mut self.state, now)?;
        match moved.result {
            Ok(transition) => {
                self.after_transition(moved.player, &transition, now);
                Some(transition)
            }
            Err(err) => {
                warn!(
                    player = %moved.player,
                    action = %moved.action,
                    error = %err,
                    "automated move rejected"
                );
                self.pilot.arm(&self.state, now);
                None
            }
        }
    }

    /// Register an observer for accepted transitions.
    pub fn subscribe(&mut self, observer: impl FnMut(&GameState, &Transition) + 'static) {
        self.observers.push(Box::new(observer));
    }

    // === Advisory hand-off ===

    /// Take the advice request that is waiting to be sent, if any.
    pub fn take_advice_request(&mut self) -> Option<AdviceTicket> {
        self.advice_outbox.take()
    }

    /// Hand back the answer to an advice ticket. Returns `false` if the
    /// state has changed since the ticket was issued and the answer was
    /// dropped.
    pub fn resolve_advice(
        &mut self,
        ticket: &AdviceTicket,
        result: Result<String, AdvisorError>,
    ) -> bool {
        self.advice.complete(ticket, result, self.state.version)
    }

    /// Take the insight request that is waiting to be sent, if any.
    pub fn take_insight_request(&mut self) -> Option<InsightTicket> {
        self.insight_outbox.take()
    }

    /// Hand back the answer to an insight ticket; it shows from `now`.
    pub fn resolve_insight(
        &mut self,
        ticket: InsightTicket,
        result: Result<Option<String>, AdvisorError>,
        now: Duration,
    ) {
        self.insight.show(ticket.goal, result, now);
    }

    fn after_transition(&mut self, player: PlayerId, transition: &Transition, now: Duration) {
        self.narrate(player, transition);

        if let Some(goal) = Self::direct_single_collect(transition) {
            self.insight_outbox = Some(InsightTicket { goal });
        }

        if let Some(stale) = self.advice_outbox.take() {
            debug!(ticket = stale.version, "unsent advice request superseded");
        }
        self.advice.on_state_change(&self.state, now);
        self.pilot.arm(&self.state, now);

        for observer in &mut self.observers {
            observer(&self.state, transition);
        }
    }

    fn direct_single_collect(transition: &Transition) -> Option<Goal> {
        transition.events.iter().find_map(|event| match event {
            GameEvent::Collected {
                cards, direct: true, ..
            } if cards.len() == 1 => cards.first().map(|c| c.goal),
            _ => None,
        })
    }

    fn narrate(&mut self, player: PlayerId, transition: &Transition) {
        for event in &transition.events {
            match event {
                GameEvent::CardRevealed { card } => {
                    if transition.from == Phase::Flip {
                        self.set_status("Initial card deployed. High risk, high reward.");
                    } else {
                        self.set_status("Safe arrival. Proceed or extract?");
                        let line = format!("{} deployed {}.", self.name(player), card.goal);
                        self.log(line);
                    }
                }
                GameEvent::Bust { card } => {
                    self.set_status("COLLISION! Resources lost in the temporal blast.");
                    let line = format!("{} collided on {}.", self.name(player), card.goal);
                    self.log(line);
                }
                GameEvent::Collected {
                    player,
                    cards,
                    direct,
                } => {
                    let line = match cards.first() {
                        Some(card) if *direct => {
                            format!("{} extracted {}.", self.name(*player), card.goal)
                        }
                        _ => format!("{} extracted {} goals.", self.name(*player), cards.len()),
                    };
                    self.log(line);
                }
                GameEvent::TurnPassed { to } => {
                    let status = format!("{}'s window is open.", self.name(*to));
                    self.status = status;
                }
                GameEvent::GiftExchangeOpened => {
                    self.set_status("Supply lines open: Support your fellow agents.");
                }
                GameEvent::Gifted { to, card, .. } => {
                    let line =
                        format!("Goal {} transferred to {}.", card.goal.id(), self.name(*to));
                    self.log(line);
                }
                GameEvent::GameFinished { grand_total, .. } => {
                    if let Some(tally) = &self.state.final_tally {
                        self.status = tally.verdict().to_string();
                    }
                    let line = format!("Team total: {grand_total} of {}.", self.state.target_score);
                    self.log(line);
                }
                GameEvent::Discarded { .. }
                | GameEvent::Forfeited { .. }
                | GameEvent::GiftSelected { .. }
                | GameEvent::GiftDeselected { .. }
                | GameEvent::GiftSkipped { .. } => {}
            }
        }

        if transition.to == Phase::DiscardSelect {
            self.set_status("Security Protocol: Sacrifice one card to extract the rest.");
        }
    }

    fn name(&self, player: PlayerId) -> &str {
        &self.state.players[player].name
    }

    fn set_status(&mut self, status: &str) {
        self.status.clear();
        self.status.push_str(status);
    }

    fn log(&mut self, line: String) {
        self.feed.push_front(line);
        self.feed.truncate(FEED_CAPACITY);
    }

    // === Views ===

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn game(&self) -> &SdgGame {
        &self.game
    }

    pub fn status(&self) -> &str {
        &self.status
    }

    /// Activity feed, newest first.
    pub fn feed(&self) -> impl Iterator<Item = &str> {
        self.feed.iter().map(String::as_str)
    }

    pub fn advice(&self) -> &str {
        self.advice.text()
    }

    pub fn is_advice_loading(&self) -> bool {
        self.advice.is_loading()
    }

    pub fn insight(&self, now: Duration) -> Option<(Goal, &str)> {
        self.insight.current(now)
    }

    /// When the automated driver will next act, if it is armed.
    pub fn autopilot_due(&self) -> Option<Duration> {
        self.pilot.due()
    }
}
