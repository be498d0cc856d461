//! Timer-driven driver for automated seats.
//!
//! The driver holds at most one pending move. Every state change re-arms it
//! (replacing whatever was pending), and a pending move only fires if the
//! state version it was armed for is still current. Time is passed in by the
//! caller as the elapsed time since the session started, so the driver is
//! deterministic under test.

use std::time::Duration;

use tracing::debug;

use super::policy::{AutoPolicy, DefaultPolicy};
use crate::core::{Action, EngineError, GameConfig, GameRng, GameState, PlayerId};
use crate::rules::{RulesEngine, Transition};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Pending {
    due: Duration,
    version: u64,
}

/// A move the driver made on behalf of an automated seat.
#[derive(Clone, Debug)]
pub struct AutoMove {
    pub player: PlayerId,
    pub action: Action,
    pub result: Result<Transition, EngineError>,
}

/// Drives automated seats after a fixed delay.
#[derive(Clone, Debug)]
pub struct AutoPilot<P = DefaultPolicy> {
    policy: P,
    delay: Duration,
    rng: GameRng,
    pending: Option<Pending>,
}

impl AutoPilot<DefaultPolicy> {
    /// Driver using the stock policy and the configured delay.
    #[must_use]
    pub fn new(config: &GameConfig, rng: GameRng) -> Self {
        Self::with_policy(
            DefaultPolicy::from(&config.automation),
            config.timing.autopilot_delay(),
            rng,
        )
    }
}

impl<P: AutoPolicy> AutoPilot<P> {
    pub fn with_policy(policy: P, delay: Duration, rng: GameRng) -> Self {
        Self {
            policy,
            delay,
            rng,
            pending: None,
        }
    }

    /// Re-arm after a state change.
    ///
    /// Schedules a move `delay` after `now` if the active seat is automated
    /// and the game is still running; otherwise clears any pending move.
    pub fn arm(&mut self, state: &GameState, now: Duration) {
        self.pending = if state.is_over() || !state.active().automated {
            None
        } else {
            Some(Pending {
                due: now + self.delay,
                version: state.version,
            })
        };
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending move is due, if any.
    #[must_use]
    pub fn due(&self) -> Option<Duration> {
        self.pending.map(|p| p.due)
    }

    /// Fire the pending move if it is due.
    ///
    /// A move armed for an older state version is dropped without acting.
    /// The driver is disarmed either way; the caller re-arms after applying
    /// the resulting transition.
    pub fn poll<E: RulesEngine>(
        &mut self,
        engine: &E,
        state: &mut GameState,
        now: Duration,
    ) -> Option<AutoMove> {
        let pending = self.pending?;
        if now < pending.due {
            return None;
        }
        self.pending = None;

        if pending.version != state.version {
            debug!(
                armed = pending.version,
                current = state.version,
                "stale automated move dropped"
            );
            return None;
        }
        if state.is_over() || !state.active().automated {
            return None;
        }

        self.step(engine, state)
    }

    /// Act for the active player immediately, whether or not the seat is
    /// automated.
    pub fn step<E: RulesEngine>(&mut self, engine: &E, state: &mut GameState) -> Option<AutoMove> {
        let player = state.active_player;
        let action = self.policy.choose(state, &mut self.rng)?;
        debug!(%player, %action, "automated move");

        let result = engine.apply_action(state, player, &action);
        Some(AutoMove {
            player,
            action,
            result,
        })
    }
}
