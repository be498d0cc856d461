//! Debounced strategy advice.
//!
//! Every state change either schedules a request (in `Decision`) or clears
//! the board. A schedule fires after the quiet period only if no newer state
//! arrived in between, and a reply is applied only if the state it was asked
//! about is still current.

use std::time::Duration;

use tracing::{debug, warn};

use super::{AdviceRequest, Advisor, AdvisorError};
use crate::core::{GameState, Phase};

/// Shown when the advisor fails.
pub const FALLBACK_ADVICE: &str = "The future depends on your decision.";

/// Shown when the advisor answers with nothing.
pub const EMPTY_ADVICE: &str = "Continue if you're feeling lucky, Agent.";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Scheduled {
    due: Duration,
    version: u64,
}

/// An advice request that is due, tagged with the state version it describes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdviceTicket {
    pub version: u64,
    pub request: AdviceRequest,
}

impl AdviceTicket {
    /// Put the request to `advisor`. Callers run this wherever a slow reply
    /// cannot hold up play, then hand the result back to the board.
    pub fn ask<A: Advisor + ?Sized>(&self, advisor: &mut A) -> Result<String, AdvisorError> {
        advisor.strategist_advice(&self.request)
    }
}

/// Advice text for the active player.
#[derive(Clone, Debug)]
pub struct AdviceBoard {
    quiet: Duration,
    scheduled: Option<Scheduled>,
    in_flight: Option<u64>,
    text: String,
}

impl AdviceBoard {
    #[must_use]
    pub fn new(quiet: Duration) -> Self {
        Self {
            quiet,
            scheduled: None,
            in_flight: None,
            text: String::new(),
        }
    }

    /// React to a new state.
    pub fn on_state_change(&mut self, state: &GameState, now: Duration) {
        if state.phase == Phase::Decision {
            self.scheduled = Some(Scheduled {
                due: now + self.quiet,
                version: state.version,
            });
        } else {
            self.scheduled = None;
            self.in_flight = None;
            self.text.clear();
        }
    }

    /// Issue the scheduled request once the quiet period has passed.
    pub fn take_due(&mut self, state: &GameState, now: Duration) -> Option<AdviceTicket> {
        let scheduled = self.scheduled?;
        if now < scheduled.due {
            return None;
        }
        self.scheduled = None;

        if scheduled.version != state.version || state.phase != Phase::Decision {
            return None;
        }

        self.in_flight = Some(scheduled.version);
        Some(AdviceTicket {
            version: scheduled.version,
            request: AdviceRequest::from_state(state),
        })
    }

    /// Apply a reply. Returns `false` if the ticket was superseded and the
    /// reply was discarded.
    pub fn complete(
        &mut self,
        ticket: &AdviceTicket,
        result: Result<String, AdvisorError>,
        current_version: u64,
    ) -> bool {
        if self.in_flight != Some(ticket.version) || ticket.version != current_version {
            debug!(ticket = ticket.version, current = current_version, "stale advice discarded");
            return false;
        }
        self.in_flight = None;

        self.text = match result {
            Ok(text) if !text.trim().is_empty() => text,
            Ok(_) | Err(AdvisorError::EmptyResponse) => EMPTY_ADVICE.to_string(),
            Err(err) => {
                warn!(error = %err, "strategist advice failed");
                FALLBACK_ADVICE.to_string()
            }
        };
        true
    }

    /// Current advice; empty when there is none.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// A request has been issued and not yet answered.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.in_flight.is_some()
    }
}
