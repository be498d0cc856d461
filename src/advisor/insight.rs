//! Transient goal insights.

use std::time::Duration;

use tracing::warn;

use super::{Advisor, AdvisorError};
use crate::cards::Goal;

#[derive(Clone, Debug, PartialEq, Eq)]
struct Shown {
    goal: Goal,
    text: String,
    until: Duration,
}

/// An insight request for a goal that was just collected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InsightTicket {
    pub goal: Goal,
}

impl InsightTicket {
    pub fn ask<A: Advisor + ?Sized>(
        &self,
        advisor: &mut A,
    ) -> Result<Option<String>, AdvisorError> {
        advisor.goal_insight(self.goal)
    }
}

/// At most one insight, visible until its display time runs out.
#[derive(Clone, Debug)]
pub struct InsightBoard {
    display: Duration,
    shown: Option<Shown>,
}

impl InsightBoard {
    #[must_use]
    pub fn new(display: Duration) -> Self {
        Self {
            display,
            shown: None,
        }
    }

    /// Show the advisor's reply for `goal`. Failures and empty replies show
    /// nothing.
    pub fn show(
        &mut self,
        goal: Goal,
        result: Result<Option<String>, AdvisorError>,
        now: Duration,
    ) {
        self.shown = match result {
            Ok(Some(text)) if !text.trim().is_empty() => Some(Shown {
                goal,
                text,
                until: now + self.display,
            }),
            Ok(_) => None,
            Err(err) => {
                warn!(%goal, error = %err, "goal insight failed");
                None
            }
        };
    }

    /// The visible insight at `now`.
    #[must_use]
    pub fn current(&self, now: Duration) -> Option<(Goal, &str)> {
        self.shown
            .as_ref()
            .filter(|s| now < s.until)
            .map(|s| (s.goal, s.text.as_str()))
    }

    /// Drop the insight once its display time has passed.
    pub fn expire(&mut self, now: Duration) {
        if self.shown.as_ref().is_some_and(|s| now >= s.until) {
            self.shown = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_insight_expires() {
        let mut board = InsightBoard::new(ms(8000));
        board.show(Goal::ClimateAction, Ok(Some("Act now.".to_string())), ms(100));

        assert_eq!(board.current(ms(8099)), Some((Goal::ClimateAction, "Act now.")));
        assert_eq!(board.current(ms(8100)), None);

        board.expire(ms(8100));
        assert_eq!(board.current(ms(0)), None);
    }

    #[test]
    fn test_failure_shows_nothing() {
        let mut board = InsightBoard::new(ms(8000));
        board.show(Goal::NoPoverty, Ok(Some("Old".to_string())), ms(0));
        board.show(Goal::ZeroHunger, Err(AdvisorError::Timeout), ms(10));
        assert_eq!(board.current(ms(20)), None);

        board.show(Goal::ZeroHunger, Ok(None), ms(30));
        assert_eq!(board.current(ms(40)), None);
    }

    #[test]
    fn test_newer_insight_replaces_older() {
        let mut board = InsightBoard::new(ms(8000));
        board.show(Goal::NoPoverty, Ok(Some("One".to_string())), ms(0));
        board.show(Goal::LifeOnLand, Ok(Some("Two".to_string())), ms(5000));

        board.expire(ms(8000));
        assert_eq!(board.current(ms(12000)), Some((Goal::LifeOnLand, "Two")));
    }
}
