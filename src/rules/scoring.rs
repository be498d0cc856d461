//! Scoring engine.
//!
//! Scoring is a pure function of the cards a player holds: cards are counted
//! per goal and each goal's count is turned into points by its catalog rule.
//! The team passes when the sum of every player's score reaches the target.

use serde::{Deserialize, Serialize};

use crate::cards::{Goal, GoalCatalog};
use crate::core::player::PlayerMap;

/// Per-goal card counts for one player.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GoalTally([u32; 8]);

impl GoalTally {
    pub fn from_goals(goals: impl IntoIterator<Item = Goal>) -> Self {
        let mut counts = [0u32; 8];
        for goal in goals {
            counts[goal.ordinal()] += 1;
        }
        Self(counts)
    }

    #[must_use]
    pub fn count(&self, goal: Goal) -> u32 {
        self.0[goal.ordinal()]
    }

    /// Iterate over (goal, count) pairs, including zero counts.
    pub fn iter(&self) -> impl Iterator<Item = (Goal, u32)> + '_ {
        Goal::ALL.into_iter().map(|g| (g, self.count(g)))
    }
}

/// Result of scoring a finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalTally {
    pub grand_total: u32,
    pub target: u32,
    pub passed: bool,
    /// Individual scores; informational only, the team total decides.
    pub scores: PlayerMap<u32>,
}

impl FinalTally {
    /// One-line verdict for the end screen.
    #[must_use]
    pub fn verdict(&self) -> &'static str {
        if self.passed {
            "Future stabilized. Goals met."
        } else {
            "Insufficient momentum. Collapse imminent."
        }
    }
}

/// Applies catalog rules to collections.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScoringEngine {
    catalog: GoalCatalog,
}

impl ScoringEngine {
    #[must_use]
    pub fn new(catalog: GoalCatalog) -> Self {
        Self { catalog }
    }

    /// Score one player's collection. An empty collection scores 0.
    ///
    /// ```
    /// use sdg_agents::cards::Goal::*;
    /// use sdg_agents::rules::ScoringEngine;
    ///
    /// let mut hand = vec![NoPoverty, NoPoverty, ZeroHunger, ZeroHunger, ZeroHunger];
    /// hand.extend([Partnerships, Partnerships]);
    /// assert_eq!(ScoringEngine::default().score(hand), 10);
    /// ```
    pub fn score(&self, goals: impl IntoIterator<Item = Goal>) -> u32 {
        self.score_tally(&GoalTally::from_goals(goals))
    }

    #[must_use]
    pub fn score_tally(&self, tally: &GoalTally) -> u32 {
        tally
            .iter()
            .map(|(goal, count)| self.catalog.rule(goal).points(count))
            .sum()
    }

    /// Score every player and compare the team total against `target`.
    #[must_use]
    pub fn finalize(&self, collections: &PlayerMap<Vec<Goal>>, target: u32) -> FinalTally {
        let scores = collections.map(|_, goals| self.score(goals.iter().copied()));
        let grand_total = scores.values().sum();

        FinalTally {
            grand_total,
            target,
            passed: grand_total >= target,
            scores,
        }
    }
}

/// Score a collection with the standard catalog.
pub fn score(goals: impl IntoIterator<Item = Goal>) -> u32 {
    ScoringEngine::default().score(goals)
}

/// Finalize a game with the standard catalog.
#[must_use]
pub fn finalize_game(collections: &PlayerMap<Vec<Goal>>, target: u32) -> FinalTally {
    ScoringEngine::default().finalize(collections, target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Goal::*;
    use crate::core::PlayerId;

    #[test]
    fn test_empty_collection_scores_zero() {
        assert_eq!(score(Vec::<Goal>::new()), 0);
    }

    #[test]
    fn test_reference_hand() {
        let mut hand = vec![NoPoverty, NoPoverty, ZeroHunger, ZeroHunger, ZeroHunger];
        hand.extend([Partnerships, Partnerships]);
        assert_eq!(score(hand), 10);
    }

    #[test]
    fn test_per_goal_contributions() {
        assert_eq!(score([NoPoverty; 3]), 6);
        assert_eq!(score([ZeroHunger]), 2);
        assert_eq!(score([QualityEducation; 4]), 2);
        assert_eq!(score([ClimateAction]), 2);
        assert_eq!(score([CleanWater, CleanWater]), 1);
        assert_eq!(score([LifeBelowWater]), 1);
        assert_eq!(score([LifeOnLand; 5]), 1);
        assert_eq!(score([Partnerships; 3]), 2);
        assert_eq!(score([Partnerships; 4]), 4);
        assert_eq!(score([Partnerships; 9]), 4);
    }

    #[test]
    fn test_one_of_everything() {
        assert_eq!(score(Goal::ALL), 2 + 2 + 2 + 1 + 2 + 1 + 1 + 2);
    }

    #[test]
    fn test_order_does_not_matter() {
        let a = [Partnerships, NoPoverty, ZeroHunger, NoPoverty];
        let b = [NoPoverty, NoPoverty, ZeroHunger, Partnerships];
        assert_eq!(score(a), score(b));
    }

    #[test]
    fn test_tally_counts() {
        let tally = GoalTally::from_goals([LifeOnLand, LifeOnLand, NoPoverty]);
        assert_eq!(tally.count(LifeOnLand), 2);
        assert_eq!(tally.count(NoPoverty), 1);
        assert_eq!(tally.count(Partnerships), 0);
        assert_eq!(tally.iter().map(|(_, c)| c).sum::<u32>(), 3);
    }

    #[test]
    fn test_finalize_pass_and_fail() {
        let collections =
            PlayerMap::from_vec(vec![vec![NoPoverty; 5], vec![ZeroHunger, ZeroHunger]]);

        let tally = finalize_game(&collections, 13);
        assert_eq!(tally.scores[PlayerId::new(0)], 10);
        assert_eq!(tally.scores[PlayerId::new(1)], 3);
        assert_eq!(tally.grand_total, 13);
        assert!(tally.passed);
        assert_eq!(tally.verdict(), "Future stabilized. Goals met.");

        let tally = finalize_game(&collections, 14);
        assert!(!tally.passed);
        assert_eq!(tally.verdict(), "Insufficient momentum. Collapse imminent.");
    }

    #[test]
    fn test_finalize_is_idempotent() {
        let collections =
            PlayerMap::from_vec(vec![vec![Partnerships; 5], vec![], vec![CleanWater]]);
        let first = finalize_game(&collections, 63);
        let second = finalize_game(&collections, 63);
        assert_eq!(first, second);
    }
}
