//! Deck construction.
//!
//! The deck is a multiset of cards built from a per-goal count table and
//! then uniformly shuffled. Piles are stored bottom-to-top: the last card
//! of the returned `Vec` is drawn first.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::goal::Goal;
use super::instance::{Card, CardId};
use crate::core::GameRng;

/// Number of copies of each goal in the deck.
///
/// Serializes as a map from goal identifier to count, e.g. `{"1": 7, "2": 8}`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DeckCounts(BTreeMap<Goal, u32>);

impl Default for DeckCounts {
    fn default() -> Self {
        Self::standard()
    }
}

impl DeckCounts {
    /// The counts the game ships with (79 cards).
    #[must_use]
    pub fn standard() -> Self {
        Self::from_pairs([
            (Goal::NoPoverty, 7),
            (Goal::ZeroHunger, 8),
            (Goal::QualityEducation, 10),
            (Goal::CleanWater, 8),
            (Goal::ClimateAction, 5),
            (Goal::LifeBelowWater, 10),
            (Goal::LifeOnLand, 12),
            (Goal::Partnerships, 19),
        ])
    }

    pub fn from_pairs(pairs: impl IntoIterator<Item = (Goal, u32)>) -> Self {
        Self(pairs.into_iter().collect())
    }

    /// Copies of `goal`; zero when absent.
    #[must_use]
    pub fn count(&self, goal: Goal) -> u32 {
        self.0.get(&goal).copied().unwrap_or(0)
    }

    /// Total deck size.
    #[must_use]
    pub fn total(&self) -> usize {
        self.0.values().map(|&c| c as usize).sum()
    }

    /// Iterate over (goal, count) pairs in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = (Goal, u32)> + '_ {
        self.0.iter().map(|(&g, &c)| (g, c))
    }
}

/// Builds draw piles.
#[derive(Clone, Debug, Default)]
pub struct DeckBuilder {
    counts: DeckCounts,
}

impl DeckBuilder {
    #[must_use]
    pub fn new(counts: DeckCounts) -> Self {
        Self { counts }
    }

    #[must_use]
    pub fn counts(&self) -> &DeckCounts {
        &self.counts
    }

    /// Create every card instance and shuffle them into a draw pile.
    ///
    /// Card ids are assigned sequentially before the shuffle, so ids are
    /// unique but carry no information about draw order.
    pub fn build(&self, rng: &mut GameRng) -> Vec<Card> {
        let mut next_id = 0u32;
        let mut cards = Vec::with_capacity(self.counts.total());

        for (goal, count) in self.counts.iter() {
            for _ in 0..count {
                cards.push(Card::new(CardId::new(next_id), goal));
                next_id += 1;
            }
        }

        rng.shuffle(&mut cards);
        cards
    }

    /// Build an unshuffled pile that deals `draw_order` front to back.
    ///
    /// ```
    /// use sdg_agents::cards::{DeckBuilder, Goal};
    ///
    /// let pile = DeckBuilder::stacked(&[Goal::NoPoverty, Goal::LifeOnLand]);
    /// assert_eq!(pile.last().unwrap().goal, Goal::NoPoverty);
    /// ```
    #[must_use]
    pub fn stacked(draw_order: &[Goal]) -> Vec<Card> {
        let mut cards: Vec<Card> = draw_order
            .iter()
            .enumerate()
            .map(|(i, &goal)| Card::new(CardId::new(i as u32), goal))
            .collect();
        cards.reverse();
        cards
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashSet;

    #[test]
    fn test_standard_counts() {
        let counts = DeckCounts::standard();
        assert_eq!(counts.total(), 79);
        assert_eq!(counts.count(Goal::Partnerships), 19);
        assert_eq!(counts.count(Goal::ClimateAction), 5);
    }

    #[test]
    fn test_build_matches_counts() {
        let builder = DeckBuilder::default();
        let mut rng = GameRng::new(42);
        let deck = builder.build(&mut rng);

        assert_eq!(deck.len(), 79);
        for goal in Goal::ALL {
            let n = deck.iter().filter(|c| c.goal == goal).count() as u32;
            assert_eq!(n, builder.counts().count(goal), "{goal}");
        }
    }

    #[test]
    fn test_build_ids_are_unique() {
        let mut rng = GameRng::new(1);
        let deck = DeckBuilder::default().build(&mut rng);
        let ids: FxHashSet<_> = deck.iter().map(|c| c.id).collect();
        assert_eq!(ids.len(), deck.len());
    }

    #[test]
    fn test_build_is_shuffled_and_seeded() {
        let builder = DeckBuilder::default();
        let a = builder.build(&mut GameRng::new(5));
        let b = builder.build(&mut GameRng::new(5));
        let c = builder.build(&mut GameRng::new(6));

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_missing_goals_count_zero() {
        let counts = DeckCounts::from_pairs([(Goal::NoPoverty, 2)]);
        assert_eq!(counts.count(Goal::ZeroHunger), 0);
        let deck = DeckBuilder::new(counts).build(&mut GameRng::new(0));
        assert_eq!(deck.len(), 2);
    }

    #[test]
    fn test_stacked_order() {
        let pile = DeckBuilder::stacked(&[Goal::NoPoverty, Goal::ZeroHunger, Goal::Partnerships]);
        let goals: Vec<_> = pile.iter().rev().map(|c| c.goal).collect();
        assert_eq!(goals, vec![Goal::NoPoverty, Goal::ZeroHunger, Goal::Partnerships]);
    }

    #[test]
    fn test_counts_json() {
        let counts = DeckCounts::from_pairs([(Goal::NoPoverty, 7), (Goal::Partnerships, 19)]);
        let json = serde_json::to_string(&counts).unwrap();
        assert_eq!(json, r#"{"1":7,"17":19}"#);
        let back: DeckCounts = serde_json::from_str(&json).unwrap();
        assert_eq!(back, counts);
    }
}
