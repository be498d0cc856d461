//! Goal identifiers and their scoring rule tags.
//!
//! Only eight Sustainable Development Goals appear in the game. `Goal` is a
//! closed enum over them, so an unknown goal cannot exist inside the engine;
//! raw integers from outside go through `Goal::from_id` / `TryFrom<u8>`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A goal identifier from the fixed set {1, 2, 4, 6, 13, 14, 15, 17}.
///
/// Serializes as its integer identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Goal {
    NoPoverty = 1,
    ZeroHunger = 2,
    QualityEducation = 4,
    CleanWater = 6,
    ClimateAction = 13,
    LifeBelowWater = 14,
    LifeOnLand = 15,
    Partnerships = 17,
}

/// Raised when a raw identifier names no goal in the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("unknown goal identifier {0}")]
pub struct UnknownGoal(pub u8);

impl Goal {
    /// Every goal, in identifier order.
    pub const ALL: [Goal; 8] = [
        Goal::NoPoverty,
        Goal::ZeroHunger,
        Goal::QualityEducation,
        Goal::CleanWater,
        Goal::ClimateAction,
        Goal::LifeBelowWater,
        Goal::LifeOnLand,
        Goal::Partnerships,
    ];

    /// The integer identifier.
    #[must_use]
    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Look up a goal by its integer identifier.
    ///
    /// ```
    /// use sdg_agents::cards::Goal;
    ///
    /// assert_eq!(Goal::from_id(17), Some(Goal::Partnerships));
    /// assert_eq!(Goal::from_id(3), None);
    /// ```
    #[must_use]
    pub fn from_id(id: u8) -> Option<Goal> {
        Goal::ALL.into_iter().find(|g| g.id() == id)
    }

    /// Position of this goal within [`Goal::ALL`].
    #[must_use]
    pub const fn ordinal(self) -> usize {
        match self {
            Goal::NoPoverty => 0,
            Goal::ZeroHunger => 1,
            Goal::QualityEducation => 2,
            Goal::CleanWater => 3,
            Goal::ClimateAction => 4,
            Goal::LifeBelowWater => 5,
            Goal::LifeOnLand => 6,
            Goal::Partnerships => 7,
        }
    }
}

impl TryFrom<u8> for Goal {
    type Error = UnknownGoal;

    fn try_from(id: u8) -> Result<Self, Self::Error> {
        Goal::from_id(id).ok_or(UnknownGoal(id))
    }
}

impl From<Goal> for u8 {
    fn from(goal: Goal) -> Self {
        goal.id()
    }
}

impl std::fmt::Display for Goal {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SDG {}", self.id())
    }
}

/// Count brackets for the curve rule: `(minimum count, points)`.
///
/// The highest bracket whose minimum is reached applies, so counts above six
/// stay at the top bracket.
pub const CURVE_BRACKETS: [(u32, u32); 2] = [(1, 2), (4, 4)];

/// How a goal's cards contribute to a player's score.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScoringRule {
    /// `points × count`.
    PerCard { points: u32 },
    /// `count + 1` when at least one card is held.
    CountPlusOne,
    /// Flat `bonus` when at least one card is held; further copies add nothing.
    Presence { bonus: u32 },
    /// Bracketed bonus from [`CURVE_BRACKETS`].
    Curve,
}

impl ScoringRule {
    /// Points earned for holding `count` cards of a goal with this rule.
    ///
    /// ```
    /// use sdg_agents::cards::ScoringRule;
    ///
    /// assert_eq!(ScoringRule::PerCard { points: 2 }.points(3), 6);
    /// assert_eq!(ScoringRule::CountPlusOne.points(0), 0);
    /// assert_eq!(ScoringRule::Curve.points(5), 4);
    /// ```
    #[must_use]
    pub fn points(self, count: u32) -> u32 {
        if count == 0 {
            return 0;
        }
        match self {
            ScoringRule::PerCard { points } => points * count,
            ScoringRule::CountPlusOne => count + 1,
            ScoringRule::Presence { bonus } => bonus,
            ScoringRule::Curve => CURVE_BRACKETS
                .iter()
                .rev()
                .find(|(min, _)| count >= *min)
                .map_or(0, |(_, points)| *points),
        }
    }
}
