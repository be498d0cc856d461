//! Goal catalog: the static registry of goal definitions.
//!
//! The catalog maps every goal to its scoring rule. It is fixed at build
//! time; lookups by `Goal` are infallible and lookups by raw identifier
//! return `None` for identifiers outside the game.

use super::goal::{Goal, ScoringRule};

/// Static data for one goal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GoalDefinition {
    pub goal: Goal,
    pub name: &'static str,
    pub rule: ScoringRule,
}

const STANDARD: [GoalDefinition; 8] = [
    GoalDefinition {
        goal: Goal::NoPoverty,
        name: "No Poverty",
        rule: ScoringRule::PerCard { points: 2 },
    },
    GoalDefinition {
        goal: Goal::ZeroHunger,
        name: "Zero Hunger",
        rule: ScoringRule::CountPlusOne,
    },
    GoalDefinition {
        goal: Goal::QualityEducation,
        name: "Quality Education",
        rule: ScoringRule::Presence { bonus: 2 },
    },
    GoalDefinition {
        goal: Goal::CleanWater,
        name: "Clean Water & Sanitation",
        rule: ScoringRule::Presence { bonus: 1 },
    },
    GoalDefinition {
        goal: Goal::ClimateAction,
        name: "Climate Action",
        rule: ScoringRule::Presence { bonus: 2 },
    },
    GoalDefinition {
        goal: Goal::LifeBelowWater,
        name: "Life Below Water",
        rule: ScoringRule::Presence { bonus: 1 },
    },
    GoalDefinition {
        goal: Goal::LifeOnLand,
        name: "Life on Land",
        rule: ScoringRule::Presence { bonus: 1 },
    },
    GoalDefinition {
        goal: Goal::Partnerships,
        name: "Partnerships for the Goals",
        rule: ScoringRule::Curve,
    },
];

/// Registry of goal definitions.
///
/// ## Example
///
/// ```
/// use sdg_agents::cards::{Goal, GoalCatalog, ScoringRule};
///
/// let catalog = GoalCatalog::standard();
/// assert_eq!(catalog.rule(Goal::ZeroHunger), ScoringRule::CountPlusOne);
/// assert_eq!(catalog.get(13).unwrap().name, "Climate Action");
/// assert!(catalog.get(5).is_none());
/// ```
#[derive(Clone, Copy, Debug)]
pub struct GoalCatalog {
    definitions: &'static [GoalDefinition; 8],
}

impl Default for GoalCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

impl GoalCatalog {
    /// The catalog used by the game.
    #[must_use]
    pub const fn standard() -> Self {
        Self {
            definitions: &STANDARD,
        }
    }

    /// Look up a definition by raw identifier.
    #[must_use]
    pub fn get(&self, id: u8) -> Option<&GoalDefinition> {
        Goal::from_id(id).map(|goal| self.definition(goal))
    }

    #[must_use]
    pub fn definition(&self, goal: Goal) -> &GoalDefinition {
        &self.definitions[goal.ordinal()]
    }

    #[must_use]
    pub fn rule(&self, goal: Goal) -> ScoringRule {
        self.definition(goal).rule
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Iterate over all definitions in identifier order.
    pub fn iter(&self) -> impl Iterator<Item = &GoalDefinition> {
        self.definitions.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_definitions_line_up_with_goals() {
        let catalog = GoalCatalog::standard();
        assert_eq!(catalog.len(), Goal::ALL.len());
        for goal in Goal::ALL {
            assert_eq!(catalog.definition(goal).goal, goal);
        }
    }

    #[test]
    fn test_lookup_by_raw_id() {
        let catalog = GoalCatalog::standard();
        assert_eq!(catalog.get(1).map(|d| d.goal), Some(Goal::NoPoverty));
        assert_eq!(catalog.get(17).map(|d| d.rule), Some(ScoringRule::Curve));
        assert!(catalog.get(0).is_none());
        assert!(catalog.get(8).is_none());
    }

    #[test]
    fn test_rule_tags() {
        let catalog = GoalCatalog::standard();
        assert_eq!(catalog.rule(Goal::NoPoverty), ScoringRule::PerCard { points: 2 });
        assert_eq!(catalog.rule(Goal::QualityEducation), ScoringRule::Presence { bonus: 2 });
        assert_eq!(catalog.rule(Goal::ClimateAction), ScoringRule::Presence { bonus: 2 });
        for goal in [Goal::CleanWater, Goal::LifeBelowWater, Goal::LifeOnLand] {
            assert_eq!(catalog.rule(goal), ScoringRule::Presence { bonus: 1 });
        }
    }
}
