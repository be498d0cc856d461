//! Game configuration.
//!
//! A game is configured by a `GameConfig`:
//! - `roster`: who sits at the table and which seats are automated
//! - `target_score`: the team total needed to pass
//! - `deck`: copies of each goal in the deck
//! - `timing`: automated-driver delay and advisory timers
//! - `automation`: the automated player's push-your-luck odds
//!
//! Every field has a default, so a JSON document only needs the fields it
//! overrides.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::player::{Player, PlayerId, PlayerMap};
use crate::cards::DeckCounts;

/// Team score needed to pass.
pub const DEFAULT_TARGET_SCORE: u32 = 63;

/// One seat in the roster.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerConfig {
    pub name: String,
    #[serde(default)]
    pub automated: bool,
    #[serde(default)]
    pub initiator: bool,
}

impl PlayerConfig {
    /// A seat driven by external input.
    pub fn human(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            automated: false,
            initiator: false,
        }
    }

    /// A seat driven by the automated driver.
    pub fn automated(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            automated: true,
            initiator: false,
        }
    }

    #[must_use]
    pub fn initiator(mut self) -> Self {
        self.initiator = true;
        self
    }
}

/// Timers, in milliseconds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Delay before the automated driver acts.
    pub autopilot_delay_ms: u64,
    /// Quiet period before an advice request is sent.
    pub advice_quiet_ms: u64,
    /// How long an insight stays visible.
    pub insight_display_ms: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            autopilot_delay_ms: 2000,
            advice_quiet_ms: 1000,
            insight_display_ms: 8000,
        }
    }
}

impl TimingConfig {
    #[must_use]
    pub fn autopilot_delay(&self) -> Duration {
        Duration::from_millis(self.autopilot_delay_ms)
    }

    #[must_use]
    pub fn advice_quiet(&self) -> Duration {
        Duration::from_millis(self.advice_quiet_ms)
    }

    #[must_use]
    pub fn insight_display(&self) -> Duration {
        Duration::from_millis(self.insight_display_ms)
    }
}

/// Automated player behaviour.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AutomationConfig {
    /// Chance of drawing again while the table is below `draw_limit`.
    pub draw_probability: f64,
    /// Table size at which the automated player always collects.
    pub draw_limit: usize,
}

impl Default for AutomationConfig {
    fn default() -> Self {
        Self {
            draw_probability: 0.7,
            draw_limit: 2,
        }
    }
}

/// Complete game configuration.
///
/// ## Example
///
/// ```
/// use sdg_agents::core::GameConfig;
///
/// let config = GameConfig::from_json(r#"{ "target_score": 40 }"#).unwrap();
/// assert_eq!(config.target_score, 40);
/// assert_eq!(config.player_count(), 3);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub roster: Vec<PlayerConfig>,
    pub target_score: u32,
    pub deck: DeckCounts,
    pub timing: TimingConfig,
    pub automation: AutomationConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            roster: vec![
                PlayerConfig::human("Agent Alpha").initiator(),
                PlayerConfig::automated("Agent Byte"),
                PlayerConfig::automated("Agent Logic"),
            ],
            target_score: DEFAULT_TARGET_SCORE,
            deck: DeckCounts::standard(),
            timing: TimingConfig::default(),
            automation: AutomationConfig::default(),
        }
    }
}

impl GameConfig {
    /// Parse and validate a JSON configuration.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.roster.is_empty() {
            return Err(ConfigError::EmptyRoster);
        }
        if self.roster.len() > 255 {
            return Err(ConfigError::TooManyPlayers(self.roster.len()));
        }
        let p = self.automation.draw_probability;
        if !(0.0..=1.0).contains(&p) {
            return Err(ConfigError::InvalidProbability(p));
        }
        Ok(())
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.roster.len()
    }

    /// Seat the roster. Call only on a validated config.
    #[must_use]
    pub fn seat_players(&self) -> PlayerMap<Player> {
        PlayerMap::from_vec(
            self.roster
                .iter()
                .enumerate()
                .map(|(i, seat)| {
                    let player =
                        Player::new(PlayerId::new(i as u8), seat.name.clone(), seat.automated);
                    if seat.initiator {
                        player.as_initiator()
                    } else {
                        player
                    }
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Goal;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();

        assert_eq!(config.player_count(), 3);
        assert_eq!(config.target_score, 63);
        assert_eq!(config.deck.total(), 79);
        assert!(config.roster[0].initiator);
        assert!(!config.roster[0].automated);
        assert!(config.roster[1].automated && config.roster[2].automated);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_timing_durations() {
        let timing = TimingConfig::default();
        assert_eq!(timing.autopilot_delay(), Duration::from_secs(2));
        assert_eq!(timing.advice_quiet(), Duration::from_secs(1));
        assert_eq!(timing.insight_display(), Duration::from_secs(8));
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GameConfig::from_json(
            r#"{
                "roster": [
                    { "name": "Ana", "initiator": true },
                    { "name": "Bot", "automated": true }
                ],
                "deck": { "1": 3, "17": 2 },
                "timing": { "autopilot_delay_ms": 10 }
            }"#,
        )
        .unwrap();

        assert_eq!(config.player_count(), 2);
        assert!(config.roster[1].automated);
        assert_eq!(config.deck.total(), 5);
        assert_eq!(config.deck.count(Goal::Partnerships), 2);
        assert_eq!(config.timing.autopilot_delay_ms, 10);
        assert_eq!(config.timing.advice_quiet_ms, 1000);
        assert_eq!(config.target_score, DEFAULT_TARGET_SCORE);
    }

    #[test]
    fn test_rejects_empty_roster() {
        let err = GameConfig::from_json(r#"{ "roster": [] }"#).unwrap_err();
        assert!(matches!(err, ConfigError::EmptyRoster));
    }

    #[test]
    fn test_rejects_bad_probability() {
        let json = r#"{ "automation": { "draw_probability": 1.5 } }"#;
        let err = GameConfig::from_json(json).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidProbability(_)));
    }

    #[test]
    fn test_rejects_unknown_goal_in_deck() {
        let err = GameConfig::from_json(r#"{ "deck": { "3": 4 } }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_seat_players() {
        let players = GameConfig::default().seat_players();

        assert_eq!(players.player_count(), 3);
        assert_eq!(players[PlayerId::new(0)].name, "Agent Alpha");
        assert!(players[PlayerId::new(0)].initiator);
        assert!(players[PlayerId::new(2)].automated);
        assert_eq!(players[PlayerId::new(1)].id, PlayerId::new(1));
    }
}
