//! Error types.
//!
//! Rejected triggers are ordinary values: the engine returns them without
//! changing state and the caller decides whether to surface them. None of
//! these are game outcomes; a bust or a failed tally is not an error.

use thiserror::Error;

use super::player::PlayerId;
use super::state::Phase;

/// Why the engine rejected an action.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    #[error("{action} is not allowed during {phase}")]
    WrongPhase { action: &'static str, phase: Phase },

    #[error("{player} acted out of turn; {active} is active")]
    OutOfTurn { player: PlayerId, active: PlayerId },

    #[error("{0} is not seated in this game")]
    UnknownPlayer(PlayerId),

    #[error("the game is over")]
    GameOver,

    #[error("the draw pile is empty")]
    DrawPileEmpty,

    #[error("table index {index} is out of range for {len} cards")]
    InvalidTableIndex { index: usize, len: usize },

    #[error("card index {index} is out of range for a collection of {len}")]
    InvalidCardIndex { index: usize, len: usize },

    #[error("no card is selected for gifting")]
    NoGiftSelected,

    #[error("{0} cannot receive this gift")]
    InvalidRecipient(PlayerId),
}

/// Why a configuration was rejected.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("the roster is empty")]
    EmptyRoster,

    #[error("{0} players requested; at most 255 are supported")]
    TooManyPlayers(usize),

    #[error("draw probability {0} is outside [0, 1]")]
    InvalidProbability(f64),
}

/// Snapshot encoding or decoding failed.
#[derive(Debug, Error)]
#[error("snapshot failed: {0}")]
pub struct SnapshotError(#[from] pub bincode::Error);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_engine_error_messages() {
        let err = EngineError::WrongPhase {
            action: "draw more",
            phase: Phase::Bust,
        };
        assert_eq!(err.to_string(), "draw more is not allowed during bust");

        let err = EngineError::OutOfTurn {
            player: PlayerId::new(2),
            active: PlayerId::new(0),
        };
        assert_eq!(err.to_string(), "Player 2 acted out of turn; Player 0 is active");

        let err = EngineError::InvalidTableIndex { index: 4, len: 2 };
        assert_eq!(err.to_string(), "table index 4 is out of range for 2 cards");
    }

    #[test]
    fn test_config_error_from_json() {
        let parse = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: ConfigError = parse.into();
        assert!(matches!(err, ConfigError::Parse(_)));
        assert!(err.to_string().starts_with("invalid configuration"));
    }
}
