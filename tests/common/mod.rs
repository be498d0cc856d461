#![allow(dead_code)]

// tests/common/mod.rs
use once_cell::sync::OnceCell;
use proptest::prelude::ProptestConfig;
use tracing_subscriber::{fmt, EnvFilter};

use sdg_agents::cards::Goal;
use sdg_agents::core::{GameState, PlayerConfig};
use sdg_agents::games::{SdgGame, SdgGameBuilder};

static LOGGING: OnceCell<()> = OnceCell::new();

/// Install a test subscriber once per binary.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then `"warn"`.
pub fn init_logging() {
    LOGGING.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// Proptest config; `PROPTEST_CASES` overrides the case count.
pub fn proptest_config() -> ProptestConfig {
    let cases = std::env::var("PROPTEST_CASES")
        .ok()
        .and_then(|s| s.parse::<u32>().ok())
        .unwrap_or(64)
        .max(1);

    ProptestConfig {
        failure_persistence: None,
        cases,
        ..ProptestConfig::default()
    }
}

pub fn humans(n: usize) -> Vec<PlayerConfig> {
    (0..n).map(|i| PlayerConfig::human(format!("Agent {i}"))).collect()
}

pub fn bots(n: usize) -> Vec<PlayerConfig> {
    (0..n).map(|i| PlayerConfig::automated(format!("Bot {i}"))).collect()
}

/// Draw order that deals `hands[p][r]` on player `p`'s `r`-th turn, for
/// games where every turn reveals one card and collects it.
pub fn interleave(hands: &[Vec<Goal>]) -> Vec<Goal> {
    let rounds = hands.iter().map(Vec::len).max().unwrap_or(0);
    let mut order = Vec::new();
    for round in 0..rounds {
        for hand in hands {
            order.extend(hand.get(round).copied());
        }
    }
    order
}

pub fn stacked_game(roster: Vec<PlayerConfig>, order: Vec<Goal>) -> (SdgGame, GameState) {
    SdgGameBuilder::new()
        .roster(roster)
        .stacked_deck(order)
        .build(1)
        .expect("valid test config")
}
