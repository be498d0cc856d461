//! Game state: the single explicit, serializable record of a game.
//!
//! ## GameState
//!
//! - Phase, active player, turn number
//! - Players (identity and final score)
//! - Card instances and the zone manager (card locations)
//! - Gift selection and the final tally
//! - Action history and a version counter bumped on every accepted action
//! - RNG
//!
//! Only the rules engine mutates the state. Presentation layers read it,
//! or react to the transitions the engine returns.

use im::Vector;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::action::{Action, ActionRecord};
use super::error::SnapshotError;
use super::player::{Player, PlayerId, PlayerMap};
use super::rng::GameRng;
use crate::cards::{Card, CardId, Goal};
use crate::rules::FinalTally;
use crate::zones::{Zone, ZoneManager};

/// Game phases.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the active player to reveal the first card of a turn.
    Flip,
    /// At least one card is on the table; push your luck or collect.
    Decision,
    /// A duplicate goal was revealed; the table is lost.
    Bust,
    /// Collecting two or more cards; one must be sacrificed first.
    DiscardSelect,
    /// The deck is exhausted; each player may give one card.
    GiftExchange,
    /// Final tally computed.
    GameOver,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Phase::Flip => "flip",
            Phase::Decision => "decision",
            Phase::Bust => "bust",
            Phase::DiscardSelect => "discard select",
            Phase::GiftExchange => "gift exchange",
            Phase::GameOver => "game over",
        };
        f.write_str(name)
    }
}

/// Full game state.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    /// Current phase.
    pub phase: Phase,

    /// Whose turn (or gift slot) it is.
    pub active_player: PlayerId,

    /// Turn number (starts at 1, advances when the active player changes
    /// during play).
    pub turn_number: u32,

    /// Bumped on every accepted action. Timers and advice requests are
    /// keyed by it so they never act on a state they did not see.
    pub version: u64,

    /// Seated players.
    pub players: PlayerMap<Player>,

    /// Zone manager for card locations.
    pub zones: ZoneManager,

    /// Card selected for gifting (index into the active player's collection).
    pub gift_selection: Option<usize>,

    /// Team score needed to pass.
    pub target_score: u32,

    /// Set when the game reaches `GameOver`.
    pub final_tally: Option<FinalTally>,

    /// Accepted actions, oldest first.
    pub action_history: Vector<ActionRecord>,

    /// Deterministic RNG.
    pub rng: GameRng,

    /// Card instances by id.
    cards: FxHashMap<CardId, Card>,

    /// Next action sequence number.
    action_sequence: u32,

    deck_size: usize,
}

impl GameState {
    /// Create a game in the `Flip` phase with `draw_pile` as the deck.
    ///
    /// The last card of `draw_pile` is drawn first.
    #[must_use]
    pub fn new(
        players: PlayerMap<Player>,
        draw_pile: Vec<Card>,
        target_score: u32,
        rng: GameRng,
    ) -> Self {
        let mut zones = ZoneManager::new(players.player_count());
        let mut cards = FxHashMap::default();
        let deck_size = draw_pile.len();

        for card in draw_pile {
            zones.add_to_zone(card.id, Zone::DrawPile);
            cards.insert(card.id, card);
        }

        Self {
            phase: Phase::Flip,
            active_player: PlayerId::new(0),
            turn_number: 1,
            version: 0,
            players,
            zones,
            gift_selection: None,
            target_score,
            final_tally: None,
            action_history: Vector::new(),
            rng,
            cards,
            action_sequence: 0,
            deck_size,
        }
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.players.player_count()
    }

    /// The active player's profile.
    #[must_use]
    pub fn active(&self) -> &Player {
        &self.players[self.active_player]
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    // === Cards ===

    #[must_use]
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.get(&id)
    }

    /// Resolve card ids in a zone to cards, keeping zone order.
    #[must_use]
    pub fn cards_in(&self, zone: Zone) -> Vec<Card> {
        self.resolve_cards(self.zones.cards_in_zone(zone))
    }

    /// Cards revealed this turn, in reveal order.
    #[must_use]
    pub fn table(&self) -> Vec<Card> {
        self.cards_in(Zone::Table)
    }

    #[must_use]
    pub fn table_goals(&self) -> Vec<Goal> {
        self.table().iter().map(|c| c.goal).collect()
    }

    #[must_use]
    pub fn table_size(&self) -> usize {
        self.zones.zone_size(Zone::Table)
    }

    #[must_use]
    pub fn draw_pile_size(&self) -> usize {
        self.zones.zone_size(Zone::DrawPile)
    }

    /// A player's collected cards, oldest first.
    #[must_use]
    pub fn collected(&self, player: PlayerId) -> Vec<Card> {
        self.cards_in(Zone::Collected(player))
    }

    #[must_use]
    pub fn collected_goals(&self, player: PlayerId) -> Vec<Goal> {
        self.collected(player).iter().map(|c| c.goal).collect()
    }

    #[must_use]
    pub fn collected_size(&self, player: PlayerId) -> usize {
        self.zones.zone_size(Zone::Collected(player))
    }

    #[must_use]
    pub fn forfeited_size(&self) -> usize {
        self.zones.zone_size(Zone::Forfeited)
    }

    /// Number of cards the game started with.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.deck_size
    }

    /// Cards still in play: draw pile, table, and every collection.
    #[must_use]
    pub fn in_play_count(&self) -> usize {
        let collected: usize = self
            .players
            .iter()
            .map(|(p, _)| self.collected_size(p))
            .sum();
        self.draw_pile_size() + self.table_size() + collected
    }

    /// Check that no card was created or lost: in-play plus forfeited cards
    /// add up to the deck size, and every card is in exactly one zone.
    #[must_use]
    pub fn is_conserved(&self) -> bool {
        self.in_play_count() + self.forfeited_size() == self.deck_size
            && self.zones.total_cards() == self.deck_size
            && self.zones.is_consistent()
    }

    /// Move the top of the draw pile onto the table.
    pub fn draw_card(&mut self) -> Option<Card> {
        let id = self.zones.draw_to_table()?;
        self.cards.get(&id).copied()
    }

    /// Resolve card ids to cards, keeping order.
    #[must_use]
    pub fn resolve_cards(&self, ids: &[CardId]) -> Vec<Card> {
        ids.iter()
            .filter_map(|id| self.cards.get(id).copied())
            .collect()
    }

    // === History ===

    /// Record an accepted action taken during `turn` and bump the version.
    pub fn record_action(&mut self, player: PlayerId, action: Action, turn: u32) {
        let sequence = self.action_sequence;
        self.action_sequence += 1;
        self.action_history
            .push_back(ActionRecord::new(player, action, turn, sequence));
        self.version += 1;
    }

    // === Snapshots ===

    /// Encode the whole state, RNG position included.
    pub fn to_bytes(&self) -> Result<Vec<u8>, SnapshotError> {
        Ok(bincode::serialize(self)?)
    }

    /// Restore a state encoded with [`GameState::to_bytes`].
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SnapshotError> {
        Ok(bincode::deserialize(bytes)?)
    }
}
