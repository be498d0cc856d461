//! Zone manager for card locations and movement.
//!
//! The `ZoneManager` tracks which zone each card is in and keeps every zone
//! ordered. A card is always in exactly one zone: moving it removes it from
//! its old ordering before appending it to the new one.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::player::{PlayerId, PlayerMap};

/// Where a card can be.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Zone {
    /// Undrawn cards. The last card is the top.
    DrawPile,
    /// Cards revealed during the current turn, in reveal order.
    Table,
    /// A player's collected set, in the order the cards were gained.
    Collected(PlayerId),
    /// Cards removed from play by a discard or a bust.
    Forfeited,
}

impl std::fmt::Display for Zone {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Zone::DrawPile => write!(f, "draw pile"),
            Zone::Table => write!(f, "table"),
            Zone::Collected(p) => write!(f, "{p} collection"),
            Zone::Forfeited => write!(f, "forfeited"),
        }
    }
}

/// Manages card locations across zones.
///
/// ## Usage
///
/// ```
/// use sdg_agents::cards::CardId;
/// use sdg_agents::core::PlayerId;
/// use sdg_agents::zones::{Zone, ZoneManager};
///
/// let mut zones = ZoneManager::new(2);
/// zones.add_to_zone(CardId(10), Zone::DrawPile);
/// zones.add_to_zone(CardId(11), Zone::DrawPile);
///
/// assert_eq!(zones.draw_to_table(), Some(CardId(11)));
/// zones.move_to_zone(CardId(11), Zone::Collected(PlayerId::new(1)));
/// assert_eq!(zones.cards_in_zone(Zone::Collected(PlayerId::new(1))), &[CardId(11)]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneManager {
    /// Card locations: card -> zone
    locations: FxHashMap<CardId, Zone>,
    draw_pile: Vec<CardId>,
    table: Vec<CardId>,
    collected: PlayerMap<Vec<CardId>>,
    forfeited: Vec<CardId>,
}

impl ZoneManager {
    /// Create an empty zone manager for `player_count` collections.
    #[must_use]
    pub fn new(player_count: usize) -> Self {
        Self {
            locations: FxHashMap::default(),
            draw_pile: Vec::new(),
            table: Vec::new(),
            collected: PlayerMap::with_default(player_count),
            forfeited: Vec::new(),
        }
    }

    fn order_mut(&mut self, zone: Zone) -> &mut Vec<CardId> {
        match zone {
            Zone::DrawPile => &mut self.draw_pile,
            Zone::Table => &mut self.table,
            Zone::Collected(p) => &mut self.collected[p],
            Zone::Forfeited => &mut self.forfeited,
        }
    }

    /// Add a new card to the end (top) of a zone.
    ///
    /// Panics if the card is already tracked.
    pub fn add_to_zone(&mut self, card: CardId, zone: Zone) {
        if self.locations.contains_key(&card) {
            panic!("{card} already exists in zone manager");
        }

        self.locations.insert(card, zone);
        self.order_mut(zone).push(card);
    }

    /// Move a card to the end of another zone.
    ///
    /// Returns the old zone, or `None` if the card wasn't found.
    pub fn move_to_zone(&mut self, card: CardId, new_zone: Zone) -> Option<Zone> {
        let old_zone = self.locations.get(&card).copied()?;

        if old_zone == new_zone {
            return Some(old_zone);
        }

        self.order_mut(old_zone).retain(|&c| c != card);
        self.locations.insert(card, new_zone);
        self.order_mut(new_zone).push(card);

        Some(old_zone)
    }

    /// Move the top of the draw pile onto the table.
    pub fn draw_to_table(&mut self) -> Option<CardId> {
        let card = self.draw_pile.pop()?;
        self.locations.insert(card, Zone::Table);
        self.table.push(card);
        Some(card)
    }

    /// Move every table card into `zone`, preserving reveal order.
    ///
    /// Returns the moved cards.
    pub fn sweep_table(&mut self, zone: Zone) -> Vec<CardId> {
        let cards = std::mem::take(&mut self.table);
        for &card in &cards {
            self.locations.insert(card, zone);
        }
        self.order_mut(zone).extend_from_slice(&cards);
        cards
    }

    #[must_use]
    pub fn get_zone(&self, card: CardId) -> Option<Zone> {
        self.locations.get(&card).copied()
    }

    /// Cards in a zone, in order (bottom first for the draw pile).
    #[must_use]
    pub fn cards_in_zone(&self, zone: Zone) -> &[CardId] {
        match zone {
            Zone::DrawPile => &self.draw_pile,
            Zone::Table => &self.table,
            Zone::Collected(p) => &self.collected[p],
            Zone::Forfeited => &self.forfeited,
        }
    }

    /// Card at `index` of a zone's ordering.
    #[must_use]
    pub fn card_at(&self, zone: Zone, index: usize) -> Option<CardId> {
        self.cards_in_zone(zone).get(index).copied()
    }

    #[must_use]
    pub fn zone_size(&self, zone: Zone) -> usize {
        self.cards_in_zone(zone).len()
    }

    /// Number of collections (one per player).
    #[must_use]
    pub fn player_count(&self) -> usize {
        self.collected.player_count()
    }

    /// Total number of cards tracked, across every zone.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.locations.len()
    }

    /// Check that the location index and the zone orderings agree.
    ///
    /// Every tracked card must appear exactly once, in the zone it is
    /// recorded as being in.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        let mut seen = 0usize;
        let zones = [Zone::DrawPile, Zone::Table, Zone::Forfeited]
            .into_iter()
            .chain(self.collected.iter().map(|(p, _)| Zone::Collected(p)));

        for zone in zones {
            for &card in self.cards_in_zone(zone) {
                if self.get_zone(card) != Some(zone) {
                    return false;
                }
                seen += 1;
            }
        }

        seen == self.locations.len()
    }
}
