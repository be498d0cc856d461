//! Zone system for card locations.
//!
//! Every card is in exactly one zone at any instant: the draw pile, the
//! table, one player's collected set, or the forfeited pile.
//!
//! ## Key Types
//!
//! - `Zone`: Location identifier
//! - `ZoneManager`: Card location tracking and movement

pub mod manager;

pub use manager::{Zone, ZoneManager};
