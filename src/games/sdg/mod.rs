//! SDG Agents: a cooperative push-your-luck card game.
//!
//! - The deck holds cards for eight Sustainable Development Goals
//! - On your turn, reveal cards one at a time onto the table
//! - Revealing a goal already on the table is a bust: the table is lost
//! - Collecting one card keeps it; collecting more costs one card as a
//!   sacrifice
//! - When the deck runs out, each player may gift one card to another
//! - The team passes if everyone's scores add up to the target
//!
//! Supports 1-255 players; any seat can be automated.

mod game;
mod gift;

pub use game::{SdgGame, SdgGameBuilder};
