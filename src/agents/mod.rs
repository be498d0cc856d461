//! Automated players.
//!
//! - `AutoPolicy`: picks an action for the active seat
//! - `AutoPilot`: fires one policy move per armed timer, through the same
//!   trigger API a human player uses

pub mod driver;
pub mod policy;

pub use driver::{AutoMove, AutoPilot};
pub use policy::{AutoPolicy, DefaultPolicy};
