//! Game implementations.

pub mod sdg;

pub use sdg::{SdgGame, SdgGameBuilder};
