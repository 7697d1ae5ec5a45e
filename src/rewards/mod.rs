//! Rewards progression: points balance to tier, next tier and progress.
//!
//! Pure and synchronous; nothing here goes through an actor.

pub mod error;
pub mod table;

pub use error::*;
pub use table::{LevelStatus, TierTable};
