//! Quests, their reward math and the undo token.

pub mod rewards;
pub mod types;

pub use rewards::*;
pub use types::*;
