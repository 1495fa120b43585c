//! Questline - progression rules engine
//!
//! Turns completed quests, missed days and external metric readings into XP,
//! levels, ranks, gold, stats, HP and boss progress. Every transition is a
//! pure function from one `GameState` snapshot to the next.

pub mod bosses;
pub mod character;
pub mod core;
pub mod metrics;
pub mod quests;
pub mod save_manager;
pub mod simulator;
pub mod utils;

pub use crate::core::config::EngineConfig;
pub use crate::core::error::Declined;
pub use crate::core::game_state::GameState;
