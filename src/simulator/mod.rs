//! Balance simulator for Monte Carlo analysis.
//!
//! Plays many simulated users through months of daily quests to check:
//! - How fast levels and ranks come
//! - How often the death penalty fires for an unreliable user
//! - How long a boss takes to fall
//! - Whether the crit rate lands where it should
//!
//! Every simulated day goes through the real engine transitions.

mod config;
mod report;
mod runner;

pub use config::{RoutineQuest, SimConfig};
pub use report::SimReport;
pub use runner::{run_simulation, RunStats};
