//! Simulation configuration.

use crate::core::config::EngineConfig;
use crate::quests::Difficulty;

/// One quest in the simulated daily routine.
#[derive(Debug, Clone, Copy)]
pub struct RoutineQuest {
    pub difficulty: Difficulty,
    pub optional: bool,
    /// Whether completions damage the simulated boss.
    pub boss_linked: bool,
}

impl RoutineQuest {
    pub const fn required(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            optional: false,
            boss_linked: false,
        }
    }

    pub const fn optional(difficulty: Difficulty) -> Self {
        Self {
            difficulty,
            optional: true,
            boss_linked: false,
        }
    }

    pub const fn against_boss(mut self) -> Self {
        self.boss_linked = true;
        self
    }
}

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulation runs to perform
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Days simulated per run
    pub days: u32,

    /// Chance the simulated user completes any given quest on a day
    pub completion_chance: f64,

    /// Quests reset and offered every day
    pub routine: Vec<RoutineQuest>,

    /// HP of the fixed boss linked to `boss_linked` routine quests
    pub boss_hp: u64,

    /// Engine settings (penalties, crit chance, max HP)
    pub engine: EngineConfig,

    /// Log verbosity (0 = silent, 1 = summary, 2 = detailed)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 1000,
            seed: None,
            days: 365,
            completion_chance: 0.8,
            routine: vec![
                RoutineQuest::required(Difficulty::Easy),
                RoutineQuest::required(Difficulty::Normal).against_boss(),
                RoutineQuest::required(Difficulty::Hard).against_boss(),
                RoutineQuest::optional(Difficulty::Trivial),
            ],
            boss_hp: 10_000,
            engine: EngineConfig::default(),
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// A month of a dedicated user, for quick checks
    pub fn quick() -> Self {
        Self {
            num_runs: 100,
            days: 30,
            completion_chance: 0.95,
            ..Default::default()
        }
    }

    /// Five years of a flaky user, to see how the death penalty bites
    pub fn long_haul() -> Self {
        Self {
            num_runs: 50,
            days: 5 * 365,
            completion_chance: 0.6,
            ..Default::default()
        }
    }
}
