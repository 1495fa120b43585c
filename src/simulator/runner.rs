//! Main simulation runner.
//!
//! Drives the real engine transitions (`complete_quest`, `end_day`) so the
//! numbers match what a host application would see.

use super::config::SimConfig;
use super::report::SimReport;
use crate::bosses::Boss;
use crate::character::rank::Rank;
use crate::character::stats::StatType;
use crate::core::game_logic::{complete_quest, end_day};
use crate::core::game_state::GameState;
use crate::quests::Quest;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info};

const SECONDS_PER_DAY: i64 = 86_400;

/// Outcome of a single simulated player.
#[derive(Debug, Clone, serde::Serialize)]
pub struct RunStats {
    pub final_level: u32,
    pub final_rank: Rank,
    pub final_gold: u64,
    pub total_xp: u64,
    pub completions: u64,
    pub crits: u64,
    pub deaths: u32,
    pub best_streak: u32,
    /// Day the boss fell, if it did.
    pub boss_defeated_day: Option<u32>,
    /// Day each rank was first reached, indexed by `Rank::index()`.
    pub rank_reached_day: Vec<Option<u32>>,
}

impl RunStats {
    pub fn crit_rate(&self) -> f64 {
        if self.completions == 0 {
            0.0
        } else {
            self.crits as f64 / self.completions as f64
        }
    }
}

/// Run the full simulation and return a report.
pub fn run_simulation(config: &SimConfig) -> SimReport {
    let mut all_runs = Vec::with_capacity(config.num_runs as usize);

    for run_idx in 0..config.num_runs {
        // Create RNG for this run
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed.wrapping_add(run_idx as u64)),
            None => StdRng::from_entropy(),
        };

        let run_stats = simulate_single_run(config, &mut rng);

        if config.verbosity >= 2 {
            info!(
                run = run_idx + 1,
                of = config.num_runs,
                level = run_stats.final_level,
                rank = %run_stats.final_rank,
                gold = run_stats.final_gold,
                deaths = run_stats.deaths,
                best_streak = run_stats.best_streak,
                "run finished"
            );
        }
        all_runs.push(run_stats);
    }

    SimReport::from_runs(all_runs, config.days)
}

fn build_routine(config: &SimConfig, start: i64) -> (GameState, Vec<String>) {
    let mut state = GameState::with_max_hp(
        "Simulated Hunter".to_string(),
        start,
        config.engine.base_max_hp,
    );

    let boss = Boss::new_fixed("Simulated Boss", config.boss_hp);
    let boss_id = boss.id.clone();
    let mut quest_ids = Vec::with_capacity(config.routine.len());

    // Fresh ids cannot collide, so these inserts always succeed.
    let _ = state.add_boss(boss);
    for (i, routine) in config.routine.iter().enumerate() {
        let stat = StatType::all()[i % StatType::all().len()];
        let title = format!("{} routine {}", routine.difficulty.name(), i + 1);
        let mut quest = Quest::new(title, routine.difficulty, stat);
        quest.optional = routine.optional;
        if routine.boss_linked {
            quest.boss_id = Some(boss_id.clone());
        }
        quest_ids.push(quest.id.clone());
        let _ = state.add_quest(quest);
    }

    (state, quest_ids)
}

fn simulate_single_run<R: Rng>(config: &SimConfig, rng: &mut R) -> RunStats {
    let (mut state, quest_ids) = build_routine(config, 0);
    let completion_chance = if config.completion_chance.is_finite() {
        config.completion_chance.clamp(0.0, 1.0)
    } else {
        0.0
    };

    let mut completions = 0;
    let mut crits = 0;
    let mut deaths = 0;
    let mut boss_defeated_day = None;
    let mut rank_reached_day = vec![None; Rank::all().len()];
    rank_reached_day[Rank::E.index()] = Some(0);

    for day in 1..=config.days {
        for quest_id in &quest_ids {
            if !rng.gen_bool(completion_chance) {
                continue;
            }
            let completed = complete_quest(&state, quest_id, &config.engine, &mut *rng);
            if let Ok((next, breakdown)) = completed {
                state = next;
                completions += 1;
                if breakdown.was_critical {
                    crits += 1;
                }
                if breakdown.boss_defeated && boss_defeated_day.is_none() {
                    boss_defeated_day = Some(day);
                }
                let slot = &mut rank_reached_day[breakdown.rank_after.index()];
                if slot.is_none() {
                    *slot = Some(day);
                }
            }
        }

        let (next, report) = end_day(&state, &config.engine, day as i64 * SECONDS_PER_DAY);
        state = next;
        if report.death.is_some() {
            deaths += 1;
            debug!(day, level = state.player.level, "simulated death");
        }
    }

    RunStats {
        final_level: state.player.level,
        final_rank: state.rank(),
        final_gold: state.player.gold,
        total_xp: state.player.total_xp,
        completions,
        crits,
        deaths,
        best_streak: state.player.best_streak,
        boss_defeated_day,
        rank_reached_day,
    }
}
